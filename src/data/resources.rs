use crate::models::Resource;

/// Curated learning resources: channels, websites, roadmaps, interview prep.
pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "res-1",
        title: "take U forward - A2Z DSA Course",
        creator: "Striver (take U forward)",
        kind: "YouTube Playlist",
        level: "Beginner",
        category: "YouTube Channels",
        url: "https://www.youtube.com/playlist?list=PLgUwDviBIf0rj-Zf0-R8-prSVw6Izpen8",
        description: "Complete DSA roadmap from basics to advanced with a problem-solving approach.",
    },
    Resource {
        id: "res-2",
        title: "CodeHelp - Babbar DSA Series",
        creator: "CodeHelp by Babbar",
        kind: "YouTube Playlist",
        level: "Beginner",
        category: "YouTube Channels",
        url: "https://www.youtube.com/playlist?list=PLDzeHZWIZsRpFRZjkCIOnOQTY6Z16ZTab",
        description: "Comprehensive DSA tutorial with detailed explanations, good for building foundations.",
    },
    Resource {
        id: "res-3",
        title: "Abdul Bari - Algorithm Playlist",
        creator: "Abdul Bari",
        kind: "YouTube Playlist",
        level: "Intermediate",
        category: "YouTube Channels",
        url: "https://www.youtube.com/playlist?list=PLDN4rrl48XKpZkP-oAn7F2c5dEQbKlqNL",
        description: "In-depth algorithm explanations with visuals, excellent for complexity analysis.",
    },
    Resource {
        id: "res-4",
        title: "Kunal Kushwaha - DSA Bootcamp",
        creator: "Kunal Kushwaha",
        kind: "YouTube Playlist",
        level: "Beginner",
        category: "YouTube Channels",
        url: "https://www.youtube.com/playlist?list=PL9gnRGlfMEL0qnqw8dSQzghqN8Jy5Ehhz",
        description: "DSA course with live problem solving, aimed at interview preparation.",
    },
    Resource {
        id: "res-5",
        title: "LeetCode",
        creator: "LeetCode",
        kind: "Website",
        level: "Beginner",
        category: "Websites",
        url: "https://leetcode.com",
        description: "The standard practice platform for interview problems.",
    },
    Resource {
        id: "res-6",
        title: "GeeksforGeeks",
        creator: "GeeksforGeeks",
        kind: "Website",
        level: "Beginner",
        category: "Websites",
        url: "https://www.geeksforgeeks.org/",
        description: "Articles and practice problems across every DSA topic.",
    },
    Resource {
        id: "res-7",
        title: "CodeForces",
        creator: "Codeforces",
        kind: "Website",
        level: "Intermediate",
        category: "Websites",
        url: "https://codeforces.com/",
        description: "Competitive programming contests for sharpening speed.",
    },
    Resource {
        id: "res-8",
        title: "InterviewBit",
        creator: "InterviewBit",
        kind: "Website",
        level: "Intermediate",
        category: "Websites",
        url: "https://www.interviewbit.com/",
        description: "Structured interview preparation tracks.",
    },
    Resource {
        id: "res-9",
        title: "DSA Roadmap by Striver",
        creator: "Striver (take U forward)",
        kind: "Roadmap",
        level: "Beginner",
        category: "Roadmaps",
        url: "https://takeuforward.org/interviews/strivers-sde-sheet-top-coding-interview-questions/",
        description: "The SDE sheet: top coding interview questions in a fixed order.",
    },
    Resource {
        id: "res-10",
        title: "LeetCode Study Plan",
        creator: "LeetCode",
        kind: "Roadmap",
        level: "Beginner",
        category: "Roadmaps",
        url: "https://leetcode.com/studyplan/",
        description: "Official study plans grouped by topic and target role.",
    },
    Resource {
        id: "res-12",
        title: "System Design Interview Course",
        creator: "ByteByteGo",
        kind: "YouTube Playlist",
        level: "Advanced",
        category: "Interview Preparation",
        url: "https://www.youtube.com/c/ByteByteGo",
        description: "System design walkthroughs for the rounds after DSA.",
    },
    Resource {
        id: "res-13",
        title: "Tech Interview Handbook",
        creator: "Yangshun Tay",
        kind: "Website",
        level: "Advanced",
        category: "Interview Preparation",
        url: "https://www.techinterviewhandbook.org/",
        description: "End-to-end interview playbook, from resume to offer negotiation.",
    },
    Resource {
        id: "res-14",
        title: "Blind 75 LeetCode Questions",
        creator: "Blind Community",
        kind: "Website",
        level: "Intermediate",
        category: "Interview Preparation",
        url: "https://leetcode.com/discuss/general-discussion/460599/blind-75-leetcode-questions",
        description: "The classic minimal question list covering the common patterns.",
    },
];

/// Distinct categories in catalogue order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for r in RESOURCES {
        if !seen.contains(&r.category) {
            seen.push(r.category);
        }
    }
    seen
}
