/// A row of the curated sheet. Seeded into the `problems` table on startup
/// with `INSERT OR IGNORE`, so user progress on existing rows survives.
pub struct SeedProblem {
    pub id: &'static str,
    pub title: &'static str,
    pub topic: &'static str,
    pub algorithm: &'static str,
    pub difficulty: &'static str,
    pub platform: &'static str,
    pub link: &'static str,
}

const fn p(
    id: &'static str,
    title: &'static str,
    topic: &'static str,
    algorithm: &'static str,
    difficulty: &'static str,
    platform: &'static str,
    link: &'static str,
) -> SeedProblem {
    SeedProblem {
        id,
        title,
        topic,
        algorithm,
        difficulty,
        platform,
        link,
    }
}

pub const CURATED_SHEET: &[SeedProblem] = &[
    // Arrays
    p("arr-1", "Two Sum", "Arrays", "Hashing", "Easy", "LeetCode",
      "https://leetcode.com/problems/two-sum/"),
    p("arr-2", "Best Time to Buy and Sell Stock", "Arrays", "Kadane Variant", "Easy", "LeetCode",
      "https://leetcode.com/problems/best-time-to-buy-and-sell-stock/"),
    p("arr-3", "Maximum Subarray", "Arrays", "Kadane Variant", "Medium", "LeetCode",
      "https://leetcode.com/problems/maximum-subarray/"),
    p("arr-4", "Merge Intervals", "Arrays", "Sorting", "Medium", "LeetCode",
      "https://leetcode.com/problems/merge-intervals/"),
    p("arr-5", "Trapping Rain Water", "Arrays", "Two Pointer", "Hard", "LeetCode",
      "https://leetcode.com/problems/trapping-rain-water/"),
    // Strings
    p("str-1", "Valid Anagram", "Strings", "Hashing", "Easy", "LeetCode",
      "https://leetcode.com/problems/valid-anagram/"),
    p("str-2", "Longest Palindromic Substring", "Strings", "Expand Around Center", "Medium", "LeetCode",
      "https://leetcode.com/problems/longest-palindromic-substring/"),
    p("str-3", "Group Anagrams", "Strings", "Hashing", "Medium", "LeetCode",
      "https://leetcode.com/problems/group-anagrams/"),
    p("str-4", "Minimum Window Substring", "Strings", "Sliding Window", "Hard", "LeetCode",
      "https://leetcode.com/problems/minimum-window-substring/"),
    // Linked List
    p("ll-1", "Reverse Linked List", "Linked List", "Pointer Reversal", "Easy", "LeetCode",
      "https://leetcode.com/problems/reverse-linked-list/"),
    p("ll-2", "Detect Cycle in a Linked List", "Linked List", "Floyd Cycle", "Easy", "LeetCode",
      "https://leetcode.com/problems/linked-list-cycle/"),
    p("ll-3", "Merge Two Sorted Lists", "Linked List", "Merging", "Easy", "LeetCode",
      "https://leetcode.com/problems/merge-two-sorted-lists/"),
    p("ll-4", "LRU Cache", "Linked List", "Design", "Medium", "LeetCode",
      "https://leetcode.com/problems/lru-cache/"),
    // Stack
    p("stk-1", "Valid Parentheses", "Stack", "Matching", "Easy", "LeetCode",
      "https://leetcode.com/problems/valid-parentheses/"),
    p("stk-2", "Next Greater Element", "Stack", "Monotonic Stack", "Easy", "GFG",
      "https://www.geeksforgeeks.org/next-greater-element/"),
    p("stk-3", "Largest Rectangle in Histogram", "Stack", "Monotonic Stack", "Hard", "LeetCode",
      "https://leetcode.com/problems/largest-rectangle-in-histogram/"),
    // Binary Search
    p("bs-1", "Binary Search", "Binary Search", "Classic", "Easy", "LeetCode",
      "https://leetcode.com/problems/binary-search/"),
    p("bs-2", "Search in Rotated Sorted Array", "Binary Search", "Rotated Array", "Medium", "LeetCode",
      "https://leetcode.com/problems/search-in-rotated-sorted-array/"),
    p("bs-3", "Median of Two Sorted Arrays", "Binary Search", "Partitioning", "Hard", "LeetCode",
      "https://leetcode.com/problems/median-of-two-sorted-arrays/"),
    // Trees
    p("tree-1", "Invert Binary Tree", "Trees", "DFS", "Easy", "LeetCode",
      "https://leetcode.com/problems/invert-binary-tree/"),
    p("tree-2", "Binary Tree Level Order Traversal", "Trees", "BFS", "Medium", "LeetCode",
      "https://leetcode.com/problems/binary-tree-level-order-traversal/"),
    p("tree-3", "Lowest Common Ancestor of a Binary Tree", "Trees", "DFS", "Medium", "LeetCode",
      "https://leetcode.com/problems/lowest-common-ancestor-of-a-binary-tree/"),
    p("tree-4", "Serialize and Deserialize Binary Tree", "Trees", "DFS", "Hard", "LeetCode",
      "https://leetcode.com/problems/serialize-and-deserialize-binary-tree/"),
    // BST
    p("bst-1", "Validate Binary Search Tree", "BST", "Inorder", "Medium", "LeetCode",
      "https://leetcode.com/problems/validate-binary-search-tree/"),
    p("bst-2", "Kth Smallest Element in a BST", "BST", "Inorder", "Medium", "LeetCode",
      "https://leetcode.com/problems/kth-smallest-element-in-a-bst/"),
    // Heaps
    p("heap-1", "Kth Largest Element in an Array", "Heaps", "Min Heap", "Medium", "LeetCode",
      "https://leetcode.com/problems/kth-largest-element-in-an-array/"),
    p("heap-2", "Merge K Sorted Lists", "Heaps", "Min Heap", "Hard", "LeetCode",
      "https://leetcode.com/problems/merge-k-sorted-lists/"),
    p("heap-3", "Find Median from Data Stream", "Heaps", "Two Heaps", "Hard", "LeetCode",
      "https://leetcode.com/problems/find-median-from-data-stream/"),
    // Graphs
    p("graph-1", "Number of Islands", "Graphs", "BFS", "Medium", "LeetCode",
      "https://leetcode.com/problems/number-of-islands/"),
    p("graph-2", "Course Schedule", "Graphs", "Topological Sort", "Medium", "LeetCode",
      "https://leetcode.com/problems/course-schedule/"),
    p("graph-3", "Clone Graph", "Graphs", "DFS", "Medium", "LeetCode",
      "https://leetcode.com/problems/clone-graph/"),
    p("graph-4", "Word Ladder", "Graphs", "BFS", "Hard", "LeetCode",
      "https://leetcode.com/problems/word-ladder/"),
    // Dynamic Programming
    p("dp-1", "Climbing Stairs", "Dynamic Programming", "1D DP", "Easy", "LeetCode",
      "https://leetcode.com/problems/climbing-stairs/"),
    p("dp-2", "Coin Change", "Dynamic Programming", "1D DP", "Medium", "LeetCode",
      "https://leetcode.com/problems/coin-change/"),
    p("dp-3", "Longest Increasing Subsequence", "Dynamic Programming", "1D DP", "Medium", "LeetCode",
      "https://leetcode.com/problems/longest-increasing-subsequence/"),
    p("dp-4", "Longest Common Subsequence", "Dynamic Programming", "2D DP", "Medium", "LeetCode",
      "https://leetcode.com/problems/longest-common-subsequence/"),
    p("dp-5", "Edit Distance", "Dynamic Programming", "2D DP", "Hard", "LeetCode",
      "https://leetcode.com/problems/edit-distance/"),
    // Greedy
    p("greedy-1", "Jump Game", "Greedy", "Reachability", "Medium", "LeetCode",
      "https://leetcode.com/problems/jump-game/"),
    p("greedy-2", "N Meetings in One Room", "Greedy", "Interval Scheduling", "Easy", "GFG",
      "https://www.geeksforgeeks.org/problems/n-meetings-in-one-room-1587115620/1"),
    // Backtracking
    p("bt-1", "Subsets", "Backtracking", "Enumeration", "Medium", "LeetCode",
      "https://leetcode.com/problems/subsets/"),
    p("bt-2", "Word Search", "Backtracking", "Grid DFS", "Medium", "LeetCode",
      "https://leetcode.com/problems/word-search/"),
    p("bt-3", "N-Queens", "Backtracking", "Pruning", "Hard", "LeetCode",
      "https://leetcode.com/problems/n-queens/"),
    // Sliding Window
    p("sw-1", "Longest Substring Without Repeating Characters", "Sliding Window", "Variable Window", "Medium", "LeetCode",
      "https://leetcode.com/problems/longest-substring-without-repeating-characters/"),
    p("sw-2", "Sliding Window Maximum", "Sliding Window", "Monotonic Deque", "Hard", "LeetCode",
      "https://leetcode.com/problems/sliding-window-maximum/"),
    // Two Pointer
    p("tp-1", "Container With Most Water", "Two Pointer", "Converging", "Medium", "LeetCode",
      "https://leetcode.com/problems/container-with-most-water/"),
    p("tp-2", "3Sum", "Two Pointer", "Converging", "Medium", "LeetCode",
      "https://leetcode.com/problems/3sum/"),
    // Bit Manipulation
    p("bit-1", "Single Number", "Bit Manipulation", "XOR", "Easy", "LeetCode",
      "https://leetcode.com/problems/single-number/"),
    p("bit-2", "Counting Bits", "Bit Manipulation", "DP on Bits", "Easy", "LeetCode",
      "https://leetcode.com/problems/counting-bits/"),
];
