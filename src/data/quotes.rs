use std::time::{SystemTime, UNIX_EPOCH};

/// Shown when a problem is marked complete.
pub const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do.",
    "Discipline compounds faster than talent.",
    "Every expert was once a beginner.",
    "Your hard work will pay off.",
    "Consistency is the key to success.",
    "Keep coding, keep learning, keep growing.",
    "Success is not final, failure is not fatal.",
    "Don't watch the clock; do what it does. Keep going.",
    "The future depends on what you do today.",
    "First, solve the problem. Then, write the code.",
    "Algorithms are just organized common sense.",
    "Strive for 1% improvement every day.",
    "Master DSA, master the interview.",
];

/// Pseudo-random pick seeded off the clock.
pub fn random_quote() -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    QUOTES[nanos as usize % QUOTES.len()]
}
