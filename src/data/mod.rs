pub mod problems;
pub mod quotes;
pub mod resources;
