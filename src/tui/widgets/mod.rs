pub mod activity;
pub mod header;
pub mod overview;
pub mod problems;
pub mod statusbar;
pub mod streak;
pub mod topics;
