pub mod config;
pub mod difficulty;
pub mod minutes;
pub mod review;
pub mod slot;
pub mod streak;
