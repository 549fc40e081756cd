//! Data models for `act-leaderboard`

pub mod achievement;
pub mod checkin;
pub mod user;

pub use achievement::{Achievement, AchievementCategory, Points};
pub use checkin::{AchievementCounts, Checkin, Count};
pub use user::User;
