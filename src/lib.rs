//! Shared library for `act-leaderboard`
//!
//! Aggregates approved achievement checkins into a ranked leaderboard and
//! per-user achievement tallies. The `actboard` CLI is a thin layer over this
//! crate.

pub mod core;
pub mod logger;

pub use crate::core::*;
