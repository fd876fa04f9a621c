//! Daily Tracker - Gamified Habit Tracker Library
//!
//! A single-user progression engine over a catalog of repeatable daily
//! tasks: completions earn EXP, levels, rank points, streaks, and
//! one-shot achievements. This crate exposes the engine for the CLI
//! binary and for tests.

pub mod achievements;
pub mod core;
pub mod error;
pub mod store;

pub use crate::core::state::TrackerState;
pub use error::{Error, Result};
