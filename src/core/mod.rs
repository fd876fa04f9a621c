//! Core tracker state and progression logic.

pub mod catalog;
pub mod constants;
pub mod engine;
pub mod ledger;
pub mod progress;
pub mod rank;
pub mod seasons;
pub mod state;
pub mod stats;
pub mod streak;
