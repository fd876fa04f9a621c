//! Achievement system module.
//!
//! Six fixed achievements unlock exactly once each, evaluated in priority
//! order after every completion. Unlocked ids live in
//! `UserProgress::achievements` and persist with the rest of the profile.

pub mod data;
pub mod rules;
pub mod types;

pub use data::{achievement_def, ALL_ACHIEVEMENTS};
pub use rules::{evaluate, satisfied};
pub use types::{AchievementDef, AchievementId, ProgressSnapshot};
