//! The completion ledger: which tasks were completed on which day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::constants::DAY_KEY_FORMAT;

/// Formats a date as a ledger day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Per-day record of completed task ids, ordered by day key.
///
/// A day may be present with an empty list after an undo; such a day is
/// a streak gap, the same as an absent day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLedger {
    days: BTreeMap<String, Vec<u32>>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completion for the day.
    pub fn record(&mut self, day: &str, task_id: u32) {
        self.days.entry(day.to_string()).or_default().push(task_id);
    }

    /// The task ids completed on a day, in completion order.
    pub fn completed_on(&self, day: &str) -> &[u32] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any task was completed on the day.
    pub fn has_completions(&self, day: &str) -> bool {
        !self.completed_on(day).is_empty()
    }

    /// Whether the task is already recorded for the day.
    pub fn contains(&self, day: &str, task_id: u32) -> bool {
        self.completed_on(day).contains(&task_id)
    }

    /// Removes the first occurrence of the task for the day, keeping the
    /// day key even when its list empties. Returns whether an entry was
    /// removed.
    pub fn remove(&mut self, day: &str, task_id: u32) -> bool {
        if let Some(entries) = self.days.get_mut(day) {
            if let Some(index) = entries.iter().position(|id| *id == task_id) {
                entries.remove(index);
                return true;
            }
        }
        false
    }

    /// Total completions across all days, counting repeats.
    pub fn total_completions(&self) -> u64 {
        self.days.values().map(|ids| ids.len() as u64).sum()
    }

    /// Days with at least one completion.
    pub fn active_days(&self) -> usize {
        self.days.values().filter(|ids| !ids.is_empty()).count()
    }

    /// Iterates day entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.days
            .iter()
            .map(|(day, ids)| (day.as_str(), ids.as_slice()))
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}
