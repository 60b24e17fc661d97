//! Experience-to-level mapping.
//!
//! Levels only ever move forward: experience accretes through the action
//! appliers, and [`calculate_new_level`] walks the threshold table from the
//! current level until the experience no longer clears the next threshold.
//! A single large gain can climb several levels in one call; the caller is
//! expected to announce each intermediate level separately, which is what
//! [`apply_level_ups`] returns them for.

use serde::{Deserialize, Serialize};

use super::errors::SkillscapeError;
use super::types::{PlayerState, Skill};

/// Hard level cap; no experience amount advances a skill past it.
pub const MAX_LEVEL: u32 = 99;

/// Ordered cumulative experience thresholds. `thresholds[n]` is the
/// experience required to reach level `n + 1`, so index 0 is always 0 and
/// the standard table carries 99 entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ExperienceTable {
    thresholds: Vec<u64>,
}

impl ExperienceTable {
    /// Build a table from raw thresholds, rejecting empty or decreasing
    /// sequences.
    pub fn new(thresholds: Vec<u64>) -> Result<Self, SkillscapeError> {
        if thresholds.is_empty() {
            return Err(SkillscapeError::EmptyExperienceTable);
        }
        for (index, pair) in thresholds.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(SkillscapeError::ExperienceTableOrder { index: index + 1 });
            }
        }
        Ok(Self { thresholds })
    }

    /// Construct without validation; reserved for the built-in table,
    /// which is checked by `GameTables::validate` and its tests.
    pub(crate) fn from_thresholds(thresholds: Vec<u64>) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    /// Experience required to reach `level`, or `None` when the table has
    /// no entry for it (past the end, or level 0).
    pub fn threshold_to_reach(&self, level: u32) -> Option<u64> {
        let index = level.checked_sub(1)? as usize;
        self.thresholds.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

/// Map accumulated experience to a level, walking forward from
/// `current_level`. Supports multi-level jumps from a single gain and never
/// exceeds [`MAX_LEVEL`] or the end of the table.
pub fn calculate_new_level(experience: f64, current_level: u32, table: &ExperienceTable) -> u32 {
    let mut new_level = current_level;
    while new_level < MAX_LEVEL {
        match table.threshold_to_reach(new_level + 1) {
            Some(threshold) if experience >= threshold as f64 => new_level += 1,
            _ => break,
        }
    }
    new_level
}

/// Recompute `skill`'s level from its current experience, store it, and
/// return every level climbed in order. Each returned level is a discrete
/// milestone the presentation layer announces separately.
pub fn apply_level_ups(state: &mut PlayerState, skill: Skill, table: &ExperienceTable) -> Vec<u32> {
    let old_level = state.level(skill);
    let new_level = calculate_new_level(state.experience(skill), old_level, table);
    state.set_level(skill, new_level);
    (old_level + 1..=new_level).collect()
}

/// Experience still missing before `skill` reaches its next level; zero at
/// the cap.
pub fn experience_to_next_level(state: &PlayerState, skill: Skill, table: &ExperienceTable) -> f64 {
    let level = state.level(skill);
    if level >= MAX_LEVEL {
        return 0.0;
    }
    match table.threshold_to_reach(level + 1) {
        Some(threshold) => (threshold as f64 - state.experience(skill)).max(0.0),
        None => 0.0,
    }
}
