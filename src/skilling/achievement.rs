//! Achievement conditions and the newly-completed scan.
//!
//! Achievements are data: a name, a description, a difficulty tier, and a
//! typed [`AchievementCondition`] evaluated against player state. The table
//! is scanned in declaration order so notification sequences replay
//! identically in tests, and a name already recorded in
//! `completed_achievements` is never reported again -- completion is
//! append-only, with no retraction even if the condition later turns false.

use serde::{Deserialize, Serialize};

use super::tables::GameTables;
use super::types::{Difficulty, PlayerState, Skill};

/// Which slice of the data tables an inventory-wide condition ranges over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Ore,
    Log,
    Gem,
    Bar,
}

/// A boolean condition over player state. Conditions are plain data
/// evaluated in one place rather than closures, so the achievement table
/// stays serializable and captures no outer state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCondition {
    /// Skill reached the given level.
    SkillLevel { skill: Skill, required: u32 },
    /// Skill accumulated the given experience.
    SkillExperience { skill: Skill, required: f64 },
    /// A specific item count reached the given amount.
    ItemCount { item: String, required: u64 },
    /// Combined count across a whole category reached the given amount.
    CategoryTotal { category: ItemCategory, required: u64 },
    /// Every item in a category individually reached the given amount.
    CategoryEach { category: ItemCategory, required: u64 },
    /// At least one item in a category is held.
    CategoryAny { category: ItemCategory },
    /// Each of the listed items reached the given amount.
    EachOfItems { items: Vec<String>, required: u64 },
    /// Every sub-condition holds.
    AllOf { conditions: Vec<AchievementCondition> },
    /// Every achievement other than this one is complete.
    AllOtherAchievements,
}

impl AchievementCondition {
    /// Evaluate against the current state. `self_name` identifies the
    /// achievement this condition belongs to, so the meta-condition can
    /// exclude itself from its own count.
    pub fn is_satisfied(&self, state: &PlayerState, tables: &GameTables, self_name: &str) -> bool {
        match self {
            AchievementCondition::SkillLevel { skill, required } => {
                state.level(*skill) >= *required
            }
            AchievementCondition::SkillExperience { skill, required } => {
                state.experience(*skill) >= *required
            }
            AchievementCondition::ItemCount { item, required } => {
                state.inventory.has_at_least(item, *required)
            }
            AchievementCondition::CategoryTotal { category, required } => {
                state.inventory.total_of(category_ids(*category, tables)) >= *required
            }
            AchievementCondition::CategoryEach { category, required } => {
                category_ids(*category, tables)
                    .into_iter()
                    .all(|id| state.inventory.has_at_least(id, *required))
            }
            AchievementCondition::CategoryAny { category } => category_ids(*category, tables)
                .into_iter()
                .any(|id| state.inventory.count(id) > 0),
            AchievementCondition::EachOfItems { items, required } => items
                .iter()
                .all(|item| state.inventory.has_at_least(item, *required)),
            AchievementCondition::AllOf { conditions } => conditions
                .iter()
                .all(|condition| condition.is_satisfied(state, tables, self_name)),
            AchievementCondition::AllOtherAchievements => {
                let completed_others = state
                    .completed_achievements
                    .iter()
                    .filter(|name| name.as_str() != self_name)
                    .count();
                completed_others >= tables.achievements.len().saturating_sub(1)
            }
        }
    }
}

fn category_ids(category: ItemCategory, tables: &GameTables) -> Vec<&str> {
    match category {
        ItemCategory::Ore => tables.ores.keys().map(String::as_str).collect(),
        ItemCategory::Log => tables.trees.keys().map(String::as_str).collect(),
        ItemCategory::Gem => tables.gems.iter().map(|gem| gem.id.as_str()).collect(),
        ItemCategory::Bar => tables.bars.keys().map(String::as_str).collect(),
    }
}

/// A single achievement definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementRecord {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub condition: AchievementCondition,
}

impl AchievementRecord {
    pub fn new(
        name: &str,
        description: &str,
        difficulty: Difficulty,
        condition: AchievementCondition,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
            condition,
        }
    }
}

/// Scan the achievement table in declaration order and return the names
/// whose conditions hold now but are not yet recorded on the state. The
/// state is not modified; the caller appends the names and announces each
/// exactly once.
pub fn newly_completed_achievements(state: &PlayerState, tables: &GameTables) -> Vec<String> {
    tables
        .achievements
        .iter()
        .filter(|achievement| !state.completed_achievements.contains(&achievement.name))
        .filter(|achievement| {
            achievement
                .condition
                .is_satisfied(state, tables, &achievement.name)
        })
        .map(|achievement| achievement.name.clone())
        .collect()
}
