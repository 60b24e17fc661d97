//! Deterministic skilling engine: data tables, probability model, action
//! appliers, leveling, achievements, and player-state migration.
//!
//! Every public function here is a pure computation over immutable inputs.
//! Randomness is always a caller-supplied draw in `[0, 1)`, inventories are
//! copied rather than mutated, and failure cases come back as flagged
//! outcomes instead of errors, so a recorded sequence of draws replays the
//! exact same session every time.

pub mod achievement;
pub mod actions;
pub mod errors;
pub mod leveling;
pub mod migration;
pub mod probability;
pub mod tables;
pub mod types;

pub use achievement::{
    newly_completed_achievements, AchievementCondition, AchievementRecord, ItemCategory,
};
pub use actions::{
    apply_crafting, apply_mining, apply_smelting, apply_woodcutting, can_craft_item, can_cut_tree,
    can_mine_ore, can_smelt_any_bar, has_crafting_materials, PLACEHOLDER_CRAFT,
};
pub use errors::SkillscapeError;
pub use leveling::{
    apply_level_ups, calculate_new_level, experience_to_next_level, ExperienceTable, MAX_LEVEL,
};
pub use migration::{
    default_player_state, migrate, CURRENT_CONFIG_VERSION, DEFAULT_BAR, DEFAULT_ORE, DEFAULT_TREE,
};
pub use probability::{
    mining_success_probability, pick_gem, success_probability, woodcutting_success_probability,
};
pub use tables::{
    standard_achievements, standard_bars, standard_crafting, standard_experience_table,
    standard_gems, standard_ores, standard_trees, GameTables,
};
pub use types::*;
