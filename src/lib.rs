//! # Skillscape - Deterministic RPG Skilling Engine
//!
//! Skillscape turns review-style user actions into progress in an RPG
//! skilling game: mining, woodcutting, smithing, and crafting. The crate is
//! the progression core only -- a pure, synchronous state-transition
//! library. The host application renders UI, persists state, and draws
//! randomness; the engine just computes.
//!
//! ## Features
//!
//! - **Action Appliers**: one pure function per skill; gather actions are
//!   probability-gated, production actions are material-gated.
//! - **Replayable Randomness**: every random decision consumes a
//!   caller-supplied draw in `[0, 1)`, so a recorded draw sequence replays
//!   an identical session.
//! - **Copy-on-Write State**: appliers never mutate the inventory they are
//!   handed; concurrent callers each get a consistent result from their own
//!   snapshot without locks.
//! - **Leveling and Achievements**: threshold-table leveling with
//!   multi-level jumps, and a typed, declaration-ordered achievement table.
//! - **Schema Migration**: persisted player state of any prior version is
//!   normalized defensively, additively, and idempotently on load.
//!
//! ## Quick Start
//!
//! ```rust
//! use skillscape::config::Config;
//! use skillscape::skilling::{
//!     apply_level_ups, apply_mining, migrate, mining_success_probability,
//!     newly_completed_achievements, GameTables, GemDraws, Skill,
//! };
//!
//! let tables = GameTables::standard();
//! let config = Config::default();
//!
//! // Load (or initialize) the player through migration.
//! let mut player = migrate(&serde_json::Value::Null, &tables);
//!
//! // The caller draws all randomness; the engine only consumes it.
//! let ore = player.current_ore.clone();
//! let probability = mining_success_probability(
//!     &config.skilling,
//!     player.mining_level,
//!     tables.ores[ore.as_str()].probability,
//! );
//! let outcome = apply_mining(
//!     &ore,
//!     &player.inventory,
//!     &tables.ores,
//!     &tables.gems,
//!     0.12,
//!     probability,
//!     Some(GemDraws { chance: 0.9, pick: 0.5 }),
//!     config.skilling.gem_drop_chance,
//! );
//!
//! if outcome.success {
//!     player.inventory = outcome.inventory;
//!     player.add_experience(Skill::Mining, outcome.experience);
//!     for level in apply_level_ups(&mut player, Skill::Mining, &tables.experience) {
//!         println!("Mining level up: {level}");
//!     }
//!     for name in newly_completed_achievements(&player, &tables) {
//!         player.completed_achievements.insert(name);
//!     }
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`skilling`] - The engine: types, tables, appliers, leveling,
//!   achievements, and migration
//! - [`config`] - Tuning configuration (TOML via serde)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Presentation   │ ← draws randomness, renders outcomes (external)
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    Skilling     │ ← pure state transitions (this crate)
//! │     Engine      │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    Storage      │ ← persists PlayerState verbatim (external)
//! └─────────────────┘
//! ```
//!
//! Migration runs once per load, before any other component touches the
//! state; the storage collaborator persists the returned [`skilling::PlayerState`]
//! after each action.

pub mod config;
pub mod skilling;
