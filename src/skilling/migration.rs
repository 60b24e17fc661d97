//! Persisted player-state migration.
//!
//! The storage collaborator hands the engine whatever it finds on disk: an
//! up-to-date document, one written by an older release, a partial object,
//! or nothing at all. `migrate` normalizes any of those into the current
//! [`PlayerState`] schema. It never fails -- wrong-typed and missing fields
//! are repaired to their defaults rather than rejected -- and it is
//! idempotent: migrating its own output changes nothing.
//!
//! Migration is additive. Inventory entries for items outside the ore
//! table (logs, bars, gems, crafted goods) pass through untouched; only
//! missing ore slots are seeded with zero so a fresh player sees every ore
//! listed.

use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeSet;

use super::tables::GameTables;
use super::types::{Inventory, PlayerState};

/// Version stamped on every migrated document.
pub const CURRENT_CONFIG_VERSION: u32 = 2;

/// Default resource selections for a fresh player.
pub const DEFAULT_ORE: &str = "Rune essence";
pub const DEFAULT_TREE: &str = "Tree";
pub const DEFAULT_BAR: &str = "Bronze bar";

/// State for a brand-new player: level 1 everywhere, zero experience, the
/// default selections, and a zero entry for every ore in the table.
pub fn default_player_state(tables: &GameTables) -> PlayerState {
    let mut inventory = Inventory::new();
    for ore in tables.ores.keys() {
        inventory.ensure_entry(ore);
    }
    PlayerState {
        config_version: CURRENT_CONFIG_VERSION,
        mining_level: 1,
        woodcutting_level: 1,
        smithing_level: 1,
        crafting_level: 1,
        mining_exp: 0.0,
        woodcutting_exp: 0.0,
        smithing_exp: 0.0,
        crafting_exp: 0.0,
        current_ore: DEFAULT_ORE.to_string(),
        current_tree: DEFAULT_TREE.to_string(),
        current_bar: DEFAULT_BAR.to_string(),
        current_craft: String::new(),
        inventory,
        progress_to_next: 0.0,
        completed_achievements: BTreeSet::new(),
    }
}

/// Normalize a raw persisted document of any prior shape into the current
/// schema. `Null` and non-object inputs produce a fresh default state.
pub fn migrate(raw: &Value, tables: &GameTables) -> PlayerState {
    let Some(doc) = raw.as_object() else {
        if !raw.is_null() {
            warn!("persisted player state is not an object; starting fresh");
        }
        return default_player_state(tables);
    };

    let from_version = get_u32(doc, "config_version").unwrap_or(1);
    if from_version < CURRENT_CONFIG_VERSION {
        info!(
            "migrating player state from config v{} to v{}",
            from_version, CURRENT_CONFIG_VERSION
        );
    }

    // Old schema tracked a single currency as total_exp; it becomes mining
    // experience unless the per-skill field already exists, in which case
    // the legacy field is ignored.
    let mining_exp = match get_f64(doc, "mining_exp") {
        Some(exp) => exp,
        None => match get_f64(doc, "total_exp") {
            Some(exp) => {
                info!("renaming legacy total_exp ({exp}) to mining_exp");
                exp
            }
            None => 0.0,
        },
    };

    let mut inventory = match doc.get("inventory") {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(item, count)| (item.clone(), coerce_count(count)))
            .collect(),
        Some(other) if !other.is_null() => {
            warn!("discarding malformed inventory ({other}); reseeding");
            Inventory::new()
        }
        _ => Inventory::new(),
    };
    for ore in tables.ores.keys() {
        inventory.ensure_entry(ore);
    }

    let completed_achievements = match doc.get("completed_achievements") {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(|name| name.as_str())
            .map(str::to_string)
            .collect(),
        _ => BTreeSet::new(),
    };

    PlayerState {
        config_version: CURRENT_CONFIG_VERSION,
        mining_level: get_u32(doc, "mining_level").unwrap_or(1),
        woodcutting_level: get_u32(doc, "woodcutting_level").unwrap_or(1),
        smithing_level: get_u32(doc, "smithing_level").unwrap_or(1),
        crafting_level: get_u32(doc, "crafting_level").unwrap_or(1),
        mining_exp,
        woodcutting_exp: get_f64(doc, "woodcutting_exp").unwrap_or(0.0),
        smithing_exp: get_f64(doc, "smithing_exp").unwrap_or(0.0),
        crafting_exp: get_f64(doc, "crafting_exp").unwrap_or(0.0),
        current_ore: get_string(doc, "current_ore").unwrap_or_else(|| DEFAULT_ORE.to_string()),
        current_tree: get_string(doc, "current_tree").unwrap_or_else(|| DEFAULT_TREE.to_string()),
        current_bar: get_string(doc, "current_bar").unwrap_or_else(|| DEFAULT_BAR.to_string()),
        current_craft: get_string(doc, "current_craft").unwrap_or_default(),
        inventory,
        progress_to_next: get_f64(doc, "progress_to_next").unwrap_or(0.0),
        completed_achievements,
    }
}

fn get_u32(doc: &serde_json::Map<String, Value>, key: &str) -> Option<u32> {
    doc.get(key)?.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn get_f64(doc: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    doc.get(key)?.as_f64()
}

fn get_string(doc: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    doc.get(key)?.as_str().map(str::to_string)
}

fn coerce_count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|n| n.max(0.0) as u64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_input_yields_fresh_player() {
        let tables = GameTables::standard();
        let state = migrate(&Value::Null, &tables);
        assert_eq!(state, default_player_state(&tables));
        assert_eq!(state.config_version, CURRENT_CONFIG_VERSION);
        for ore in tables.ores.keys() {
            assert_eq!(state.inventory.count(ore), 0);
        }
    }

    #[test]
    fn legacy_total_exp_becomes_mining_exp() {
        let tables = GameTables::standard();
        let state = migrate(
            &json!({"total_exp": 123.0, "inventory": {"Copper ore": 2}}),
            &tables,
        );
        assert_eq!(state.mining_exp, 123.0);
        assert_eq!(state.woodcutting_exp, 0.0);
        assert_eq!(state.smithing_exp, 0.0);
        assert_eq!(state.crafting_exp, 0.0);
        assert_eq!(state.inventory.count("Copper ore"), 2);
    }

    #[test]
    fn total_exp_never_overwrites_existing_mining_exp() {
        let tables = GameTables::standard();
        let state = migrate(&json!({"total_exp": 999.0, "mining_exp": 10.0}), &tables);
        assert_eq!(state.mining_exp, 10.0);
    }

    #[test]
    fn missing_fields_get_documented_defaults() {
        let tables = GameTables::standard();
        let state = migrate(&json!({}), &tables);
        assert_eq!(state.smithing_level, 1);
        assert_eq!(state.crafting_level, 1);
        assert_eq!(state.current_ore, "Rune essence");
        assert_eq!(state.current_tree, "Tree");
        assert_eq!(state.current_bar, "Bronze bar");
        assert_eq!(state.current_craft, "");
        assert!(state.completed_achievements.is_empty());
    }

    #[test]
    fn malformed_inventory_is_reseeded() {
        let tables = GameTables::standard();
        let state = migrate(&json!({"mining_exp": 10.0, "inventory": 5}), &tables);
        assert_eq!(state.inventory.len(), tables.ores.len());
        for ore in tables.ores.keys() {
            assert_eq!(state.inventory.count(ore), 0);
        }
    }

    #[test]
    fn wrong_typed_fields_are_repaired_not_fatal() {
        let tables = GameTables::standard();
        let state = migrate(
            &json!({
                "mining_level": "ninety-nine",
                "woodcutting_exp": [1, 2],
                "current_ore": 7,
                "completed_achievements": "First Steps",
            }),
            &tables,
        );
        assert_eq!(state.mining_level, 1);
        assert_eq!(state.woodcutting_exp, 0.0);
        assert_eq!(state.current_ore, "Rune essence");
        assert!(state.completed_achievements.is_empty());
    }

    #[test]
    fn inventory_entries_outside_ore_table_survive() {
        let tables = GameTables::standard();
        let state = migrate(
            &json!({"inventory": {"Oak": 12, "Bronze bar": 3, "Uncut ruby": 1}}),
            &tables,
        );
        assert_eq!(state.inventory.count("Oak"), 12);
        assert_eq!(state.inventory.count("Bronze bar"), 3);
        assert_eq!(state.inventory.count("Uncut ruby"), 1);
        assert_eq!(state.inventory.count("Runite ore"), 0);
    }

    #[test]
    fn migrate_is_idempotent() {
        let tables = GameTables::standard();
        let first = migrate(
            &json!({
                "total_exp": 456,
                "woodcutting_level": 12,
                "inventory": {"Oak": 3, "Clay": 9},
                "completed_achievements": ["First Steps"],
            }),
            &tables,
        );
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = migrate(&reserialized, &tables);
        assert_eq!(first, second);
        assert_eq!(reserialized, serde_json::to_value(&second).unwrap());
    }

    #[test]
    fn version_always_stamped_to_current() {
        let tables = GameTables::standard();
        assert_eq!(
            migrate(&json!({"config_version": 1}), &tables).config_version,
            CURRENT_CONFIG_VERSION
        );
        assert_eq!(
            migrate(&json!({}), &tables).config_version,
            CURRENT_CONFIG_VERSION
        );
    }
}
