//! Action appliers: one pure function per skill.
//!
//! Every applier takes the current inventory by reference plus any random
//! draws the caller made, and returns a fresh outcome; the input inventory
//! is never mutated, so two callers working from the same snapshot each get
//! a consistent result. Success on a gather roll is strict (`draw <
//! probability`) -- a draw exactly equal to the probability fails, and that
//! boundary is load-bearing for replayability.
//!
//! Level gating for the material actions (smelting, crafting) is the
//! caller's job; the `can_*` helpers below exist for exactly that check, so
//! callers can explain *why* an action is unavailable before applying it.

use std::collections::BTreeMap;

use super::probability::pick_gem;
use super::types::{ActionOutcome, GatherSpec, GemDraws, GemSpec, Inventory, MiningOutcome, RecipeSpec};

/// Crafting-table placeholder meaning "nothing selected". Crafting it
/// deducts its (empty) requirements but never adds an output unit.
pub const PLACEHOLDER_CRAFT: &str = "None";

/// Attempt to chop `tree_id`. Success adds one log and grants the tree's
/// experience; failure (bad draw or unknown id) leaves the inventory as it
/// was.
pub fn apply_woodcutting(
    tree_id: &str,
    inventory: &Inventory,
    trees: &BTreeMap<String, GatherSpec>,
    r_action: f64,
    success_probability: f64,
) -> ActionOutcome {
    let Some(spec) = trees.get(tree_id) else {
        return ActionOutcome::failed(inventory);
    };
    if r_action >= success_probability {
        return ActionOutcome::failed(inventory);
    }
    let mut new_inventory = inventory.clone();
    new_inventory.grant(tree_id, 1);
    ActionOutcome {
        inventory: new_inventory,
        experience: spec.experience,
        success: true,
    }
}

/// Attempt to mine `ore_id`. On success the ore is added and, when gem
/// draws were supplied, a gem may drop on top: `gem_draws.chance` is tested
/// strictly against `gem_drop_chance`, then `gem_draws.pick` selects from
/// the gem table by cumulative walk. The gem's count and experience stack
/// on top of the ore's.
#[allow(clippy::too_many_arguments)]
pub fn apply_mining(
    ore_id: &str,
    inventory: &Inventory,
    ores: &BTreeMap<String, GatherSpec>,
    gems: &[GemSpec],
    r_action: f64,
    success_probability: f64,
    gem_draws: Option<GemDraws>,
    gem_drop_chance: f64,
) -> MiningOutcome {
    let Some(spec) = ores.get(ore_id) else {
        return MiningOutcome::failed(inventory);
    };
    if r_action >= success_probability {
        return MiningOutcome::failed(inventory);
    }

    let mut new_inventory = inventory.clone();
    new_inventory.grant(ore_id, 1);
    let mut experience = spec.experience;

    let mut gem = None;
    if let Some(draws) = gem_draws {
        if draws.chance < gem_drop_chance {
            if let Some(gem_spec) = pick_gem(gems, draws.pick) {
                new_inventory.grant(&gem_spec.id, 1);
                experience += gem_spec.experience;
                gem = Some(gem_spec.id.clone());
            }
        }
    }

    MiningOutcome {
        inventory: new_inventory,
        experience,
        success: true,
        gem,
    }
}

/// Attempt to smelt `bar_id`. No randomness: the action succeeds exactly
/// when every required ore is held, deducting all of them and adding one
/// bar. Unknown bars and missing materials both come back as failures.
pub fn apply_smelting(
    bar_id: &str,
    inventory: &Inventory,
    bars: &BTreeMap<String, RecipeSpec>,
) -> ActionOutcome {
    let Some(spec) = bars.get(bar_id) else {
        return ActionOutcome::failed(inventory);
    };
    apply_recipe(bar_id, spec, inventory, true)
}

/// Attempt to craft `item_id`. Same material-deduction contract as
/// smelting, except the [`PLACEHOLDER_CRAFT`] pseudo-item never adds an
/// output unit to the inventory.
pub fn apply_crafting(
    item_id: &str,
    inventory: &Inventory,
    crafting: &BTreeMap<String, RecipeSpec>,
) -> ActionOutcome {
    let Some(spec) = crafting.get(item_id) else {
        return ActionOutcome::failed(inventory);
    };
    apply_recipe(item_id, spec, inventory, item_id != PLACEHOLDER_CRAFT)
}

fn apply_recipe(
    output_id: &str,
    spec: &RecipeSpec,
    inventory: &Inventory,
    add_output: bool,
) -> ActionOutcome {
    if !materials_available(&spec.requirements, inventory) {
        return ActionOutcome::failed(inventory);
    }
    let mut new_inventory = inventory.clone();
    for (material, &amount) in &spec.requirements {
        new_inventory.deduct(material, amount);
    }
    if add_output {
        new_inventory.grant(output_id, 1);
    }
    ActionOutcome {
        inventory: new_inventory,
        experience: spec.experience,
        success: true,
    }
}

fn materials_available(requirements: &BTreeMap<String, u64>, inventory: &Inventory) -> bool {
    requirements
        .iter()
        .all(|(material, &amount)| inventory.has_at_least(material, amount))
}

/// Whether `mining_level` meets the ore's required level.
pub fn can_mine_ore(mining_level: u32, ore_id: &str, ores: &BTreeMap<String, GatherSpec>) -> bool {
    ores.get(ore_id)
        .is_some_and(|spec| mining_level >= spec.level)
}

/// Whether `woodcutting_level` meets the tree's required level.
pub fn can_cut_tree(
    woodcutting_level: u32,
    tree_id: &str,
    trees: &BTreeMap<String, GatherSpec>,
) -> bool {
    trees
        .get(tree_id)
        .is_some_and(|spec| woodcutting_level >= spec.level)
}

/// Whether the inventory holds every material the item requires.
pub fn has_crafting_materials(
    item_id: &str,
    inventory: &Inventory,
    crafting: &BTreeMap<String, RecipeSpec>,
) -> bool {
    crafting
        .get(item_id)
        .is_some_and(|spec| materials_available(&spec.requirements, inventory))
}

/// Whether both the level gate and the material gate pass for `item_id`.
pub fn can_craft_item(
    crafting_level: u32,
    inventory: &Inventory,
    item_id: &str,
    crafting: &BTreeMap<String, RecipeSpec>,
) -> bool {
    let Some(spec) = crafting.get(item_id) else {
        return false;
    };
    crafting_level >= spec.level && materials_available(&spec.requirements, inventory)
}

/// Whether at least one bar in the table is smeltable right now, given the
/// player's smithing level and inventory.
pub fn can_smelt_any_bar(
    inventory: &Inventory,
    smithing_level: u32,
    bars: &BTreeMap<String, RecipeSpec>,
) -> bool {
    bars.values().any(|spec| {
        smithing_level >= spec.level && materials_available(&spec.requirements, inventory)
    })
}
