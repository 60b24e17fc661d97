use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The four trainable skills.
///
/// Gather skills (mining, woodcutting) are probability-gated; production
/// skills (smithing, crafting) are material-gated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Mining,
    Woodcutting,
    Smithing,
    Crafting,
}

impl Skill {
    pub const ALL: [Skill; 4] = [
        Skill::Mining,
        Skill::Woodcutting,
        Skill::Smithing,
        Skill::Crafting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::Mining => "Mining",
            Skill::Woodcutting => "Woodcutting",
            Skill::Smithing => "Smithing",
            Skill::Crafting => "Crafting",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Achievement difficulty tiers, in ascending order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    VeryChallenging,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
            Difficulty::VeryChallenging => "Very Challenging",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item counts keyed by item id. An absent entry is equivalent to a zero
/// count, and no entry can ever go negative: the only way to deduct is
/// [`Inventory::deduct`], which refuses to overdraw.
///
/// Backed by a `BTreeMap` so serialized output is deterministic, which is
/// what makes state migration byte-for-byte idempotent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, u64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `item`; zero when absent.
    pub fn count(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn has_at_least(&self, item: &str, required: u64) -> bool {
        self.count(item) >= required
    }

    /// Add `quantity` units of `item`.
    pub fn grant(&mut self, item: &str, quantity: u64) {
        *self.items.entry(item.to_string()).or_insert(0) += quantity;
    }

    /// Remove `quantity` units of `item`. Returns false (and leaves the
    /// inventory untouched) when fewer than `quantity` are held.
    pub fn deduct(&mut self, item: &str, quantity: u64) -> bool {
        match self.items.get_mut(item) {
            Some(count) if *count >= quantity => {
                *count -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Make sure `item` has an explicit entry, inserting a zero count if
    /// absent. Used by migration to seed the ore slots a fresh state shows.
    pub fn ensure_entry(&mut self, item: &str) {
        self.items.entry(item.to_string()).or_insert(0);
    }

    /// Sum of counts across the given item ids.
    pub fn total_of<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> u64 {
        items.into_iter().map(|item| self.count(item)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, u64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Spec for a probability-gated resource: an ore or a tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatherSpec {
    /// Skill level required before the resource can be worked at all.
    pub level: u32,
    /// Experience granted per successful action.
    pub experience: f64,
    /// Resource-specific probability factor; multiplied into the
    /// level-derived success probability.
    pub probability: f64,
}

impl GatherSpec {
    pub fn new(level: u32, experience: f64, probability: f64) -> Self {
        Self {
            level,
            experience,
            probability,
        }
    }
}

/// Spec for a material-gated product: a smelted bar or a crafted item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSpec {
    /// Skill level required; enforced by the caller, not the applier.
    pub level: u32,
    /// Experience granted per completed action.
    pub experience: f64,
    /// Required input items and amounts, all consumed on success.
    pub requirements: BTreeMap<String, u64>,
}

impl RecipeSpec {
    pub fn new(level: u32, experience: f64) -> Self {
        Self {
            level,
            experience,
            requirements: BTreeMap::new(),
        }
    }

    pub fn with_material(mut self, item: &str, amount: u64) -> Self {
        self.requirements.insert(item.to_string(), amount);
        self
    }
}

/// One entry in the ordered gem drop table. Probabilities across the table
/// need not sum to 1; the remaining mass means "no gem".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GemSpec {
    pub id: String,
    pub probability: f64,
    pub experience: f64,
}

impl GemSpec {
    pub fn new(id: &str, probability: f64, experience: f64) -> Self {
        Self {
            id: id.to_string(),
            probability,
            experience,
        }
    }
}

/// Complete per-player progression state. This is the document the storage
/// collaborator persists verbatim; [`crate::skilling::migration::migrate`]
/// normalizes any older shape into it on load.
///
/// Invariants: levels stay within `1..=99`; a skill's level is always the
/// highest level whose experience threshold is met; `completed_achievements`
/// only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerState {
    pub config_version: u32,
    pub mining_level: u32,
    pub woodcutting_level: u32,
    pub smithing_level: u32,
    pub crafting_level: u32,
    pub mining_exp: f64,
    pub woodcutting_exp: f64,
    pub smithing_exp: f64,
    pub crafting_exp: f64,
    /// Resource currently selected for each action kind.
    pub current_ore: String,
    pub current_tree: String,
    pub current_bar: String,
    pub current_craft: String,
    pub inventory: Inventory,
    /// Legacy progress-bar field; carried through migration untouched.
    #[serde(default)]
    pub progress_to_next: f64,
    pub completed_achievements: BTreeSet<String>,
}

impl PlayerState {
    pub fn level(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Mining => self.mining_level,
            Skill::Woodcutting => self.woodcutting_level,
            Skill::Smithing => self.smithing_level,
            Skill::Crafting => self.crafting_level,
        }
    }

    pub fn set_level(&mut self, skill: Skill, level: u32) {
        match skill {
            Skill::Mining => self.mining_level = level,
            Skill::Woodcutting => self.woodcutting_level = level,
            Skill::Smithing => self.smithing_level = level,
            Skill::Crafting => self.crafting_level = level,
        }
    }

    pub fn experience(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Mining => self.mining_exp,
            Skill::Woodcutting => self.woodcutting_exp,
            Skill::Smithing => self.smithing_exp,
            Skill::Crafting => self.crafting_exp,
        }
    }

    pub fn add_experience(&mut self, skill: Skill, amount: f64) {
        match skill {
            Skill::Mining => self.mining_exp += amount,
            Skill::Woodcutting => self.woodcutting_exp += amount,
            Skill::Smithing => self.smithing_exp += amount,
            Skill::Crafting => self.crafting_exp += amount,
        }
    }
}

/// Outcome of a woodcutting, smelting, or crafting action. On failure the
/// inventory is an untouched copy of the input, experience is zero, and
/// `success` is false -- failures are expected branches, not errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub inventory: Inventory,
    pub experience: f64,
    pub success: bool,
}

impl ActionOutcome {
    pub(crate) fn failed(inventory: &Inventory) -> Self {
        Self {
            inventory: inventory.clone(),
            experience: 0.0,
            success: false,
        }
    }
}

/// Outcome of a mining action; identical to [`ActionOutcome`] plus the
/// optional gem awarded on top of the ore.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningOutcome {
    pub inventory: Inventory,
    pub experience: f64,
    pub success: bool,
    pub gem: Option<String>,
}

impl MiningOutcome {
    pub(crate) fn failed(inventory: &Inventory) -> Self {
        Self {
            inventory: inventory.clone(),
            experience: 0.0,
            success: false,
            gem: None,
        }
    }
}

/// Caller-supplied draws for the gem roll that may follow a successful
/// mining action. Both draws are in `[0, 1)`: `chance` decides whether a gem
/// drops at all, `pick` selects which one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GemDraws {
    pub chance: f64,
    pub pick: f64,
}
