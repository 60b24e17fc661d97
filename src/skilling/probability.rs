//! Success-probability model for gather actions.
//!
//! One formula backs both mining and woodcutting:
//! `min(base + level * bonus_factor, cap) * resource_probability`. Smithing
//! and crafting are material-gated and never touch this module.

use crate::config::SkillingConfig;

use super::types::GemSpec;

/// Compute a gather action's success probability from the player's level
/// and the resource's own probability factor. Pure arithmetic; callers
/// supply non-negative finite inputs.
pub fn success_probability(
    player_level: u32,
    base_probability: f64,
    level_bonus_factor: f64,
    resource_probability: f64,
    cap: f64,
) -> f64 {
    let level_bonus = player_level as f64 * level_bonus_factor;
    (base_probability + level_bonus).min(cap) * resource_probability
}

/// Mining probability under the configured tuning constants.
pub fn mining_success_probability(
    config: &SkillingConfig,
    player_level: u32,
    ore_probability: f64,
) -> f64 {
    success_probability(
        player_level,
        config.base_mining_probability,
        config.level_bonus_factor,
        ore_probability,
        config.probability_cap,
    )
}

/// Woodcutting probability under the configured tuning constants.
pub fn woodcutting_success_probability(
    config: &SkillingConfig,
    player_level: u32,
    tree_probability: f64,
) -> f64 {
    success_probability(
        player_level,
        config.base_woodcutting_probability,
        config.level_bonus_factor,
        tree_probability,
        config.probability_cap,
    )
}

/// Select a gem by cumulative-probability walk over the table in its
/// declared order. Returns `None` when `draw` exceeds the table's total
/// probability mass (the table need not sum to 1).
pub fn pick_gem(gems: &[GemSpec], draw: f64) -> Option<&GemSpec> {
    let mut cumulative = 0.0;
    for gem in gems {
        cumulative += gem.probability;
        if draw < cumulative {
            return Some(gem);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_without_cap() {
        // base 0.8, no level bonus, resource 0.5
        let p = success_probability(0, 0.8, 0.02, 0.5, 0.95);
        assert!((p - 0.4).abs() < 1e-12);
    }

    #[test]
    fn formula_hits_cap() {
        // 0.8 + 10 * 0.02 = 1.0, capped to 0.95, then * 0.5
        let p = success_probability(10, 0.8, 0.02, 0.5, 0.95);
        assert!((p - 0.475).abs() < 1e-12);
    }

    fn test_gems() -> Vec<GemSpec> {
        vec![
            GemSpec::new("Sapphire", 0.5, 50.0),
            GemSpec::new("Emerald", 0.3, 67.5),
            GemSpec::new("Ruby", 0.2, 85.0),
        ]
    }

    #[test]
    fn pick_gem_walks_cumulative_ranges() {
        let gems = test_gems();
        assert_eq!(pick_gem(&gems, 0.2).map(|g| g.id.as_str()), Some("Sapphire"));
        assert_eq!(pick_gem(&gems, 0.6).map(|g| g.id.as_str()), Some("Emerald"));
        assert_eq!(pick_gem(&gems, 0.85).map(|g| g.id.as_str()), Some("Ruby"));
        assert_eq!(pick_gem(&gems, 0.99).map(|g| g.id.as_str()), Some("Ruby"));
    }

    #[test]
    fn pick_gem_returns_none_past_total_mass() {
        let partial = vec![
            GemSpec::new("Sapphire", 0.4, 50.0),
            GemSpec::new("Emerald", 0.4, 67.5),
        ];
        assert!(pick_gem(&partial, 0.9).is_none());
        assert!(pick_gem(&[], 0.0).is_none());
    }
}
