//! # Configuration Management Module
//!
//! Tuning knobs for the skilling engine, with type-safe serde structs,
//! sensible defaults, and validation. The engine performs no file I/O, so
//! configuration is parsed from a TOML string the host hands over; every
//! field is optional and falls back to its documented default.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [skilling]
//! base_mining_probability = 0.8
//! base_woodcutting_probability = 0.8
//! level_bonus_factor = 0.02
//! probability_cap = 0.95
//! gem_drop_chance = 0.00390625   # 1/256
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub skilling: SkillingConfig,
}

/// Probability tuning for the gather skills and the gem pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillingConfig {
    /// Base success probability for mining before the level bonus.
    #[serde(default = "default_base_probability")]
    pub base_mining_probability: f64,
    /// Base success probability for woodcutting before the level bonus.
    #[serde(default = "default_base_probability")]
    pub base_woodcutting_probability: f64,
    /// Success probability added per player level.
    #[serde(default = "default_level_bonus_factor")]
    pub level_bonus_factor: f64,
    /// Ceiling on the level-adjusted probability, applied before the
    /// resource's own factor.
    #[serde(default = "default_probability_cap")]
    pub probability_cap: f64,
    /// Chance that a successful mining action also rolls for a gem.
    #[serde(default = "default_gem_drop_chance")]
    pub gem_drop_chance: f64,
}

fn default_base_probability() -> f64 {
    0.8
}

fn default_level_bonus_factor() -> f64 {
    0.02
}

fn default_probability_cap() -> f64 {
    0.95
}

fn default_gem_drop_chance() -> f64 {
    1.0 / 256.0
}

impl Default for SkillingConfig {
    fn default() -> Self {
        Self {
            base_mining_probability: default_base_probability(),
            base_woodcutting_probability: default_base_probability(),
            level_bonus_factor: default_level_bonus_factor(),
            probability_cap: default_probability_cap(),
            gem_drop_chance: default_gem_drop_chance(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text, then validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is inside its legal range.
    pub fn validate(&self) -> Result<()> {
        let skilling = &self.skilling;
        for (name, value) in [
            ("base_mining_probability", skilling.base_mining_probability),
            (
                "base_woodcutting_probability",
                skilling.base_woodcutting_probability,
            ),
            ("probability_cap", skilling.probability_cap),
            ("gem_drop_chance", skilling.gem_drop_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow!("{name} must be within [0, 1], got {value}"));
            }
        }
        if !skilling.level_bonus_factor.is_finite() || skilling.level_bonus_factor < 0.0 {
            return Err(anyhow!(
                "level_bonus_factor must be a non-negative number, got {}",
                skilling.level_bonus_factor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let config = Config::default();
        assert_eq!(config.skilling.base_mining_probability, 0.8);
        assert_eq!(config.skilling.base_woodcutting_probability, 0.8);
        assert_eq!(config.skilling.level_bonus_factor, 0.02);
        assert_eq!(config.skilling.probability_cap, 0.95);
        assert_eq!(config.skilling.gem_drop_chance, 1.0 / 256.0);
        config.validate().expect("defaults validate");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml_str("").expect("empty config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_section_fills_remaining_defaults() {
        let config = Config::from_toml_str(
            r#"
            [skilling]
            gem_drop_chance = 0.5
            "#,
        )
        .expect("partial config");
        assert_eq!(config.skilling.gem_drop_chance, 0.5);
        assert_eq!(config.skilling.probability_cap, 0.95);
    }

    #[test]
    fn out_of_range_probability_rejected() {
        let err = Config::from_toml_str(
            r#"
            [skilling]
            probability_cap = 1.5
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("probability_cap"));
    }

    #[test]
    fn negative_bonus_factor_rejected() {
        let err = Config::from_toml_str(
            r#"
            [skilling]
            level_bonus_factor = -0.1
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("level_bonus_factor"));
    }
}
