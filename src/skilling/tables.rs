//! Standard data tables: resources, gems, recipes, experience thresholds,
//! and the achievement list. Loaded once at process start and treated as
//! immutable by every other component.

use std::collections::{BTreeMap, BTreeSet};

use super::achievement::{AchievementCondition, AchievementRecord, ItemCategory};
use super::errors::SkillscapeError;
use super::leveling::ExperienceTable;
use super::types::{Difficulty, GatherSpec, GemSpec, RecipeSpec, Skill};

/// The full configuration the engine runs against. Callers build one with
/// [`GameTables::standard`] (or assemble a custom set for tests) and pass it
/// by reference into the appliers, the evaluator, and migration.
#[derive(Debug, Clone)]
pub struct GameTables {
    pub ores: BTreeMap<String, GatherSpec>,
    pub trees: BTreeMap<String, GatherSpec>,
    /// Ordered: the gem pick walks cumulative probabilities in this order.
    pub gems: Vec<GemSpec>,
    pub bars: BTreeMap<String, RecipeSpec>,
    pub crafting: BTreeMap<String, RecipeSpec>,
    pub experience: ExperienceTable,
    /// Ordered: the achievement scan reports names in this order.
    pub achievements: Vec<AchievementRecord>,
}

impl GameTables {
    pub fn standard() -> Self {
        Self {
            ores: standard_ores(),
            trees: standard_trees(),
            gems: standard_gems(),
            bars: standard_bars(),
            crafting: standard_crafting(),
            experience: standard_experience_table(),
            achievements: standard_achievements(),
        }
    }

    pub fn gem(&self, id: &str) -> Option<&GemSpec> {
        self.gems.iter().find(|gem| gem.id == id)
    }

    /// Sanity-check the tables: probabilities in range, thresholds
    /// non-decreasing, achievement names unique.
    pub fn validate(&self) -> Result<(), SkillscapeError> {
        for (id, spec) in self.ores.iter().chain(self.trees.iter()) {
            if !(0.0..=1.0).contains(&spec.probability) {
                return Err(SkillscapeError::ProbabilityOutOfRange {
                    id: id.clone(),
                    value: spec.probability,
                });
            }
        }
        for gem in &self.gems {
            if !(0.0..=1.0).contains(&gem.probability) {
                return Err(SkillscapeError::ProbabilityOutOfRange {
                    id: gem.id.clone(),
                    value: gem.probability,
                });
            }
        }
        for (index, pair) in self.experience.thresholds().windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(SkillscapeError::ExperienceTableOrder { index: index + 1 });
            }
        }
        if self.experience.is_empty() {
            return Err(SkillscapeError::EmptyExperienceTable);
        }
        let mut seen = BTreeSet::new();
        for achievement in &self.achievements {
            if !seen.insert(achievement.name.as_str()) {
                return Err(SkillscapeError::DuplicateAchievement(
                    achievement.name.clone(),
                ));
            }
        }
        Ok(())
    }
}

pub fn standard_ores() -> BTreeMap<String, GatherSpec> {
    [
        ("Rune essence", GatherSpec::new(1, 5.0, 0.95)),
        ("Clay", GatherSpec::new(1, 5.0, 0.90)),
        ("Copper ore", GatherSpec::new(1, 17.5, 0.85)),
        ("Tin ore", GatherSpec::new(1, 17.5, 0.85)),
        ("Iron ore", GatherSpec::new(15, 35.0, 0.80)),
        ("Silver ore", GatherSpec::new(20, 40.0, 0.75)),
        ("Coal", GatherSpec::new(30, 50.0, 0.70)),
        ("Gold ore", GatherSpec::new(40, 65.0, 0.65)),
        ("Mithril ore", GatherSpec::new(55, 80.0, 0.60)),
        ("Adamantite ore", GatherSpec::new(70, 95.0, 0.55)),
        ("Runite ore", GatherSpec::new(85, 125.0, 0.50)),
    ]
    .into_iter()
    .map(|(id, spec)| (id.to_string(), spec))
    .collect()
}

pub fn standard_trees() -> BTreeMap<String, GatherSpec> {
    [
        ("Tree", GatherSpec::new(1, 25.0, 0.90)),
        ("Oak", GatherSpec::new(15, 37.5, 0.85)),
        ("Willow", GatherSpec::new(30, 67.5, 0.80)),
        ("Teak", GatherSpec::new(35, 85.0, 0.75)),
        ("Maple", GatherSpec::new(45, 100.0, 0.70)),
        ("Mahogany", GatherSpec::new(50, 125.0, 0.65)),
        ("Yew", GatherSpec::new(60, 175.0, 0.60)),
        ("Magic", GatherSpec::new(75, 250.0, 0.55)),
        ("Redwood", GatherSpec::new(90, 380.0, 0.50)),
    ]
    .into_iter()
    .map(|(id, spec)| (id.to_string(), spec))
    .collect()
}

pub fn standard_gems() -> Vec<GemSpec> {
    vec![
        GemSpec::new("Uncut sapphire", 1.0 / 4.0, 50.0),
        GemSpec::new("Uncut emerald", 1.0 / 8.0, 67.5),
        GemSpec::new("Uncut ruby", 1.0 / 16.0, 85.0),
        GemSpec::new("Uncut diamond", 1.0 / 64.0, 107.5),
    ]
}

pub fn standard_bars() -> BTreeMap<String, RecipeSpec> {
    [
        (
            "Bronze bar",
            RecipeSpec::new(1, 6.2)
                .with_material("Copper ore", 1)
                .with_material("Tin ore", 1),
        ),
        ("Iron bar", RecipeSpec::new(15, 12.5).with_material("Iron ore", 1)),
        (
            "Silver bar",
            RecipeSpec::new(20, 13.67).with_material("Silver ore", 1),
        ),
        (
            "Steel bar",
            RecipeSpec::new(30, 17.5)
                .with_material("Iron ore", 1)
                .with_material("Coal", 2),
        ),
        ("Gold bar", RecipeSpec::new(40, 22.5).with_material("Gold ore", 1)),
        (
            "Mithril bar",
            RecipeSpec::new(50, 30.0)
                .with_material("Mithril ore", 1)
                .with_material("Coal", 4),
        ),
        (
            "Adamantite bar",
            RecipeSpec::new(70, 37.5)
                .with_material("Adamantite ore", 1)
                .with_material("Coal", 6),
        ),
        (
            "Runite bar",
            RecipeSpec::new(85, 50.0)
                .with_material("Runite ore", 1)
                .with_material("Coal", 8),
        ),
    ]
    .into_iter()
    .map(|(id, spec)| (id.to_string(), spec))
    .collect()
}

pub fn standard_crafting() -> BTreeMap<String, RecipeSpec> {
    [
        ("None", RecipeSpec::new(1, 0.0)),
        ("Soft clay", RecipeSpec::new(1, 0.0).with_material("Clay", 1)),
        (
            "Unfired pot",
            RecipeSpec::new(1, 6.3).with_material("Soft clay", 1),
        ),
        ("Pot", RecipeSpec::new(1, 6.3).with_material("Unfired pot", 1)),
        (
            "Pie dish",
            RecipeSpec::new(1, 10.0).with_material("Unfired pie dish", 1),
        ),
        ("Bowl", RecipeSpec::new(1, 15.0).with_material("Unfired bowl", 1)),
        (
            "Gold ring",
            RecipeSpec::new(5, 15.0).with_material("Gold bar", 1),
        ),
        (
            "Gold necklace",
            RecipeSpec::new(6, 20.0).with_material("Gold bar", 1),
        ),
        (
            "Unfired pie dish",
            RecipeSpec::new(7, 15.0).with_material("Soft clay", 1),
        ),
        (
            "Unfired bowl",
            RecipeSpec::new(8, 18.0).with_material("Soft clay", 1),
        ),
        (
            "Unstrung symbol",
            RecipeSpec::new(16, 50.0).with_material("Silver bar", 1),
        ),
        (
            "Sapphire ring",
            RecipeSpec::new(20, 40.0)
                .with_material("Gold bar", 1)
                .with_material("Sapphire", 1),
        ),
        (
            "Sapphire",
            RecipeSpec::new(20, 50.0).with_material("Uncut sapphire", 1),
        ),
        (
            "Sapphire necklace",
            RecipeSpec::new(22, 60.0)
                .with_material("Gold bar", 1)
                .with_material("Sapphire", 1),
        ),
        (
            "Tiara",
            RecipeSpec::new(23, 52.5).with_material("Silver bar", 1),
        ),
        (
            "Emerald",
            RecipeSpec::new(27, 67.5).with_material("Uncut emerald", 1),
        ),
        (
            "Emerald ring",
            RecipeSpec::new(27, 55.0)
                .with_material("Gold bar", 1)
                .with_material("Emerald", 1),
        ),
        (
            "Emerald necklace",
            RecipeSpec::new(29, 60.0)
                .with_material("Gold bar", 1)
                .with_material("Emerald", 1),
        ),
        (
            "Ruby ring",
            RecipeSpec::new(34, 70.0)
                .with_material("Gold bar", 1)
                .with_material("Ruby", 1),
        ),
        (
            "Ruby",
            RecipeSpec::new(34, 85.0).with_material("Uncut ruby", 1),
        ),
        (
            "Ruby necklace",
            RecipeSpec::new(40, 75.0)
                .with_material("Gold bar", 1)
                .with_material("Ruby", 1),
        ),
        (
            "Diamond ring",
            RecipeSpec::new(43, 85.0)
                .with_material("Gold bar", 1)
                .with_material("Diamond", 1),
        ),
        (
            "Diamond",
            RecipeSpec::new(43, 107.5).with_material("Uncut diamond", 1),
        ),
        (
            "Diamond necklace",
            RecipeSpec::new(56, 90.0)
                .with_material("Gold bar", 1)
                .with_material("Diamond", 1),
        ),
    ]
    .into_iter()
    .map(|(id, spec)| (id.to_string(), spec))
    .collect()
}

pub fn standard_experience_table() -> ExperienceTable {
    ExperienceTable::from_thresholds(vec![
        0, 83, 174, 276, 388, 512, 650, 801, 969, 1154, 1358, 1584, 1833, 2107, 2411, 2746, 3115,
        3523, 3973, 4470, 5018, 5624, 6291, 7028, 7842, 8740, 9730, 10824, 12031, 13363, 14833,
        16456, 18247, 20224, 22406, 24815, 27473, 30408, 33648, 37224, 41171, 45529, 50339, 55649,
        61512, 67983, 75127, 83014, 91721, 101333, 111945, 123660, 136594, 150872, 166636, 184040,
        203254, 224466, 247886, 273742, 302288, 333804, 368599, 407015, 449428, 496254, 547953,
        605032, 668051, 737627, 814445, 899257, 992895, 1096278, 1210421, 1336443, 1475581,
        1629200, 1798808, 1986068, 2192818, 2421087, 2673114, 2951373, 3258594, 3597792, 3972294,
        4385776, 4842295, 5346332, 5902831, 6517253, 7195629, 7944614, 8771558, 9684577, 10692629,
        11805606, 13034431,
    ])
}

pub fn standard_achievements() -> Vec<AchievementRecord> {
    use AchievementCondition::*;
    use Difficulty::*;
    use ItemCategory::*;

    let mut achievements = Vec::new();

    // Mining
    achievements.push(AchievementRecord::new(
        "First Steps",
        "Mine your first ore",
        Easy,
        CategoryAny { category: Ore },
    ));
    achievements.push(AchievementRecord::new(
        "Novice Miner",
        "Reach Mining level 10",
        Easy,
        SkillLevel {
            skill: Skill::Mining,
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ore Collector",
        "Collect 100 total ores",
        Easy,
        CategoryTotal {
            category: Ore,
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Jack of All Ores",
        "Mine at least one of each ore type",
        Easy,
        CategoryEach {
            category: Ore,
            required: 1,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Rune Essence Enthusiast",
        "Mine 500 Rune Essence",
        Easy,
        ItemCount {
            item: "Rune essence".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Clay Modeler",
        "Mine 500 Clay",
        Easy,
        ItemCount {
            item: "Clay".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Copper Collector",
        "Mine 250 Copper ore",
        Easy,
        ItemCount {
            item: "Copper ore".to_string(),
            required: 250,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Tin Trader",
        "Mine 250 Tin ore",
        Easy,
        ItemCount {
            item: "Tin ore".to_string(),
            required: 250,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Iron Initiate",
        "Mine 100 Iron ore",
        Easy,
        ItemCount {
            item: "Iron ore".to_string(),
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Silver Seeker",
        "Mine 50 Silver ore",
        Easy,
        ItemCount {
            item: "Silver ore".to_string(),
            required: 50,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Intermediate Miner",
        "Reach Mining level 30",
        Moderate,
        SkillLevel {
            skill: Skill::Mining,
            required: 30,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ore Hoarder",
        "Collect 1,000 total ores",
        Moderate,
        CategoryTotal {
            category: Ore,
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Coal Connoisseur",
        "Mine 500 Coal",
        Moderate,
        ItemCount {
            item: "Coal".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Golden Touch",
        "Mine 100 Gold ore",
        Moderate,
        ItemCount {
            item: "Gold ore".to_string(),
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Mithril Mastery",
        "Mine 250 Mithril ore",
        Moderate,
        ItemCount {
            item: "Mithril ore".to_string(),
            required: 250,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Adamantite Adept",
        "Mine 100 Adamantite ore",
        Moderate,
        ItemCount {
            item: "Adamantite ore".to_string(),
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Runite Rookie",
        "Mine 50 Runite ore",
        Moderate,
        ItemCount {
            item: "Runite ore".to_string(),
            required: 50,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Diverse Miner",
        "Mine 100 of each ore type",
        Moderate,
        CategoryEach {
            category: Ore,
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "XP Chaser",
        "Gain 100,000 total Mining experience",
        Moderate,
        SkillExperience {
            skill: Skill::Mining,
            required: 100_000.0,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Expert Miner",
        "Reach Mining level 60",
        Difficult,
        SkillLevel {
            skill: Skill::Mining,
            required: 60,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ore Magnate",
        "Collect 10,000 total ores",
        Difficult,
        CategoryTotal {
            category: Ore,
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Rune Essence Baron",
        "Mine 10,000 Rune Essence",
        Difficult,
        ItemCount {
            item: "Rune essence".to_string(),
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Clay Empire",
        "Mine 10,000 Clay",
        Difficult,
        ItemCount {
            item: "Clay".to_string(),
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Copper King",
        "Mine 5,000 Copper ore",
        Difficult,
        ItemCount {
            item: "Copper ore".to_string(),
            required: 5000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Tin Tycoon",
        "Mine 5,000 Tin ore",
        Difficult,
        ItemCount {
            item: "Tin ore".to_string(),
            required: 5000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Iron Imperator",
        "Mine 2,500 Iron ore",
        Difficult,
        ItemCount {
            item: "Iron ore".to_string(),
            required: 2500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Silver Sovereign",
        "Mine 1,000 Silver ore",
        Difficult,
        ItemCount {
            item: "Silver ore".to_string(),
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Coal Commander",
        "Mine 5,000 Coal",
        Difficult,
        ItemCount {
            item: "Coal".to_string(),
            required: 5000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Golden Empire",
        "Mine 1,000 Gold ore",
        Difficult,
        ItemCount {
            item: "Gold ore".to_string(),
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Master Miner",
        "Reach Mining level 99",
        VeryChallenging,
        SkillLevel {
            skill: Skill::Mining,
            required: 99,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ore Tycoon",
        "Collect 100,000 total ores",
        VeryChallenging,
        CategoryTotal {
            category: Ore,
            required: 100_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Mithril Monarch",
        "Mine 10,000 Mithril ore",
        VeryChallenging,
        ItemCount {
            item: "Mithril ore".to_string(),
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Adamantite Overlord",
        "Mine 5,000 Adamantite ore",
        VeryChallenging,
        ItemCount {
            item: "Adamantite ore".to_string(),
            required: 5000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Runite Ruler",
        "Mine 2,500 Runite ore",
        VeryChallenging,
        ItemCount {
            item: "Runite ore".to_string(),
            required: 2500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ore Completionist",
        "Mine 10,000 of each ore type",
        VeryChallenging,
        CategoryEach {
            category: Ore,
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "XP Master",
        "Gain 1,000,000 total Mining experience",
        VeryChallenging,
        SkillExperience {
            skill: Skill::Mining,
            required: 1_000_000.0,
        },
    ));

    // Woodcutting
    achievements.push(AchievementRecord::new(
        "First Chop",
        "Cut your first log",
        Easy,
        CategoryAny { category: Log },
    ));
    achievements.push(AchievementRecord::new(
        "Novice Woodcutter",
        "Reach Woodcutting level 10",
        Easy,
        SkillLevel {
            skill: Skill::Woodcutting,
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Log Collector",
        "Collect 100 total logs",
        Easy,
        CategoryTotal {
            category: Log,
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Jack of All Trees",
        "Cut at least one log from each tree type",
        Easy,
        CategoryEach {
            category: Log,
            required: 1,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Oak Enthusiast",
        "Cut 500 Oak logs",
        Easy,
        ItemCount {
            item: "Oak".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Willow Whisperer",
        "Cut 500 Willow logs",
        Easy,
        ItemCount {
            item: "Willow".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Intermediate Woodcutter",
        "Reach Woodcutting level 30",
        Moderate,
        SkillLevel {
            skill: Skill::Woodcutting,
            required: 30,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Log Hoarder",
        "Collect 1,000 total logs",
        Moderate,
        CategoryTotal {
            category: Log,
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Maple Master",
        "Cut 500 Maple logs",
        Moderate,
        ItemCount {
            item: "Maple".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Yew Yeoman",
        "Cut 250 Yew logs",
        Moderate,
        ItemCount {
            item: "Yew".to_string(),
            required: 250,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Expert Woodcutter",
        "Reach Woodcutting level 60",
        Difficult,
        SkillLevel {
            skill: Skill::Woodcutting,
            required: 60,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Log Magnate",
        "Collect 10,000 total logs",
        Difficult,
        CategoryTotal {
            category: Log,
            required: 10_000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Magic Logger",
        "Cut 1,000 Magic logs",
        Difficult,
        ItemCount {
            item: "Magic".to_string(),
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Master Woodcutter",
        "Reach Woodcutting level 99",
        VeryChallenging,
        SkillLevel {
            skill: Skill::Woodcutting,
            required: 99,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Redwood Ruler",
        "Cut 2,500 Redwood logs",
        VeryChallenging,
        ItemCount {
            item: "Redwood".to_string(),
            required: 2500,
        },
    ));

    // Combined
    achievements.push(AchievementRecord::new(
        "Jack of Two Trades",
        "Reach level 50 in both Mining and Woodcutting",
        Moderate,
        AllOf {
            conditions: vec![
                SkillLevel {
                    skill: Skill::Mining,
                    required: 50,
                },
                SkillLevel {
                    skill: Skill::Woodcutting,
                    required: 50,
                },
            ],
        },
    ));
    achievements.push(AchievementRecord::new(
        "Resource Baron",
        "Collect 10,000 total ores and 10,000 total logs",
        Difficult,
        AllOf {
            conditions: vec![
                CategoryTotal {
                    category: Ore,
                    required: 10_000,
                },
                CategoryTotal {
                    category: Log,
                    required: 10_000,
                },
            ],
        },
    ));
    achievements.push(AchievementRecord::new(
        "Skilling Prodigy",
        "Reach level 80 in both Mining and Woodcutting",
        VeryChallenging,
        AllOf {
            conditions: vec![
                SkillLevel {
                    skill: Skill::Mining,
                    required: 80,
                },
                SkillLevel {
                    skill: Skill::Woodcutting,
                    required: 80,
                },
            ],
        },
    ));
    achievements.push(AchievementRecord::new(
        "Master of Resources",
        "Reach level 99 in both Mining and Woodcutting",
        VeryChallenging,
        AllOf {
            conditions: vec![
                SkillLevel {
                    skill: Skill::Mining,
                    required: 99,
                },
                SkillLevel {
                    skill: Skill::Woodcutting,
                    required: 99,
                },
            ],
        },
    ));
    achievements.push(AchievementRecord::new(
        "Living Legend",
        "Complete all other achievements",
        VeryChallenging,
        AllOtherAchievements,
    ));

    // Gems
    achievements.push(AchievementRecord::new(
        "Gem Finder",
        "Mine your first gem",
        Easy,
        CategoryAny { category: Gem },
    ));
    achievements.push(AchievementRecord::new(
        "Sapphire Collector",
        "Mine 10 uncut sapphires",
        Moderate,
        ItemCount {
            item: "Uncut sapphire".to_string(),
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Emerald Hunter",
        "Mine 10 uncut emeralds",
        Moderate,
        ItemCount {
            item: "Uncut emerald".to_string(),
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Ruby Seeker",
        "Mine 10 uncut rubies",
        Difficult,
        ItemCount {
            item: "Uncut ruby".to_string(),
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Diamond Prospector",
        "Mine 10 uncut diamonds",
        VeryChallenging,
        ItemCount {
            item: "Uncut diamond".to_string(),
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Gem Master",
        "Mine 100 gems in total",
        VeryChallenging,
        CategoryTotal {
            category: Gem,
            required: 100,
        },
    ));

    // Smithing
    achievements.push(AchievementRecord::new(
        "Novice Smith",
        "Smelt your first bar",
        Easy,
        CategoryAny { category: Bar },
    ));
    achievements.push(AchievementRecord::new(
        "Bronze Master",
        "Smelt 100 Bronze bars",
        Easy,
        ItemCount {
            item: "Bronze bar".to_string(),
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Iron Forger",
        "Smelt 500 Iron bars",
        Moderate,
        ItemCount {
            item: "Iron bar".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Steel Specialist",
        "Smelt 1000 Steel bars",
        Moderate,
        ItemCount {
            item: "Steel bar".to_string(),
            required: 1000,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Mithril Maestro",
        "Smelt 500 Mithril bars",
        Difficult,
        ItemCount {
            item: "Mithril bar".to_string(),
            required: 500,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Adamantite Artisan",
        "Smelt 250 Adamantite bars",
        VeryChallenging,
        ItemCount {
            item: "Adamantite bar".to_string(),
            required: 250,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Runite Refiner",
        "Smelt 100 Runite bars",
        VeryChallenging,
        ItemCount {
            item: "Runite bar".to_string(),
            required: 100,
        },
    ));

    // Crafting
    achievements.push(AchievementRecord::new(
        "Novice Crafter",
        "Reach level 2 in Crafting",
        Easy,
        SkillLevel {
            skill: Skill::Crafting,
            required: 2,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Pottery Apprentice",
        "Craft 100 pots",
        Easy,
        ItemCount {
            item: "Pot".to_string(),
            required: 100,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Jewelry Novice",
        "Craft 50 gold rings",
        Moderate,
        ItemCount {
            item: "Gold ring".to_string(),
            required: 50,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Gem Cutter",
        "Cut 10 of each gem type",
        Difficult,
        EachOfItems {
            items: vec![
                "Sapphire".to_string(),
                "Emerald".to_string(),
                "Ruby".to_string(),
                "Diamond".to_string(),
            ],
            required: 10,
        },
    ));
    achievements.push(AchievementRecord::new(
        "Master Crafter",
        "Reach Crafting level 99",
        VeryChallenging,
        SkillLevel {
            skill: Skill::Crafting,
            required: 99,
        },
    ));

    achievements
}
