use thiserror::Error;

/// Errors raised while validating data tables. Action outcomes are never
/// errors: insufficient materials, failed rolls, and unknown resource ids
/// come back as flagged outcomes the caller is expected to handle.
#[derive(Debug, Error)]
pub enum SkillscapeError {
    /// Returned when constructing an experience table with no thresholds.
    #[error("experience table is empty")]
    EmptyExperienceTable,

    /// Returned when an experience threshold is lower than its predecessor.
    #[error("experience table decreases at index {index}")]
    ExperienceTableOrder { index: usize },

    /// Returned when a gather or gem probability falls outside `[0, 1]`.
    #[error("probability out of range for {id}: {value}")]
    ProbabilityOutOfRange { id: String, value: f64 },

    /// Returned when two achievements share a name.
    #[error("duplicate achievement name: {0}")]
    DuplicateAchievement(String),
}
