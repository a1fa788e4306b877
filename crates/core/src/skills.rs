//! Skill proficiency levels and developer availability values.
//!
//! Both are stored as lowercase text columns. Proficiency levels are
//! constrained in the schema; availability is free-form so that incomplete
//! profiles still load and fall through to the default scoring band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const LEVEL_BEGINNER: &str = "beginner";
pub const LEVEL_INTERMEDIATE: &str = "intermediate";
pub const LEVEL_ADVANCED: &str = "advanced";
pub const LEVEL_EXPERT: &str = "expert";

/// All valid proficiency level values, lowest first.
pub const VALID_LEVELS: &[&str] = &[
    LEVEL_BEGINNER,
    LEVEL_INTERMEDIATE,
    LEVEL_ADVANCED,
    LEVEL_EXPERT,
];

pub const AVAILABILITY_AVAILABLE: &str = "available";
pub const AVAILABILITY_BUSY: &str = "busy";
pub const AVAILABILITY_UNAVAILABLE: &str = "unavailable";

/// A skill as referenced by candidates and projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: DbId,
    pub label: String,
}

impl SkillRef {
    pub fn new(id: DbId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Ordered developer proficiency in a single skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => LEVEL_BEGINNER,
            Self::Intermediate => LEVEL_INTERMEDIATE,
            Self::Advanced => LEVEL_ADVANCED,
            Self::Expert => LEVEL_EXPERT,
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LEVEL_BEGINNER => Ok(Self::Beginner),
            LEVEL_INTERMEDIATE => Ok(Self::Intermediate),
            LEVEL_ADVANCED => Ok(Self::Advanced),
            LEVEL_EXPERT => Ok(Self::Expert),
            other => Err(CoreError::Validation(format!(
                "Invalid proficiency level '{other}'. Must be one of: {}",
                VALID_LEVELS.join(", ")
            ))),
        }
    }
}

/// Developer availability status.
///
/// Unknown values are preserved in [`Availability::Other`] instead of being
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
    Other(String),
}

impl Availability {
    /// Parse a stored availability value. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            AVAILABILITY_AVAILABLE => Self::Available,
            AVAILABILITY_BUSY => Self::Busy,
            AVAILABILITY_UNAVAILABLE => Self::Unavailable,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => AVAILABILITY_AVAILABLE,
            Self::Busy => AVAILABILITY_BUSY,
            Self::Unavailable => AVAILABILITY_UNAVAILABLE,
            Self::Other(raw) => raw,
        }
    }
}
