//! Core types for the practice scheduler.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Recall quality for a completed review, graded 1 (blackout) to 5 (perfect).
///
/// Construction validates the range; out-of-range grades are rejected, never
/// clamped, so a bad value from a caller cannot skew the scheduling curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw grade.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidScore { value })
        }
    }

    /// Numeric value (1-5).
    pub fn value(self) -> u8 {
        self.0
    }

    /// A score below 3 is a lapse; 3 and above is a success.
    pub fn is_lapse(self) -> bool {
        self.0 < 3
    }
}

impl TryFrom<u8> for Score {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

/// Concept category a question belongs to.
///
/// Closed enumeration shared by the selector and the preferences provider.
/// Deserialization is fail-open: an unmapped name lands in `Other` rather
/// than failing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Category {
    Algorithms,
    DataStructures,
    SystemDesign,
    Networking,
    Databases,
    OperatingSystems,
    Concurrency,
    Security,
    Other,
}

impl Category {
    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Algorithms => "algorithms",
            Self::DataStructures => "data_structures",
            Self::SystemDesign => "system_design",
            Self::Networking => "networking",
            Self::Databases => "databases",
            Self::OperatingSystems => "operating_systems",
            Self::Concurrency => "concurrency",
            Self::Security => "security",
            Self::Other => "other",
        }
    }

    /// Parse from a category name. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "algorithms" => Self::Algorithms,
            "data_structures" => Self::DataStructures,
            "system_design" => Self::SystemDesign,
            "networking" => Self::Networking,
            "databases" => Self::Databases,
            "operating_systems" => Self::OperatingSystems,
            "concurrency" => Self::Concurrency,
            "security" => Self::Security,
            _ => Self::Other,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Difficulty tier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Intro,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Intro
    }
}

/// Spaced-repetition state for one question.
///
/// Immutable value type: the scheduler returns a new schedule rather than
/// mutating in place, leaving durability to the surrounding store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSchedule {
    /// Opaque question identifier, owned externally.
    pub question_id: String,
    /// The card is due once `now >= next_review`.
    pub next_review: DateTime<Utc>,
    /// Interval growth multiplier. Never drops below 1.3.
    pub ease_factor: f64,
    /// Days until the next review. Never exceeds 365.
    pub interval_days: u32,
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
}

impl CardSchedule {
    /// Fresh schedule for a question that has never been reviewed:
    /// due immediately, with the default ease factor.
    pub fn new(question_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            question_id: question_id.into(),
            next_review: now,
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

/// A completed review: the unit of work the scheduler consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub question_id: String,
    pub score: Score,
    pub timestamp: DateTime<Utc>,
}

/// Ranked category preferences used by the due-card selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Priority order, first entry is highest.
    pub preferred_categories: Vec<Category>,
    /// Per-category difficulty tier.
    pub preferred_difficulties: HashMap<Category, Difficulty>,
}
