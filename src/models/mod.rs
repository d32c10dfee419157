mod class;
mod interaction;

pub use class::{FitnessClass, SessionKind};
pub use interaction::{Interaction, InteractionKind, InteractionTarget};

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for an activity category (e.g. "tennis")
///
/// Class tags and relation table entries are activity identifiers as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier for a bookable class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub u32);

impl Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A broad fitness category shown as a top-level tile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    /// Presentational only, never scored
    pub icon: String,
    /// Presentational only, never scored
    pub color: String,
}

/// A class paired with the score it was ranked by
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredClass<'a> {
    #[serde(flatten)]
    pub class: &'a FitnessClass,
    pub score: f64,
}
