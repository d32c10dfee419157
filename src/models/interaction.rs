use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::{ActivityId, ClassId};
use crate::error::RecsError;

/// What the user clicked on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Activity,
    Class,
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionKind::Activity => write!(f, "activity"),
            InteractionKind::Class => write!(f, "class"),
        }
    }
}

impl FromStr for InteractionKind {
    type Err = RecsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" => Ok(InteractionKind::Activity),
            "class" => Ok(InteractionKind::Class),
            other => Err(RecsError::InvalidInteractionKind(other.to_string())),
        }
    }
}

/// Catalog entry an interaction refers to, by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum InteractionTarget {
    Activity(ActivityId),
    Class(ClassId),
}

impl InteractionTarget {
    pub fn kind(&self) -> InteractionKind {
        match self {
            InteractionTarget::Activity(_) => InteractionKind::Activity,
            InteractionTarget::Class(_) => InteractionKind::Class,
        }
    }
}

/// A single recorded click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Millisecond timestamp, unique and strictly increasing within a session
    pub id: i64,
    pub target: InteractionTarget,
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        self.target.kind()
    }
}
