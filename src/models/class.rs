use serde::{Deserialize, Serialize};

use super::{ActivityId, ClassId};

/// Whether a class is taught to a group or one-on-one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Group,
    Private,
}

/// A concrete bookable class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessClass {
    pub id: ClassId,
    pub name: String,
    pub session_kind: SessionKind,
    pub duration_minutes: u32,
    /// Activity categories this class belongs to; always contains `primary_tag`
    pub tags: Vec<ActivityId>,
    pub primary_tag: ActivityId,
    pub description: String,
    pub instructor: String,
}

impl FitnessClass {
    pub fn has_tag(&self, tag: &ActivityId) -> bool {
        self.tags.contains(tag)
    }

    /// Tags other than the primary one, in declaration order
    pub fn secondary_tags(&self) -> impl Iterator<Item = &ActivityId> {
        self.tags.iter().filter(move |tag| **tag != self.primary_tag)
    }
}
