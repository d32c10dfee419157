use std::collections::HashMap;

use crate::models::ActivityId;

/// Static cross-category affinities
///
/// Relations are directed: tennis -> cardio does not imply cardio -> tennis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationTable {
    related: HashMap<ActivityId, Vec<ActivityId>>,
}

impl RelationTable {
    pub fn new(related: HashMap<ActivityId, Vec<ActivityId>>) -> Self {
        Self { related }
    }

    /// Related categories for `activity`, empty when it has no entry
    pub fn related_of(&self, activity: &ActivityId) -> &[ActivityId] {
        self.related
            .get(activity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&ActivityId, &Vec<ActivityId>)> {
        self.related.iter()
    }
}
