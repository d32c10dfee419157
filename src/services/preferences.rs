use serde::Serialize;
use std::collections::HashMap;

use crate::{
    catalog::Catalog,
    error::RecsResult,
    models::{ActivityId, InteractionTarget},
    session::InteractionLog,
};

/// Weight of clicking an activity tile
const ACTIVITY_WEIGHT: f64 = 2.0;
/// Weight a class click gives its primary tag
const CLASS_PRIMARY_WEIGHT: f64 = 1.5;
/// Weight a class click gives each of its other tags
const CLASS_SECONDARY_WEIGHT: f64 = 0.5;

/// Per-category preference inferred from recent interactions
///
/// Categories that were never scored are absent and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PreferenceScores(HashMap<ActivityId, f64>);

impl PreferenceScores {
    pub fn get(&self, activity: &ActivityId) -> f64 {
        self.0.get(activity).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityId, f64)> {
        self.0.iter().map(|(id, &score)| (id, score))
    }

    fn add(&mut self, activity: &ActivityId, amount: f64) {
        *self.0.entry(activity.clone()).or_insert(0.0) += amount;
    }
}

/// Scores categories over the `window` most recent interactions
///
/// Entry `i` of an `n`-entry window (oldest first) is weighted `(i + 1) / n`,
/// so newer clicks count more.
pub fn preference_scores(
    log: &InteractionLog,
    catalog: &Catalog,
    window: usize,
) -> RecsResult<PreferenceScores> {
    let recent = log.recent(window);
    let n = recent.len() as f64;
    let mut scores = PreferenceScores::default();

    for (index, interaction) in recent.enumerate() {
        let weight = (index + 1) as f64 / n;

        match &interaction.target {
            InteractionTarget::Activity(activity) => {
                scores.add(activity, weight * ACTIVITY_WEIGHT);
            }
            InteractionTarget::Class(class_id) => {
                let class = catalog.class(*class_id)?;
                scores.add(&class.primary_tag, weight * CLASS_PRIMARY_WEIGHT);
                for tag in class.secondary_tags() {
                    scores.add(tag, weight * CLASS_SECONDARY_WEIGHT);
                }
            }
        }
    }

    Ok(scores)
}
