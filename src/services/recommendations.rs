use crate::{
    catalog::{Catalog, RelationTable},
    error::RecsResult,
    models::{ActivityId, FitnessClass, ScoredClass},
    services::preferences::PreferenceScores,
};

/// Multiplier on the user's preference for a class's primary tag
const PRIMARY_TAG_MULTIPLIER: f64 = 3.0;

const SAME_PRIMARY_BONUS: f64 = 10.0;
const SHARED_SECONDARY_BONUS: f64 = 3.0;
const RELATED_ACTIVITY_BONUS: f64 = 2.0;

/// Keeps positive scores, highest first, at most `limit` entries
///
/// The sort is stable, so equal scores stay in catalog order.
fn top_ranked(mut scored: Vec<ScoredClass<'_>>, limit: usize) -> Vec<ScoredClass<'_>> {
    scored.retain(|entry| entry.score > 0.0);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Ranks the catalog against the user's category preferences
///
/// Each class scores three times the preference for its primary tag plus
/// the preference for each of its other tags.
pub fn personalized<'a>(
    catalog: &'a Catalog,
    preferences: &PreferenceScores,
    limit: usize,
) -> Vec<ScoredClass<'a>> {
    if preferences.is_empty() {
        return Vec::new();
    }

    let scored = catalog
        .classes()
        .iter()
        .map(|class| {
            let secondary: f64 = class
                .secondary_tags()
                .map(|tag| preferences.get(tag))
                .sum();
            ScoredClass {
                class,
                score: PRIMARY_TAG_MULTIPLIER * preferences.get(&class.primary_tag) + secondary,
            }
        })
        .collect();

    let ranked = top_ranked(scored, limit);
    tracing::debug!(count = ranked.len(), "Personalized recommendations computed");
    ranked
}

/// Classes whose primary tag is `activity`, in catalog order
pub fn exact_matches<'a>(
    catalog: &'a Catalog,
    activity: &ActivityId,
) -> RecsResult<Vec<&'a FitnessClass>> {
    catalog.activity(activity)?;

    Ok(catalog
        .classes()
        .iter()
        .filter(|class| class.primary_tag == *activity)
        .collect())
}

/// Classes similar to `selected`, never including it
pub fn related_classes<'a>(
    catalog: &'a Catalog,
    relations: &RelationTable,
    selected: &FitnessClass,
    limit: usize,
) -> Vec<ScoredClass<'a>> {
    let related_activities = relations.related_of(&selected.primary_tag);

    let scored = catalog
        .classes()
        .iter()
        .filter(|class| class.id != selected.id)
        .map(|class| {
            let mut score = 0.0;

            if class.primary_tag == selected.primary_tag {
                score += SAME_PRIMARY_BONUS;
            }

            score += selected
                .secondary_tags()
                .filter(|tag| class.has_tag(tag))
                .count() as f64
                * SHARED_SECONDARY_BONUS;

            score += related_activities
                .iter()
                .filter(|tag| class.has_tag(tag))
                .count() as f64
                * RELATED_ACTIVITY_BONUS;

            ScoredClass { class, score }
        })
        .collect();

    let ranked = top_ranked(scored, limit);
    tracing::debug!(
        selected = %selected.id,
        count = ranked.len(),
        "Related classes computed"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::models::{ClassId, InteractionTarget};
    use crate::services::preferences::preference_scores;
    use crate::session::InteractionLog;

    fn names(ranked: &[ScoredClass<'_>]) -> Vec<String> {
        ranked.iter().map(|entry| entry.class.name.clone()).collect()
    }

    #[test]
    fn test_personalized_empty_preferences() {
        let (catalog, _) = default_catalog().unwrap();
        assert!(personalized(&catalog, &PreferenceScores::default(), 4).is_empty());
    }

    #[test]
    fn test_personalized_single_activity() {
        let (catalog, _) = default_catalog().unwrap();
        let mut log = InteractionLog::with_capacity(10);
        log.record(InteractionTarget::Activity("swimming".into()));
        let prefs = preference_scores(&log, &catalog, 8).unwrap();

        let ranked = personalized(&catalog, &prefs, 4);
        assert_eq!(names(&ranked), vec!["Aqua Aerobics", "Swim Lessons"]);
        assert_eq!(ranked[0].score, 6.0);
        assert_eq!(ranked[1].score, 6.0);
    }

    #[test]
    fn test_personalized_primary_outweighs_secondary() {
        let (catalog, _) = default_catalog().unwrap();
        let mut log = InteractionLog::with_capacity(10);
        log.record(InteractionTarget::Activity("dance".into()));
        let prefs = preference_scores(&log, &catalog, 8).unwrap();

        let ranked = personalized(&catalog, &prefs, 4);
        // dance-primary classes score 3 * 2.0; nothing carries dance as a secondary tag
        assert_eq!(names(&ranked), vec!["Zumba Fitness", "Hip Hop Dance"]);

        let mut log = InteractionLog::with_capacity(10);
        log.record(InteractionTarget::Activity("strength".into()));
        let prefs = preference_scores(&log, &catalog, 8).unwrap();

        let ranked = personalized(&catalog, &prefs, 10);
        assert_eq!(ranked[0].class.name, "Personal Training");
        assert_eq!(ranked[0].score, 6.0);
        assert!(ranked[1..].iter().all(|entry| entry.score == 2.0));
    }

    #[test]
    fn test_personalized_truncates_to_limit() {
        let (catalog, _) = default_catalog().unwrap();
        let mut log = InteractionLog::with_capacity(10);
        log.record(InteractionTarget::Activity("cardio".into()));
        let prefs = preference_scores(&log, &catalog, 8).unwrap();

        let ranked = personalized(&catalog, &prefs, 4);
        assert_eq!(ranked.len(), 4);
        assert_eq!(names(&ranked)[..2], ["HIIT Blast", "Spin Class"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_exact_matches_in_catalog_order() {
        let (catalog, _) = default_catalog().unwrap();
        let matches = exact_matches(&catalog, &"tennis".into()).unwrap();
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["TNT (Tennis & Training)", "Cardio Tennis", "Private Tennis Lesson"]
        );
    }

    #[test]
    fn test_exact_matches_ignores_secondary_tags() {
        let (catalog, _) = default_catalog().unwrap();
        let matches = exact_matches(&catalog, &"strength".into()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Personal Training");
    }

    #[test]
    fn test_exact_matches_unknown_activity() {
        let (catalog, _) = default_catalog().unwrap();
        assert!(exact_matches(&catalog, &"rowing".into()).is_err());
    }

    const ISOLATED_CATALOG: &str = r#"{
        "activities": [
            { "id": "yoga", "name": "Yoga", "icon": "", "color": "" },
            { "id": "dance", "name": "Dance", "icon": "", "color": "" },
            { "id": "swimming", "name": "Swimming", "icon": "", "color": "" }
        ],
        "classes": [
            {
                "id": 1, "name": "Hatha", "session_kind": "group", "duration_minutes": 60,
                "tags": ["yoga"], "primary_tag": "yoga",
                "description": "", "instructor": ""
            },
            {
                "id": 2, "name": "Salsa", "session_kind": "group", "duration_minutes": 45,
                "tags": ["dance"], "primary_tag": "dance",
                "description": "", "instructor": ""
            }
        ]
    }"#;

    #[test]
    fn test_exact_matches_known_activity_without_classes() {
        let (catalog, _) = crate::catalog::parse_catalog(ISOLATED_CATALOG).unwrap();
        let matches = exact_matches(&catalog, &"swimming".into()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_related_classes_empty_when_nothing_overlaps() {
        let (catalog, relations) = crate::catalog::parse_catalog(ISOLATED_CATALOG).unwrap();
        let hatha = catalog.class(ClassId(1)).unwrap();
        assert!(related_classes(&catalog, &relations, hatha, 5).is_empty());
    }

    #[test]
    fn test_related_classes_for_tnt() {
        let (catalog, relations) = default_catalog().unwrap();
        let tnt = catalog.class(ClassId(1)).unwrap();

        let ranked = related_classes(&catalog, &relations, tnt, 5);
        assert_eq!(
            names(&ranked),
            vec![
                "Cardio Tennis",
                "Private Tennis Lesson",
                "Power Yoga",
                "HIIT Blast",
                "Personal Training"
            ]
        );
        let scores: Vec<f64> = ranked.iter().map(|entry| entry.score).collect();
        assert_eq!(scores, vec![15.0, 10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_related_classes_counts_each_shared_tag() {
        let (catalog, relations) = default_catalog().unwrap();
        // Personal Training: primary strength, also cardio and yoga
        let selected = catalog.class(ClassId(8)).unwrap();

        let ranked = related_classes(&catalog, &relations, selected, 12);
        let power_yoga = ranked
            .iter()
            .find(|entry| entry.class.id == ClassId(5))
            .unwrap();
        // shares cardio and yoga (+6), cardio is related to strength (+2)
        assert_eq!(power_yoga.score, 8.0);
    }

    #[test]
    fn test_related_classes_excludes_zero_scores() {
        let (catalog, relations) = default_catalog().unwrap();
        // Swim Lessons only relates to cardio through the relation table
        let selected = catalog.class(ClassId(12)).unwrap();

        let ranked = related_classes(&catalog, &relations, selected, 20);
        assert!(ranked.iter().all(|entry| entry.score > 0.0));
        assert!(ranked.iter().all(|entry| entry.class.id != ClassId(12)));
        assert_eq!(ranked[0].class.name, "Aqua Aerobics");
        assert_eq!(ranked[0].score, 12.0);
    }
}
