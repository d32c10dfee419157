use std::sync::Arc;

use crate::{
    catalog::{Catalog, RelationTable},
    config::EngineSettings,
    error::{RecsError, RecsResult},
    models::{ActivityId, ClassId, FitnessClass, InteractionKind, InteractionTarget, ScoredClass},
    services::{preference_scores, recommendations, summary},
    session::Session,
};

/// Entry point for the presentation layer
///
/// Holds the read-only catalog and relation table; all per-user state lives
/// in the [`Session`] passed to each call.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    relations: Arc<RelationTable>,
    settings: EngineSettings,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>, relations: Arc<RelationTable>) -> Self {
        Self::with_settings(catalog, relations, EngineSettings::default())
    }

    pub fn with_settings(
        catalog: Arc<Catalog>,
        relations: Arc<RelationTable>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            catalog,
            relations,
            settings,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Starts a session sized for this engine's history capacity
    pub fn new_session(&self) -> Session {
        Session::with_settings(&self.settings)
    }

    /// Records a click after checking the target exists in the catalog
    pub fn record_interaction(
        &self,
        session: &mut Session,
        target: InteractionTarget,
    ) -> RecsResult<()> {
        match &target {
            InteractionTarget::Activity(id) => {
                self.catalog.activity(id)?;
            }
            InteractionTarget::Class(id) => {
                self.catalog.class(*id)?;
            }
        }

        let kind = target.kind();
        let interaction_id = session.log_mut().record(target);
        tracing::debug!(
            session_id = %session.id,
            interaction_id,
            %kind,
            history = session.log().len(),
            "Interaction recorded"
        );
        Ok(())
    }

    /// Records a click given as untyped strings, e.g. `("class", "6")`
    pub fn record_raw(&self, session: &mut Session, kind: &str, id: &str) -> RecsResult<()> {
        let target = match kind.parse::<InteractionKind>()? {
            InteractionKind::Activity => InteractionTarget::Activity(ActivityId::new(id)),
            InteractionKind::Class => {
                let class_id = id
                    .parse::<u32>()
                    .map_err(|_| RecsError::unknown_class(id))?;
                InteractionTarget::Class(ClassId(class_id))
            }
        };
        self.record_interaction(session, target)
    }

    /// Home-screen recommendations; empty until the session has history
    pub fn personalized_recommendations(
        &self,
        session: &Session,
    ) -> RecsResult<Vec<ScoredClass<'_>>> {
        if session.log().is_empty() {
            return Ok(Vec::new());
        }

        let preferences =
            preference_scores(session.log(), &self.catalog, self.settings.scoring_window)?;
        Ok(recommendations::personalized(
            &self.catalog,
            &preferences,
            self.settings.personalized_limit,
        ))
    }

    pub fn exact_matches(&self, activity: &ActivityId) -> RecsResult<Vec<&FitnessClass>> {
        recommendations::exact_matches(&self.catalog, activity)
    }

    /// Classes related to the one with id `selected`, excluding it
    pub fn class_recommendations(&self, selected: ClassId) -> RecsResult<Vec<ScoredClass<'_>>> {
        let selected = self.catalog.class(selected)?;
        Ok(recommendations::related_classes(
            &self.catalog,
            &self.relations,
            selected,
            self.settings.related_limit,
        ))
    }

    pub fn related_activities(&self, activity: &ActivityId) -> RecsResult<&[ActivityId]> {
        self.catalog.activity(activity)?;
        Ok(self.relations.related_of(activity))
    }

    /// Short labels for the "based on your recent activity" line
    pub fn recent_interests(&self, session: &Session) -> RecsResult<Vec<String>> {
        summary::recent_interests(session.log(), &self.catalog, self.settings.summary_window)
    }
}
