use crate::{
    catalog::Catalog,
    error::RecsResult,
    models::InteractionTarget,
    session::InteractionLog,
};

/// Labels describing what the user looked at recently
///
/// Activity clicks contribute the activity's display name, class clicks the
/// class's primary tag. Duplicates are dropped, keeping the first occurrence.
pub fn recent_interests(
    log: &InteractionLog,
    catalog: &Catalog,
    window: usize,
) -> RecsResult<Vec<String>> {
    let mut labels: Vec<String> = Vec::new();

    for interaction in log.recent(window) {
        let label = match &interaction.target {
            InteractionTarget::Activity(id) => catalog.activity(id)?.name.clone(),
            InteractionTarget::Class(id) => catalog.class(*id)?.primary_tag.to_string(),
        };
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    Ok(labels)
}
