use std::{path::Path, sync::Arc};

use anyhow::Context;
use class_finder::{
    catalog::load_catalog,
    models::{ActivityId, ClassId, InteractionTarget},
    Config, RecommendationEngine,
};
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let (catalog, relations) = load_catalog(config.catalog_path.as_deref().map(Path::new))
        .context("Failed to load catalog")?;
    let engine = RecommendationEngine::with_settings(
        Arc::new(catalog),
        Arc::new(relations),
        config.engine_settings(),
    );

    let mut session = engine.new_session();
    tracing::info!(session_id = %session.id, "Session started");

    // Empty home screen before any clicks
    print_view(
        "home",
        json!({ "recommended": engine.personalized_recommendations(&session)? }),
    )?;

    let tennis = ActivityId::new("tennis");
    engine.record_interaction(&mut session, InteractionTarget::Activity(tennis.clone()))?;
    print_view(
        "activity",
        json!({
            "activity": "tennis",
            "classes": engine.exact_matches(&tennis)?,
            "related_activities": engine.related_activities(&tennis)?,
        }),
    )?;

    for class_id in [ClassId(3), ClassId(6)] {
        engine.record_interaction(&mut session, InteractionTarget::Class(class_id))?;
        print_view(
            "class",
            json!({
                "class": engine.catalog().class(class_id)?,
                "similar": engine.class_recommendations(class_id)?,
            }),
        )?;
    }

    print_view(
        "home",
        json!({
            "recommended": engine.personalized_recommendations(&session)?,
            "based_on": engine.recent_interests(&session)?,
        }),
    )?;

    Ok(())
}

fn print_view(view: &str, body: serde_json::Value) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(&json!({ "view": view, "data": body }))?;
    println!("{}", rendered);
    Ok(())
}
