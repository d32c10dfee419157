//! Static catalog data: activities, classes and the relation table
//!
//! The catalog is loaded once at startup, validated, and shared read-only
//! for the lifetime of the process.

mod relations;

pub use relations::RelationTable;

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::{
    error::{RecsError, RecsResult},
    models::{Activity, ActivityId, ClassId, FitnessClass},
};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    activities: Vec<Activity>,
    classes: Vec<FitnessClass>,
    #[serde(default)]
    relations: HashMap<ActivityId, Vec<ActivityId>>,
}

/// Read-only store of activities and classes, in catalog order
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: Vec<Activity>,
    classes: Vec<FitnessClass>,
    activity_index: HashMap<ActivityId, usize>,
    class_index: HashMap<ClassId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and malformed tag sets
    pub fn new(activities: Vec<Activity>, classes: Vec<FitnessClass>) -> RecsResult<Self> {
        let mut activity_index = HashMap::with_capacity(activities.len());
        for (position, activity) in activities.iter().enumerate() {
            if activity_index.insert(activity.id.clone(), position).is_some() {
                return Err(RecsError::InvalidCatalog(format!(
                    "duplicate activity id '{}'",
                    activity.id
                )));
            }
        }

        let mut class_index = HashMap::with_capacity(classes.len());
        for (position, class) in classes.iter().enumerate() {
            if class_index.insert(class.id, position).is_some() {
                return Err(RecsError::InvalidCatalog(format!(
                    "duplicate class id {}",
                    class.id
                )));
            }
            validate_class(class, &activity_index)?;
        }

        Ok(Self {
            activities,
            classes,
            activity_index,
            class_index,
        })
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn classes(&self) -> &[FitnessClass] {
        &self.classes
    }

    pub fn activity(&self, id: &ActivityId) -> RecsResult<&Activity> {
        self.activity_index
            .get(id)
            .map(|&position| &self.activities[position])
            .ok_or_else(|| RecsError::unknown_activity(id))
    }

    pub fn class(&self, id: ClassId) -> RecsResult<&FitnessClass> {
        self.class_index
            .get(&id)
            .map(|&position| &self.classes[position])
            .ok_or_else(|| RecsError::unknown_class(id))
    }

    pub fn contains_activity(&self, id: &ActivityId) -> bool {
        self.activity_index.contains_key(id)
    }
}

fn validate_class(
    class: &FitnessClass,
    activity_index: &HashMap<ActivityId, usize>,
) -> RecsResult<()> {
    if class.tags.is_empty() {
        return Err(RecsError::InvalidCatalog(format!(
            "class {} has no tags",
            class.id
        )));
    }

    let mut seen = HashSet::with_capacity(class.tags.len());
    for tag in &class.tags {
        if !seen.insert(tag) {
            return Err(RecsError::InvalidCatalog(format!(
                "class {} lists tag '{}' twice",
                class.id, tag
            )));
        }
        if !activity_index.contains_key(tag) {
            return Err(RecsError::InvalidCatalog(format!(
                "class {} is tagged with unknown activity '{}'",
                class.id, tag
            )));
        }
    }

    if !class.has_tag(&class.primary_tag) {
        return Err(RecsError::InvalidCatalog(format!(
            "class {} primary tag '{}' is not among its tags",
            class.id, class.primary_tag
        )));
    }

    Ok(())
}

fn validate_relations(catalog: &Catalog, relations: &RelationTable) -> RecsResult<()> {
    for (activity, related) in relations.entries() {
        for id in std::iter::once(activity).chain(related) {
            if !catalog.contains_activity(id) {
                return Err(RecsError::InvalidCatalog(format!(
                    "relation table references unknown activity '{}'",
                    id
                )));
            }
        }
    }
    Ok(())
}

/// Parses and validates a JSON catalog document
pub fn parse_catalog(json: &str) -> RecsResult<(Catalog, RelationTable)> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let catalog = Catalog::new(file.activities, file.classes)?;
    let relations = RelationTable::new(file.relations);
    validate_relations(&catalog, &relations)?;

    tracing::info!(
        activities = catalog.activities.len(),
        classes = catalog.classes.len(),
        "Catalog loaded"
    );

    Ok((catalog, relations))
}

/// Loads the catalog from `path`, or the embedded catalog when `None`
pub fn load_catalog(path: Option<&Path>) -> RecsResult<(Catalog, RelationTable)> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading catalog file");
            let json = std::fs::read_to_string(path)?;
            parse_catalog(&json)
        }
        None => parse_catalog(EMBEDDED_CATALOG),
    }
}

/// The built-in catalog of six activities and twelve classes
pub fn default_catalog() -> RecsResult<(Catalog, RelationTable)> {
    parse_catalog(EMBEDDED_CATALOG)
}
