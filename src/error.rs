/// Errors raised by the recommendation engine
///
/// Every variant indicates a caller or configuration defect. An empty
/// recommendation list is never an error.
#[derive(thiserror::Error, Debug)]
pub enum RecsError {
    #[error("Unknown {entity_type}: {id}")]
    UnknownEntity {
        entity_type: &'static str,
        id: String,
    },

    #[error("Invalid interaction kind: {0}")]
    InvalidInteractionKind(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Catalog read error: {0}")]
    CatalogIo(#[from] std::io::Error),
}

impl RecsError {
    pub fn unknown_activity(id: impl ToString) -> Self {
        RecsError::UnknownEntity {
            entity_type: "activity",
            id: id.to_string(),
        }
    }

    pub fn unknown_class(id: impl ToString) -> Self {
        RecsError::UnknownEntity {
            entity_type: "class",
            id: id.to_string(),
        }
    }
}

pub type RecsResult<T> = Result<T, RecsError>;
