//! Fitness class recommendations from a static catalog and a user's
//! recent clicks.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use catalog::{Catalog, RelationTable};
pub use config::{Config, EngineSettings};
pub use engine::RecommendationEngine;
pub use error::{RecsError, RecsResult};
pub use session::{Session, SharedSession};
