pub mod preferences;
pub mod recommendations;
pub mod summary;

pub use preferences::{preference_scores, PreferenceScores};
