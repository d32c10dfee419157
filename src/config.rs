use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// JSON catalog file; the embedded catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Fallback tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Maximum number of interactions kept per session
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Number of most recent interactions used for preference scoring
    #[serde(default = "default_scoring_window")]
    pub scoring_window: usize,

    /// Maximum personalized recommendations returned
    #[serde(default = "default_personalized_limit")]
    pub personalized_limit: usize,

    /// Maximum related-class recommendations returned
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Number of most recent interactions summarized as recent interests
    #[serde(default = "default_summary_window")]
    pub summary_window: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_capacity() -> usize {
    10
}

fn default_scoring_window() -> usize {
    8
}

fn default_personalized_limit() -> usize {
    4
}

fn default_related_limit() -> usize {
    5
}

fn default_summary_window() -> usize {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            history_capacity: self.history_capacity,
            scoring_window: self.scoring_window,
            personalized_limit: self.personalized_limit,
            related_limit: self.related_limit,
            summary_window: self.summary_window,
        }
    }
}

/// Tunable limits of the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub history_capacity: usize,
    pub scoring_window: usize,
    pub personalized_limit: usize,
    pub related_limit: usize,
    pub summary_window: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            scoring_window: default_scoring_window(),
            personalized_limit: default_personalized_limit(),
            related_limit: default_related_limit(),
            summary_window: default_summary_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/etc/classes.json".to_string()),
            ("HISTORY_CAPACITY".to_string(), "20".to_string()),
            ("RELATED_LIMIT".to_string(), "3".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some("/etc/classes.json"));

        let settings = config.engine_settings();
        assert_eq!(settings.history_capacity, 20);
        assert_eq!(settings.related_limit, 3);
        assert_eq!(settings.scoring_window, 8);
    }

    #[test]
    fn test_default_settings_match_engine_constants() {
        let settings = EngineSettings::default();
        assert_eq!(settings.history_capacity, 10);
        assert_eq!(settings.scoring_window, 8);
        assert_eq!(settings.personalized_limit, 4);
        assert_eq!(settings.related_limit, 5);
        assert_eq!(settings.summary_window, 5);
    }
}
