// Runtime settings
//
// Everything is optional in the file; missing keys fall back to the
// defaults below, and a missing file means all-defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog file to load instead of the built-in seed catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// How many recommendations to show.
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// How many viewed recipe ids to keep for the session profile.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_recommend_limit() -> usize {
    3
}

fn default_history_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog_path: None,
            recommend_limit: default_recommend_limit(),
            history_limit: default_history_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.recommend_limit, 3);
        assert_eq!(settings.history_limit, 20);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let settings: Settings = toml::from_str("recommend_limit = 5").unwrap();
        assert_eq!(settings.recommend_limit, 5);
        assert_eq!(settings.history_limit, 20);
    }
}
