//! Loading `AnimatorConfig` from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};

use orbital_sim::config::AnimatorConfig;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    #[snafu(display("could not read config `{}`: {source}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("could not parse config `{}`: {source}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse a config file. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnimatorConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
    serde_json::from_str(&text).context(ParseConfigSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::enums::HitPolicy;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("orbital-link-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_load_partial_config() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"seed": 9, "mock_fleet": false, "hit_policy": "LastMatch"}"#)
            .unwrap();
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, 9);
        assert!(!config.mock_fleet);
        assert_eq!(config.hit_policy, HitPolicy::LastMatch);
        assert_eq!(config.click_window_ms, AnimatorConfig::default().click_window_ms);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadConfig { .. }));
        assert!(err.to_string().starts_with("could not read config"));
    }

    #[test]
    fn test_malformed_file() {
        let path = temp_path("bad.json");
        fs::write(&path, "{ seed: ").unwrap();
        let err = load_config(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::ParseConfig { .. }));
    }
}
