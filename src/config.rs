use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default inspection scope: every Ruby source file under lib/.
pub const DEFAULT_PATH: &str = "lib/**/*.rb";

/// Resolved runner configuration after merging overrides over the defaults.
///
/// Immutable once resolved; the runner owns it for the whole watch session.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Run a full inspection when the watch session starts.
    pub all_on_start: bool,
    /// Glob patterns inspected by a full run.
    pub path: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            all_on_start: true,
            path: vec![DEFAULT_PATH.to_string()],
        }
    }
}

impl Options {
    /// Shallow per-key merge: supplied keys win whole, unspecified keys keep
    /// their defaults. A supplied `path` replaces the default list, it is
    /// never appended to it.
    pub fn resolve(overrides: Overrides) -> Self {
        let defaults = Options::default();
        Options {
            all_on_start: overrides.all_on_start.unwrap_or(defaults.all_on_start),
            path: overrides.path.unwrap_or(defaults.path),
        }
    }
}

/// Partial option mapping, supplied by the host or read from a TOML file.
///
/// Unknown keys are ignored and values are not validated here; a malformed
/// glob surfaces later as a contained inspection error.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub all_on_start: Option<bool>,
    pub path: Option<Vec<String>>,
}

impl Overrides {
    /// Layers `other` on top of `self`; keys set in `other` win whole.
    pub fn merge(self, other: Overrides) -> Overrides {
        Overrides {
            all_on_start: other.all_on_start.or(self.all_on_start),
            path: other.path.or(self.path),
        }
    }

    /// Parses a TOML override file.
    pub fn from_file(path: &Path) -> Result<Overrides> {
        let content =
            fs::read_to_string(path).context(format!("Failed to read config at {:?}", path))?;

        let parsed: Overrides =
            toml::from_str(&content).context("Failed to parse override config")?;

        Ok(parsed)
    }

    /// Loads overrides from the user config directory. A missing file is not
    /// an error; it simply leaves every key unset.
    pub fn from_user_config() -> Result<Overrides> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        let config_path = home
            .join(".config")
            .join("yardstick-watch")
            .join("config.toml");

        if !config_path.exists() {
            return Ok(Overrides::default());
        }

        Self::from_file(&config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_documented_defaults() {
        let options = Options::resolve(Overrides::default());

        assert!(options.all_on_start);
        assert_eq!(options.path, vec![DEFAULT_PATH.to_string()]);
    }

    #[test]
    fn resolve_lets_supplied_keys_win() {
        let overrides = Overrides {
            all_on_start: Some(false),
            path: Some(vec!["app/**/*.rb".to_string()]),
        };

        let options = Options::resolve(overrides);

        assert!(!options.all_on_start);
        assert_eq!(options.path, vec!["app/**/*.rb".to_string()]);
    }

    #[test]
    fn resolve_keeps_defaults_for_unspecified_keys() {
        let overrides = Overrides {
            all_on_start: Some(false),
            path: None,
        };

        let options = Options::resolve(overrides);

        assert!(!options.all_on_start);
        assert_eq!(options.path, vec![DEFAULT_PATH.to_string()]);
    }

    #[test]
    fn supplied_path_replaces_the_default_list() {
        let overrides = Overrides {
            all_on_start: None,
            path: Some(vec!["docs/a.rb".to_string(), "docs/b.rb".to_string()]),
        };

        let options = Options::resolve(overrides);

        assert_eq!(
            options.path,
            vec!["docs/a.rb".to_string(), "docs/b.rb".to_string()]
        );
        assert!(!options.path.contains(&DEFAULT_PATH.to_string()));
    }

    #[test]
    fn merge_prefers_the_right_hand_side_per_key() {
        let file = Overrides {
            all_on_start: Some(false),
            path: Some(vec!["lib/a.rb".to_string()]),
        };
        let host = Overrides {
            all_on_start: None,
            path: Some(vec!["lib/b.rb".to_string()]),
        };

        let merged = file.merge(host);

        assert_eq!(merged.all_on_start, Some(false));
        assert_eq!(merged.path, Some(vec!["lib/b.rb".to_string()]));
    }

    #[test]
    fn from_file_parses_a_toml_mapping() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "all_on_start = false\npath = [\"app/**/*.rb\"]\n").expect("write");

        let overrides = Overrides::from_file(&path).expect("parse");

        assert_eq!(overrides.all_on_start, Some(false));
        assert_eq!(overrides.path, Some(vec!["app/**/*.rb".to_string()]));
    }

    #[test]
    fn from_file_ignores_unrecognized_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "all_on_start = true\ncli = \"guard\"\n").expect("write");

        let overrides = Overrides::from_file(&path).expect("parse");

        assert_eq!(overrides.all_on_start, Some(true));
        assert_eq!(overrides.path, None);
    }

    #[test]
    fn from_file_reports_unreadable_and_malformed_files() {
        let dir = tempfile::tempdir().expect("tempdir");

        assert!(Overrides::from_file(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("config.toml");
        fs::write(&path, "path = not-a-list").expect("write");
        assert!(Overrides::from_file(&path).is_err());
    }
}
