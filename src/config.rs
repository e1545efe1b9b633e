use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A configuration used for the application.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Word list to look lemmas up in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    /// Only show polite (`true`) or plain (`false`) forms in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polite: Option<bool>,
}

impl Config {
    /// Load configuration from the given path, or use the default
    /// configuration if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            Self::parse(&data).with_context(|| format!("Parsing {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "Using default configuration");
            Self::default()
        };

        Ok(config)
    }

    /// Parse configuration.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Test if a table cell of the given formality should be shown.
    pub fn is_shown(&self, formal: bool) -> bool {
        self.polite.map_or(true, |polite| polite == formal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let config = Config::parse("dictionary = \"words.toml.gz\"\npolite = true\n").unwrap();
        assert_eq!(config.dictionary.as_deref(), Some(Path::new("words.toml.gz")));
        assert!(config.is_shown(true));
        assert!(!config.is_shown(false));

        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.is_shown(true) && config.is_shown(false));

        assert!(Config::parse("polite = \"yes\"").is_err());
    }

    #[test]
    fn missing_file() {
        let config = Config::load(Path::new("this/does/not/exist.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
