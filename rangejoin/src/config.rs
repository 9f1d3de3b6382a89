// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

use crate::{ConfigError, Constants};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub join: ConfigSectionJoin,
}

impl ConfigRoot {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionJoin {
    pub separator: String,

    /// Command-line elements equal to this marker are treated as absent.
    pub absent_marker: Option<String>,
}

impl Default for ConfigSectionJoin {
    fn default() -> Self {
        Self {
            separator: Constants::DEFAULT_SEPARATOR.to_string(),
            absent_marker: None,
        }
    }
}
