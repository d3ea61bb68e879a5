// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "basic.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub input: ConfigSectionInput,
    pub run: ConfigSectionRun,
}

impl ConfigRoot {
    /// Reads the configuration at `path`, or `basic.toml` in the current
    /// directory when it exists. Without either, every setting has its
    /// default.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read configuration file {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
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
pub struct ConfigSectionInput {
    pub prompt: String,
}

impl Default for ConfigSectionInput {
    fn default() -> Self {
        Self {
            prompt: " ? ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRun {
    /// Print each executed line number to stderr.
    pub trace: bool,
}
