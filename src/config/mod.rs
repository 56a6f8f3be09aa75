// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for keychords.
//!
//! A small YAML file chooses the starting key and scale and how accidentals
//! are printed. Every field has a default, so an empty mapping is valid.

pub mod watcher;

pub use watcher::{validate_config, ConfigEvent, ConfigWatcher};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{ChordEngine, Selection};
use crate::music::Notation;

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChordsFile {
    /// Key and scale to start with
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Output options
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ChordsFile {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Validate the selection against the built-in tables
    pub fn selection(&self) -> Result<Selection> {
        Selection::parse(&self.selection.key, &self.selection.scale).with_context(|| {
            format!(
                "Invalid selection: key {:?}, scale {:?}",
                self.selection.key, self.selection.scale
            )
        })
    }

    /// Build an engine for the configured selection
    pub fn engine(&self) -> Result<ChordEngine> {
        Ok(ChordEngine::new(self.selection()?))
    }

    /// Accidental notation for output
    pub fn notation(&self) -> Notation {
        if self.display.ascii_accidentals {
            Notation::Ascii
        } else {
            Notation::Unicode
        }
    }
}

/// Key and scale selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Tonic (e.g., "C", "F♯", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale family (e.g., "major", "minor")
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            scale: default_scale(),
        }
    }
}

/// Output options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Print # and b instead of ♯ and ♭
    #[serde(default)]
    pub ascii_accidentals: bool,
}
