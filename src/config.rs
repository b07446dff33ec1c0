// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};
use crate::fleet::FleetSettings;
use crate::models::Layout;
use crate::slice::MetricSlice;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.paydash", "Paydash", "paydash"));

pub const DEFAULT_DATA_PATH: &str = "data/staging_data_cleaned.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_path: PathBuf,
    pub layout: Layout,
    pub default_slice: MetricSlice,
    pub scooters: FleetSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            layout: Layout::Full,
            default_slice: MetricSlice::Gross,
            scooters: FleetSettings::default(),
        }
    }
}

/// `config.json` under the platform config dir, if one can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.json"))
}

impl Settings {
    /// Read settings from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&raw)
            .map_err(|e| DashError::Config(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.scooters.validate()
    }
}
