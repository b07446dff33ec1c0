// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod charts;
pub mod doctor;
pub mod export;
pub mod options;
pub mod scooters;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::dataset::Dataset;
use crate::models::FilterSelection;
use crate::slice::MetricSlice;

/// Settings and the dashboard built from them, shared by every command.
pub struct Session {
    pub settings: Settings,
    pub dashboard: Dashboard,
}

impl Session {
    pub fn new(settings: Settings, dashboard: Dashboard) -> Self {
        Self {
            settings,
            dashboard,
        }
    }

    /// Resolve settings from the config file and global flags, then load the
    /// dataset and draw scooter counts.
    pub fn open(m: &clap::ArgMatches) -> Result<Self> {
        let config = m.get_one::<String>("config").map(PathBuf::from);
        let mut settings = Settings::load(config.as_deref())?;
        if let Some(data) = m.get_one::<String>("data") {
            settings.data_path = PathBuf::from(data.trim());
        }
        if let Some(seed) = m.get_one::<u64>("seed") {
            settings.scooters.seed = Some(*seed);
        }
        if let Some(layout) = m.get_one::<String>("layout") {
            settings.layout = layout.parse()?;
        }

        let dataset = Dataset::load(&settings.data_path)
            .with_context(|| format!("Open CSV {}", settings.data_path.display()))?;
        let dashboard = Dashboard::with_fleet(dataset, &settings.scooters, settings.layout)?;
        Ok(Self::new(settings, dashboard))
    }

    /// Read the filter controls of a subcommand.
    pub fn selection(&self, sub: &clap::ArgMatches) -> Result<FilterSelection> {
        let slice = match sub.get_one::<String>("slice") {
            Some(s) => s.parse::<MetricSlice>()?,
            None => self.settings.default_slice,
        };
        let status = sub
            .get_one::<String>("status")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let customers = sub
            .get_many::<String>("customer")
            .map(|ids| {
                ids.map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(FilterSelection::new(slice, status).with_customers(customers))
    }
}
