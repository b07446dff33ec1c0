// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-date scooter counts used to normalize money metrics.
//!
//! Real fleet sizes are not part of the dataset, so a count is drawn once per
//! date at startup. Counts are keyed by date value; a grouped table can be
//! normalized in any order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetSettings {
    pub min: u32,
    pub max: u32,
    pub seed: Option<u64>,
}

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            min: 5,
            max: 10,
            seed: None,
        }
    }
}

impl FleetSettings {
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(DashError::Config("scooters.min must be at least 1".into()));
        }
        if self.min > self.max {
            return Err(DashError::Config(format!(
                "scooters.min ({}) exceeds scooters.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScooterCounts {
    counts: BTreeMap<NaiveDate, u32>,
}

impl ScooterCounts {
    /// Draw one count per date, uniformly in `[min, max]`.
    pub fn generate(dates: &[NaiveDate], settings: &FleetSettings) -> Result<Self> {
        settings.validate()?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let counts = dates
            .iter()
            .map(|d| (*d, rng.gen_range(settings.min..=settings.max)))
            .collect();
        Ok(Self { counts })
    }

    pub fn from_map(counts: BTreeMap<NaiveDate, u32>) -> Self {
        Self { counts }
    }

    pub fn get(&self, date: &NaiveDate) -> Option<u32> {
        self.counts.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &u32)> {
        self.counts.iter()
    }
}
