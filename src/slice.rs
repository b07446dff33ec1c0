// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Metric slices and the table that resolves each one to its aggregation,
//! normalization flag and axis title.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricSlice {
    #[default]
    Gross,
    GrossScooter,
    Mean,
    MeanScooter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    pub aggregation: Aggregation,
    pub per_scooter: bool,
    pub y_title: &'static str,
}

static SLICE_TABLE: [(MetricSlice, &str, &str, SliceSpec); 4] = [
    (
        MetricSlice::Gross,
        "gross",
        "Gross per day",
        SliceSpec {
            aggregation: Aggregation::Sum,
            per_scooter: false,
            y_title: "$, gross",
        },
    ),
    (
        MetricSlice::GrossScooter,
        "gross_scooter",
        "Gross per scooter",
        SliceSpec {
            aggregation: Aggregation::Sum,
            per_scooter: true,
            y_title: "$ per scooter, gross",
        },
    ),
    (
        MetricSlice::Mean,
        "mean",
        "Mean per day",
        SliceSpec {
            aggregation: Aggregation::Mean,
            per_scooter: false,
            y_title: "$, mean",
        },
    ),
    (
        MetricSlice::MeanScooter,
        "mean_scooter",
        "Mean per scooter",
        SliceSpec {
            aggregation: Aggregation::Mean,
            per_scooter: true,
            y_title: "$ per scooter, mean",
        },
    ),
];

impl MetricSlice {
    pub const ALL: [MetricSlice; 4] = [
        MetricSlice::Gross,
        MetricSlice::GrossScooter,
        MetricSlice::Mean,
        MetricSlice::MeanScooter,
    ];

    fn row(self) -> &'static (MetricSlice, &'static str, &'static str, SliceSpec) {
        // The table lists every variant in declaration order.
        &SLICE_TABLE[self as usize]
    }

    pub fn spec(self) -> SliceSpec {
        self.row().3
    }

    pub fn as_str(self) -> &'static str {
        self.row().1
    }

    /// Label shown in the slice dropdown.
    pub fn label(self) -> &'static str {
        self.row().2
    }
}

impl FromStr for MetricSlice {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let found = SLICE_TABLE
            .iter()
            .find(|(_, name, _, _)| *name == key.as_str())
            .map(|(slice, _, _, _)| *slice);
        found.ok_or(DashError::InvalidSlice(key))
    }
}

impl fmt::Display for MetricSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
