// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DashError;
use crate::slice::MetricSlice;

/// Status assumed when the status control is left empty.
pub const DEFAULT_STATUS: &str = "Paid";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub reservation_id: String,
    pub customer_id: String,
    pub date: NaiveDate,
    pub created_utc: NaiveDateTime,
    pub status: String,
    pub amount: Decimal,
    pub amount_refunded: Decimal,
    pub fee: Decimal,
}

impl Transaction {
    pub fn hour(&self) -> u32 {
        self.created_utc.hour()
    }

    /// Money kept after refunds, or `None` when the difference overflows.
    pub fn revenue(&self) -> Option<Decimal> {
        self.amount.checked_sub(self.amount_refunded)
    }
}

/// One snapshot of the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub slice: MetricSlice,
    pub status: String,
    pub customer_ids: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(slice: MetricSlice, status: impl Into<String>) -> Self {
        Self {
            slice,
            status: status.into(),
            customer_ids: BTreeSet::new(),
        }
    }

    pub fn with_customers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.customer_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Status with the empty-means-Paid default applied.
    pub fn resolved_status(&self) -> &str {
        let s = self.status.trim();
        if s.is_empty() { DEFAULT_STATUS } else { s }
    }

    pub fn is_paid(&self) -> bool {
        self.resolved_status() == DEFAULT_STATUS
    }
}

/// Which variant of the dashboard is wired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Slice, status and customer filters; all four charts.
    #[default]
    Full,
    /// Status and customer filters; count and hourly charts only.
    Compact,
}

impl FromStr for Layout {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Layout::Full),
            "compact" => Ok(Layout::Compact),
            other => Err(DashError::InvalidLayout(other.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Full => f.write_str("full"),
            Layout::Compact => f.write_str("compact"),
        }
    }
}
