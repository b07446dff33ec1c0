// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed row filter built from the status and customer controls.
//!
//! Clauses are AND-combined. A filter with no clauses accepts every row.
//!
//! ```rust
//! use paydash::query::RowFilter;
//! let filter = RowFilter::new()
//!     .status_eq("Paid")
//!     .customer_in(["c-1", "c-2"]);
//! assert_eq!(
//!     filter.describe(),
//!     "status = 'Paid' AND customer_id IN ('c-1', 'c-2')"
//! );
//! ```

use std::collections::BTreeSet;

use crate::models::{FilterSelection, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    StatusEq(String),
    CustomerIn(BTreeSet<String>),
}

impl Clause {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Clause::StatusEq(status) => tx.status == *status,
            Clause::CustomerIn(ids) => ids.contains(&tx.customer_id),
        }
    }

    fn describe(&self) -> String {
        match self {
            Clause::StatusEq(status) => format!("status = '{}'", status),
            Clause::CustomerIn(ids) => {
                let quoted: Vec<String> = ids.iter().map(|id| format!("'{}'", id)).collect();
                format!("customer_id IN ({})", quoted.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    clauses: Vec<Clause>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for one snapshot of the controls: the resolved status, plus the
    /// customer set when one is selected.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self::new()
            .status_eq(selection.resolved_status())
            .customer_in(selection.customer_ids.iter().map(String::as_str))
    }

    pub fn status_eq(mut self, status: &str) -> Self {
        self.clauses.push(Clause::StatusEq(status.to_string()));
        self
    }

    /// Restrict to the given customers. An empty set adds no constraint.
    pub fn customer_in<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        if !ids.is_empty() {
            self.clauses.push(Clause::CustomerIn(ids));
        }
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.clauses.iter().all(|c| c.matches(tx))
    }

    pub fn apply<'a>(&self, rows: &'a [Transaction]) -> Vec<&'a Transaction> {
        rows.iter().filter(|tx| self.matches(tx)).collect()
    }

    /// Human-readable rendering for logs. Never evaluated.
    pub fn describe(&self) -> String {
        if self.clauses.is_empty() {
            return "TRUE".to_string();
        }
        self.clauses
            .iter()
            .map(Clause::describe)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
