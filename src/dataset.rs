// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The in-memory transaction table and the option lists derived from it.
//!
//! Loading is lenient per row: a record with a missing or unparsable
//! required field is set aside in [`Dataset::rejected`] rather than failing
//! the whole load.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Transaction;
use crate::utils::{parse_date, parse_decimal, parse_timestamp};

#[derive(Debug, Deserialize)]
struct CsvRow {
    reservation_id: Option<String>,
    customer_id: Option<String>,
    date: Option<String>,
    #[serde(rename = "created_(utc)")]
    created_utc: Option<String>,
    status: Option<String>,
    amount: Option<String>,
    amount_refunded: Option<String>,
    fee: Option<String>,
}

/// A CSV line that was excluded from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Transaction>,
    statuses: Vec<String>,
    dates: Vec<NaiveDate>,
    customer_ids: Vec<String>,
    rejected: Vec<RejectedRow>,
}

fn required<'a>(field: &'a Option<String>, name: &str) -> anyhow::Result<&'a str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} missing", name))
}

impl CsvRow {
    fn into_transaction(self) -> anyhow::Result<Transaction> {
        Ok(Transaction {
            reservation_id: required(&self.reservation_id, "reservation_id")?.to_string(),
            customer_id: required(&self.customer_id, "customer_id")?.to_string(),
            date: parse_date(required(&self.date, "date")?)?,
            created_utc: parse_timestamp(required(&self.created_utc, "created_(utc)")?)?,
            status: required(&self.status, "status")?.to_string(),
            amount: parse_decimal(required(&self.amount, "amount")?)?,
            amount_refunded: parse_decimal(required(&self.amount_refunded, "amount_refunded")?)?,
            fee: parse_decimal(required(&self.fee, "fee")?)?,
        })
    }
}

impl Dataset {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self::with_rejected(rows, Vec::new())
    }

    fn with_rejected(rows: Vec<Transaction>, rejected: Vec<RejectedRow>) -> Self {
        let statuses: BTreeSet<String> = rows.iter().map(|r| r.status.clone()).collect();
        let dates: BTreeSet<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let customers: BTreeSet<String> = rows.iter().map(|r| r.customer_id.clone()).collect();
        Self {
            rows,
            statuses: statuses.into_iter().collect(),
            dates: dates.into_iter().collect(),
            customer_ids: customers.into_iter().collect(),
            rejected,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let ds = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = ds.len(),
            rejected = ds.rejected.len(),
            "dataset loaded"
        );
        Ok(ds)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        // Surface a broken header as an error instead of rejecting every row.
        let headers = rdr.headers()?.clone();

        let mut rows = Vec::new();
        let mut rejected = Vec::new();
        for result in rdr.records() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    tracing::warn!(line, reason = %e, "rejected malformed row");
                    rejected.push(RejectedRow {
                        line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            let parsed = rec
                .deserialize::<CsvRow>(Some(&headers))
                .map_err(anyhow::Error::from)
                .and_then(CsvRow::into_transaction);
            match parsed {
                Ok(tx) => rows.push(tx),
                Err(e) => {
                    let reason = e.to_string();
                    tracing::warn!(line, %reason, "rejected malformed row");
                    rejected.push(RejectedRow { line, reason });
                }
            }
        }
        Ok(Self::with_rejected(rows, rejected))
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct statuses, sorted.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Distinct dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Distinct customer ids, sorted.
    pub fn customer_ids(&self) -> &[String] {
        &self.customer_ids
    }

    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }
}
