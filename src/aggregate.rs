// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-date grouping of filtered transactions.
//!
//! Every table comes out one row per date, ascending. Money is kept in
//! [`Decimal`] so that per-scooter division is exact.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::fleet::ScooterCounts;
use crate::models::Transaction;
use crate::slice::Aggregation;

pub const HOURS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCounts {
    pub date: NaiveDate,
    /// Distinct reservation ids.
    pub reservations: usize,
    /// Distinct customer ids.
    pub customers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyRow {
    pub date: NaiveDate,
    pub fee: Decimal,
    pub amount_refunded: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarginRow {
    pub date: NaiveDate,
    pub fee: Decimal,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyHistogram {
    /// Number of deduplicated observations binned.
    pub total: usize,
    pub probabilities: [f64; HOURS],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyDistribution {
    pub reservations: HourlyHistogram,
    pub customers: HourlyHistogram,
}

/// A per-date row whose numeric columns can be divided by a fleet size.
pub trait PerDate {
    fn date(&self) -> NaiveDate;
    fn divide(&mut self, by: Decimal);
}

impl PerDate for MoneyRow {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn divide(&mut self, by: Decimal) {
        self.fee /= by;
        self.amount_refunded /= by;
        self.amount /= by;
    }
}

impl PerDate for MarginRow {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn divide(&mut self, by: Decimal) {
        self.fee /= by;
        self.revenue /= by;
    }
}

pub fn daily_counts(rows: &[&Transaction]) -> Vec<DailyCounts> {
    let mut groups: BTreeMap<NaiveDate, (HashSet<&str>, HashSet<&str>)> = BTreeMap::new();
    for tx in rows {
        let (reservations, customers) = groups.entry(tx.date).or_default();
        reservations.insert(tx.reservation_id.as_str());
        customers.insert(tx.customer_id.as_str());
    }
    groups
        .into_iter()
        .map(|(date, (reservations, customers))| DailyCounts {
            date,
            reservations: reservations.len(),
            customers: customers.len(),
        })
        .collect()
}

struct Acc<const N: usize> {
    sums: [Decimal; N],
    n: u32,
}

impl<const N: usize> Default for Acc<N> {
    fn default() -> Self {
        Self {
            sums: [Decimal::ZERO; N],
            n: 0,
        }
    }
}

impl<const N: usize> Acc<N> {
    /// Add one row, leaving the sums untouched if any column would overflow.
    fn push(&mut self, values: [Decimal; N]) -> bool {
        let mut next = self.sums;
        for (sum, v) in next.iter_mut().zip(values) {
            match sum.checked_add(v) {
                Some(total) => *sum = total,
                None => return false,
            }
        }
        self.sums = next;
        self.n += 1;
        true
    }

    fn finish(self, aggregation: Aggregation) -> [Decimal; N] {
        match aggregation {
            Aggregation::Sum => self.sums,
            // Empty groups are dropped before finishing, so n >= 1.
            Aggregation::Mean => {
                let n = Decimal::from(self.n);
                self.sums.map(|s| s / n)
            }
        }
    }
}

fn group_by_date<const N: usize, F>(
    rows: &[&Transaction],
    aggregation: Aggregation,
    columns: F,
) -> Vec<(NaiveDate, [Decimal; N])>
where
    F: Fn(&Transaction) -> Option<[Decimal; N]>,
{
    let mut groups: BTreeMap<NaiveDate, Acc<N>> = BTreeMap::new();
    for tx in rows {
        let pushed = match columns(*tx) {
            Some(values) => groups.entry(tx.date).or_default().push(values),
            None => false,
        };
        if !pushed {
            tracing::warn!(
                date = %tx.date,
                reservation = %tx.reservation_id,
                "decimal overflow, row skipped"
            );
        }
    }
    groups
        .into_iter()
        .filter(|(_, acc)| acc.n > 0)
        .map(|(date, acc)| (date, acc.finish(aggregation)))
        .collect()
}

/// Per-date sum or mean of fee, amount_refunded and amount.
///
/// A row that would overflow its date's sums is skipped with a warning.
pub fn money_by_date(rows: &[&Transaction], aggregation: Aggregation) -> Vec<MoneyRow> {
    group_by_date(rows, aggregation, |tx| {
        Some([tx.fee, tx.amount_refunded, tx.amount])
    })
    .into_iter()
    .map(|(date, [fee, amount_refunded, amount])| MoneyRow {
        date,
        fee,
        amount_refunded,
        amount,
    })
    .collect()
}

/// Per-date sum or mean of fee and revenue, where revenue is taken per
/// record before grouping.
pub fn margin_by_date(rows: &[&Transaction], aggregation: Aggregation) -> Vec<MarginRow> {
    group_by_date(rows, aggregation, |tx| Some([tx.fee, tx.revenue()?]))
        .into_iter()
        .map(|(date, [fee, revenue])| MarginRow { date, fee, revenue })
        .collect()
}

/// Divide each row by the scooter count of its date.
///
/// Rows whose date has no count, or a zero count, are left raw.
pub fn per_scooter<T: PerDate>(mut rows: Vec<T>, scooters: &ScooterCounts) -> Vec<T> {
    for row in rows.iter_mut() {
        let date = row.date();
        match scooters.get(&date) {
            Some(n) if n > 0 => row.divide(Decimal::from(n)),
            Some(_) => tracing::warn!(%date, "zero scooter count, normalization skipped"),
            None => tracing::warn!(%date, "no scooter count, normalization skipped"),
        }
    }
    rows
}

impl HourlyHistogram {
    pub fn from_hours<I: IntoIterator<Item = u32>>(hours: I) -> Self {
        let mut bins = [0usize; HOURS];
        let mut total = 0usize;
        for h in hours {
            // Hour-of-day from chrono is always below 24.
            bins[h as usize % HOURS] += 1;
            total += 1;
        }
        let probabilities = if total == 0 {
            [0.0; HOURS]
        } else {
            bins.map(|c| c as f64 / total as f64)
        };
        Self {
            total,
            probabilities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn mass(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Hour-of-day distributions over distinct (reservation, date, hour) and
/// (customer, date, hour) combinations.
pub fn hourly_distribution(rows: &[&Transaction]) -> HourlyDistribution {
    let reservations: HashSet<(&str, NaiveDate, u32)> = rows
        .iter()
        .map(|tx| (tx.reservation_id.as_str(), tx.date, tx.hour()))
        .collect();
    let customers: HashSet<(&str, NaiveDate, u32)> = rows
        .iter()
        .map(|tx| (tx.customer_id.as_str(), tx.date, tx.hour()))
        .collect();
    HourlyDistribution {
        reservations: HourlyHistogram::from_hours(reservations.into_iter().map(|(_, _, h)| h)),
        customers: HourlyHistogram::from_hours(customers.into_iter().map(|(_, _, h)| h)),
    }
}
