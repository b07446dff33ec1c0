// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{tx, week_dataset};
use paydash::query::{Clause, RowFilter};
use paydash::{FilterSelection, MetricSlice};

#[test]
fn empty_filter_accepts_everything() {
    let rows = week_dataset();
    let filter = RowFilter::new();
    assert_eq!(filter.apply(&rows).len(), rows.len());
    assert_eq!(filter.describe(), "TRUE");
}

#[test]
fn empty_status_resolves_to_paid() {
    let sel = FilterSelection::new(MetricSlice::Gross, "");
    assert_eq!(sel.resolved_status(), "Paid");
    assert!(sel.is_paid());

    let filter = RowFilter::from_selection(&sel);
    assert_eq!(filter.clauses(), &[Clause::StatusEq("Paid".into())]);
    let rows = week_dataset();
    assert!(filter.apply(&rows).iter().all(|t| t.status == "Paid"));
    assert_eq!(filter.apply(&rows).len(), 5);
}

#[test]
fn customer_clause_is_anded_with_status() {
    let rows = week_dataset();
    let sel = FilterSelection::new(MetricSlice::Gross, "Paid").with_customers(["c1", "c3"]);
    let filter = RowFilter::from_selection(&sel);
    let ids: Vec<&str> = filter
        .apply(&rows)
        .iter()
        .map(|t| t.reservation_id.as_str())
        .collect();
    assert_eq!(ids, vec!["r1", "r2", "r4", "r7"]);
    assert_eq!(
        filter.describe(),
        "status = 'Paid' AND customer_id IN ('c1', 'c3')"
    );
}

#[test]
fn empty_customer_set_adds_no_clause() {
    let filter = RowFilter::new().customer_in(Vec::<String>::new());
    assert!(filter.clauses().is_empty());
}

#[test]
fn unknown_values_match_nothing() {
    let rows = week_dataset();
    let unknown_status = RowFilter::new().status_eq("Disputed");
    assert!(unknown_status.apply(&rows).is_empty());

    let unknown_customer = RowFilter::new().status_eq("Paid").customer_in(["nobody"]);
    assert!(unknown_customer.apply(&rows).is_empty());
}

#[test]
fn quotes_in_values_are_matched_literally() {
    let rows = vec![tx("r1", "o'brien", "2021-01-01 10:00:00", "Paid", "1", "0", "0")];
    let filter = RowFilter::new().customer_in(["o'brien"]);
    assert_eq!(filter.apply(&rows).len(), 1);
}
