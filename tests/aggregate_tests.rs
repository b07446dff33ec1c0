// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use std::collections::BTreeMap;

use common::{d, date, tx, week_dataset};
use paydash::aggregate::{
    HourlyHistogram, daily_counts, hourly_distribution, margin_by_date, money_by_date,
    per_scooter,
};
use paydash::fleet::{FleetSettings, ScooterCounts};
use paydash::slice::Aggregation;
use paydash::Transaction;
use rust_decimal::Decimal;

fn refs(rows: &[Transaction]) -> Vec<&Transaction> {
    rows.iter().collect()
}

#[test]
fn daily_counts_are_distinct_and_date_ordered() {
    let rows = vec![
        tx("r2", "c1", "2021-01-02 10:00:00", "Paid", "1", "0", "0"),
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", "1", "0", "0"),
        tx("r1", "c1", "2021-01-01 10:30:00", "Paid", "1", "0", "0"),
        tx("r3", "c2", "2021-01-01 12:00:00", "Paid", "1", "0", "0"),
    ];
    let counts = daily_counts(&refs(&rows));
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].date, date("2021-01-01"));
    assert_eq!(counts[0].reservations, 2);
    assert_eq!(counts[0].customers, 2);
    assert_eq!(counts[1].date, date("2021-01-02"));
    assert_eq!(counts[1].reservations, 1);
    assert_eq!(counts[1].customers, 1);
}

#[test]
fn counts_never_exceed_filtered_rows_per_date() {
    let rows = week_dataset();
    for c in daily_counts(&refs(&rows)) {
        let on_date = rows.iter().filter(|t| t.date == c.date).count();
        assert!(c.reservations <= on_date);
        assert!(c.customers <= on_date);
        assert!(c.customers >= 1);
    }
}

#[test]
fn money_sums_and_means_per_date() {
    let rows = vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", "100", "0", "10"),
        tx("r2", "c2", "2021-01-01 11:00:00", "Paid", "50", "20", "20"),
        tx("r3", "c2", "2021-01-02 11:00:00", "Paid", "7.5", "0", "1.25"),
    ];
    let sums = money_by_date(&refs(&rows), Aggregation::Sum);
    assert_eq!(sums.len(), 2);
    assert_eq!(sums[0].fee, d("30"));
    assert_eq!(sums[0].amount_refunded, d("20"));
    assert_eq!(sums[0].amount, d("150"));
    assert_eq!(sums[1].amount, d("7.5"));

    let means = money_by_date(&refs(&rows), Aggregation::Mean);
    assert_eq!(means[0].fee, d("15"));
    assert_eq!(means[0].amount_refunded, d("10"));
    assert_eq!(means[0].amount, d("75"));
    assert_eq!(means[1].fee, d("1.25"));
}

#[test]
fn margin_revenue_is_amount_minus_refund() {
    let rows = vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", "100", "25", "10"),
        tx("r2", "c2", "2021-01-01 11:00:00", "Paid", "40", "0", "4"),
    ];
    let margin = margin_by_date(&refs(&rows), Aggregation::Sum);
    assert_eq!(margin.len(), 1);
    assert_eq!(margin[0].fee, d("14"));
    assert_eq!(margin[0].revenue, d("115"));

    let mean = margin_by_date(&refs(&rows), Aggregation::Mean);
    assert_eq!(mean[0].revenue, d("57.5"));
}

#[test]
fn empty_input_gives_empty_tables() {
    let none: Vec<&Transaction> = Vec::new();
    assert!(daily_counts(&none).is_empty());
    assert!(money_by_date(&none, Aggregation::Sum).is_empty());
    assert!(margin_by_date(&none, Aggregation::Mean).is_empty());
}

#[test]
fn hourly_deduplicates_before_binning() {
    let rows = vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", "1", "0", "0"),
        tx("r1", "c1", "2021-01-01 10:30:00", "Paid", "1", "0", "0"),
        tx("r2", "c1", "2021-01-01 10:45:00", "Paid", "1", "0", "0"),
        tx("r3", "c2", "2021-01-01 12:00:00", "Paid", "1", "0", "0"),
    ];
    let dist = hourly_distribution(&refs(&rows));

    assert_eq!(dist.reservations.total, 3);
    assert!((dist.reservations.probabilities[10] - 2.0 / 3.0).abs() < 1e-12);
    assert!((dist.reservations.probabilities[12] - 1.0 / 3.0).abs() < 1e-12);

    assert_eq!(dist.customers.total, 2);
    assert_eq!(dist.customers.probabilities[10], 0.5);
    assert_eq!(dist.customers.probabilities[12], 0.5);
}

#[test]
fn hourly_mass_is_one_or_zero() {
    let rows = week_dataset();
    let dist = hourly_distribution(&refs(&rows));
    assert!((dist.reservations.mass() - 1.0).abs() < 1e-9);
    assert!((dist.customers.mass() - 1.0).abs() < 1e-9);

    let empty = HourlyHistogram::from_hours(Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.mass(), 0.0);
}

#[test]
fn per_scooter_divides_by_the_count_of_each_date() {
    let rows = week_dataset();
    let raw = money_by_date(&refs(&rows), Aggregation::Sum);
    let scooters = ScooterCounts::generate(
        &[date("2021-01-01"), date("2021-01-02"), date("2021-01-03")],
        &FleetSettings {
            seed: Some(11),
            ..FleetSettings::default()
        },
    )
    .unwrap();

    // Dates are looked up by value, so reversing the table changes nothing.
    let mut reversed = raw.clone();
    reversed.reverse();
    let normalized = per_scooter(reversed, &scooters);

    for n in &normalized {
        let r = raw.iter().find(|r| r.date == n.date).unwrap();
        let count = Decimal::from(scooters.get(&n.date).unwrap());
        assert_eq!(n.fee, r.fee / count);
        assert_eq!(n.amount_refunded, r.amount_refunded / count);
        assert_eq!(n.amount, r.amount / count);
    }
}

#[test]
fn per_scooter_skips_zero_and_missing_counts() {
    let rows = week_dataset();
    let raw = margin_by_date(&refs(&rows), Aggregation::Sum);
    let scooters = ScooterCounts::from_map(BTreeMap::from([
        (date("2021-01-01"), 0),
        (date("2021-01-02"), 4),
    ]));
    let normalized = per_scooter(raw.clone(), &scooters);

    assert_eq!(normalized[0], raw[0]);
    assert_eq!(normalized[1].revenue, raw[1].revenue / Decimal::from(4));
    assert_eq!(normalized[2], raw[2]);
}

#[test]
fn scooter_counts_cover_every_date_within_range() {
    let dates: Vec<_> = (1..=20)
        .map(|day| date(&format!("2021-02-{:02}", day)))
        .collect();
    let settings = FleetSettings {
        seed: Some(3),
        ..FleetSettings::default()
    };
    let a = ScooterCounts::generate(&dates, &settings).unwrap();
    let b = ScooterCounts::generate(&dates, &settings).unwrap();
    assert_eq!(a.len(), dates.len());
    assert_eq!(a, b);
    assert!(a.iter().all(|(_, n)| (5..=10).contains(n)));
}

#[test]
fn fleet_settings_reject_bad_ranges() {
    let zero = FleetSettings {
        min: 0,
        ..FleetSettings::default()
    };
    assert!(ScooterCounts::generate(&[], &zero).is_err());

    let inverted = FleetSettings {
        min: 9,
        max: 4,
        seed: None,
    };
    assert!(inverted.validate().is_err());
}

const HALF_MAX: &str = "50000000000000000000000000000";

#[test]
fn money_sum_skips_rows_that_would_overflow() {
    let rows = vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", HALF_MAX, "0", "1"),
        tx("r2", "c2", "2021-01-01 11:00:00", "Paid", HALF_MAX, "0", "1"),
        tx("r3", "c2", "2021-01-02 11:00:00", "Paid", "7", "0", "1"),
    ];
    let sums = money_by_date(&refs(&rows), Aggregation::Sum);
    assert_eq!(sums.len(), 2);
    assert_eq!(sums[0].amount, d(HALF_MAX));
    assert_eq!(sums[0].fee, d("1"));
    assert_eq!(sums[1].amount, d("7"));

    let means = money_by_date(&refs(&rows), Aggregation::Mean);
    assert_eq!(means[0].amount, d(HALF_MAX));
    assert_eq!(means[0].fee, d("1"));
}

#[test]
fn margin_skips_rows_whose_revenue_overflows() {
    let negative = format!("-{HALF_MAX}");
    let rows = vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", HALF_MAX, &negative, "3"),
        tx("r2", "c2", "2021-01-02 11:00:00", "Paid", "40", "10", "4"),
    ];
    assert!(rows[0].revenue().is_none());

    let margin = margin_by_date(&refs(&rows), Aggregation::Sum);
    assert_eq!(margin.len(), 1);
    assert_eq!(margin[0].date, date("2021-01-02"));
    assert_eq!(margin[0].revenue, d("30"));
    assert_eq!(margin[0].fee, d("4"));
}
