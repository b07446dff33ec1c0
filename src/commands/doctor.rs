// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

const KNOWN_STATUSES: [&str; 3] = ["Paid", "Refunded", "Failed"];

/// Every issue found, as (kind, detail) pairs.
pub fn diagnose(session: &Session) -> Vec<Vec<String>> {
    let ds = session.dashboard.dataset();
    let mut rows = Vec::new();

    // 1) Rows excluded while loading
    for r in ds.rejected() {
        rows.push(vec![
            "rejected_row".into(),
            format!("line {}: {}", r.line, r.reason),
        ]);
    }

    // 2) Dates that per-scooter slices cannot normalize
    let scooters = session.dashboard.scooters();
    for d in ds.dates() {
        match scooters.get(d) {
            None => rows.push(vec!["missing_scooter_count".into(), d.to_string()]),
            Some(0) => rows.push(vec!["zero_scooter_count".into(), d.to_string()]),
            Some(_) => {}
        }
    }

    // 3) Statuses outside the usual set
    for s in ds.statuses() {
        if !KNOWN_STATUSES.contains(&s.as_str()) {
            rows.push(vec!["unknown_status".into(), s.clone()]);
        }
    }

    // 4) Refunds larger than the charged amount
    for tx in ds.rows() {
        if tx.amount_refunded > tx.amount {
            rows.push(vec![
                "refund_exceeds_amount".into(),
                format!(
                    "{} {}: {} > {}",
                    tx.date,
                    tx.reservation_id,
                    fmt_money(&tx.amount_refunded),
                    fmt_money(&tx.amount)
                ),
            ]);
        }
    }
    rows
}

pub fn handle(session: &Session) -> Result<()> {
    let rows = diagnose(session);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
