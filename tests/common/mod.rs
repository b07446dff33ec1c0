// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use paydash::Transaction;
use rust_decimal::Decimal;

pub fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Transaction created at `created` (`YYYY-MM-DD HH:MM:SS`), dated on its day.
pub fn tx(
    reservation: &str,
    customer: &str,
    created: &str,
    status: &str,
    amount: &str,
    refunded: &str,
    fee: &str,
) -> Transaction {
    let created_utc = ts(created);
    Transaction {
        reservation_id: reservation.to_string(),
        customer_id: customer.to_string(),
        date: created_utc.date(),
        created_utc,
        status: status.to_string(),
        amount: d(amount),
        amount_refunded: d(refunded),
        fee: d(fee),
    }
}

/// The paid/refunded pair on 2021-01-01.
pub fn two_row_dataset() -> Vec<Transaction> {
    vec![
        tx("r1", "c1", "2021-01-01 10:00:00", "Paid", "100", "0", "10"),
        tx("r2", "c2", "2021-01-01 11:00:00", "Refunded", "50", "50", "5"),
    ]
}

pub fn week_dataset() -> Vec<Transaction> {
    vec![
        tx("r1", "c1", "2021-01-01 08:15:00", "Paid", "100", "0", "10"),
        tx("r2", "c1", "2021-01-01 09:30:00", "Paid", "60", "10", "6"),
        tx("r3", "c2", "2021-01-01 09:45:00", "Paid", "40", "0", "4"),
        tx("r4", "c3", "2021-01-02 18:00:00", "Paid", "80", "0", "8"),
        tx("r5", "c2", "2021-01-02 18:20:00", "Refunded", "30", "30", "3"),
        tx("r6", "c3", "2021-01-03 22:05:00", "Failed", "25", "0", "0"),
        tx("r7", "c1", "2021-01-03 07:00:00", "Paid", "55", "5", "5"),
    ]
}

pub const CSV_HEADER: &str =
    "reservation_id,customer_id,date,created_(utc),status,amount,amount_refunded,fee";
