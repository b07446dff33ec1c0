// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let counts: Vec<_> = session
        .dashboard
        .scooters()
        .iter()
        .map(|(date, n)| json!({ "date": date, "scooters": n }))
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &counts)? {
        let rows = session
            .dashboard
            .scooters()
            .iter()
            .map(|(date, n)| vec![date.to_string(), n.to_string()])
            .collect();
        println!("{}", pretty_table(&["Date", "Scooters"], rows));
    }
    Ok(())
}
