// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::charts::{ChartBundle, ChartSpec};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use comfy_table::Table;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let selection = session.selection(sub)?;
    let bundle = session.dashboard.recompute(&selection);
    if !maybe_print_json(json_flag, jsonl_flag, &bundle)? {
        print_bundle(&bundle);
    }
    Ok(())
}

fn print_bundle(bundle: &ChartBundle) {
    for (name, chart) in bundle.iter() {
        println!("{} [{}] ({})", chart.title, name.key(), chart.y_title);
        if chart.point_count() == 0 {
            println!("(no data)\n");
            continue;
        }
        println!("{}\n", chart_table(chart));
    }
}

/// One row per x value, one column per series.
pub fn chart_table(chart: &ChartSpec) -> Table {
    let mut headers: Vec<&str> = vec![chart.x_title.as_str()];
    headers.extend(chart.series.iter().map(|s| s.name.as_str()));

    let longest = chart
        .series
        .iter()
        .max_by_key(|s| s.len())
        .map(|s| &s.x);
    let mut rows = Vec::new();
    if let Some(x) = longest {
        for i in 0..x.len() {
            let mut row = vec![x.label(i).unwrap_or_default()];
            for s in &chart.series {
                row.push(s.y.get(i).map(|v| format!("{:.2}", v)).unwrap_or_default());
            }
            rows.push(row);
        }
    }
    pretty_table(&headers, rows)
}
