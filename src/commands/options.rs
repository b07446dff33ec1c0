// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::models::{DEFAULT_STATUS, Layout};
use crate::slice::MetricSlice;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SliceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Values offered by each filter control of the current layout.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    /// Chart keys wired into the layout.
    pub charts: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slices: Vec<SliceOption>,
    pub statuses: Vec<String>,
    pub default_status: &'static str,
    pub customer_ids: Vec<String>,
}

pub fn collect(session: &Session) -> FilterOptions {
    let ds = session.dashboard.dataset();
    let slices = match session.dashboard.layout() {
        Layout::Full => MetricSlice::ALL
            .iter()
            .map(|s| SliceOption {
                value: s.as_str(),
                label: s.label(),
            })
            .collect(),
        Layout::Compact => Vec::new(),
    };
    FilterOptions {
        charts: session.dashboard.charts().iter().map(|c| c.key()).collect(),
        slices,
        statuses: ds.statuses().to_vec(),
        default_status: DEFAULT_STATUS,
        customer_ids: ds.customer_ids().to_vec(),
    }
}

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let opts = collect(session);
    if maybe_print_json(json_flag, jsonl_flag, &opts)? {
        return Ok(());
    }
    println!("charts: {}", opts.charts.join(", "));
    if !opts.slices.is_empty() {
        let rows = opts
            .slices
            .iter()
            .map(|s| vec![s.value.to_string(), s.label.to_string()])
            .collect();
        println!("{}", pretty_table(&["Slice", "Label"], rows));
    }
    let rows = opts
        .statuses
        .iter()
        .map(|s| {
            let mark = if s == DEFAULT_STATUS { "default" } else { "" };
            vec![s.clone(), mark.to_string()]
        })
        .collect();
    println!("{}", pretty_table(&["Status", ""], rows));
    println!("{} customer ids", opts.customer_ids.len());
    Ok(())
}
