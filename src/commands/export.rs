// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::charts::ChartBundle;
use crate::error::DashError;
use anyhow::{Context, Result};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "json".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?
        .trim();
    if fmt != "json" && fmt != "csv" {
        return Err(DashError::InvalidFormat(fmt).into());
    }

    let selection = session.selection(sub)?;
    let bundle = session.dashboard.recompute(&selection);

    match fmt.as_str() {
        "csv" => write_csv(&bundle, out)?,
        _ => std::fs::write(out, serde_json::to_string_pretty(&bundle)?)
            .with_context(|| format!("Write {}", out))?,
    }
    println!("Exported {} charts to {}", bundle.len(), out);
    Ok(())
}

/// Flatten every series point into `chart,series,x,y` rows.
fn write_csv(bundle: &ChartBundle, out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
    wtr.write_record(["chart", "series", "x", "y"])?;
    for (name, chart) in bundle.iter() {
        for s in &chart.series {
            for (i, y) in s.y.iter().enumerate() {
                wtr.write_record([
                    name.key().to_string(),
                    s.name.clone(),
                    s.x.label(i).unwrap_or_default(),
                    y.to_string(),
                ])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
