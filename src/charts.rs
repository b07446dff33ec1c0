// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Declarative chart specs consumed by the renderer.
//!
//! Assemblers here only map aggregated tables onto series, axis titles and
//! fill directives. All numbers are computed in [`crate::aggregate`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::aggregate::{DailyCounts, HOURS, HourlyDistribution, HourlyHistogram, MarginRow, MoneyRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChartName {
    #[serde(rename = "qty-graph")]
    Counts,
    #[serde(rename = "time-graph")]
    Hourly,
    #[serde(rename = "raw-money-graph")]
    RawMoney,
    #[serde(rename = "margin-graph")]
    Margin,
}

impl ChartName {
    pub fn key(self) -> &'static str {
        match self {
            ChartName::Counts => "qty-graph",
            ChartName::Hourly => "time-graph",
            ChartName::RawMoney => "raw-money-graph",
            ChartName::Margin => "margin-graph",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "histogram")]
    Histogram,
}

/// Shade the area between this series and the one drawn before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fill {
    #[serde(rename = "tonexty")]
    ToNextY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValues {
    Dates(Vec<NaiveDate>),
    Hours(Vec<u32>),
}

impl XValues {
    pub fn len(&self) -> usize {
        match self {
            XValues::Dates(v) => v.len(),
            XValues::Hours(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self, i: usize) -> Option<String> {
        match self {
            XValues::Dates(v) => v.get(i).map(|d| d.to_string()),
            XValues::Hours(v) => v.get(i).map(|h| h.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: XValues,
    pub y: Vec<f64>,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Series {
    fn line(name: &str, color: &str, x: Vec<NaiveDate>, y: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            x: XValues::Dates(x),
            y,
            mode: Mode::LinesMarkers,
            fill: None,
            color: Some(color.to_string()),
            opacity: None,
        }
    }

    fn histogram(name: &str, hist: &HourlyHistogram) -> Self {
        let (x, y) = if hist.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            ((0..HOURS as u32).collect(), hist.probabilities.to_vec())
        };
        Self {
            name: name.to_string(),
            x: XValues::Hours(x),
            y,
            mode: Mode::Histogram,
            fill: None,
            color: None,
            opacity: Some(0.75),
        }
    }

    fn filled(mut self, fill: Option<Fill>) -> Self {
        self.fill = fill;
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
            bar_mode: None,
            series: Vec::new(),
        }
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

/// One chart per name wired into the current layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartBundle {
    charts: BTreeMap<ChartName, ChartSpec>,
}

impl ChartBundle {
    pub fn insert(&mut self, name: ChartName, spec: ChartSpec) {
        self.charts.insert(name, spec);
    }

    pub fn get(&self, name: ChartName) -> Option<&ChartSpec> {
        self.charts.get(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartName, &ChartSpec)> {
        self.charts.iter()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

fn dec(values: impl Iterator<Item = Decimal>) -> Vec<f64> {
    values.map(|d| d.to_f64().unwrap_or_default()).collect()
}

pub fn counts_chart(rows: &[DailyCounts]) -> ChartSpec {
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    let mut chart = ChartSpec::new("Count metrics by day", "date", "qty");
    chart.series.push(Series::line(
        "reservations",
        "indigo",
        dates.clone(),
        rows.iter().map(|r| r.reservations as f64).collect(),
    ));
    chart.series.push(Series::line(
        "customers",
        "orange",
        dates,
        rows.iter().map(|r| r.customers as f64).collect(),
    ));
    chart
}

pub fn hourly_chart(dist: &HourlyDistribution) -> ChartSpec {
    let mut chart = ChartSpec::new("Hourly distributions", "hour", "perc.");
    chart.bar_mode = Some(BarMode::Overlay);
    chart
        .series
        .push(Series::histogram("reservations per hour", &dist.reservations));
    chart
        .series
        .push(Series::histogram("unique customers per hour", &dist.customers));
    chart
}

/// Fees, refunds and held amounts. The held amount is shaded against the
/// series below it only for paid transactions.
pub fn money_chart(rows: &[MoneyRow], y_title: &str, paid: bool) -> ChartSpec {
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    let hold_fill = if paid { Some(Fill::ToNextY) } else { None };
    let mut chart = ChartSpec::new("Raw money streams by day", "date", y_title);
    chart.series.push(Series::line(
        "fees",
        "orange",
        dates.clone(),
        dec(rows.iter().map(|r| r.fee)),
    ));
    chart.series.push(Series::line(
        "amount_refunded",
        "tomato",
        dates.clone(),
        dec(rows.iter().map(|r| r.amount_refunded)),
    ));
    chart.series.push(
        Series::line("on hold", "green", dates, dec(rows.iter().map(|r| r.amount)))
            .filled(hold_fill),
    );
    chart
}

pub fn margin_chart(rows: &[MarginRow], y_title: &str) -> ChartSpec {
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    let mut chart = ChartSpec::new("Margin by day", "date", y_title);
    chart.series.push(Series::line(
        "fees",
        "yellow",
        dates.clone(),
        dec(rows.iter().map(|r| r.fee)),
    ));
    chart.series.push(
        Series::line("revenue", "green", dates, dec(rows.iter().map(|r| r.revenue)))
            .filled(Some(Fill::ToNextY)),
    );
    chart
}

/// Margin placeholder for statuses other than Paid.
pub fn empty_margin_chart(y_title: &str) -> ChartSpec {
    ChartSpec::new("Margin by day", "date", y_title)
}
