// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filter-change handling: selection in, chart bundle out.

use crate::aggregate::{
    daily_counts, hourly_distribution, margin_by_date, money_by_date, per_scooter,
};
use crate::charts::{
    ChartBundle, ChartName, counts_chart, empty_margin_chart, hourly_chart, margin_chart,
    money_chart,
};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::fleet::{FleetSettings, ScooterCounts};
use crate::models::{FilterSelection, Layout, Transaction};
use crate::query::RowFilter;

/// Read-only state shared by every recompute: the dataset, its scooter
/// counts and the layout being served.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    scooters: ScooterCounts,
    layout: Layout,
}

impl Dashboard {
    pub fn new(dataset: Dataset, scooters: ScooterCounts, layout: Layout) -> Self {
        Self {
            dataset,
            scooters,
            layout,
        }
    }

    /// Build the context, drawing scooter counts for every dataset date.
    pub fn with_fleet(dataset: Dataset, fleet: &FleetSettings, layout: Layout) -> Result<Self> {
        let scooters = ScooterCounts::generate(dataset.dates(), fleet)?;
        Ok(Self::new(dataset, scooters, layout))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scooters(&self) -> &ScooterCounts {
        &self.scooters
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn charts(&self) -> &'static [ChartName] {
        charts_for(self.layout)
    }

    pub fn recompute(&self, selection: &FilterSelection) -> ChartBundle {
        recompute_layout(selection, &self.dataset, &self.scooters, self.layout)
    }
}

fn charts_for(layout: Layout) -> &'static [ChartName] {
    match layout {
        Layout::Full => &[
            ChartName::Counts,
            ChartName::Hourly,
            ChartName::RawMoney,
            ChartName::Margin,
        ],
        Layout::Compact => &[ChartName::Counts, ChartName::Hourly],
    }
}

/// Recompute all four charts for one selection.
pub fn recompute(
    selection: &FilterSelection,
    dataset: &Dataset,
    scooters: &ScooterCounts,
) -> ChartBundle {
    recompute_layout(selection, dataset, scooters, Layout::Full)
}

pub fn recompute_layout(
    selection: &FilterSelection,
    dataset: &Dataset,
    scooters: &ScooterCounts,
    layout: Layout,
) -> ChartBundle {
    let filter = RowFilter::from_selection(selection);
    let rows: Vec<&Transaction> = filter.apply(dataset.rows());
    tracing::debug!(
        filter = %filter.describe(),
        slice = %selection.slice,
        %layout,
        rows = rows.len(),
        "recompute"
    );

    let slice = selection.slice.spec();
    let mut bundle = ChartBundle::default();
    for name in charts_for(layout) {
        let chart = match name {
            ChartName::Counts => counts_chart(&daily_counts(&rows)),
            ChartName::Hourly => hourly_chart(&hourly_distribution(&rows)),
            ChartName::RawMoney => {
                let mut table = money_by_date(&rows, slice.aggregation);
                if slice.per_scooter {
                    table = per_scooter(table, scooters);
                }
                money_chart(&table, slice.y_title, selection.is_paid())
            }
            ChartName::Margin if selection.is_paid() => {
                let mut table = margin_by_date(&rows, slice.aggregation);
                if slice.per_scooter {
                    table = per_scooter(table, scooters);
                }
                margin_chart(&table, slice.y_title)
            }
            ChartName::Margin => empty_margin_chart(slice.y_title),
        };
        bundle.insert(*name, chart);
    }
    bundle
}
