// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod models;
pub mod query;
pub mod slice;
pub mod utils;

pub use charts::{ChartBundle, ChartName, ChartSpec};
pub use dashboard::{Dashboard, recompute};
pub use dataset::Dataset;
pub use error::{DashError, Result};
pub use fleet::ScooterCounts;
pub use models::{FilterSelection, Layout, Transaction};
pub use slice::MetricSlice;
