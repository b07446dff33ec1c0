// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid slice '{0}', expected gross|gross_scooter|mean|mean_scooter")]
    InvalidSlice(String),

    #[error("Invalid layout '{0}', expected full|compact")]
    InvalidLayout(String),

    #[error("Unknown format '{0}' (use csv|json)")]
    InvalidFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
