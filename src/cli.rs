// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn filter_args() -> [Arg; 3] {
    [
        Arg::new("slice")
            .long("slice")
            .help("Aggregation slice: gross|gross_scooter|mean|mean_scooter"),
        Arg::new("status")
            .long("status")
            .default_value("")
            .help("Transaction status; empty means Paid"),
        Arg::new("customer")
            .long("customer")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .help("Customer id to track; repeat or comma-separate for several"),
    ]
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON entry per line"),
    ]
}

pub fn build_cli() -> Command {
    command!()
        .name("paydash")
        .about("Filter, aggregate and chart payment transactions")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("Transactions CSV (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Settings JSON file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for the synthetic scooter counts"),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .global(true)
                .help("Dashboard layout: full|compact"),
        )
        .subcommand(
            Command::new("charts")
                .about("Recompute the charts for one filter selection")
                .args(filter_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("options")
                .about("List the values offered by each filter control")
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the chart bundle to a file")
                .args(filter_args())
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv"),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the dataset for problems"))
        .subcommand(
            Command::new("scooters")
                .about("Show the per-date scooter counts used for normalization")
                .args(json_args()),
        )
}
