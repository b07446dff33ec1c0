// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use paydash::{cli, commands, logging};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    };

    let session = commands::Session::open(&matches)?;
    match name {
        "charts" => commands::charts::handle(&session, sub)?,
        "options" => commands::options::handle(&session, sub)?,
        "export" => commands::export::handle(&session, sub)?,
        "doctor" => commands::doctor::handle(&session)?,
        "scooters" => commands::scooters::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
