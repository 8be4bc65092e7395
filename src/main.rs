// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use loanbook::{cli, commands, db, registry::ContractRegistry};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut registry = ContractRegistry::new(db::open_or_init()?);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("contract", sub)) => commands::contracts::handle(&mut registry, sub)?,
        Some(("pay", sub)) => commands::payments::handle(&mut registry, sub)?,
        Some(("schedule", sub)) => commands::schedules::handle(&registry, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
