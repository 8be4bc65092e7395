// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::ContractStatus;
use crate::registry::ContractRegistry;
use crate::utils::{fmt_money, parse_date, parse_decimal};

pub fn handle(registry: &mut ContractRegistry, m: &clap::ArgMatches) -> Result<()> {
    let id = m.get_one::<String>("id").unwrap();
    let amount = parse_decimal(m.get_one::<String>("amount").unwrap())?;
    let date = parse_date(m.get_one::<String>("date").unwrap())?;
    let note = m.get_one::<String>("note").map(|s| s.as_str());

    registry.record_payment(id, amount, date, note)?;
    let contract = registry.get(id)?;
    println!(
        "Recorded payment of {} on {} against {} (balance: {})",
        fmt_money(&amount, &contract.currency),
        date,
        id,
        fmt_money(&contract.current_balance, &contract.currency)
    );
    if contract.status == ContractStatus::Settled {
        println!("Contract is settled.");
    }
    Ok(())
}
