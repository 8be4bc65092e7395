// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::daycount::DayCountConvention;
use crate::rates::Compounding;
use crate::registry::ContractRegistry;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(registry: &ContractRegistry, m: &clap::ArgMatches) -> Result<()> {
    let id = m.get_one::<String>("id").unwrap();
    let convention = DayCountConvention::parse(m.get_one::<String>("convention").unwrap());
    let compounding_raw = m.get_one::<String>("compounding").unwrap();
    let compounding = Compounding::parse(compounding_raw)
        .ok_or_else(|| anyhow!("Unknown compounding '{}'", compounding_raw))?;

    let rows = registry.generate_schedule_with(id, convention, compounding)?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &rows)? {
        return Ok(());
    }

    let mut total_payment = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;
    let mut table_rows: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    for r in &rows {
        total_payment += r.payment;
        total_interest += r.interest;
        total_principal += r.principal;
        table_rows.push(vec![
            r.installment.to_string(),
            r.payment_date.to_string(),
            r.opening_balance.round_dp(2).to_string(),
            r.payment.to_string(),
            r.interest.to_string(),
            r.principal.to_string(),
            r.closing_balance.round_dp(2).to_string(),
        ]);
    }
    table_rows.push(vec![
        "".into(),
        "Total".into(),
        "".into(),
        total_payment.to_string(),
        total_interest.to_string(),
        total_principal.to_string(),
        "".into(),
    ]);
    println!(
        "{}",
        pretty_table(
            &["#", "Date", "Opening", "Payment", "Interest", "Principal", "Closing"],
            table_rows,
        )
    );
    Ok(())
}
