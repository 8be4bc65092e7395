// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::models::{AmortSystem, ContractType, NewContract, Periodicity};
use crate::registry::ContractRegistry;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(registry: &mut ContractRegistry, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(registry, sub)?,
        Some(("list", sub)) => list(registry, sub)?,
        Some(("show", sub)) => show(registry, sub)?,
        Some(("ledger", sub)) => ledger(registry, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(registry: &mut ContractRegistry, sub: &clap::ArgMatches) -> Result<()> {
    let type_raw = sub.get_one::<String>("type").unwrap();
    let system_raw = sub.get_one::<String>("system").unwrap();
    let periodicity_raw = sub.get_one::<String>("periodicity").unwrap();

    let input = NewContract {
        contract_type: ContractType::parse(type_raw)
            .ok_or_else(|| anyhow!("Unknown contract type '{}'", type_raw))?,
        counterparty: sub.get_one::<String>("counterparty").unwrap().clone(),
        currency: sub.get_one::<String>("currency").unwrap().to_uppercase(),
        principal: parse_decimal(sub.get_one::<String>("principal").unwrap())?,
        annual_rate_percent: parse_decimal(sub.get_one::<String>("rate").unwrap())?,
        start_date: parse_date(sub.get_one::<String>("start").unwrap())?,
        maturity_date: parse_date(sub.get_one::<String>("maturity").unwrap())?,
        system: AmortSystem::parse(system_raw)
            .ok_or_else(|| anyhow!("Unknown amortization system '{}'", system_raw))?,
        periodicity: Periodicity::parse(periodicity_raw)
            .ok_or_else(|| anyhow!("Unknown periodicity '{}'", periodicity_raw))?,
        installment_count: *sub.get_one::<u32>("installments").unwrap(),
    };
    let id = registry.create_contract(&input)?;
    println!(
        "Created {} ({} {} with '{}', {} x {})",
        id,
        input.system.as_str(),
        fmt_money(&input.principal, &input.currency),
        input.counterparty,
        input.installment_count,
        input.periodicity.as_str()
    );
    Ok(())
}

fn list(registry: &ContractRegistry, sub: &clap::ArgMatches) -> Result<()> {
    let contracts = registry.list()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &contracts)? {
        let rows: Vec<Vec<String>> = contracts
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.contract_type.as_str().to_string(),
                    c.counterparty.clone(),
                    c.system.as_str().to_string(),
                    fmt_money(&c.principal, &c.currency),
                    fmt_money(&c.current_balance, &c.currency),
                    c.status.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Type", "Counterparty", "System", "Principal", "Balance", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

fn show(registry: &ContractRegistry, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let c = registry.get(id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &c)? {
        let rows = vec![
            vec!["Id".into(), c.id.clone()],
            vec!["Type".into(), c.contract_type.as_str().into()],
            vec!["Counterparty".into(), c.counterparty.clone()],
            vec!["Currency".into(), c.currency.clone()],
            vec!["Principal".into(), c.principal.to_string()],
            vec!["Annual rate %".into(), c.annual_rate_percent.to_string()],
            vec!["Start".into(), c.start_date.to_string()],
            vec!["Maturity".into(), c.maturity_date.to_string()],
            vec!["System".into(), c.system.as_str().into()],
            vec!["Periodicity".into(), c.periodicity.as_str().into()],
            vec!["Installments".into(), c.installment_count.to_string()],
            vec!["Balance".into(), c.current_balance.to_string()],
            vec!["Status".into(), c.status.as_str().into()],
            vec!["Created".into(), c.created_at.to_string()],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}

fn ledger(registry: &ContractRegistry, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let entries = registry.ledger(id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.operation.as_str().to_string(),
                    e.amount_delta.to_string(),
                    e.balance_after.to_string(),
                    e.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Operation", "Delta", "Balance", "Description"], rows)
        );
    }
    Ok(())
}
