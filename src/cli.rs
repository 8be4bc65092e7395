// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("loanbook")
        .about("Loan contract ledger and amortization schedules (PRICE/SAC)")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("contract")
                .about("Manage loan contracts")
                .subcommand(
                    Command::new("add")
                        .about("Create a contract (appends its origination entry)")
                        .arg(Arg::new("type").long("type").required(true).help("CAPTADO or CEDIDO"))
                        .arg(Arg::new("counterparty").long("counterparty").required(true))
                        .arg(Arg::new("currency").long("currency").default_value("BRL").help("BRL/USD/EUR/GBP"))
                        .arg(Arg::new("principal").long("principal").required(true))
                        .arg(Arg::new("rate").long("rate").required(true).help("Annual rate percent, e.g. 12.5"))
                        .arg(Arg::new("start").long("start").required(true).help("Start date YYYY-MM-DD"))
                        .arg(Arg::new("maturity").long("maturity").required(true).help("Maturity date YYYY-MM-DD"))
                        .arg(Arg::new("system").long("system").required(true).help("PRICE or SAC"))
                        .arg(
                            Arg::new("periodicity")
                                .long("periodicity")
                                .default_value("MONTHLY")
                                .help("MONTHLY/QUARTERLY/SEMIANNUAL/ANNUAL"),
                        )
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .required(true)
                                .value_parser(clap::value_parser!(u32)),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List contracts")))
                .subcommand(
                    json_flags(Command::new("show").about("Show one contract"))
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    json_flags(Command::new("ledger").about("Show a contract's operation history"))
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("pay")
                .about("Record a payment against a contract")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("date").long("date").required(true).help("Payment date YYYY-MM-DD"))
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            json_flags(
                Command::new("schedule")
                    .about("Project a contract's amortization schedule"),
            )
            .arg(Arg::new("id").required(true))
            .arg(
                Arg::new("convention")
                    .long("convention")
                    .default_value("ACT/360")
                    .help("Day-count convention: 30/360, ACT/360, ACT/365, BUS/252"),
            )
            .arg(
                Arg::new("compounding")
                    .long("compounding")
                    .default_value("EXPONENTIAL")
                    .help("EXPONENTIAL or LINEAR"),
            ),
        )
}
