// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Loanbook", "loanbook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("loanbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS contracts(
        id TEXT PRIMARY KEY,
        contract_type TEXT NOT NULL CHECK(contract_type IN ('CAPTADO','CEDIDO')),
        counterparty TEXT NOT NULL,
        currency TEXT NOT NULL,
        principal TEXT NOT NULL,
        annual_rate_percent TEXT NOT NULL,
        start_date TEXT NOT NULL,
        maturity_date TEXT NOT NULL,
        system TEXT NOT NULL,
        periodicity TEXT NOT NULL,
        installment_count INTEGER NOT NULL,
        current_balance TEXT NOT NULL,
        status TEXT NOT NULL CHECK(status IN ('ACTIVE','SETTLED')),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    -- Append-only; rows are never updated or deleted by the engine.
    CREATE TABLE IF NOT EXISTS ledger_entries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        contract_id TEXT NOT NULL,
        date TEXT NOT NULL,
        operation TEXT NOT NULL CHECK(operation IN ('ORIGINATION','PAYMENT')),
        amount_delta TEXT NOT NULL,
        balance_after TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        FOREIGN KEY(contract_id) REFERENCES contracts(id) ON DELETE CASCADE
    );
    CREATE INDEX IF NOT EXISTS idx_ledger_contract ON ledger_entries(contract_id, id);
    "#,
    )?;
    Ok(())
}
