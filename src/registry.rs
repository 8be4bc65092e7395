// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::daycount::DayCountConvention;
use crate::error::EngineError;
use crate::models::{
    AmortSystem, ContractStatus, ContractType, LedgerEntry, LoanContract, NewContract,
    OperationType, Periodicity, ScheduleRow,
};
use crate::rates::Compounding;
use crate::schedule::{self, ScheduleTerms};

/// Balance at or below this is considered fully repaid.
const SETTLEMENT_THRESHOLD: Decimal = dec!(0.01);

/// The registry owns one book of contracts and the only write path into it.
/// Constructed once per session and passed by reference; there is no ambient
/// global state. Exactly one logical writer per contract is assumed, and
/// every ledger append commits in the same transaction as the balance it
/// snapshots.
pub struct ContractRegistry {
    conn: Connection,
}

impl ContractRegistry {
    pub fn new(conn: Connection) -> Self {
        ContractRegistry { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Validates the terms, generates an id, and writes the contract together
    /// with its ORIGINATION ledger entry in one transaction. On any failure
    /// nothing is written.
    pub fn create_contract(&mut self, input: &NewContract) -> Result<String, EngineError> {
        if input.counterparty.trim().is_empty() {
            return Err(EngineError::validation("counterparty must be non-empty"));
        }
        if input.principal <= Decimal::ZERO {
            return Err(EngineError::validation("principal must be positive"));
        }
        if input.annual_rate_percent <= Decimal::ZERO {
            return Err(EngineError::validation("annual rate must be positive"));
        }
        if input.installment_count == 0 {
            return Err(EngineError::validation(
                "installment count must be positive",
            ));
        }
        if input.maturity_date <= input.start_date {
            return Err(EngineError::validation(
                "maturity date must be after start date",
            ));
        }

        let id = generate_id();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO contracts(id, contract_type, counterparty, currency, principal,
                annual_rate_percent, start_date, maturity_date, system, periodicity,
                installment_count, current_balance, status)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
            params![
                id,
                input.contract_type.as_str(),
                input.counterparty.trim(),
                input.currency.to_uppercase(),
                input.principal.to_string(),
                input.annual_rate_percent.to_string(),
                input.start_date,
                input.maturity_date,
                input.system.as_str(),
                input.periodicity.as_str(),
                input.installment_count,
                input.principal.to_string(),
                ContractStatus::Active.as_str(),
            ],
        )?;
        tx.execute(
            "INSERT INTO ledger_entries(contract_id, date, operation, amount_delta, balance_after, description)
             VALUES (?1,?2,?3,?4,?5,?6)",
            params![
                id,
                input.start_date,
                OperationType::Origination.as_str(),
                input.principal.to_string(),
                input.principal.to_string(),
                format!("Origination {} {}", input.currency.to_uppercase(), input.principal),
            ],
        )?;
        tx.commit()?;
        Ok(id)
    }

    /// Appends a PAYMENT entry and moves the running balance, atomically.
    /// Overpayment is allowed and may leave the balance negative; settlement
    /// latches once the balance falls to the threshold and never reverts.
    pub fn record_payment(
        &mut self,
        contract_id: &str,
        amount: Decimal,
        date: NaiveDate,
        description: Option<&str>,
    ) -> Result<(), EngineError> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::validation("payment amount must be positive"));
        }
        let contract = self.get(contract_id)?;
        let new_balance = contract.current_balance - amount;
        let status = if contract.status == ContractStatus::Settled
            || new_balance <= SETTLEMENT_THRESHOLD
        {
            ContractStatus::Settled
        } else {
            ContractStatus::Active
        };

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO ledger_entries(contract_id, date, operation, amount_delta, balance_after, description)
             VALUES (?1,?2,?3,?4,?5,?6)",
            params![
                contract_id,
                date,
                OperationType::Payment.as_str(),
                (-amount).to_string(),
                new_balance.to_string(),
                description.unwrap_or("Payment"),
            ],
        )?;
        tx.execute(
            "UPDATE contracts SET current_balance=?1, status=?2 WHERE id=?3",
            params![new_balance.to_string(), status.as_str(), contract_id],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Projects the amortization schedule with the book's default basis
    /// (ACT/360, exponential). Read-only; never touches the ledger.
    pub fn generate_schedule(&self, contract_id: &str) -> Result<Vec<ScheduleRow>, EngineError> {
        self.generate_schedule_with(
            contract_id,
            DayCountConvention::Act360,
            Compounding::Exponential,
        )
    }

    pub fn generate_schedule_with(
        &self,
        contract_id: &str,
        convention: DayCountConvention,
        compounding: Compounding,
    ) -> Result<Vec<ScheduleRow>, EngineError> {
        let contract = self.get(contract_id)?;
        schedule::build(&ScheduleTerms {
            principal: contract.principal,
            annual_rate_percent: contract.annual_rate_percent,
            installment_count: contract.installment_count,
            start_date: contract.start_date,
            periodicity: contract.periodicity,
            system: contract.system,
            convention,
            compounding,
        })
    }

    pub fn balance(&self, contract_id: &str) -> Result<Decimal, EngineError> {
        Ok(self.get(contract_id)?.current_balance)
    }

    pub fn status(&self, contract_id: &str) -> Result<ContractStatus, EngineError> {
        Ok(self.get(contract_id)?.status)
    }

    pub fn get(&self, contract_id: &str) -> Result<LoanContract, EngineError> {
        let raw: Option<RawContract> = self
            .conn
            .query_row(
                "SELECT id, contract_type, counterparty, currency, principal,
                        annual_rate_percent, start_date, maturity_date, system,
                        periodicity, installment_count, current_balance, status, created_at
                 FROM contracts WHERE id=?1",
                params![contract_id],
                read_raw_contract,
            )
            .optional()?;
        match raw {
            Some(raw) => raw.into_contract(),
            None => Err(EngineError::NotFound(contract_id.to_string())),
        }
    }

    pub fn list(&self) -> Result<Vec<LoanContract>, EngineError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, contract_type, counterparty, currency, principal,
                    annual_rate_percent, start_date, maturity_date, system,
                    periodicity, installment_count, current_balance, status, created_at
             FROM contracts ORDER BY created_at, id",
        )?;
        let raws = stmt
            .query_map([], read_raw_contract)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        raws.into_iter().map(RawContract::into_contract).collect()
    }

    /// Full operation history for one contract, in insertion order.
    pub fn ledger(&self, contract_id: &str) -> Result<Vec<LedgerEntry>, EngineError> {
        // Existence check first so an empty history is NotFound, not [].
        self.get(contract_id)?;
        let mut stmt = self.conn.prepare(
            "SELECT date, operation, amount_delta, balance_after, description
             FROM ledger_entries WHERE contract_id=?1 ORDER BY id",
        )?;
        let raws = stmt
            .query_map(params![contract_id], |r| {
                Ok((
                    r.get::<_, NaiveDate>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, String>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut entries = Vec::with_capacity(raws.len());
        for (date, op, delta, after, description) in raws {
            entries.push(LedgerEntry {
                date,
                operation: OperationType::parse(&op).ok_or_else(|| {
                    EngineError::InvalidConfiguration(format!("unknown operation '{}'", op))
                })?,
                amount_delta: parse_stored_decimal(&delta)?,
                balance_after: parse_stored_decimal(&after)?,
                description,
            });
        }
        Ok(entries)
    }
}

/// `LOAN-<yyyymmddHHMMSS>-<6 alphanumeric>`. Shape matches what downstream
/// consumers already key on; the suffix is best-effort unique.
fn generate_id() -> String {
    let ts = Utc::now().format("%Y%m%d%H%M%S");
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("LOAN-{}-{}", ts, suffix)
}

struct RawContract {
    id: String,
    contract_type: String,
    counterparty: String,
    currency: String,
    principal: String,
    annual_rate_percent: String,
    start_date: NaiveDate,
    maturity_date: NaiveDate,
    system: String,
    periodicity: String,
    installment_count: u32,
    current_balance: String,
    status: String,
    created_at: NaiveDateTime,
}

fn read_raw_contract(r: &rusqlite::Row) -> rusqlite::Result<RawContract> {
    Ok(RawContract {
        id: r.get(0)?,
        contract_type: r.get(1)?,
        counterparty: r.get(2)?,
        currency: r.get(3)?,
        principal: r.get(4)?,
        annual_rate_percent: r.get(5)?,
        start_date: r.get(6)?,
        maturity_date: r.get(7)?,
        system: r.get(8)?,
        periodicity: r.get(9)?,
        installment_count: r.get(10)?,
        current_balance: r.get(11)?,
        status: r.get(12)?,
        created_at: r.get(13)?,
    })
}

fn parse_stored_decimal(s: &str) -> Result<Decimal, EngineError> {
    s.parse::<Decimal>().map_err(|_| {
        EngineError::InvalidConfiguration(format!("stored decimal '{}' is malformed", s))
    })
}

impl RawContract {
    fn into_contract(self) -> Result<LoanContract, EngineError> {
        let bad = |field: &str, value: &str| {
            EngineError::InvalidConfiguration(format!("unknown {} '{}'", field, value))
        };
        Ok(LoanContract {
            contract_type: ContractType::parse(&self.contract_type)
                .ok_or_else(|| bad("contract type", &self.contract_type))?,
            system: AmortSystem::parse(&self.system)
                .ok_or_else(|| bad("amortization system", &self.system))?,
            periodicity: Periodicity::parse(&self.periodicity)
                .ok_or_else(|| bad("periodicity", &self.periodicity))?,
            status: ContractStatus::parse(&self.status)
                .ok_or_else(|| bad("status", &self.status))?,
            principal: parse_stored_decimal(&self.principal)?,
            annual_rate_percent: parse_stored_decimal(&self.annual_rate_percent)?,
            current_balance: parse_stored_decimal(&self.current_balance)?,
            id: self.id,
            counterparty: self.counterparty,
            currency: self.currency,
            start_date: self.start_date,
            maturity_date: self.maturity_date,
            installment_count: self.installment_count,
            created_at: self.created_at,
        })
    }
}
