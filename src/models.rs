// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the contract from the book owner's point of view. Purely a
/// tag; the engine treats both directions the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    /// Borrowed funds.
    Captado,
    /// Lent funds.
    Cedido,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Captado => "CAPTADO",
            ContractType::Cedido => "CEDIDO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CAPTADO" => Some(ContractType::Captado),
            "CEDIDO" => Some(ContractType::Cedido),
            _ => None,
        }
    }
}

/// Amortization system used to build the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortSystem {
    /// French system: constant total installment.
    Price,
    /// Constant amortization: fixed principal, decreasing installment.
    Sac,
}

impl AmortSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmortSystem::Price => "PRICE",
            AmortSystem::Sac => "SAC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PRICE" => Some(AmortSystem::Price),
            "SAC" => Some(AmortSystem::Sac),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodicity {
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Monthly => "MONTHLY",
            Periodicity::Quarterly => "QUARTERLY",
            Periodicity::Semiannual => "SEMIANNUAL",
            Periodicity::Annual => "ANNUAL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "MONTHLY" => Some(Periodicity::Monthly),
            "QUARTERLY" => Some(Periodicity::Quarterly),
            "SEMIANNUAL" => Some(Periodicity::Semiannual),
            "ANNUAL" => Some(Periodicity::Annual),
            _ => None,
        }
    }

    /// Months in one payment period.
    pub fn months(&self) -> u32 {
        match self {
            Periodicity::Monthly => 1,
            Periodicity::Quarterly => 3,
            Periodicity::Semiannual => 6,
            Periodicity::Annual => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Settled,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "ACTIVE",
            ContractStatus::Settled => "SETTLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Some(ContractStatus::Active),
            "SETTLED" => Some(ContractStatus::Settled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Origination,
    Payment,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Origination => "ORIGINATION",
            OperationType::Payment => "PAYMENT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ORIGINATION" => Some(OperationType::Origination),
            "PAYMENT" => Some(OperationType::Payment),
            _ => None,
        }
    }
}

/// Input for contract creation. Core terms only; id, balance and status are
/// derived by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContract {
    pub contract_type: ContractType,
    pub counterparty: String,
    pub currency: String,
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub system: AmortSystem,
    pub periodicity: Periodicity,
    pub installment_count: u32,
}

/// A loan contract: immutable terms plus the running balance and status,
/// which only ledger appends may move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanContract {
    pub id: String,
    pub contract_type: ContractType,
    pub counterparty: String,
    pub currency: String,
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub system: AmortSystem,
    pub periodicity: Periodicity,
    pub installment_count: u32,
    pub current_balance: Decimal,
    pub status: ContractStatus,
    pub created_at: NaiveDateTime,
}

/// One row of a contract's append-only operation history. `balance_after` is
/// the authoritative running-balance snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub operation: OperationType,
    pub amount_delta: Decimal,
    pub balance_after: Decimal,
    pub description: String,
}

/// One installment of an amortization schedule. Pure projection; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub installment: u32,
    pub payment_date: NaiveDate,
    pub opening_balance: Decimal,
    pub payment: Decimal,
    pub interest: Decimal,
    pub principal: Decimal,
    pub closing_balance: Decimal,
}
