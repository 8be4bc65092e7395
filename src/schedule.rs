// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::daycount::{days_between, DayCountConvention};
use crate::error::EngineError;
use crate::models::{AmortSystem, Periodicity, ScheduleRow};
use crate::rates::{periodic_rate, Compounding};

/// Inputs for building an amortization schedule.
///
/// The periodic rate is derived once, from the day count between `start_date`
/// and the first installment date, and reused for every row. Calendar months
/// vary in length, so this is an approximation; it matches how the running
/// book has always quoted its installments, and changing it would reprice
/// every open contract.
#[derive(Debug, Clone)]
pub struct ScheduleTerms {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub installment_count: u32,
    pub start_date: NaiveDate,
    pub periodicity: Periodicity,
    pub system: AmortSystem,
    pub convention: DayCountConvention,
    pub compounding: Compounding,
}

fn round2(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `start + i` payment periods, clipping to the end of month when the target
/// month is shorter (e.g. Jan 31 -> Feb 28).
fn payment_date(
    start: NaiveDate,
    installment: u32,
    periodicity: Periodicity,
) -> Result<NaiveDate, EngineError> {
    start
        .checked_add_months(Months::new(installment * periodicity.months()))
        .ok_or_else(|| {
            EngineError::InvalidConfiguration(format!(
                "payment date out of range: {} + {} periods",
                start, installment
            ))
        })
}

/// Builds the full schedule eagerly. Dispatches on `terms.system`.
pub fn build(terms: &ScheduleTerms) -> Result<Vec<ScheduleRow>, EngineError> {
    let first = payment_date(terms.start_date, 1, terms.periodicity)?;
    let days = days_between(terms.start_date, first, terms.convention);
    let rate = periodic_rate(
        terms.annual_rate_percent,
        terms.compounding,
        terms.convention,
        days,
    );
    match terms.system {
        AmortSystem::Price => price_rows(terms, rate),
        AmortSystem::Sac => sac_rows(terms, rate),
    }
}

/// French system: constant total installment, shifting interest/principal
/// split. Rounding drift is left on the final row rather than corrected; the
/// residual stays within `installment_count` cents of zero.
fn price_rows(terms: &ScheduleTerms, rate: Decimal) -> Result<Vec<ScheduleRow>, EngineError> {
    let n = terms.installment_count;
    let pmt = if rate.is_zero() {
        terms.principal / Decimal::from(n)
    } else {
        let growth = (Decimal::ONE + rate).powi(i64::from(n));
        terms.principal * (rate * growth) / (growth - Decimal::ONE)
    };

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = terms.principal;
    for i in 1..=n {
        let opening = balance;
        let interest = round2(opening * rate);
        let principal = round2(pmt - interest);
        balance = (opening - principal).max(Decimal::ZERO);
        rows.push(ScheduleRow {
            installment: i,
            payment_date: payment_date(terms.start_date, i, terms.periodicity)?,
            opening_balance: opening,
            payment: round2(pmt),
            interest,
            principal,
            closing_balance: balance,
        });
    }
    Ok(rows)
}

/// Constant amortization: fixed principal portion, so the total installment
/// decreases as the balance runs off.
fn sac_rows(terms: &ScheduleTerms, rate: Decimal) -> Result<Vec<ScheduleRow>, EngineError> {
    let n = terms.installment_count;
    let principal_part = round2(terms.principal / Decimal::from(n));

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = terms.principal;
    for i in 1..=n {
        let opening = balance;
        let interest = round2(opening * rate);
        balance = (opening - principal_part).max(Decimal::ZERO);
        rows.push(ScheduleRow {
            installment: i,
            payment_date: payment_date(terms.start_date, i, terms.periodicity)?,
            opening_balance: opening,
            payment: principal_part + interest,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }
    Ok(rows)
}

/// Tolerance for accumulated per-row rounding over a full schedule: one cent
/// per installment.
pub fn rounding_tolerance(installment_count: u32) -> Decimal {
    Decimal::from(installment_count) * dec!(0.01)
}
