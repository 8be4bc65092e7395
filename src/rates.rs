// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::daycount::DayCountConvention;

/// How an annual nominal rate is scaled down to one payment period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    Exponential,
    Linear,
}

impl Compounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compounding::Exponential => "EXPONENTIAL",
            Compounding::Linear => "LINEAR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EXPONENTIAL" => Some(Compounding::Exponential),
            "LINEAR" => Some(Compounding::Linear),
            _ => None,
        }
    }
}

/// Periodic rate for a period of `days_in_period` days.
///
/// `annual_rate_percent` is the quoted figure (12.5 means 12.5%).
/// Exponential: (1 + r)^(days/divisor) - 1. Linear: r * days/divisor.
pub fn periodic_rate(
    annual_rate_percent: Decimal,
    compounding: Compounding,
    convention: DayCountConvention,
    days_in_period: i64,
) -> Decimal {
    let annual = annual_rate_percent / dec!(100);
    let fraction = Decimal::from(days_in_period) / Decimal::from(convention.yearly_divisor());
    match compounding {
        Compounding::Exponential => (Decimal::ONE + annual).powd(fraction) - Decimal::ONE,
        Compounding::Linear => annual * fraction,
    }
}
