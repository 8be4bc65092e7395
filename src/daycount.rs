// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Market day-count conventions supported by the engine.
///
/// `Bus252` counts weekdays only; no holiday calendar is applied, which is a
/// documented limitation of the upstream data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCountConvention {
    Thirty360,
    Act360,
    Act365,
    Bus252,
}

impl DayCountConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Bus252 => "BUS/252",
        }
    }

    /// Unrecognized names fall back to `Act360`, the engine's default basis.
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "30/360" => DayCountConvention::Thirty360,
            "ACT/360" => DayCountConvention::Act360,
            "ACT/365" => DayCountConvention::Act365,
            "BUS/252" => DayCountConvention::Bus252,
            _ => DayCountConvention::Act360,
        }
    }

    /// Denominator used when scaling an annual rate down to a period.
    pub fn yearly_divisor(&self) -> i64 {
        match self {
            DayCountConvention::Thirty360 => 360,
            DayCountConvention::Act360 => 360,
            DayCountConvention::Act365 => 365,
            DayCountConvention::Bus252 => 252,
        }
    }
}

/// Day count between two dates under the given convention.
///
/// 30/360 uses the raw date-component formula, so a reversed span yields a
/// negative count; the actual-day conventions behave the same way. BUS/252
/// iterates forward from `start` and therefore yields 0 for a reversed span.
pub fn days_between(start: NaiveDate, end: NaiveDate, convention: DayCountConvention) -> i64 {
    match convention {
        DayCountConvention::Thirty360 => {
            let years = i64::from(end.year()) - i64::from(start.year());
            let months = i64::from(end.month()) - i64::from(start.month());
            let days = i64::from(end.day()) - i64::from(start.day());
            years * 360 + months * 30 + days
        }
        DayCountConvention::Act360 | DayCountConvention::Act365 => {
            (end - start).num_days()
        }
        DayCountConvention::Bus252 => {
            let mut count = 0;
            let mut d = start;
            while d < end {
                if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
                    count += 1;
                }
                d = d + Days::new(1);
            }
            count
        }
    }
}
