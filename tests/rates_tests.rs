// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use loanbook::daycount::DayCountConvention;
use loanbook::rates::{periodic_rate, Compounding};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < dec!(0.000000001)
}

#[test]
fn linear_rate_scales_by_day_fraction() {
    // 12% for 30/360 of a year = 1%
    let r = periodic_rate(dec!(12), Compounding::Linear, DayCountConvention::Act360, 30);
    assert!(close(r, dec!(0.01)), "got {}", r);
}

#[test]
fn exponential_rate_over_a_full_year_is_the_annual_rate() {
    let r = periodic_rate(
        dec!(12.5),
        Compounding::Exponential,
        DayCountConvention::Act360,
        360,
    );
    assert!(close(r, dec!(0.125)), "got {}", r);

    let r365 = periodic_rate(
        dec!(12.5),
        Compounding::Exponential,
        DayCountConvention::Act365,
        365,
    );
    assert!(close(r365, dec!(0.125)), "got {}", r365);
}

#[test]
fn exponential_is_below_linear_for_sub_year_periods() {
    for days in [1i64, 21, 30, 90, 180, 252] {
        let exp = periodic_rate(
            dec!(12.5),
            Compounding::Exponential,
            DayCountConvention::Bus252,
            days,
        );
        let lin = periodic_rate(
            dec!(12.5),
            Compounding::Linear,
            DayCountConvention::Bus252,
            days,
        );
        assert!(exp > Decimal::ZERO);
        assert!(exp <= lin, "days={}: {} > {}", days, exp, lin);
    }
}

#[test]
fn zero_annual_rate_gives_zero_periodic_rate() {
    for comp in [Compounding::Exponential, Compounding::Linear] {
        let r = periodic_rate(Decimal::ZERO, comp, DayCountConvention::Thirty360, 30);
        assert!(close(r, Decimal::ZERO));
    }
}

#[test]
fn stable_across_the_supported_input_range() {
    // No panics or wild values for rates up to 100% and periods up to 400 days
    for pct in [dec!(0.01), dec!(1), dec!(25), dec!(100)] {
        for days in [1i64, 60, 400] {
            let r = periodic_rate(pct, Compounding::Exponential, DayCountConvention::Act365, days);
            assert!(r > Decimal::ZERO);
            assert!(r < dec!(3), "pct={} days={}: {}", pct, days, r);
        }
    }
}
