// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use loanbook::daycount::DayCountConvention;
use loanbook::models::{AmortSystem, Periodicity};
use loanbook::rates::Compounding;
use loanbook::schedule::{build, rounding_tolerance, ScheduleTerms};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn terms(system: AmortSystem) -> ScheduleTerms {
    ScheduleTerms {
        principal: dec!(100000),
        annual_rate_percent: dec!(12.5),
        installment_count: 12,
        start_date: d(2025, 1, 15),
        periodicity: Periodicity::Monthly,
        system,
        convention: DayCountConvention::Act360,
        compounding: Compounding::Exponential,
    }
}

#[test]
fn price_installments_are_constant() {
    let rows = build(&terms(AmortSystem::Price)).unwrap();
    assert_eq!(rows.len(), 12);
    let first = rows[0].payment;
    for r in &rows {
        assert_eq!(r.payment, first, "installment {}", r.installment);
    }
}

#[test]
fn price_principal_sums_to_face_within_rounding_tolerance() {
    let rows = build(&terms(AmortSystem::Price)).unwrap();
    let total: Decimal = rows.iter().map(|r| r.principal).sum();
    let drift = (total - dec!(100000)).abs();
    assert!(
        drift <= rounding_tolerance(12),
        "principal total {} drifts by {}",
        total,
        drift
    );
}

#[test]
fn price_zero_rate_splits_principal_evenly() {
    let mut t = terms(AmortSystem::Price);
    t.principal = dec!(1200);
    t.annual_rate_percent = Decimal::ZERO;
    let rows = build(&t).unwrap();
    for r in &rows {
        assert_eq!(r.payment, dec!(100.00));
        assert_eq!(r.interest, dec!(0.00));
    }
    assert_eq!(rows.last().unwrap().closing_balance, Decimal::ZERO);
}

#[test]
fn sac_principal_is_constant_and_payments_decrease() {
    let rows = build(&terms(AmortSystem::Sac)).unwrap();
    assert_eq!(rows.len(), 12);
    let part = rows[0].principal;
    for r in &rows {
        assert_eq!(r.principal, part);
    }
    for pair in rows.windows(2) {
        assert!(
            pair[1].payment < pair[0].payment,
            "installment {} did not decrease",
            pair[1].installment
        );
    }
}

#[test]
fn closing_balance_chains_into_next_opening() {
    for system in [AmortSystem::Price, AmortSystem::Sac] {
        let rows = build(&terms(system)).unwrap();
        for pair in rows.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
        assert_eq!(rows[0].opening_balance, dec!(100000));
    }
}

#[test]
fn balance_never_goes_negative() {
    let rows = build(&terms(AmortSystem::Sac)).unwrap();
    for r in &rows {
        assert!(r.closing_balance >= Decimal::ZERO);
    }
}

#[test]
fn monthly_dates_step_one_month_and_clip_to_month_end() {
    let mut t = terms(AmortSystem::Sac);
    t.start_date = d(2025, 1, 31);
    t.installment_count = 4;
    let rows = build(&t).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.payment_date).collect();
    assert_eq!(
        dates,
        vec![d(2025, 2, 28), d(2025, 3, 31), d(2025, 4, 30), d(2025, 5, 31)]
    );
}

#[test]
fn quarterly_semiannual_and_annual_periods() {
    let mut t = terms(AmortSystem::Price);
    t.installment_count = 2;

    t.periodicity = Periodicity::Quarterly;
    let rows = build(&t).unwrap();
    assert_eq!(rows[0].payment_date, d(2025, 4, 15));
    assert_eq!(rows[1].payment_date, d(2025, 7, 15));

    t.periodicity = Periodicity::Semiannual;
    let rows = build(&t).unwrap();
    assert_eq!(rows[0].payment_date, d(2025, 7, 15));
    assert_eq!(rows[1].payment_date, d(2026, 1, 15));

    t.periodicity = Periodicity::Annual;
    t.start_date = d(2024, 2, 29);
    let rows = build(&t).unwrap();
    assert_eq!(rows[0].payment_date, d(2025, 2, 28));
    assert_eq!(rows[1].payment_date, d(2026, 2, 28));
}

#[test]
fn payment_equals_interest_plus_principal_for_sac() {
    let rows = build(&terms(AmortSystem::Sac)).unwrap();
    for r in &rows {
        assert_eq!(r.payment, r.interest + r.principal);
    }
}
