//! Unit tests for the wealth projection.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn emits_one_point_per_year_plus_the_start() {
    let series = project(dec!(100000), dec!(5000), dec!(10), 5, 2024);
    assert_eq!(series.len(), 6);
    assert_eq!(series[0].year, 2024);
    assert_eq!(series[5].year, 2029);
}

#[test]
fn compounds_monthly_with_contribution_before_growth() {
    // 12% a year is exactly 1% a month; a year of 5000/month from zero:
    // 5000 * 1.01 * (1.01^12 - 1) / 0.01 = 64046.64..., i.e. 64047 rounded
    let series = project(dec!(0), dec!(5000), dec!(12), 1, 2024);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0], ProjectionDataPoint { year: 2024, value: dec!(0) });
    assert_eq!(series[1], ProjectionDataPoint { year: 2025, value: dec!(64047) });
}

#[test]
fn zero_return_accumulates_contributions_linearly() {
    let series = project(dec!(1000), dec!(100), dec!(0), 2, 2024);
    assert_eq!(series[1].value, dec!(2200));
    assert_eq!(series[2].value, dec!(3400));
}

#[test]
fn is_deterministic() {
    let a = project(dec!(292000), dec!(37800), dec!(10), 40, 2024);
    let b = project(dec!(292000), dec!(37800), dec!(10), 40, 2024);
    assert_eq!(a, b);
}

#[test]
fn target_year_is_the_first_point_reaching_the_target() {
    let series = project(dec!(0), dec!(5000), dec!(12), 3, 2024);
    // year 1 ends at 64047, so a 60k target is reached in 2025
    assert_eq!(find_target_year(&series, dec!(60000)), Some(2025));
    assert_eq!(find_target_year(&series, dec!(0)), Some(2024));
}

#[test]
fn unreachable_target_is_a_normal_outcome() {
    let series = project(dec!(0), dec!(5000), dec!(12), 3, 2024);
    assert_eq!(find_target_year(&series, dec!(10000000)), None);
}

proptest! {
    #[test]
    fn identical_inputs_always_produce_identical_series(
        initial in 0u64..1_000_000,
        contribution in 0u64..200_000,
        return_pct in 0u32..25,
        years in 1u32..40,
    ) {
        let first = project(
            Decimal::from(initial),
            Decimal::from(contribution),
            Decimal::from(return_pct),
            years,
            2024,
        );
        let second = project(
            Decimal::from(initial),
            Decimal::from(contribution),
            Decimal::from(return_pct),
            years,
            2024,
        );
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), years as usize + 1);
    }

    #[test]
    fn non_negative_inputs_yield_a_non_decreasing_trajectory(
        initial in 0u64..1_000_000,
        contribution in 0u64..200_000,
        return_pct in 0u32..25,
        years in 1u32..20,
    ) {
        let series = project(
            Decimal::from(initial),
            Decimal::from(contribution),
            Decimal::from(return_pct),
            years,
            2024,
        );
        for pair in series.windows(2) {
            prop_assert!(pair[1].value >= pair[0].value);
        }
        for point in &series {
            prop_assert!(point.value >= Decimal::ZERO);
        }
    }
}
