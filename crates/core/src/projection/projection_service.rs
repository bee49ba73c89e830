//! Wealth projection - a closed-form monthly-compounding simulation.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::projection_model::ProjectionDataPoint;

/// Simulates wealth growth under a constant monthly contribution and a
/// constant annual return.
///
/// Each month the contribution is deposited first and the whole balance
/// then compounds at `annual_return_pct / 100 / 12`. One point is emitted
/// for the start year plus one per elapsed year; rounding to whole units
/// happens only at emission, intermediate months keep full precision.
///
/// Deterministic and idempotent: identical inputs always produce an
/// identical sequence.
pub fn project(
    initial_capital: Decimal,
    monthly_contribution: Decimal,
    annual_return_pct: Decimal,
    years: u32,
    start_year: i32,
) -> Vec<ProjectionDataPoint> {
    let mut points = Vec::with_capacity(years as usize + 1);
    points.push(ProjectionDataPoint {
        year: start_year,
        value: initial_capital.round_dp(0),
    });

    let monthly_rate = annual_return_pct / dec!(100) / dec!(12);
    let growth = Decimal::ONE + monthly_rate;
    let mut capital = initial_capital;

    for month in 1..=years * 12 {
        capital = (capital + monthly_contribution) * growth;
        if month % 12 == 0 {
            points.push(ProjectionDataPoint {
                year: start_year + (month / 12) as i32,
                value: capital.round_dp(0),
            });
        }
    }

    points
}

/// [`project`] anchored at the current calendar year.
pub fn project_from_now(
    initial_capital: Decimal,
    monthly_contribution: Decimal,
    annual_return_pct: Decimal,
    years: u32,
) -> Vec<ProjectionDataPoint> {
    project(
        initial_capital,
        monthly_contribution,
        annual_return_pct,
        years,
        Utc::now().year(),
    )
}

/// First year in which the trajectory reaches the target wealth.
///
/// `None` is a normal outcome meaning the target is not reached within the
/// simulated horizon; the caller shows a caution rather than a result.
pub fn find_target_year(series: &[ProjectionDataPoint], target_wealth: Decimal) -> Option<i32> {
    series
        .iter()
        .find(|point| point.value >= target_wealth)
        .map(|point| point.year)
}
