//! Portfolio aggregation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::investments::Investment;

use super::portfolio_model::PortfolioSummary;

/// Rolls the investment set up into totals and P&L.
///
/// Pure and total: the percentage is defined as 0 when nothing is
/// invested, never NaN or an error.
pub fn portfolio_summary(investments: &[Investment]) -> PortfolioSummary {
    let total_invested: Decimal = investments.iter().map(|inv| inv.invested_value).sum();
    let total_current_value: Decimal = investments.iter().map(|inv| inv.current_value).sum();
    let total_pnl = total_current_value - total_invested;
    let total_pnl_percentage = if total_invested > Decimal::ZERO {
        (total_pnl / total_invested * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };

    PortfolioSummary {
        total_invested,
        total_current_value,
        total_pnl,
        total_pnl_percentage,
    }
}
