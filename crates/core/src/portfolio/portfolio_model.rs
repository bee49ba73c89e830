//! Portfolio domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level roll-up of invested value, current value, and P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    /// `total_current_value - total_invested`; negative for a losing book.
    pub total_pnl: Decimal,
    /// P&L over invested value as a percentage, 0 when nothing is invested.
    pub total_pnl_percentage: Decimal,
}
