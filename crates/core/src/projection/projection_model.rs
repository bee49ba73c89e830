//! Projection domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single point on the projected wealth trajectory, at yearly
/// granularity. Produced only by the projection engine, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDataPoint {
    pub year: i32,
    /// Projected wealth at the end of the year, rounded to whole units.
    pub value: Decimal,
}
