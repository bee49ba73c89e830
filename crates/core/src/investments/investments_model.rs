//! Investment domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single point in an instrument's performance history, chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub label: String,
    pub value: Decimal,
}

/// Closed set of tracked instrument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Stock,
    Crypto,
    Gold,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
}

/// Market-linked instrument classes (every type except fixed income).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketInstrument {
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Stock,
    Crypto,
    Gold,
}

/// Risk bucket assigned to a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Trailing returns over standard horizons, as percentages.
/// The 3Y/5Y horizons may be absent for young instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailingReturns {
    #[serde(rename = "1Y")]
    pub one_year: Decimal,
    #[serde(rename = "3Y", skip_serializing_if = "Option::is_none")]
    pub three_year: Option<Decimal>,
    #[serde(rename = "5Y", skip_serializing_if = "Option::is_none")]
    pub five_year: Option<Decimal>,
}

/// Type-specific payload of a holding.
///
/// Market-linked holdings carry performance data; fixed-income holdings
/// carry rate and maturity terms. The split keeps invalid combinations
/// (an interest rate on a stock, a price chart on a deposit)
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InvestmentKind {
    #[serde(rename_all = "camelCase")]
    MarketLinked {
        instrument: MarketInstrument,
        #[serde(skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        returns: Option<TrailingReturns>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        chart_data: Vec<ChartDataPoint>,
        /// Systematic monthly purchase amount, if a SIP is running.
        #[serde(skip_serializing_if = "Option::is_none")]
        sip_amount: Option<Decimal>,
    },
    #[serde(rename_all = "camelCase")]
    FixedIncome {
        interest_rate: Decimal,
        #[serde(skip_serializing_if = "Option::is_none")]
        monthly_installment: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        maturity_date: Option<NaiveDate>,
    },
}

/// A tracked holding, always linked to exactly one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    /// Instrument category label, e.g. "Equity" or "Debt".
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub risk: RiskLevel,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    /// Every investment must reference an existing goal.
    pub goal_id: String,
    #[serde(flatten)]
    pub kind: InvestmentKind,
}

impl Investment {
    /// The five-valued display type, derived from the payload.
    pub fn investment_type(&self) -> InvestmentType {
        match &self.kind {
            InvestmentKind::MarketLinked { instrument, .. } => match instrument {
                MarketInstrument::MutualFund => InvestmentType::MutualFund,
                MarketInstrument::Stock => InvestmentType::Stock,
                MarketInstrument::Crypto => InvestmentType::Crypto,
                MarketInstrument::Gold => InvestmentType::Gold,
            },
            InvestmentKind::FixedIncome { .. } => InvestmentType::FixedIncome,
        }
    }
}

/// Input model for creating a new investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    pub category: String,
    pub sub_type: Option<String>,
    pub risk: RiskLevel,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub goal_id: String,
    #[serde(flatten)]
    pub kind: InvestmentKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_with_a_flattened_kind_tag() {
        let investment = Investment {
            id: "inv-1".to_string(),
            name: "Bitcoin".to_string(),
            category: "Cryptocurrency".to_string(),
            sub_type: None,
            risk: RiskLevel::High,
            invested_value: dec!(10000),
            current_value: dec!(15000),
            goal_id: "goal-1".to_string(),
            kind: InvestmentKind::MarketLinked {
                instrument: MarketInstrument::Crypto,
                symbol: Some("BTC".to_string()),
                returns: Some(TrailingReturns {
                    one_year: dec!(120.5),
                    three_year: None,
                    five_year: None,
                }),
                chart_data: Vec::new(),
                sip_amount: None,
            },
        };

        let json = serde_json::to_value(&investment).unwrap();
        assert_eq!(json["investedValue"], 10000.0);
        assert_eq!(json["goalId"], "goal-1");
        assert_eq!(json["kind"], "marketLinked");
        assert_eq!(json["symbol"], "BTC");
        assert_eq!(json["returns"]["1Y"], 120.5);
    }

    #[test]
    fn round_trips_a_fixed_income_holding() {
        let investment = Investment {
            id: "fd-1".to_string(),
            name: "Bajaj Finance FD".to_string(),
            category: "Fixed Income".to_string(),
            sub_type: Some("Fixed Deposit".to_string()),
            risk: RiskLevel::Low,
            invested_value: dec!(100000),
            current_value: dec!(108000),
            goal_id: "goal-1".to_string(),
            kind: InvestmentKind::FixedIncome {
                interest_rate: dec!(8.0),
                monthly_installment: None,
                maturity_date: NaiveDate::from_ymd_opt(2027, 8, 1),
            },
        };

        let json = serde_json::to_string(&investment).unwrap();
        let parsed: Investment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, investment);
        assert_eq!(parsed.investment_type(), InvestmentType::FixedIncome);
    }
}
