//! Unit tests for investment mutations and filters.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::errors::Error;
use crate::goals::Goal;

fn goal(id: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: format!("Goal {}", id),
        target_amount: dec!(400000),
        target_date: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
    }
}

fn stock_draft(name: &str, goal_id: &str) -> NewInvestment {
    NewInvestment {
        name: name.to_string(),
        category: "Equity".to_string(),
        sub_type: None,
        risk: RiskLevel::Medium,
        invested_value: dec!(38000),
        current_value: dec!(45000),
        goal_id: goal_id.to_string(),
        kind: InvestmentKind::MarketLinked {
            instrument: MarketInstrument::Stock,
            symbol: Some("RELIANCE".to_string()),
            returns: None,
            chart_data: Vec::new(),
            sip_amount: None,
        },
    }
}

fn deposit_draft(name: &str, goal_id: &str) -> NewInvestment {
    NewInvestment {
        name: name.to_string(),
        category: "Fixed Income".to_string(),
        sub_type: Some("Recurring Deposit".to_string()),
        risk: RiskLevel::Low,
        invested_value: dec!(30000),
        current_value: dec!(30500),
        goal_id: goal_id.to_string(),
        kind: InvestmentKind::FixedIncome {
            interest_rate: dec!(7.1),
            monthly_installment: Some(dec!(5000)),
            maturity_date: NaiveDate::from_ymd_opt(2027, 1, 15),
        },
    }
}

#[test]
fn rejects_investment_when_no_goal_exists() {
    let result = add_investment(&[], &[], stock_draft("Reliance Industries", "goal-1"));
    assert!(matches!(result, Err(Error::NoGoalAvailable)));
}

#[test]
fn rejects_investment_linked_to_unknown_goal() {
    let goals = vec![goal("goal-1")];
    let result = add_investment(&[], &goals, stock_draft("Reliance Industries", "goal-2"));
    assert!(matches!(result, Err(Error::ConstraintViolation(_))));
}

#[test]
fn rejects_blank_name() {
    let goals = vec![goal("goal-1")];
    let result = add_investment(&[], &goals, stock_draft("   ", "goal-1"));
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn rejects_negative_values() {
    let goals = vec![goal("goal-1")];
    let mut draft = stock_draft("Reliance Industries", "goal-1");
    draft.invested_value = dec!(-1);
    let result = add_investment(&[], &goals, draft);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn prepends_new_investments_with_fresh_ids() {
    let goals = vec![goal("goal-1")];
    let first = add_investment(&[], &goals, stock_draft("Reliance Industries", "goal-1")).unwrap();
    let second = add_investment(&first, &goals, stock_draft("Tata Consultancy", "goal-1")).unwrap();

    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "Tata Consultancy");
    assert_eq!(second[1].name, "Reliance Industries");
    assert_ne!(second[0].id, second[1].id);
    // the input snapshot is untouched
    assert_eq!(first.len(), 1);
}

#[test]
fn derives_display_type_from_payload() {
    let goals = vec![goal("goal-1")];
    let investments =
        add_investment(&[], &goals, deposit_draft("HDFC Bank RD", "goal-1")).unwrap();
    assert_eq!(
        investments[0].investment_type(),
        InvestmentType::FixedIncome
    );
}

#[test]
fn update_replaces_both_values() {
    let goals = vec![goal("goal-1")];
    let investments =
        add_investment(&[], &goals, stock_draft("Reliance Industries", "goal-1")).unwrap();
    let id = investments[0].id.clone();

    let updated = update_investment_value(&investments, &id, dec!(40000), dec!(52000)).unwrap();
    assert_eq!(updated[0].invested_value, dec!(40000));
    assert_eq!(updated[0].current_value, dec!(52000));
    // everything else is untouched
    assert_eq!(updated[0].name, "Reliance Industries");
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let result = update_investment_value(&[], "missing", dec!(1), dec!(1));
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn reset_clears_the_collection() {
    assert!(reset_investments().is_empty());
}

#[test]
fn filters_compose_type_tab_and_name_search() {
    let goals = vec![goal("goal-1")];
    let investments = add_investment(&[], &goals, stock_draft("Reliance Industries", "goal-1"))
        .and_then(|list| add_investment(&list, &goals, stock_draft("Tata Consultancy", "goal-1")))
        .and_then(|list| add_investment(&list, &goals, deposit_draft("HDFC Bank RD", "goal-1")))
        .unwrap();

    let all = filter_investments(&investments, None, "");
    assert_eq!(all.len(), 3);

    let stocks = filter_investments(&investments, Some(InvestmentType::Stock), "");
    assert_eq!(stocks.len(), 2);

    let searched = filter_investments(&investments, Some(InvestmentType::Stock), "tata");
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].name, "Tata Consultancy");

    let none = filter_investments(&investments, Some(InvestmentType::Crypto), "");
    assert!(none.is_empty());
}
