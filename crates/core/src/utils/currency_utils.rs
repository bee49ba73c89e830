//! Currency display helpers.
//!
//! Internal values are plain decimals; formatting concerns live here only.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Formats an amount with the Indian digit-grouping convention and a
/// rupee-symbol prefix: the last three digits group together, every group
/// before that has two digits (1234567 renders as ₹12,34,567). Fractions
/// are rounded to two places and shown only when non-zero.
pub fn format_inr(amount: Decimal) -> String {
    let negative = amount.is_sign_negative();
    let rounded = amount.abs().round_dp(2);
    let units = rounded.trunc();
    let paise = ((rounded - units) * Decimal::from(100))
        .to_u32()
        .unwrap_or(0);

    let digits = units.to_string();
    let grouped = group_indian(&digits);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&grouped);
    if paise > 0 {
        out.push_str(&format!(".{:02}", paise));
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
