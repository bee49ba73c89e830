pub mod currency_utils;

pub use currency_utils::format_inr;
