//! Will module - structured will data and the draft-document composer.

mod will_composer;
mod will_model;

pub use will_composer::*;
pub use will_model::*;
