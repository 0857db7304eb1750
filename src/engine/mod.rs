// ============================================================================
// Engine Module
// Contains the masking and caret planning logic plus the field controller
// ============================================================================

pub mod caret;
mod currency_field;
pub mod masker;

pub use caret::{
    base_length, plan_blur_caret, plan_caret, plan_focus_caret, plan_initial_caret,
    plan_selection, EditableBounds, SeparatorPattern,
};
pub use currency_field::CurrencyField;
pub use masker::{mask, mask_initial, unmask};
