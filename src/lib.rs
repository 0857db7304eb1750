// ============================================================================
// Currency Mask Library
// Masked monetary input with stable caret placement
// ============================================================================

//! # Currency Mask
//!
//! Turns whatever a user types into a currency field into a canonical,
//! grouped display string plus the number it represents, and works out where
//! the caret belongs after the display string changes.
//!
//! ## Features
//!
//! - **Masking** of free-form text or numbers into `1,234.56`-style amounts
//! - **Configurable separators, precision, prefix and suffix**
//! - **Sign toggling** by typing `-` anywhere in the field
//! - **Caret planning** that skips the sign, prefix and suffix and follows
//!   inserted separators
//! - **Headless field controller** that threads caret state for a host input
//!
//! ## Example
//!
//! ```rust
//! use currency_mask::prelude::*;
//!
//! let config = FormattingConfig::default().with_prefix("$");
//!
//! // The user typed a `6` at the end of "$123.45"
//! let result = mask("$123.456", &config);
//! assert_eq!(result.masked_value, "$1,234.56");
//! assert_eq!(result.value, 1234.56);
//!
//! // The caret was after the `6`; a new separator pushes it one further
//! let caret = plan_caret("$123.45", &result.masked_value, 8, &config);
//! assert_eq!(caret, SelectionRange::collapsed(9));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use domain::{FormattingConfig, MaskResult, RawValue, SelectionRange};
pub use engine::{
    mask, mask_initial, plan_blur_caret, plan_caret, plan_focus_caret, plan_initial_caret,
    plan_selection,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigResult, FormattingConfig, MaskResult, RawValue, SelectionRange,
    };
    pub use crate::engine::{
        mask, mask_initial, plan_blur_caret, plan_caret, plan_focus_caret, plan_initial_caret,
        plan_selection, CurrencyField,
    };
    pub use crate::interfaces::{
        ChangeHandler, FieldEvent, HeadlessInput, LoggingChangeHandler, NoOpChangeHandler,
        SelectionHost,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_editing() {
        let config = FormattingConfig::default()
            .with_prefix("$")
            .with_suffix(" s")
            .with_allow_negative(true);
        let mut input = HeadlessInput::new();
        let mut field = CurrencyField::new(config, RawValue::Empty, Arc::new(NoOpChangeHandler));

        field.mount(&mut input, true);
        assert_eq!(input.value(), "");

        // first keystroke into a blank field
        input.insert("5");
        field.input(&mut input);
        assert_eq!(input.value(), "$0.05 s");
        assert_eq!(input.selection(), SelectionRange::collapsed(5));

        for key in ["0", "0", "0", "0"] {
            input.insert(key);
            field.input(&mut input);
        }
        assert_eq!(input.value(), "$500.00 s");
        assert_eq!(input.selection(), SelectionRange::collapsed(7));

        input.insert("0");
        field.input(&mut input);
        assert_eq!(input.value(), "$5,000.00 s");
        assert_eq!(input.selection(), SelectionRange::collapsed(9));

        // flip the sign from the middle of the amount
        input.select(SelectionRange::collapsed(3));
        input.insert("-");
        field.input(&mut input);
        assert_eq!(input.value(), "-$5,000.00 s");
        assert_eq!(field.value(), -5000.0);

        // focus again with select-all
        let selected = field.focus(&mut input, true);
        assert_eq!(selected, SelectionRange::new(2, 10));
    }

    #[test]
    fn test_pure_functions_agree_with_field() {
        let config = FormattingConfig::euro();
        let mut input = HeadlessInput::new();
        let mut field = CurrencyField::new(config.clone(), 1234.5, Arc::new(NoOpChangeHandler));
        field.mount(&mut input, true);

        let before = input.value().to_string();
        input.insert("9");
        let raw = input.value().to_string();
        let caret = input.selection().end;
        let planned = field.input(&mut input);

        let expected = mask(raw.as_str(), &config);
        assert_eq!(field.masked_value(), expected.masked_value);
        assert_eq!(planned, plan_caret(&before, &expected.masked_value, caret, &config));
        assert_eq!(input.value(), "12.345,09 €");
    }
}
