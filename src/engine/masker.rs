// ============================================================================
// Masker
// Converts free-form text or numbers into a canonical masked amount
// ============================================================================

use crate::domain::{FormattingConfig, MaskResult, RawValue};
use crate::numeric::{fixed_literal, parse_fixed_literal, DigitList};

/// Mask a raw edit or value.
///
/// Every ASCII digit in the input counts as typed input, so the decimal point
/// always sits `precision` digits from the end of the digit stream. Numbers
/// are first rendered with exactly `precision` fractional digits. An odd
/// number of `-` anywhere in the text makes a non-zero amount negative when
/// the configuration allows it.
///
/// Never fails: blank input yields [`MaskResult::empty`], input without
/// digits masks as zero.
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
///
/// let config = FormattingConfig::default().with_allow_negative(true);
/// let result = mask("-1234567", &config);
/// assert_eq!(result.masked_value, "-12,345.67");
/// assert_eq!(result.value, -12345.67);
/// ```
pub fn mask(raw: impl Into<RawValue>, config: &FormattingConfig) -> MaskResult {
    let text = match raw.into() {
        RawValue::Empty => return MaskResult::empty(),
        RawValue::Text(text) if text.is_empty() => return MaskResult::empty(),
        RawValue::Text(text) => text,
        RawValue::Number(value) => fixed_literal(value, config.precision()),
    };
    mask_text(&text, config)
}

/// Mask a value supplied from outside the field (initial or replaced value).
///
/// Unlike [`mask`], text is read as an already formatted amount: it is
/// unmasked with the configured separators, its leading decimal literal is
/// parsed and rounded to `precision` digits, and only then masked. Text that
/// holds no number masks as zero; only [`RawValue::Empty`] yields a blank
/// field.
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
///
/// let config = FormattingConfig::default();
/// assert_eq!(mask_initial("1234567.89999", &config).masked_value, "1,234,567.90");
/// assert_eq!(mask("1234567.89999", &config).masked_value, "1,234,567,899.99");
/// ```
pub fn mask_initial(raw: impl Into<RawValue>, config: &FormattingConfig) -> MaskResult {
    let precision = config.precision();
    let literal = match raw.into() {
        RawValue::Empty => return MaskResult::empty(),
        RawValue::Text(text) => parse_fixed_literal(&unmask(&text, config), precision),
        RawValue::Number(value) => fixed_literal(value, precision),
    };
    mask_text(&literal, config)
}

/// Strip a formatted amount down to digits, `-` and a `.` decimal point.
///
/// A `.` thousand separator is removed before the decimal separator is
/// rewritten to `.`, so `1.234,56` with `,` as decimal separator becomes
/// `1234.56`.
pub fn unmask(text: &str, config: &FormattingConfig) -> String {
    let mut text = text.to_string();

    if config.thousand_separator == "." {
        text = text.replace('.', "");
    }

    if config.decimal_separator != "." && !config.decimal_separator.is_empty() {
        text = text.replace(config.decimal_separator.as_str(), ".");
    }

    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect()
}

/// True when `text` holds an odd number of `-`.
#[inline]
pub(crate) fn has_odd_hyphens(text: &str) -> bool {
    text.bytes().filter(|b| *b == b'-').count() % 2 == 1
}

fn mask_text(text: &str, config: &FormattingConfig) -> MaskResult {
    let precision = config.precision();

    let digits = DigitList::extract(text)
        .zero_padded(precision)
        .with_decimal_point(precision)
        .rounded(precision);

    // zero is never signed, whatever the hyphen parity
    let negative = config.allow_negative && !digits.is_zero() && has_odd_hyphens(text);
    let sign = if negative { "-" } else { "" };

    let grouped = digits.grouped(&config.decimal_separator, &config.thousand_separator);
    let masked_value = format!("{sign}{}{grouped}{}", config.prefix, config.suffix)
        .trim()
        .to_string();

    let magnitude = digits.to_f64();
    let value = if negative { -magnitude } else { magnitude };

    tracing::trace!(input = text, masked = %masked_value, value, "masked value");

    MaskResult {
        value,
        masked_value,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use rust_decimal::{Decimal, RoundingStrategy};

    fn separators() -> impl Strategy<Value = (String, String)> {
        prop_oneof![
            Just((".".to_string(), ",".to_string())),
            Just((",".to_string(), ".".to_string())),
            Just((",".to_string(), " ".to_string())),
            Just((".".to_string(), "'".to_string())),
        ]
    }

    proptest! {
        #[test]
        fn prop_blank_input_is_empty(
            precision in -5i32..30,
            allow_negative: bool,
            prefix in "[$€ ]{0,3}",
            suffix in "[ kr]{0,3}",
        ) {
            let cfg = FormattingConfig::default()
                .with_precision(precision)
                .with_allow_negative(allow_negative)
                .with_prefix(prefix)
                .with_suffix(suffix);
            prop_assert_eq!(mask(RawValue::Empty, &cfg), MaskResult::empty());
            prop_assert_eq!(mask("", &cfg), MaskResult::empty());
        }

        #[test]
        fn prop_numbers_round_half_away_from_zero(
            cents in -1_000_000_000i64..1_000_000_000,
            extra in 0u32..1000,
            precision in 0i32..5,
        ) {
            // build an exact decimal with a few more digits than shown
            let exact = Decimal::new(cents * 1000 + i64::from(extra), 5);
            let value = exact.to_f64().unwrap();
            let cfg = FormattingConfig::default()
                .with_precision(precision)
                .with_allow_negative(true);

            let expected: f64 = Decimal::from_f64(value)
                .unwrap()
                .round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointAwayFromZero)
                .to_string()
                .parse()
                .unwrap();
            prop_assert_eq!(mask(value, &cfg).value, expected);
        }

        #[test]
        fn prop_decimal_ties_round_away_from_zero(
            whole in 0u64..10_000_000,
            cents in 0u64..100,
            negative: bool,
        ) {
            let sign = if negative { "-" } else { "" };
            let text = format!("{sign}{whole}.{cents:02}5");
            let cfg = FormattingConfig::default()
                .with_thousand_separator("")
                .with_allow_negative(true);

            let up = whole * 100 + cents + 1;
            let expected = format!("{sign}{}.{:02}", up / 100, up % 100);
            prop_assert_eq!(mask_initial(text.as_str(), &cfg).masked_value, expected);
        }

        #[test]
        fn prop_remasking_keeps_value(
            text in "[-0-9.,a-z ]{0,24}",
            precision in 0i32..6,
            allow_negative: bool,
            (decimal, thousand) in separators(),
        ) {
            let cfg = FormattingConfig::default()
                .with_precision(precision)
                .with_allow_negative(allow_negative)
                .with_decimal_separator(decimal)
                .with_thousand_separator(thousand);
            let once = mask(text.as_str(), &cfg);
            let twice = mask(once.masked_value.as_str(), &cfg);
            prop_assert_eq!(twice.value, once.value);
            prop_assert_eq!(twice.masked_value, once.masked_value);
        }

        #[test]
        fn prop_extra_hyphen_flips_sign(
            digits in "[0-9]{1,12}",
            position in 0usize..13,
        ) {
            let cfg = FormattingConfig::default().with_allow_negative(true);
            let before = mask(digits.as_str(), &cfg);

            let mut with_hyphen = digits.clone();
            with_hyphen.insert(position.min(digits.len()), '-');
            let after = mask(with_hyphen.as_str(), &cfg);

            if before.value == 0.0 {
                prop_assert!(after.value == 0.0 && after.value.is_sign_positive());
                prop_assert!(!after.masked_value.starts_with('-'));
            } else {
                prop_assert_eq!(after.value, -before.value);
                prop_assert_eq!(after.masked_value, format!("-{}", before.masked_value));
            }
        }

        #[test]
        fn prop_masked_shape(
            text in "[-0-9]{0,20}",
            precision in 0i32..8,
        ) {
            let cfg = FormattingConfig::default().with_precision(precision);
            let result = mask(text.as_str(), &cfg);
            if text.is_empty() {
                prop_assert_eq!(result, MaskResult::empty());
            } else if precision == 0 {
                prop_assert!(!result.masked_value.contains('.'));
            } else {
                let (_, fraction) = result.masked_value.split_once('.').unwrap();
                prop_assert_eq!(fraction.len(), precision as usize);
            }
        }
    }
}
