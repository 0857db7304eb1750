// ============================================================================
// Digit List
// Explicit digit-sequence value type threaded through the masking stages
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

/// Inline capacity before the digit buffer spills to the heap.
///
/// 32 covers every `f64` rendered at the maximum precision of 20 plus a
/// comfortable integer part.
const INLINE_DIGITS: usize = 32;

/// An unsigned decimal magnitude held as ASCII digits.
///
/// `scale` is the number of trailing digits that sit after the decimal
/// point. Every stage consumes the list by value and returns a new one, so
/// the pipeline in [`crate::engine::masker`] reads as a sequence of pure
/// transforms:
///
/// ```
/// use currency_mask::numeric::DigitList;
///
/// let digits = DigitList::extract("$1,234.5")
///     .zero_padded(2)
///     .with_decimal_point(2)
///     .rounded(2);
/// assert_eq!(digits.to_string(), "123.45");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DigitList {
    digits: SmallVec<[u8; INLINE_DIGITS]>,
    scale: usize,
}

impl DigitList {
    // ========================================================================
    // Stages
    // ========================================================================

    /// Collect every ASCII digit of `text` in order.
    ///
    /// Separators, letters, signs and anything else are skipped. Text without
    /// digits yields a single `0`.
    pub fn extract(text: &str) -> Self {
        let mut digits: SmallVec<[u8; INLINE_DIGITS]> =
            text.bytes().filter(u8::is_ascii_digit).collect();
        if digits.is_empty() {
            digits.push(b'0');
        }
        Self { digits, scale: 0 }
    }

    /// Left-pad with zeros until there is at least one digit more than
    /// `precision`.
    pub fn zero_padded(mut self, precision: usize) -> Self {
        let wanted = precision + 1;
        if self.digits.len() < wanted {
            let missing = wanted - self.digits.len();
            self.digits.insert_many(0, std::iter::repeat_n(b'0', missing));
        }
        self
    }

    /// Place the decimal point `precision` digits from the end.
    ///
    /// The list must already be padded; a shorter list is padded here.
    pub fn with_decimal_point(self, precision: usize) -> Self {
        let mut padded = self.zero_padded(precision);
        padded.scale = precision;
        padded
    }

    /// Round to exactly `precision` fractional digits, half away from zero,
    /// and drop redundant leading zeros of the integer part.
    pub fn rounded(self, precision: usize) -> Self {
        let scale = self.scale;
        let mut this = self.zero_padded(scale);
        if this.scale > precision {
            let cut = this.digits.len() - (this.scale - precision);
            let round_up = this.digits[cut] >= b'5';
            this.digits.truncate(cut);
            this.scale = precision;
            if round_up {
                this.increment_last();
            }
        } else if this.scale < precision {
            let missing = precision - this.scale;
            this.digits.extend(std::iter::repeat_n(b'0', missing));
            this.scale = precision;
        }
        this.without_leading_zeros()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Digits before the decimal point, as ASCII bytes.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.digits[..self.digits.len() - self.scale]
    }

    /// Digits after the decimal point, as ASCII bytes.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.digits[self.digits.len() - self.scale..]
    }

    /// True when every digit is `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == b'0')
    }

    /// The magnitude as the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(0.0)
    }

    /// Render with configured separators.
    ///
    /// `thousand_separator` goes between every group of three integer digits
    /// counted from the decimal point; `decimal_separator` is only written
    /// when the list has fractional digits.
    pub fn grouped(&self, decimal_separator: &str, thousand_separator: &str) -> String {
        let integer = self.integer_digits();
        let fraction = self.fraction_digits();
        let groups = integer.len().saturating_sub(1) / 3;
        let mut out = String::with_capacity(
            self.digits.len()
                + groups * thousand_separator.len()
                + decimal_separator.len(),
        );

        for (i, digit) in integer.iter().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push_str(thousand_separator);
            }
            out.push(char::from(*digit));
        }

        if !fraction.is_empty() {
            out.push_str(decimal_separator);
            out.extend(fraction.iter().copied().map(char::from));
        }
        out
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn increment_last(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return;
            }
        }
        // carried out of the most significant digit
        self.digits.insert(0, b'1');
    }

    fn without_leading_zeros(mut self) -> Self {
        let keep_from = self
            .integer_digits()
            .iter()
            .take(self.digits.len() - self.scale - 1)
            .take_while(|d| **d == b'0')
            .count();
        if keep_from > 0 {
            self.digits.drain(..keep_from);
        }
        self
    }
}

impl fmt::Display for DigitList {
    /// Plain numeric literal with `.` as the decimal point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped(".", ""))
    }
}

impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitList({}, scale={})", self, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skips_non_digits() {
        let digits = DigitList::extract("-$1,234.56 kr");
        assert_eq!(digits.to_string(), "123456");
        assert_eq!(digits.scale(), 0);
    }

    #[test]
    fn test_extract_without_digits() {
        assert_eq!(DigitList::extract("abc").to_string(), "0");
        assert_eq!(DigitList::extract("").to_string(), "0");
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not ASCII
        assert_eq!(DigitList::extract("١٢٣4").to_string(), "4");
    }

    #[test]
    fn test_zero_padded() {
        let digits = DigitList::extract("5").zero_padded(2);
        assert_eq!(digits.to_string(), "005");

        // already long enough
        let digits = DigitList::extract("12345").zero_padded(2);
        assert_eq!(digits.to_string(), "12345");
    }

    #[test]
    fn test_with_decimal_point() {
        let digits = DigitList::extract("5").zero_padded(2).with_decimal_point(2);
        assert_eq!(digits.to_string(), "0.05");
        assert_eq!(digits.integer_digits(), b"0");
        assert_eq!(digits.fraction_digits(), b"05");
    }

    #[test]
    fn test_rounded_strips_leading_zeros() {
        let digits = DigitList::extract("000123").with_decimal_point(2).rounded(2);
        assert_eq!(digits.to_string(), "1.23");

        let digits = DigitList::extract("0000").with_decimal_point(2).rounded(2);
        assert_eq!(digits.to_string(), "0.00");
    }

    #[test]
    fn test_rounded_half_away_from_zero() {
        let digits = DigitList::extract("1235").with_decimal_point(3).rounded(2);
        assert_eq!(digits.to_string(), "1.24");

        let digits = DigitList::extract("1234").with_decimal_point(3).rounded(2);
        assert_eq!(digits.to_string(), "1.23");

        let digits = DigitList::extract("125").with_decimal_point(1).rounded(0);
        assert_eq!(digits.to_string(), "13");
    }

    #[test]
    fn test_rounded_carries_into_new_digit() {
        let digits = DigitList::extract("9999").with_decimal_point(3).rounded(2);
        assert_eq!(digits.to_string(), "10.00");

        let digits = DigitList::extract("995").with_decimal_point(3).rounded(2);
        assert_eq!(digits.to_string(), "1.00");
    }

    #[test]
    fn test_rounded_extends_scale() {
        let digits = DigitList::extract("12").rounded(3);
        assert_eq!(digits.to_string(), "12.000");
    }

    #[test]
    fn test_is_zero() {
        assert!(DigitList::extract("0000").with_decimal_point(2).is_zero());
        assert!(!DigitList::extract("0001").with_decimal_point(2).is_zero());
    }

    #[test]
    fn test_to_f64() {
        let digits = DigitList::extract("123456").with_decimal_point(2).rounded(2);
        assert_eq!(digits.to_f64(), 1234.56);
    }

    #[test]
    fn test_grouped_with_fraction() {
        let digits = DigitList::extract("12345678900").with_decimal_point(2);
        assert_eq!(digits.grouped(".", ","), "123,456,789.00");
        assert_eq!(digits.grouped(",", "."), "123.456.789,00");
    }

    #[test]
    fn test_grouped_without_fraction() {
        let digits = DigitList::extract("1234567");
        assert_eq!(digits.grouped(".", ","), "1,234,567");

        let digits = DigitList::extract("123");
        assert_eq!(digits.grouped(".", ","), "123");
    }

    #[test]
    fn test_grouped_multi_char_separators() {
        let digits = DigitList::extract("123456789").with_decimal_point(2);
        assert_eq!(digits.grouped(" dot ", "˙"), "1˙234˙567 dot 89");
    }
}
