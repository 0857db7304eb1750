// ============================================================================
// Raw and Masked Values
// Inputs accepted by the masker and the result it produces
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Raw Value
// ============================================================================

/// A candidate value before masking: verbatim field contents, an external
/// number, or nothing at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// No value (a blank field)
    #[default]
    Empty,
    /// Free-form text, unsanitized
    Text(String),
    /// A numeric amount supplied by the caller
    Number(f64),
}

impl RawValue {
    /// True for `Empty` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(text) => text.is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<&String> for RawValue {
    fn from(text: &String) -> Self {
        RawValue::Text(text.clone())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

macro_rules! raw_value_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for RawValue {
                fn from(value: $int) -> Self {
                    RawValue::Number(value as f64)
                }
            }
        )*
    };
}

raw_value_from_int!(i32, i64, u32, u64, usize);

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Empty, Into::into)
    }
}

// ============================================================================
// Mask Result
// ============================================================================

/// The display string and the numeric value it represents.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MaskResult {
    /// Signed amount, rounded to the configured precision
    pub value: f64,
    /// Fully decorated display string
    pub masked_value: String,
}

impl MaskResult {
    /// The canonical blank result: `{ value: 0, masked_value: "" }`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the field is blank.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masked_value.is_empty()
    }
}
