// ============================================================================
// Formatting Configuration
// Separator, precision, sign and decoration settings for masked amounts
// ============================================================================

use super::errors::{ConfigError, ConfigResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a masked value can carry.
pub const MAX_PRECISION: usize = 20;

// ============================================================================
// Formatting Configuration
// ============================================================================

/// Everything the masker and caret planner need to know about the display
/// format.
///
/// Values are taken as supplied; out-of-range precision is clamped when
/// used, and [`validate`](Self::validate) is advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormattingConfig {
    /// Number of fractional digits always shown (clamped to 0..=20)
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_precision"))]
    pub precision: i32,

    /// Separator between integer and fractional digits
    pub decimal_separator: String,

    /// Separator between groups of three integer digits
    pub thousand_separator: String,

    /// Whether an odd number of `-` makes the amount negative
    pub allow_negative: bool,

    /// Text shown before the amount (after the sign)
    pub prefix: String,

    /// Text shown after the amount
    pub suffix: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
            allow_negative: false,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl FormattingConfig {
    /// Create the default configuration (`1,234.56`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective precision, clamped to `0..=MAX_PRECISION`.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision.clamp(0, MAX_PRECISION as i32) as usize
    }

    /// Builder method: Set precision (clamped when used)
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set precision from text such as `"3"`
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if the text is not an integer.
    pub fn with_precision_str(mut self, precision: &str) -> ConfigResult<Self> {
        self.precision = parse_precision(precision)?;
        Ok(self)
    }

    /// Builder method: Set decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: Set thousand separator
    pub fn with_thousand_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousand_separator = separator.into();
        self
    }

    /// Builder method: Allow negative amounts
    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Builder method: Set prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method: Set suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Validate the configuration
    ///
    /// Masking works with any configuration; this reports the ones whose
    /// output cannot be read back unambiguously.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.decimal_separator.is_empty() || self.thousand_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }

        if self.decimal_separator == self.thousand_separator {
            return Err(ConfigError::AmbiguousSeparators);
        }

        Ok(())
    }

    /// Load a configuration from JSON.
    ///
    /// Field names are camelCase (`decimalSeparator`, `allowNegative`, ...)
    /// and missing fields take their defaults. `precision` may be a number
    /// or a numeric string.
    ///
    /// # Errors
    /// Returns `Config` if the JSON does not describe a configuration.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Config(e.to_string()))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormattingConfig {
    /// US dollars: `$1,234.56`
    pub fn us_dollar() -> Self {
        Self::new().with_prefix("$")
    }

    /// Euro, continental style: `1.234,56 €`
    pub fn euro() -> Self {
        Self::new()
            .with_decimal_separator(",")
            .with_thousand_separator(".")
            .with_suffix(" €")
    }

    /// Swiss francs: `CHF 1'234.56`
    pub fn swiss_franc() -> Self {
        Self::new()
            .with_thousand_separator("'")
            .with_prefix("CHF ")
    }

    /// Swedish kronor: `1 234,56 kr`
    pub fn swedish_krona() -> Self {
        Self::new()
            .with_decimal_separator(",")
            .with_thousand_separator(" ")
            .with_suffix(" kr")
    }
}

/// Parse precision text, saturating to the `i32` range.
fn parse_precision(text: &str) -> ConfigResult<i32> {
    text.trim()
        .parse::<i64>()
        .map(|p| p.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .map_err(|_| ConfigError::InvalidPrecision(text.to_string()))
}

#[cfg(feature = "serde")]
fn deserialize_precision<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Precision {
        Number(i64),
        Text(String),
    }

    match Precision::deserialize(deserializer)? {
        Precision::Number(p) => Ok(p.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32),
        Precision::Text(text) => parse_precision(&text).map_err(serde::de::Error::custom),
    }
}
