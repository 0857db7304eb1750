// ============================================================================
// Caret Planner
// Computes where the caret lands after a masked value is re-rendered
// ============================================================================
//
// All offsets are char offsets into the masked string. The planner never
// stores caret state; callers pass the previous render and the caret they
// sampled, and apply the returned range only while their input has focus.

use crate::domain::{FormattingConfig, SelectionRange};
use crate::engine::masker::has_odd_hyphens;
use regex::Regex;

// ============================================================================
// Editable Region
// ============================================================================

/// The part of a masked string the caret may occupy: after the sign and
/// prefix, before the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditableBounds {
    /// First editable offset
    pub min: usize,
    /// Offset just before the suffix
    pub max: usize,
}

impl EditableBounds {
    /// Bounds of `masked` under `config`.
    ///
    /// Decorations are measured as they appear in the trimmed masked string:
    /// trailing whitespace of the suffix is never rendered, and neither is
    /// leading whitespace of the prefix unless a sign precedes it. When the
    /// string is too short to hold its decorations, `min` collapses onto
    /// `max`.
    pub fn of(masked: &str, config: &FormattingConfig) -> Self {
        let negative = has_odd_hyphens(masked);
        let min = rendered_prefix_len(config, negative) + usize::from(negative);
        let max = char_len(masked).saturating_sub(rendered_suffix_len(config));
        Self {
            min: min.min(max),
            max,
        }
    }

    /// Saturate `offset` into the region.
    #[inline]
    pub fn clamp(&self, offset: usize) -> usize {
        offset.clamp(self.min, self.max)
    }
}

// ============================================================================
// Separator Counting
// ============================================================================

/// Literal matcher for the configured decimal and thousand separators.
#[derive(Debug, Clone)]
pub struct SeparatorPattern {
    regex: Option<Regex>,
}

impl SeparatorPattern {
    /// Build the pattern, escaping both separators.
    ///
    /// Empty separators are left out. A pattern that fails to compile is
    /// logged and then matches nothing.
    pub fn new(config: &FormattingConfig) -> Self {
        let alternatives: Vec<String> = [&config.decimal_separator, &config.thousand_separator]
            .into_iter()
            .filter(|sep| !sep.is_empty())
            .map(|sep| regex::escape(sep))
            .collect();

        if alternatives.is_empty() {
            return Self { regex: None };
        }

        let pattern = alternatives.join("|");
        match Regex::new(&pattern) {
            Ok(regex) => Self { regex: Some(regex) },
            Err(e) => {
                tracing::warn!(
                    pattern = %pattern,
                    error = %e,
                    "failed to compile separator pattern; counting no separators"
                );
                Self { regex: None }
            }
        }
    }

    /// Number of non-overlapping separator occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| regex.find_iter(text).count())
    }
}

// ============================================================================
// Planning
// ============================================================================

/// Plan the collapsed caret after an edit.
///
/// `prev_caret_end` is the caret end the host reported for the edit that
/// produced `next_masked`. It is clamped into the editable region of
/// `next_masked`, moved right once for every separator the new mask gained,
/// and forced to the end of the digits when `next_masked` is as short as a
/// masked value can be.
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
///
/// let config = FormattingConfig::default();
/// // "234.56" with a `1` typed at the front masks to "1,234.56"
/// let caret = plan_caret("234.56", "1,234.56", 1, &config);
/// assert_eq!(caret, SelectionRange::collapsed(2));
/// ```
pub fn plan_caret(
    prev_masked: &str,
    next_masked: &str,
    prev_caret_end: usize,
    config: &FormattingConfig,
) -> SelectionRange {
    plan_selection(
        prev_masked,
        next_masked,
        SelectionRange::collapsed(prev_caret_end),
        config,
    )
}

/// Plan a selection range after an edit.
///
/// Like [`plan_caret`], but both ends of `prev_selection` are kept: `end`
/// is clamped into the editable region and `start` is clamped between the
/// region start and `end`.
pub fn plan_selection(
    prev_masked: &str,
    next_masked: &str,
    prev_selection: SelectionRange,
    config: &FormattingConfig,
) -> SelectionRange {
    let bounds = EditableBounds::of(next_masked, config);

    if char_len(next_masked) == base_length(config) {
        tracing::trace!(masked = next_masked, caret = bounds.max, "caret at base length");
        return SelectionRange::collapsed(bounds.max);
    }

    let end = bounds.clamp(prev_selection.end);
    let start = prev_selection.start.min(end).clamp(bounds.min, end);

    let separators = SeparatorPattern::new(config);
    let added = separators
        .count(next_masked)
        .saturating_sub(separators.count(prev_masked));

    let planned = SelectionRange::new(start, end)
        .shifted(added)
        .clamped(bounds.min, bounds.max);

    tracing::trace!(
        prev = prev_masked,
        next = next_masked,
        added_separators = added,
        start = planned.start,
        end = planned.end,
        "planned caret"
    );

    planned
}

/// Plan the caret when the input gains focus.
///
/// The caret moves just before the suffix; with `select_all_on_focus` the
/// whole amount after the sign and prefix is selected instead.
pub fn plan_focus_caret(
    masked: &str,
    config: &FormattingConfig,
    select_all_on_focus: bool,
) -> SelectionRange {
    let bounds = EditableBounds::of(masked, config);
    if select_all_on_focus {
        SelectionRange::new(bounds.min, bounds.max)
    } else {
        SelectionRange::collapsed(bounds.max)
    }
}

/// Plan the caret when the input is first mounted.
///
/// An auto-focused input puts the caret just before the suffix; otherwise the
/// selection reported by the host is clamped into the editable region.
pub fn plan_initial_caret(
    masked: &str,
    config: &FormattingConfig,
    auto_focus: bool,
    native_selection: SelectionRange,
) -> SelectionRange {
    let bounds = EditableBounds::of(masked, config);
    if auto_focus {
        SelectionRange::collapsed(bounds.max)
    } else {
        native_selection.clamped(bounds.min, bounds.max)
    }
}

/// The caret to remember once the input loses focus.
#[inline]
pub fn plan_blur_caret() -> SelectionRange {
    SelectionRange::collapsed(0)
}

/// Length of the shortest unsigned masked value: rendered decorations, the
/// decimal part and a single integer digit.
pub fn base_length(config: &FormattingConfig) -> usize {
    let precision = config.precision();
    let decimal = if precision > 0 {
        char_len(&config.decimal_separator)
    } else {
        0
    };
    rendered_prefix_len(config, false) + rendered_suffix_len(config) + decimal + precision + 1
}

/// Chars of the prefix left after the masked string is trimmed.
fn rendered_prefix_len(config: &FormattingConfig, negative: bool) -> usize {
    if negative {
        char_len(&config.prefix)
    } else {
        char_len(config.prefix.trim_start())
    }
}

/// Chars of the suffix left after the masked string is trimmed.
fn rendered_suffix_len(config: &FormattingConfig) -> usize {
    char_len(config.suffix.trim_end())
}

#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}
