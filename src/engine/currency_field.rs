// ============================================================================
// Currency Field
// Headless field controller threading masked value and caret state
// ============================================================================

use crate::domain::{FormattingConfig, MaskResult, RawValue, SelectionRange};
use crate::engine::caret::{plan_blur_caret, plan_caret, plan_focus_caret, plan_initial_caret};
use crate::engine::masker::{mask, mask_initial};
use crate::interfaces::{ChangeHandler, FieldEvent, SelectionHost};
use std::sync::Arc;

/// A currency input field, minus the rendering.
///
/// Holds the last masked value and the caret end sampled for the next edit,
/// and drives a [`SelectionHost`]: every accepted edit is re-masked,
/// rendered, and followed by a planned caret that is only applied while the
/// host has focus.
///
/// # Example
/// ```
/// use currency_mask::prelude::*;
/// use std::sync::Arc;
///
/// let mut input = HeadlessInput::new();
/// let mut field = CurrencyField::new(
///     FormattingConfig::us_dollar(),
///     0,
///     Arc::new(NoOpChangeHandler),
/// );
/// field.mount(&mut input, true);
/// assert_eq!(input.value(), "$0.00");
///
/// for key in ["1", "2", "3", "4", "5"] {
///     input.insert(key);
///     field.input(&mut input);
/// }
/// assert_eq!(input.value(), "$123.45");
/// assert_eq!(field.value(), 123.45);
/// ```
pub struct CurrencyField {
    /// Display format
    config: FormattingConfig,

    /// Last rendered masked value and its number
    current: MaskResult,

    /// Caret end used when the host cannot report one
    caret_end: usize,

    /// Observer for value changes
    handler: Arc<dyn ChangeHandler>,
}

impl CurrencyField {
    /// Create a field, masking `initial` as an externally supplied value.
    pub fn new(
        config: FormattingConfig,
        initial: impl Into<RawValue>,
        handler: Arc<dyn ChangeHandler>,
    ) -> Self {
        let current = mask_initial(initial, &config);
        handler.on_event(FieldEvent::Mounted {
            masked_value: current.masked_value.clone(),
            value: current.value,
        });

        Self {
            config,
            current,
            caret_end: 1,
            handler,
        }
    }

    /// Render into `host` for the first time and place the caret.
    pub fn mount(&mut self, host: &mut dyn SelectionHost, auto_focus: bool) -> SelectionRange {
        host.render(&self.current.masked_value);
        if auto_focus {
            host.focus();
        }
        let native = host.selection();

        let planned =
            plan_initial_caret(&self.current.masked_value, &self.config, auto_focus, native);
        self.apply(host, planned);
        planned
    }

    /// Accept the edit currently held by `host`.
    ///
    /// The host's value is the raw edit and its selection end is the caret
    /// for that edit; an unfocused host falls back to the stored caret end.
    pub fn input(&mut self, host: &mut dyn SelectionHost) -> SelectionRange {
        let raw = host.value().to_string();
        let caret_end = if host.has_focus() {
            host.selection().end
        } else {
            self.caret_end
        };

        let next = mask(raw.as_str(), &self.config);
        let planned = plan_caret(
            &self.current.masked_value,
            &next.masked_value,
            caret_end,
            &self.config,
        );

        host.render(&next.masked_value);
        self.apply(host, planned);
        self.caret_end = planned.end;
        self.current = next;

        self.handler.on_event(FieldEvent::Changed {
            raw,
            masked_value: self.current.masked_value.clone(),
            value: self.current.value,
        });
        planned
    }

    /// The host gained focus.
    pub fn focus(
        &mut self,
        host: &mut dyn SelectionHost,
        select_all_on_focus: bool,
    ) -> SelectionRange {
        let planned = plan_focus_caret(
            &self.current.masked_value,
            &self.config,
            select_all_on_focus,
        );
        if select_all_on_focus {
            self.apply(host, planned);
        }
        self.caret_end = planned.end;
        planned
    }

    /// The host lost focus.
    pub fn blur(&mut self) {
        self.caret_end = plan_blur_caret().end;
    }

    /// Replace the value from outside the field.
    pub fn set_value(&mut self, host: &mut dyn SelectionHost, value: impl Into<RawValue>) {
        self.current = mask_initial(value, &self.config);
        host.render(&self.current.masked_value);
        self.handler.on_event(FieldEvent::ValueReplaced {
            masked_value: self.current.masked_value.clone(),
            value: self.current.value,
        });
    }

    /// Last masked value.
    pub fn masked_value(&self) -> &str {
        &self.current.masked_value
    }

    /// Number represented by the masked value.
    pub fn value(&self) -> f64 {
        self.current.value
    }

    /// Caret end remembered for the next edit.
    pub fn caret_end(&self) -> usize {
        self.caret_end
    }

    /// Display format.
    pub fn config(&self) -> &FormattingConfig {
        &self.config
    }

    fn apply(&self, host: &mut dyn SelectionHost, range: SelectionRange) {
        if host.has_focus() {
            host.set_selection_range(range);
        } else {
            tracing::trace!(?range, "host not focused; caret not applied");
        }
    }
}
