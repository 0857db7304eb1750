// ============================================================================
// Change Handler Interface
// Defines the contract for observing masked value changes
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a [`CurrencyField`](crate::engine::CurrencyField)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldEvent {
    /// Initial value masked when the field was created
    Mounted { masked_value: String, value: f64 },

    /// User edit accepted and re-masked
    Changed {
        raw: String,
        masked_value: String,
        value: f64,
    },

    /// Value replaced from outside the field
    ValueReplaced { masked_value: String, value: f64 },
}

impl FieldEvent {
    /// Masked value carried by the event.
    pub fn masked_value(&self) -> &str {
        match self {
            FieldEvent::Mounted { masked_value, .. }
            | FieldEvent::Changed { masked_value, .. }
            | FieldEvent::ValueReplaced { masked_value, .. } => masked_value,
        }
    }

    /// Numeric value carried by the event.
    pub fn value(&self) -> f64 {
        match self {
            FieldEvent::Mounted { value, .. }
            | FieldEvent::Changed { value, .. }
            | FieldEvent::ValueReplaced { value, .. } => *value,
        }
    }
}

/// Change handler trait for observing a field
/// Implementations can lift the masked value to a parent, validate, log, etc.
pub trait ChangeHandler: Send + Sync {
    /// Handle a field event
    fn on_event(&self, event: FieldEvent);
}

/// No-op change handler
pub struct NoOpChangeHandler;

impl ChangeHandler for NoOpChangeHandler {
    fn on_event(&self, _event: FieldEvent) {}
}

/// Logging change handler
pub struct LoggingChangeHandler;

impl ChangeHandler for LoggingChangeHandler {
    fn on_event(&self, event: FieldEvent) {
        tracing::debug!(
            masked = event.masked_value(),
            value = event.value(),
            "currency field event: {:?}",
            event
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = FieldEvent::Changed {
            raw: "1,234.567".to_string(),
            masked_value: "12,345.67".to_string(),
            value: 12345.67,
        };
        assert_eq!(event.masked_value(), "12,345.67");
        assert_eq!(event.value(), 12345.67);
    }

    #[test]
    fn test_noop_and_logging_handlers() {
        let event = FieldEvent::Mounted {
            masked_value: "0.00".to_string(),
            value: 0.0,
        };
        NoOpChangeHandler.on_event(event.clone());
        LoggingChangeHandler.on_event(event);
        // Should not panic
    }
}
