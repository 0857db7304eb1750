// ============================================================================
// Domain Models Module
// Contains the configuration and value types shared by masking and caret
// planning
// ============================================================================

pub mod config;
pub mod errors;
pub mod selection;
pub mod value;

pub use config::{FormattingConfig, MAX_PRECISION};
pub use errors::{ConfigError, ConfigResult};
pub use selection::SelectionRange;
pub use value::{MaskResult, RawValue};
