// ============================================================================
// Interfaces Module
// Contains the trait seams between the field and its surroundings
// ============================================================================

mod change_handler;
mod selection_host;

pub use change_handler::{ChangeHandler, FieldEvent, LoggingChangeHandler, NoOpChangeHandler};
pub use selection_host::{HeadlessInput, SelectionHost};
