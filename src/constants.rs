//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Identifier prefixes
pub const SECTION_ID_PREFIX: &str = "section_";
pub const VISUALIZATION_ID_PREFIX: &str = "viz_";

// Grid column scale for visualization widths
pub const MIN_VISUALIZATION_WIDTH: u16 = 1;
pub const MAX_VISUALIZATION_WIDTH: u16 = 12;
pub const DEFAULT_VISUALIZATION_WIDTH: u16 = 12;

// Form pane sizing
pub const FORM_MIN_HEIGHT: u16 = 8;
pub const FORM_MAX_HEIGHT: u16 = 14;
pub const FORM_DEFAULT_HEIGHT: u16 = 10;

// Success Messages
pub const SUCCESS_TEMPLATE_SAVED: &str = "✅ Template saved";
pub const SUCCESS_SECTION_COMMITTED: &str = "✅ Section saved";
pub const SUCCESS_SECTION_DELETED: &str = "✅ Section deleted";
pub const SUCCESS_VISUALIZATION_ADDED: &str = "✅ Visualization added";

// Error Messages
pub const ERROR_SAVE_BLOCKED: &str = "❌ Name and data source are required before saving";
pub const ERROR_COMMIT_BLOCKED: &str = "❌ Section title cannot be empty";

// Misc
pub const CONFIG_GENERATED: &str = "✅ Default configuration generated";
pub const CONFIG_DATE_FORMAT: &str = "%Y-%m-%d";
