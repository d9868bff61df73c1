//! Modal dialog components

pub mod delete_confirmation_dialog;
pub mod error_dialog;
pub mod info_dialog;
pub mod section_dialog;
pub mod visualization_picker_dialog;

pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_dialog::ErrorDialog;
pub use info_dialog::InfoDialog;
pub use section_dialog::SectionDialog;
pub use visualization_picker_dialog::VisualizationPickerDialog;
