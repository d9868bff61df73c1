//! UI components for the template builder

pub mod dialogs;
pub mod help_panel;
pub mod sections_list;
pub mod status_bar;
pub mod template_form;

pub use help_panel::HelpPanel;
pub use sections_list::SectionsList;
pub use status_bar::StatusBar;
pub use template_form::TemplateForm;
