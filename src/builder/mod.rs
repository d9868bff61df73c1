//! Headless editing engine for report templates.
//!
//! This module is the core of templatist: an embeddable, rendering-free
//! editor for a tree of report sections and their visualizations. All state
//! lives in explicit, passable objects with synchronous transition
//! functions, so the whole engine is testable without a terminal.
//!
//! The moving parts:
//!
//! * [`store::TemplateStore`] - single source of truth for the template
//! * [`editor::SectionEditor`] - modal-scoped draft of one section
//! * [`reorder::reorder`] - generic stable move-within-a-list operation
//! * [`catalog`] - read-only visualization and data source catalogs

pub mod catalog;
pub mod editor;
pub mod error;
pub mod reorder;
pub mod store;
pub mod template;

pub use catalog::{builtin_catalog, builtin_data_sources, DataSourceRef, VisualizationKind};
pub use editor::{DraftMode, SectionEditor};
pub use error::BuilderError;
pub use reorder::reorder;
pub use store::{EditorHost, TemplateStore};
pub use template::{Section, Template, Visualization};
