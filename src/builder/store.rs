//! Template store: the single source of truth for the template being edited.

use super::error::BuilderError;
use super::reorder::reorder;
use super::template::{Section, Template};
use chrono::Utc;

/// External collaborator that receives the outcome of an editing session.
///
/// `on_save` is invoked exactly once per successful save with the full
/// template value; `on_cancel` exactly once if the user abandons editing.
/// Whatever the collaborator does with the template (persist it, POST it,
/// drop it) is entirely its own concern, including any asynchronous failure.
pub trait EditorHost {
    fn on_save(&mut self, template: Template);
    fn on_cancel(&mut self);
}

/// Owns the authoritative in-memory template and exposes field-level
/// mutation plus whole-tree persistence.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    template: Template,
}

impl TemplateStore {
    /// Create a store for an existing template (edit mode) or, given `None`,
    /// for a fresh empty one (create mode).
    #[must_use]
    pub fn new(existing: Option<Template>) -> Self {
        Self {
            template: existing.unwrap_or_default(),
        }
    }

    /// The current template value.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Ordered section list of the current template.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.template.sections
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.template.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.template.description = description.into();
    }

    pub fn set_data_source(&mut self, data_source: Option<String>) {
        self.template.data_source = data_source;
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.template.is_public = is_public;
    }

    /// Atomically replace the sections list.
    ///
    /// Used both by section-draft commits and by reordering; every section in
    /// the new list keeps its original id.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        self.template.sections = sections;
    }

    /// Remove a section by id. Unknown ids are ignored.
    pub fn remove_section(&mut self, section_id: &str) {
        self.template.sections.retain(|s| s.id != section_id);
        log::info!("Removed section {section_id}");
    }

    /// Move the section at `source` to `dest`, keeping all other sections in
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfBounds`] when either index is out of
    /// range for the current sections list.
    pub fn reorder_sections(&mut self, source: usize, dest: usize) -> Result<(), BuilderError> {
        let resequenced = reorder(&self.template.sections, source, dest)?;
        self.template.sections = resequenced;
        Ok(())
    }

    /// Whether the template currently satisfies the save preconditions:
    /// a non-empty name and a selected data source.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.template.name.is_empty() && self.template.data_source.is_some()
    }

    /// Stamp `updated_at` and hand the full template to the host.
    ///
    /// Returns `false` without invoking the host while [`can_save`] is not
    /// satisfied; the blocked condition is a recoverable validation failure,
    /// not an error.
    ///
    /// [`can_save`]: TemplateStore::can_save
    pub fn save(&mut self, host: &mut dyn EditorHost) -> bool {
        if !self.can_save() {
            return false;
        }

        self.template.updated_at = Some(Utc::now());
        log::info!(
            "Saving template '{}' with {} section(s)",
            self.template.name,
            self.template.sections.len()
        );
        host.on_save(self.template.clone());
        true
    }

    /// Abandon editing, handing control back to the host without mutating
    /// anything further.
    pub fn cancel(&mut self, host: &mut dyn EditorHost) {
        log::info!("Editing cancelled for template '{}'", self.template.name);
        host.on_cancel();
    }
}
