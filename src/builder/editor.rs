//! Section editor: modal-scoped draft editing of a single section.
//!
//! Exactly one draft can be in flight at a time. The draft is an independent
//! deep copy of the section it was opened from, so nothing the user types
//! leaks into the committed template until [`SectionEditor::commit`] runs.

use super::catalog::VisualizationKind;
use super::error::BuilderError;
use super::reorder::reorder;
use super::store::TemplateStore;
use super::template::{Section, Visualization};
use crate::constants::{MAX_VISUALIZATION_WIDTH, MIN_VISUALIZATION_WIDTH};

/// How the current draft was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Fresh section with a newly generated id.
    New,
    /// Deep copy of a section already present in the template.
    Editing,
}

/// One-draft-at-a-time section editing state machine.
///
/// States: `Closed` (no draft) → `Open` (via [`open_new`] or
/// [`open_existing`]) → back to `Closed` via [`commit`] or [`discard`].
/// Draft operations while `Closed` return [`BuilderError::DraftClosed`];
/// that is a caller bug, never a silent no-op.
///
/// [`open_new`]: SectionEditor::open_new
/// [`open_existing`]: SectionEditor::open_existing
/// [`commit`]: SectionEditor::commit
/// [`discard`]: SectionEditor::discard
#[derive(Debug, Clone, Default)]
pub struct SectionEditor {
    draft: Option<(Section, DraftMode)>,
}

impl SectionEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a draft for a brand new section.
    ///
    /// Any draft already in flight is dropped; the one-draft rule is the
    /// entire concurrency discipline of the editor.
    pub fn open_new(&mut self) {
        let section = Section::new();
        log::info!("Opened new section draft {}", section.id);
        self.draft = Some((section, DraftMode::New));
    }

    /// Open a draft as an independent deep copy of an existing section.
    ///
    /// The clone copies the visualization list and each visualization's
    /// config, so mutating the draft can never alias committed state.
    pub fn open_existing(&mut self, section: &Section) {
        log::info!("Opened draft for existing section {}", section.id);
        self.draft = Some((section.clone(), DraftMode::Editing));
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The current draft, if one is open.
    #[must_use]
    pub fn draft(&self) -> Option<&Section> {
        self.draft.as_ref().map(|(section, _)| section)
    }

    /// How the current draft was opened, if one is open.
    #[must_use]
    pub fn mode(&self) -> Option<DraftMode> {
        self.draft.as_ref().map(|(_, mode)| *mode)
    }

    fn draft_mut(&mut self, op: &'static str) -> Result<&mut Section, BuilderError> {
        match self.draft.as_mut() {
            Some((section, _)) => Ok(section),
            None => Err(BuilderError::DraftClosed(op)),
        }
    }

    /// Replace the draft's title.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), BuilderError> {
        self.draft_mut("set_title")?.title = title.into();
        Ok(())
    }

    /// Replace the draft's description.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), BuilderError> {
        self.draft_mut("set_description")?.description = description.into();
        Ok(())
    }

    /// Append a visualization picked from the catalog to the draft.
    ///
    /// The new instance gets a fresh id, the catalog entry's type and title,
    /// an independent deep copy of its default configuration, an empty data
    /// field and full grid width. Closing the picker afterwards is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn add_visualization(&mut self, entry: &VisualizationKind) -> Result<&Visualization, BuilderError> {
        let section = self.draft_mut("add_visualization")?;
        let visualization = Visualization::new(&entry.kind, &entry.title, entry.default_config.clone());
        log::info!("Added {} visualization {} to draft {}", entry.kind, visualization.id, section.id);
        section.visualizations.push(visualization);
        Ok(section.visualizations.last().unwrap())
    }

    /// Remove a visualization from the draft by id. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn remove_visualization(&mut self, viz_id: &str) -> Result<(), BuilderError> {
        let section = self.draft_mut("remove_visualization")?;
        section.visualizations.retain(|v| v.id != viz_id);
        Ok(())
    }

    /// Point a draft visualization at a field of the data source.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn set_visualization_data_field(&mut self, viz_id: &str, data_field: impl Into<String>) -> Result<(), BuilderError> {
        let section = self.draft_mut("set_visualization_data_field")?;
        if let Some(visualization) = section.visualizations.iter_mut().find(|v| v.id == viz_id) {
            visualization.data_field = data_field.into();
        }
        Ok(())
    }

    /// Resize a draft visualization within the 1-12 grid column scale.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open and
    /// [`BuilderError::InvalidWidth`] for widths outside the grid scale.
    pub fn set_visualization_width(&mut self, viz_id: &str, width: u16) -> Result<(), BuilderError> {
        if !(MIN_VISUALIZATION_WIDTH..=MAX_VISUALIZATION_WIDTH).contains(&width) {
            return Err(BuilderError::InvalidWidth(width));
        }
        let section = self.draft_mut("set_visualization_width")?;
        if let Some(visualization) = section.visualizations.iter_mut().find(|v| v.id == viz_id) {
            visualization.width = width;
        }
        Ok(())
    }

    /// Move a draft visualization from `source` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open and
    /// [`BuilderError::IndexOutOfBounds`] for out-of-range indices.
    pub fn reorder_visualizations(&mut self, source: usize, dest: usize) -> Result<(), BuilderError> {
        let section = self.draft_mut("reorder_visualizations")?;
        section.visualizations = reorder(&section.visualizations, source, dest)?;
        Ok(())
    }

    /// Whether the draft currently satisfies the commit precondition:
    /// an open draft with a non-empty title.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        self.draft().is_some_and(|section| !section.title.is_empty())
    }

    /// Merge the draft into the store's sections list and close the editor.
    ///
    /// A draft whose id matches an existing section replaces that section in
    /// place (same index); a draft with a new id is appended to the end.
    /// Returns `Ok(false)` and keeps the draft open while the title is still
    /// empty; that is a recoverable validation failure, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DraftClosed`] while no draft is open.
    pub fn commit(&mut self, store: &mut TemplateStore) -> Result<bool, BuilderError> {
        if self.draft.is_none() {
            return Err(BuilderError::DraftClosed("commit"));
        }
        if !self.can_commit() {
            return Ok(false);
        }

        let (section, _) = self.draft.take().unwrap();
        let mut sections = store.sections().to_vec();
        match store.template().section_position(&section.id) {
            Some(index) => {
                log::info!("Committed section {} in place at index {index}", section.id);
                sections[index] = section;
            }
            None => {
                log::info!("Committed new section {} at end of list", section.id);
                sections.push(section);
            }
        }
        store.replace_sections(sections);
        Ok(true)
    }

    /// Drop the draft without touching the committed template.
    ///
    /// Discarding is total and immediate; it is also safe to call while
    /// already closed.
    pub fn discard(&mut self) {
        if let Some((section, _)) = self.draft.take() {
            log::info!("Discarded draft for section {}", section.id);
        }
    }
}
