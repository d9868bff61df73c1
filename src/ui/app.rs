//! Application state and editing session logic

use crate::builder::{DataSourceRef, EditorHost, SectionEditor, Template, TemplateStore, VisualizationKind};
use crate::constants::{
    ERROR_COMMIT_BLOCKED, ERROR_SAVE_BLOCKED, SUCCESS_SECTION_COMMITTED, SUCCESS_SECTION_DELETED,
    SUCCESS_TEMPLATE_SAVED, SUCCESS_VISUALIZATION_ADDED,
};
use ratatui::widgets::ListState;

/// Template form field being edited inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Name,
    Description,
}

/// Focused field inside the section dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
}

/// Application state
pub struct App<'a> {
    pub store: TemplateStore,
    pub editor: SectionEditor,
    pub catalog: Vec<VisualizationKind>,
    pub data_sources: Vec<DataSourceRef>,
    host: &'a mut dyn EditorHost,

    pub should_quit: bool,
    pub selected_section_index: usize,
    pub section_list_state: ListState,

    // Section dialog state
    pub draft_focus: DraftField,
    pub selected_visualization_index: usize,

    // Visualization picker state
    pub picking_visualization: bool,
    pub picker_index: usize,

    // Inline template form editing
    pub editing_field: Option<TemplateField>,

    pub delete_confirmation: Option<String>, // Section ID to delete if confirmed
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl<'a> App<'a> {
    /// Create a new editing session.
    ///
    /// `template` is the existing template to edit, or `None` to start a
    /// fresh one. The catalogs are read-only inputs; `host` receives the
    /// session outcome.
    pub fn new(
        template: Option<Template>,
        catalog: Vec<VisualizationKind>,
        data_sources: Vec<DataSourceRef>,
        host: &'a mut dyn EditorHost,
    ) -> Self {
        let mut section_list_state = ListState::default();
        section_list_state.select(Some(0));

        Self {
            store: TemplateStore::new(template),
            editor: SectionEditor::new(),
            catalog,
            data_sources,
            host,
            should_quit: false,
            selected_section_index: 0,
            section_list_state,
            draft_focus: DraftField::Title,
            selected_visualization_index: 0,
            picking_visualization: false,
            picker_index: 0,
            editing_field: None,
            delete_confirmation: None,
            error_message: None,
            info_message: None,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Navigate to the next section in the list
    pub fn next_section(&mut self) {
        let count = self.store.sections().len();
        if count > 0 {
            self.selected_section_index = (self.selected_section_index + 1) % count;
            self.section_list_state.select(Some(self.selected_section_index));
        }
    }

    /// Navigate to the previous section in the list
    pub fn previous_section(&mut self) {
        let count = self.store.sections().len();
        if count > 0 {
            self.selected_section_index = if self.selected_section_index == 0 {
                count - 1
            } else {
                self.selected_section_index - 1
            };
            self.section_list_state.select(Some(self.selected_section_index));
        }
    }

    fn clamp_section_selection(&mut self) {
        let count = self.store.sections().len();
        if self.selected_section_index >= count {
            self.selected_section_index = count.saturating_sub(1);
        }
        self.section_list_state.select(Some(self.selected_section_index));
    }

    /// Move the selected section one position down
    pub fn move_section_down(&mut self) {
        let count = self.store.sections().len();
        if count > 1 && self.selected_section_index + 1 < count {
            let from = self.selected_section_index;
            match self.store.reorder_sections(from, from + 1) {
                Ok(()) => {
                    self.selected_section_index = from + 1;
                    self.section_list_state.select(Some(self.selected_section_index));
                }
                Err(e) => self.error_message = Some(format!("Error reordering sections: {e}")),
            }
        }
    }

    /// Move the selected section one position up
    pub fn move_section_up(&mut self) {
        if self.selected_section_index > 0 && !self.store.sections().is_empty() {
            let from = self.selected_section_index;
            match self.store.reorder_sections(from, from - 1) {
                Ok(()) => {
                    self.selected_section_index = from - 1;
                    self.section_list_state.select(Some(self.selected_section_index));
                }
                Err(e) => self.error_message = Some(format!("Error reordering sections: {e}")),
            }
        }
    }

    /// Open a draft for a brand new section
    pub fn start_add_section(&mut self) {
        self.editor.open_new();
        self.draft_focus = DraftField::Title;
        self.selected_visualization_index = 0;
    }

    /// Open a draft for the selected section
    pub fn start_edit_section(&mut self) {
        if let Some(section) = self.store.sections().get(self.selected_section_index) {
            let section = section.clone();
            self.editor.open_existing(&section);
            self.draft_focus = DraftField::Title;
            self.selected_visualization_index = 0;
        }
    }

    /// Commit the open draft into the template
    pub fn commit_section(&mut self) {
        match self.editor.commit(&mut self.store) {
            Ok(true) => {
                self.info_message = Some(SUCCESS_SECTION_COMMITTED.to_string());
                self.clamp_section_selection();
            }
            Ok(false) => {
                self.error_message = Some(ERROR_COMMIT_BLOCKED.to_string());
            }
            Err(e) => {
                self.error_message = Some(format!("Error saving section: {e}"));
            }
        }
    }

    /// Discard the open draft without touching the template
    pub fn discard_section(&mut self) {
        self.editor.discard();
        self.picking_visualization = false;
    }

    /// Add a character to the focused draft field
    pub fn add_char_to_draft(&mut self, c: char) {
        let Some(draft) = self.editor.draft() else { return };
        let result = match self.draft_focus {
            DraftField::Title => {
                let mut title = draft.title.clone();
                title.push(c);
                self.editor.set_title(title)
            }
            DraftField::Description => {
                let mut description = draft.description.clone();
                description.push(c);
                self.editor.set_description(description)
            }
        };
        if let Err(e) = result {
            self.error_message = Some(format!("Error editing section: {e}"));
        }
    }

    /// Remove the last character from the focused draft field
    pub fn remove_char_from_draft(&mut self) {
        let Some(draft) = self.editor.draft() else { return };
        let result = match self.draft_focus {
            DraftField::Title => {
                let mut title = draft.title.clone();
                title.pop();
                self.editor.set_title(title)
            }
            DraftField::Description => {
                let mut description = draft.description.clone();
                description.pop();
                self.editor.set_description(description)
            }
        };
        if let Err(e) = result {
            self.error_message = Some(format!("Error editing section: {e}"));
        }
    }

    /// Toggle focus between the draft title and description fields
    pub fn toggle_draft_focus(&mut self) {
        self.draft_focus = match self.draft_focus {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::Title,
        };
    }

    /// Navigate to the next visualization in the draft
    pub fn next_visualization(&mut self) {
        if let Some(draft) = self.editor.draft() {
            let count = draft.visualizations.len();
            if count > 0 {
                self.selected_visualization_index = (self.selected_visualization_index + 1) % count;
            }
        }
    }

    /// Navigate to the previous visualization in the draft
    pub fn previous_visualization(&mut self) {
        if let Some(draft) = self.editor.draft() {
            let count = draft.visualizations.len();
            if count > 0 {
                self.selected_visualization_index = if self.selected_visualization_index == 0 {
                    count - 1
                } else {
                    self.selected_visualization_index - 1
                };
            }
        }
    }

    /// Remove the selected visualization from the draft
    pub fn remove_selected_visualization(&mut self) {
        let Some(draft) = self.editor.draft() else { return };
        if let Some(visualization) = draft.visualizations.get(self.selected_visualization_index) {
            let viz_id = visualization.id.clone();
            if let Err(e) = self.editor.remove_visualization(&viz_id) {
                self.error_message = Some(format!("Error removing visualization: {e}"));
            }
            let count = self.editor.draft().map_or(0, |d| d.visualizations.len());
            if self.selected_visualization_index >= count {
                self.selected_visualization_index = count.saturating_sub(1);
            }
        }
    }

    /// Open the visualization picker over the section dialog
    pub fn open_picker(&mut self) {
        if self.editor.is_open() && !self.catalog.is_empty() {
            self.picking_visualization = true;
            self.picker_index = 0;
        }
    }

    /// Close the visualization picker
    pub fn close_picker(&mut self) {
        self.picking_visualization = false;
    }

    /// Navigate to the next catalog entry in the picker
    pub fn next_picker_item(&mut self) {
        if !self.catalog.is_empty() {
            self.picker_index = (self.picker_index + 1) % self.catalog.len();
        }
    }

    /// Navigate to the previous catalog entry in the picker
    pub fn previous_picker_item(&mut self) {
        if !self.catalog.is_empty() {
            self.picker_index = if self.picker_index == 0 {
                self.catalog.len() - 1
            } else {
                self.picker_index - 1
            };
        }
    }

    /// Append the highlighted catalog entry to the draft and close the picker
    pub fn pick_visualization(&mut self) {
        if let Some(entry) = self.catalog.get(self.picker_index).cloned() {
            match self.editor.add_visualization(&entry) {
                Ok(_) => self.info_message = Some(SUCCESS_VISUALIZATION_ADDED.to_string()),
                Err(e) => self.error_message = Some(format!("Error adding visualization: {e}")),
            }
        }
        self.picking_visualization = false;
    }

    /// Start section deletion confirmation
    pub fn start_delete_section(&mut self) {
        if let Some(section) = self.store.sections().get(self.selected_section_index) {
            self.delete_confirmation = Some(section.id.clone());
        }
    }

    /// Cancel section deletion
    pub fn cancel_delete_section(&mut self) {
        self.delete_confirmation = None;
    }

    /// Delete the confirmed section
    pub fn delete_section(&mut self) {
        if let Some(section_id) = self.delete_confirmation.take() {
            self.store.remove_section(&section_id);
            self.clamp_section_selection();
            self.info_message = Some(SUCCESS_SECTION_DELETED.to_string());
        }
    }

    /// Start inline editing of a template form field
    pub fn start_edit_field(&mut self, field: TemplateField) {
        self.editing_field = Some(field);
    }

    /// Finish inline editing of the template form
    pub fn stop_edit_field(&mut self) {
        self.editing_field = None;
    }

    /// Add a character to the template field being edited
    pub fn add_char_to_field(&mut self, c: char) {
        match self.editing_field {
            Some(TemplateField::Name) => {
                let mut name = self.store.template().name.clone();
                name.push(c);
                self.store.set_name(name);
            }
            Some(TemplateField::Description) => {
                let mut description = self.store.template().description.clone();
                description.push(c);
                self.store.set_description(description);
            }
            None => {}
        }
    }

    /// Remove the last character from the template field being edited
    pub fn remove_char_from_field(&mut self) {
        match self.editing_field {
            Some(TemplateField::Name) => {
                let mut name = self.store.template().name.clone();
                name.pop();
                self.store.set_name(name);
            }
            Some(TemplateField::Description) => {
                let mut description = self.store.template().description.clone();
                description.pop();
                self.store.set_description(description);
            }
            None => {}
        }
    }

    /// Cycle the data source through the available options (and back to none)
    pub fn cycle_data_source(&mut self) {
        if self.data_sources.is_empty() {
            return;
        }

        let next = match self.store.template().data_source.as_deref() {
            None => Some(self.data_sources[0].id.clone()),
            Some(current) => match self.data_sources.iter().position(|ds| ds.id == current) {
                Some(index) if index + 1 < self.data_sources.len() => {
                    Some(self.data_sources[index + 1].id.clone())
                }
                // Past the last option, or the current id is stale
                _ => None,
            },
        };
        self.store.set_data_source(next);
    }

    /// Toggle the public visibility flag
    pub fn toggle_public(&mut self) {
        let is_public = self.store.template().is_public;
        self.store.set_public(!is_public);
    }

    /// Display name of the currently selected data source
    #[must_use]
    pub fn data_source_name(&self) -> Option<&str> {
        let current = self.store.template().data_source.as_deref()?;
        self.data_sources
            .iter()
            .find(|ds| ds.id == current)
            .map(|ds| ds.name.as_str())
    }

    /// Save the template through the host and end the session
    pub fn save_template(&mut self) {
        if self.store.save(&mut *self.host) {
            self.info_message = Some(SUCCESS_TEMPLATE_SAVED.to_string());
            self.should_quit = true;
        } else {
            self.error_message = Some(ERROR_SAVE_BLOCKED.to_string());
        }
    }

    /// Abandon the session, notifying the host
    pub fn cancel_editing(&mut self) {
        self.store.cancel(&mut *self.host);
        self.should_quit = true;
    }
}
