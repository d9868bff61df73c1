//! Data model for report templates.
//!
//! A [`Template`] is the root aggregate: metadata plus an ordered list of
//! [`Section`]s, each holding an ordered list of [`Visualization`]s. Order is
//! user-controlled and observable, so both lists are plain `Vec`s that are
//! only ever resequenced through the reorder engine.

use crate::constants::{DEFAULT_VISUALIZATION_WIDTH, SECTION_ID_PREFIX, VISUALIZATION_ID_PREFIX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete user-authored report definition.
///
/// An empty `id` marks a template that has not been persisted yet (create
/// mode); a non-empty `id` marks an existing template being edited. Identity
/// assignment is the persistence collaborator's concern, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sections: Vec<Section>,
    pub data_source: Option<String>,
    /// Opaque filter descriptors, carried through untouched.
    pub filters: Vec<serde_json::Value>,
    pub is_public: bool,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Whether this template has never been persisted.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Find the position of a section by id.
    #[must_use]
    pub fn section_position(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }
}

/// A named grouping of visualizations within a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub visualizations: Vec<Visualization>,
    /// UI-state flag only; not semantically load-bearing.
    pub expanded: bool,
}

impl Section {
    /// Create an empty section with a freshly generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: generate_id(SECTION_ID_PREFIX),
            title: String::new(),
            description: String::new(),
            visualizations: Vec::new(),
            expanded: true,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// A single chart/table instance with a type, configuration and target data
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Per-instance copy of the catalog entry's default configuration.
    pub config: serde_json::Value,
    pub data_field: String,
    /// Width in grid column units (1-12).
    pub width: u16,
}

impl Visualization {
    /// Create a visualization from a catalog type/title pair and a config
    /// payload, with a fresh id and full default width.
    #[must_use]
    pub fn new(kind: &str, title: &str, config: serde_json::Value) -> Self {
        Self {
            id: generate_id(VISUALIZATION_ID_PREFIX),
            kind: kind.to_string(),
            title: title.to_string(),
            config,
            data_field: String::new(),
            width: DEFAULT_VISUALIZATION_WIDTH,
        }
    }
}

/// Generate a prefixed identifier unique within any parent scope.
///
/// The token is a v4 UUID rather than a timestamp so that ids created in the
/// same millisecond can never collide.
fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}
