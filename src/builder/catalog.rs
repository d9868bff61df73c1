//! Catalogs of selectable visualization types and data sources.
//!
//! Both catalogs are read-only inputs supplied by the embedding application.
//! The built-in defaults below are what the bundled binary offers; an
//! embedder passes its own lists instead.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A selectable visualization type with its default configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationKind {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub default_config: serde_json::Value,
    pub icon: String,
}

impl VisualizationKind {
    #[must_use]
    pub fn new(kind: &str, title: &str, description: &str, default_config: serde_json::Value, icon: &str) -> Self {
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            default_config,
            icon: icon.to_string(),
        }
    }
}

/// A reference to an external data source a template can render from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub id: String,
    pub name: String,
}

impl DataSourceRef {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

static BUILTIN_CATALOG: Lazy<Vec<VisualizationKind>> = Lazy::new(|| {
    vec![
        VisualizationKind::new(
            "bar",
            "Bar Chart",
            "Compare values across categories",
            json!({ "stacked": false, "horizontal": false, "showLegend": true }),
            "📊",
        ),
        VisualizationKind::new(
            "line",
            "Line Chart",
            "Track values over time",
            json!({ "smooth": false, "showPoints": true, "showLegend": true }),
            "📈",
        ),
        VisualizationKind::new(
            "pie",
            "Pie Chart",
            "Show proportions of a whole",
            json!({ "donut": false, "showLabels": true }),
            "🥧",
        ),
        VisualizationKind::new(
            "table",
            "Data Table",
            "Tabular listing with sortable columns",
            json!({ "pageSize": 25, "striped": true, "showTotals": false }),
            "🧾",
        ),
        VisualizationKind::new(
            "kpi",
            "KPI Card",
            "Single headline metric with trend indicator",
            json!({ "showTrend": true, "comparisonPeriod": "previous" }),
            "🎯",
        ),
    ]
});

static BUILTIN_DATA_SOURCES: Lazy<Vec<DataSourceRef>> = Lazy::new(|| {
    vec![
        DataSourceRef::new("daily_actions", "Daily Actions"),
        DataSourceRef::new("player_summary", "Player Summary"),
        DataSourceRef::new("revenue", "Revenue"),
        DataSourceRef::new("transactions", "Transactions"),
    ]
});

/// Built-in visualization catalog used by the bundled binary.
#[must_use]
pub fn builtin_catalog() -> &'static [VisualizationKind] {
    &BUILTIN_CATALOG
}

/// Built-in data source list used by the bundled binary.
#[must_use]
pub fn builtin_data_sources() -> &'static [DataSourceRef] {
    &BUILTIN_DATA_SOURCES
}
