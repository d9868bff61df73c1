//! End-to-end editing session scenarios against the headless engine.

use serde_json::json;
use templatist::builder::{
    EditorHost, SectionEditor, Template, TemplateStore, VisualizationKind,
};

#[derive(Default)]
struct CollectingHost {
    saved: Vec<Template>,
    cancelled: usize,
}

impl EditorHost for CollectingHost {
    fn on_save(&mut self, template: Template) {
        self.saved.push(template);
    }

    fn on_cancel(&mut self) {
        self.cancelled += 1;
    }
}

#[test]
fn build_a_revenue_section_from_scratch() {
    let bar = VisualizationKind::new("bar", "Bar Chart", "Compare values", json!({ "stacked": false }), "📊");

    // Start with an empty template
    let mut store = TemplateStore::new(None);
    let mut editor = SectionEditor::new();

    // Open a new section draft, name it, pick a bar chart
    editor.open_new();
    editor.set_title("Revenue").unwrap();
    editor.add_visualization(&bar).unwrap();
    assert!(editor.commit(&mut store).unwrap());

    // Exactly one section titled "Revenue" with exactly one bar visualization
    let sections = store.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Revenue");
    assert_eq!(sections[0].visualizations.len(), 1);

    let viz = &sections[0].visualizations[0];
    assert_eq!(viz.kind, "bar");
    assert_eq!(viz.config["stacked"], json!(false));
    assert_eq!(viz.width, 12);
    assert_eq!(viz.data_field, "");
}

#[test]
fn full_session_saves_exactly_once_through_the_host() {
    let kpi = VisualizationKind::new("kpi", "KPI Card", "Headline metric", json!({ "showTrend": true }), "🎯");
    let mut store = TemplateStore::new(None);
    let mut editor = SectionEditor::new();
    let mut host = CollectingHost::default();

    store.set_name("Executive summary");
    store.set_data_source(Some("daily_actions".to_string()));

    editor.open_new();
    editor.set_title("Headlines").unwrap();
    editor.add_visualization(&kpi).unwrap();
    editor.commit(&mut store).unwrap();

    assert!(store.save(&mut host));
    assert_eq!(host.saved.len(), 1);
    assert_eq!(host.cancelled, 0);

    let saved = &host.saved[0];
    assert_eq!(saved.name, "Executive summary");
    assert_eq!(saved.data_source.as_deref(), Some("daily_actions"));
    assert_eq!(saved.sections.len(), 1);
    assert!(saved.updated_at.is_some());
}

#[test]
fn abandoning_a_session_reports_cancel_and_nothing_else() {
    let mut store = TemplateStore::new(None);
    let mut host = CollectingHost::default();

    store.set_name("Half-finished");
    store.cancel(&mut host);

    assert_eq!(host.cancelled, 1);
    assert!(host.saved.is_empty());
}

#[test]
fn reordering_is_independent_of_draft_editing() {
    let mut store = TemplateStore::new(None);
    let mut editor = SectionEditor::new();

    for title in ["A", "B", "C"] {
        editor.open_new();
        editor.set_title(title).unwrap();
        editor.commit(&mut store).unwrap();
    }

    // Reorder while no draft is open
    store.reorder_sections(0, 2).unwrap();
    let titles: Vec<&str> = store.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C", "A"]);

    // A later edit still lands on the right section
    let committed = store.sections()[2].clone();
    editor.open_existing(&committed);
    editor.set_title("A*").unwrap();
    editor.commit(&mut store).unwrap();
    let titles: Vec<&str> = store.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C", "A*"]);
}

#[test]
fn saved_template_round_trips_through_json() {
    let pie = VisualizationKind::new("pie", "Pie Chart", "Proportions", json!({ "donut": true }), "🥧");
    let mut store = TemplateStore::new(None);
    let mut editor = SectionEditor::new();
    let mut host = CollectingHost::default();

    store.set_name("Share of wallet");
    store.set_data_source(Some("revenue".to_string()));
    editor.open_new();
    editor.set_title("Breakdown").unwrap();
    editor.add_visualization(&pie).unwrap();
    editor.commit(&mut store).unwrap();
    store.save(&mut host);

    let json = serde_json::to_string(&host.saved[0]).unwrap();
    let restored: Template = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, &host.saved[0]);

    // A restored template can seed a new editing session
    let resumed = TemplateStore::new(Some(restored));
    assert_eq!(resumed.sections().len(), 1);
    assert_eq!(resumed.sections()[0].visualizations[0].kind, "pie");
}
