use serde_json::json;
use templatist::builder::{
    BuilderError, DraftMode, Section, SectionEditor, TemplateStore, VisualizationKind,
};

fn bar_chart() -> VisualizationKind {
    VisualizationKind::new("bar", "Bar Chart", "Compare values", json!({ "stacked": false }), "📊")
}

fn section_titled(title: &str) -> Section {
    let mut section = Section::new();
    section.title = title.to_string();
    section
}

#[test]
fn starts_closed() {
    let editor = SectionEditor::new();
    assert!(!editor.is_open());
    assert!(editor.draft().is_none());
    assert!(editor.mode().is_none());
    assert!(!editor.can_commit());
}

#[test]
fn open_new_creates_an_empty_draft_with_a_fresh_id() {
    let mut editor = SectionEditor::new();
    editor.open_new();

    assert!(editor.is_open());
    assert_eq!(editor.mode(), Some(DraftMode::New));
    let draft = editor.draft().unwrap();
    assert!(draft.id.starts_with("section_"));
    assert!(draft.title.is_empty());
    assert!(draft.visualizations.is_empty());
    assert!(draft.expanded);
}

#[test]
fn draft_operations_while_closed_are_loud_errors() {
    let mut editor = SectionEditor::new();
    let mut store = TemplateStore::new(None);

    assert!(matches!(editor.set_title("x"), Err(BuilderError::DraftClosed(_))));
    assert!(matches!(editor.set_description("x"), Err(BuilderError::DraftClosed(_))));
    assert!(matches!(editor.add_visualization(&bar_chart()), Err(BuilderError::DraftClosed(_))));
    assert!(matches!(editor.remove_visualization("viz_x"), Err(BuilderError::DraftClosed(_))));
    assert!(matches!(editor.commit(&mut store), Err(BuilderError::DraftClosed(_))));
    assert!(matches!(editor.reorder_visualizations(0, 0), Err(BuilderError::DraftClosed(_))));
}

#[test]
fn editing_a_draft_does_not_touch_the_committed_section() {
    let mut store = TemplateStore::new(None);
    let mut original = section_titled("Retention");
    original.description = "Cohort retention".to_string();
    let original_id = original.id.clone();
    store.replace_sections(vec![original]);

    let mut editor = SectionEditor::new();
    let committed = store.sections()[0].clone();
    editor.open_existing(&committed);
    assert_eq!(editor.mode(), Some(DraftMode::Editing));

    editor.set_title("Churn").unwrap();
    editor.set_description("Cohort churn").unwrap();
    editor.add_visualization(&bar_chart()).unwrap();

    // The committed list is untouched until commit
    assert_eq!(store.sections()[0].title, "Retention");
    assert_eq!(store.sections()[0].description, "Cohort retention");
    assert!(store.sections()[0].visualizations.is_empty());

    editor.commit(&mut store).unwrap();
    assert_eq!(store.sections().len(), 1);
    assert_eq!(store.sections()[0].id, original_id);
    assert_eq!(store.sections()[0].title, "Churn");
    assert_eq!(store.sections()[0].visualizations.len(), 1);
}

#[test]
fn commit_replaces_matching_section_in_place() {
    let mut store = TemplateStore::new(None);
    let a = section_titled("A");
    let b = section_titled("B");
    let c = section_titled("C");
    let b_id = b.id.clone();
    store.replace_sections(vec![a, b, c]);

    let mut editor = SectionEditor::new();
    let committed_b = store.sections()[1].clone();
    editor.open_existing(&committed_b);
    editor.set_title("B2").unwrap();
    assert!(editor.commit(&mut store).unwrap());

    let titles: Vec<&str> = store.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B2", "C"], "edited section must keep its index");
    assert_eq!(store.sections()[1].id, b_id);
    assert!(!editor.is_open());
}

#[test]
fn commit_appends_a_section_with_a_new_id() {
    let mut store = TemplateStore::new(None);
    store.replace_sections(vec![section_titled("A")]);

    let mut editor = SectionEditor::new();
    editor.open_new();
    editor.set_title("B").unwrap();
    assert!(editor.commit(&mut store).unwrap());

    let titles: Vec<&str> = store.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn commit_with_empty_title_is_blocked_and_keeps_the_draft_open() {
    let mut store = TemplateStore::new(None);
    let mut editor = SectionEditor::new();
    editor.open_new();

    assert!(!editor.can_commit());
    assert!(!editor.commit(&mut store).unwrap());
    assert!(editor.is_open(), "blocked commit must not close the draft");
    assert!(store.sections().is_empty());

    editor.set_title("Now valid").unwrap();
    assert!(editor.can_commit());
    assert!(editor.commit(&mut store).unwrap());
    assert_eq!(store.sections().len(), 1);
}

#[test]
fn discard_drops_the_draft_without_touching_the_template() {
    let mut store = TemplateStore::new(None);
    let a = section_titled("A");
    let mut b = section_titled("B");
    b.description = "original".to_string();
    let c = section_titled("C");
    store.replace_sections(vec![a, b, c]);
    let before = store.sections().to_vec();

    let mut editor = SectionEditor::new();
    let committed_b = store.sections()[1].clone();
    editor.open_existing(&committed_b);
    editor.set_description("changed my mind").unwrap();
    editor.discard();

    assert!(!editor.is_open());
    assert_eq!(store.sections(), &before[..]);
    assert_eq!(store.sections()[1].description, "original");
}

#[test]
fn discard_while_closed_is_harmless() {
    let mut editor = SectionEditor::new();
    editor.discard();
    assert!(!editor.is_open());
}

#[test]
fn remove_visualization_filters_by_id() {
    let mut editor = SectionEditor::new();
    editor.open_new();
    let first_id = editor.add_visualization(&bar_chart()).unwrap().id.clone();
    let second_id = editor.add_visualization(&bar_chart()).unwrap().id.clone();
    assert_ne!(first_id, second_id);

    editor.remove_visualization(&first_id).unwrap();
    let draft = editor.draft().unwrap();
    assert_eq!(draft.visualizations.len(), 1);
    assert_eq!(draft.visualizations[0].id, second_id);

    // Unknown ids are ignored
    editor.remove_visualization("viz_does_not_exist").unwrap();
    assert_eq!(editor.draft().unwrap().visualizations.len(), 1);
}

#[test]
fn set_visualization_data_field_targets_one_instance() {
    let mut editor = SectionEditor::new();
    editor.open_new();
    let first_id = editor.add_visualization(&bar_chart()).unwrap().id.clone();
    editor.add_visualization(&bar_chart()).unwrap();

    editor.set_visualization_data_field(&first_id, "net_revenue").unwrap();
    let draft = editor.draft().unwrap();
    assert_eq!(draft.visualizations[0].data_field, "net_revenue");
    assert_eq!(draft.visualizations[1].data_field, "");
}

#[test]
fn set_visualization_width_validates_the_grid_scale() {
    let mut editor = SectionEditor::new();
    editor.open_new();
    let viz_id = editor.add_visualization(&bar_chart()).unwrap().id.clone();

    editor.set_visualization_width(&viz_id, 6).unwrap();
    assert_eq!(editor.draft().unwrap().visualizations[0].width, 6);

    assert!(matches!(editor.set_visualization_width(&viz_id, 0), Err(BuilderError::InvalidWidth(0))));
    assert!(matches!(editor.set_visualization_width(&viz_id, 13), Err(BuilderError::InvalidWidth(13))));
    assert_eq!(editor.draft().unwrap().visualizations[0].width, 6);
}

#[test]
fn reorder_visualizations_uses_the_same_splice_semantics_as_sections() {
    let mut editor = SectionEditor::new();
    editor.open_new();
    let a = editor.add_visualization(&bar_chart()).unwrap().id.clone();
    let b = editor.add_visualization(&bar_chart()).unwrap().id.clone();
    let c = editor.add_visualization(&bar_chart()).unwrap().id.clone();

    editor.reorder_visualizations(0, 2).unwrap();
    let ids: Vec<String> = editor
        .draft()
        .unwrap()
        .visualizations
        .iter()
        .map(|v| v.id.clone())
        .collect();
    assert_eq!(ids, vec![b, c, a]);

    let err = editor.reorder_visualizations(5, 0).unwrap_err();
    assert!(matches!(err, BuilderError::IndexOutOfBounds { index: 5, len: 3 }));
}
