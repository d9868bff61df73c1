use ratatui::{backend::TestBackend, Terminal};
use templatist::builder::{EditorHost, Section, Template};
use templatist::ui::components::dialogs::DeleteConfirmationDialog;
use templatist::ui::App;

/// Host that ignores every callback.
struct NullHost;

impl EditorHost for NullHost {
    fn on_save(&mut self, _template: Template) {}

    fn on_cancel(&mut self) {}
}

fn render_delete_confirmation_for(title: &str) {
    let mut section = Section::new();
    section.title = title.to_string();
    let section_id = section.id.clone();

    let mut host = NullHost;
    let mut app = App::new(None, Vec::new(), Vec::new(), &mut host);
    app.store.replace_sections(vec![section]);
    app.delete_confirmation = Some(section_id);

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| DeleteConfirmationDialog::render(f, &app))
        .unwrap();
}

#[test]
fn delete_confirmation_renders_multibyte_titles() {
    // 22 chars but 44 bytes; a byte-based length guard would slice mid-char
    render_delete_confirmation_for(&"é".repeat(22));
}

#[test]
fn delete_confirmation_truncates_long_multibyte_titles() {
    render_delete_confirmation_for(&"é".repeat(60));
}

#[test]
fn delete_confirmation_truncates_long_ascii_titles() {
    render_delete_confirmation_for(&"x".repeat(60));
}
