use std::path::PathBuf;

use air_quality_shell::form::{DEFAULT_FILE_LABEL, FormEvent};
use air_quality_shell::gui::ShellApp;
use air_quality_shell::view::{self, BASE_DOCUMENT, INDEX_DOCUMENT, PROGRESS_DOCUMENT, ViewKind};
use air_quality_shell::{Profile, WindowConfig};
use pretty_assertions::assert_eq;

fn loaded(profile: Profile) -> ShellApp {
    let mut app = ShellApp::new(profile.window_config());
    app.begin_frame();
    app
}

#[test]
fn both_form_documents_resolve_to_progress() {
    assert_eq!(view::resolve(INDEX_DOCUMENT, "../views/progress.ejs"), PROGRESS_DOCUMENT);
    assert_eq!(view::resolve(BASE_DOCUMENT, "../views/progress.ejs"), PROGRESS_DOCUMENT);
}

#[test]
fn resolve_handles_siblings_and_absolute_targets() {
    assert_eq!(view::resolve(INDEX_DOCUMENT, "progress.ejs"), PROGRESS_DOCUMENT);
    assert_eq!(view::resolve(INDEX_DOCUMENT, "./progress.ejs"), PROGRESS_DOCUMENT);
    assert_eq!(view::resolve(PROGRESS_DOCUMENT, "/app/templates/base.html"), BASE_DOCUMENT);
}

#[test]
fn empty_target_reloads_current_document() {
    assert_eq!(view::resolve(INDEX_DOCUMENT, ""), INDEX_DOCUMENT);
    assert_eq!(view::resolve(BASE_DOCUMENT, ""), BASE_DOCUMENT);
}

#[test]
fn query_and_fragment_keep_the_document() {
    let with_query = view::resolve(INDEX_DOCUMENT, "../views/progress.ejs?from=form");
    assert_eq!(with_query, "app/views/progress.ejs?from=form");
    assert_eq!(view::lookup(&with_query), Some(ViewKind::Progress));

    let with_fragment = view::resolve(INDEX_DOCUMENT, "#top");
    assert_eq!(with_fragment, "app/views/index.ejs#top");
    assert_eq!(view::lookup(&with_fragment), Some(ViewKind::Form));
}

#[test]
fn registry_knows_the_three_documents() {
    assert_eq!(view::lookup(INDEX_DOCUMENT), Some(ViewKind::Form));
    assert_eq!(view::lookup(BASE_DOCUMENT), Some(ViewKind::Form));
    assert_eq!(view::lookup(PROGRESS_DOCUMENT), Some(ViewKind::Progress));
    assert_eq!(view::lookup("app/views/finish.ejs"), None);
}

#[test]
fn full_scenario() {
    let mut app = loaded(Profile::Templated);
    assert_eq!(app.current_document(), INDEX_DOCUMENT);

    let form = app.form().unwrap();
    assert!(!form.visibility().start_date_visible());
    assert!(!form.visibility().end_date_visible());
    assert_eq!(form.file_label(), DEFAULT_FILE_LABEL);

    app.dispatch(FormEvent::TimeRangeChanged("yes".into()));
    assert!(app.form().unwrap().visibility().start_date_visible());
    assert!(app.form().unwrap().visibility().end_date_visible());

    app.dispatch(FormEvent::TimeRangeChanged("no".into()));
    assert!(!app.form().unwrap().visibility().start_date_visible());
    assert!(!app.form().unwrap().visibility().end_date_visible());

    app.dispatch(FormEvent::FilesChosen(vec![PathBuf::from("report.csv")]));
    assert_eq!(app.form().unwrap().file_label(), "report.csv");

    app.dispatch(FormEvent::ProcessClicked);
    // Load applies on the next frame
    assert_eq!(app.current_document(), INDEX_DOCUMENT);

    app.begin_frame();
    assert_eq!(app.current_document(), PROGRESS_DOCUMENT);
    assert!(app.form().is_none());
}

#[test]
fn static_profile_navigates_to_same_progress_document() {
    let mut app = loaded(Profile::Static);
    assert_eq!(app.current_document(), BASE_DOCUMENT);

    app.dispatch(FormEvent::ProcessClicked);
    app.begin_frame();

    assert_eq!(app.current_document(), PROGRESS_DOCUMENT);
}

#[test]
fn start_over_loads_a_fresh_form() {
    let mut app = loaded(Profile::Templated);
    app.dispatch(FormEvent::FilesChosen(vec![PathBuf::from("report.csv")]));
    app.dispatch(FormEvent::ProcessClicked);
    app.begin_frame();

    app.start_over();
    app.begin_frame();

    assert_eq!(app.current_document(), INDEX_DOCUMENT);
    let form = app.form().unwrap();
    assert!(form.is_ready());
    assert_eq!(form.file_label(), DEFAULT_FILE_LABEL);
    assert_eq!(form.selected_file(), None);
}

#[test]
fn events_on_progress_page_are_ignored() {
    let mut app = loaded(Profile::Templated);
    app.dispatch(FormEvent::ProcessClicked);
    app.begin_frame();

    app.dispatch(FormEvent::ProcessClicked);
    app.begin_frame();

    assert_eq!(app.current_document(), PROGRESS_DOCUMENT);
}

#[test]
fn unknown_start_document_shows_blank_page() {
    let config = WindowConfig {
        start_document: "app/views/missing.ejs".to_string(),
        ..Profile::Templated.window_config()
    };
    let mut app = ShellApp::new(config);
    app.begin_frame();

    assert!(app.is_blank());
    assert_eq!(app.current_document(), "app/views/missing.ejs");
    assert!(app.form().is_none());
}

#[test]
fn view_ready_does_not_navigate() {
    let mut app = loaded(Profile::Static);
    app.begin_frame();
    app.begin_frame();

    assert_eq!(app.current_document(), BASE_DOCUMENT);
    assert!(app.form().unwrap().is_ready());
}
