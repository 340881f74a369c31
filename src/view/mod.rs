//! Document registry - maps relative document paths to native views

use url::Url;

/// Templated form document
pub const INDEX_DOCUMENT: &str = "app/views/index.ejs";
/// Static form document
pub const BASE_DOCUMENT: &str = "app/templates/base.html";
/// Progress document
pub const PROGRESS_DOCUMENT: &str = "app/views/progress.ejs";

/// Native view a document renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// File chooser, time range and process button
    Form,
    /// Static progress page
    Progress,
}

const DOCUMENTS: &[(&str, ViewKind)] = &[
    (INDEX_DOCUMENT, ViewKind::Form),
    (BASE_DOCUMENT, ViewKind::Form),
    (PROGRESS_DOCUMENT, ViewKind::Progress),
];

/// Root every document location is resolved against
const ROOT: &str = "app:///";

/// Look up the view for a document location; query and fragment are ignored
pub fn lookup(location: &str) -> Option<ViewKind> {
    let url = locate(location)?;
    let path = url.path().trim_start_matches('/');
    DOCUMENTS
        .iter()
        .find(|(doc, _)| *doc == path)
        .map(|(_, kind)| *kind)
}

/// Resolve `target` against `current`, like assigning `location.href`
pub fn resolve(current: &str, target: &str) -> String {
    match locate(current).and_then(|base| base.join(target).ok()) {
        Some(url) => url
            .as_str()
            .strip_prefix(ROOT)
            .unwrap_or(url.as_str())
            .to_string(),
        None => target.to_string(),
    }
}

/// Absolute URL of a root-relative document location
fn locate(location: &str) -> Option<Url> {
    Url::parse(ROOT).ok()?.join(location).ok()
}
