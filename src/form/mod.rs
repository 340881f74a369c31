//! Form controller - event handling for the analysis form view

mod visibility;

pub use visibility::{USE_TIME_RANGE_NO, USE_TIME_RANGE_YES, Visibility};

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text shown in `inputFileLabel` before a file is chosen
pub const DEFAULT_FILE_LABEL: &str = "No File Selected";

/// Navigation target of the `process` control, relative to the form document
pub const PROCESS_TARGET: &str = "../views/progress.ejs";

/// Events dispatched to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The view's structure is available; binds handlers
    ViewReady,
    /// `useTimeRange` radio changed
    TimeRangeChanged(String),
    /// `inputChooseFile` changed
    FilesChosen(Vec<PathBuf>),
    /// `timeRangeStartDateTimePicker` changed
    StartChanged(NaiveDateTime),
    /// End date-time picker changed
    EndChanged(NaiveDateTime),
    /// `process` activated
    ProcessClicked,
}

/// Side effects requested by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Replace the current document with a relative target
    Navigate(String),
}

/// Transient state of one loaded form view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Handlers bound
    ready: bool,
    use_time_range: String,
    visibility: Visibility,
    file_label: String,
    selected_file: Option<PathBuf>,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl FormState {
    /// Fresh form state; both pickers start at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            ready: false,
            use_time_range: USE_TIME_RANGE_NO.to_string(),
            visibility: Visibility::HIDDEN,
            file_label: DEFAULT_FILE_LABEL.to_string(),
            selected_file: None,
            start: now,
            end: now,
        }
    }

    /// Form state using the current local time
    pub fn now() -> Self {
        Self::new(chrono::Local::now().naive_local())
    }

    /// Apply one event. Everything except `ViewReady` is dropped until the view is ready.
    pub fn handle(&mut self, event: FormEvent) -> Option<FormEffect> {
        if !self.ready && event != FormEvent::ViewReady {
            debug!(?event, "form not ready, event dropped");
            return None;
        }

        match event {
            FormEvent::ViewReady => {
                if !self.ready {
                    self.visibility = Visibility::HIDDEN;
                    self.ready = true;
                    debug!("form handlers bound");
                }
                None
            }
            FormEvent::TimeRangeChanged(value) => {
                self.visibility = Visibility::from_choice(&value);
                debug!(value = %value, shown = self.visibility.start_date_visible(), "time range toggled");
                self.use_time_range = value;
                None
            }
            FormEvent::FilesChosen(files) => {
                // Only the first file counts
                if let Some(first) = files.into_iter().next() {
                    self.file_label = display_name(&first);
                    debug!(label = %self.file_label, "file chosen");
                    self.selected_file = Some(first);
                }
                None
            }
            FormEvent::StartChanged(at) => {
                self.start = at;
                None
            }
            FormEvent::EndChanged(at) => {
                self.end = at;
                None
            }
            FormEvent::ProcessClicked => {
                debug!(file = ?self.selected_file, "process clicked");
                Some(FormEffect::Navigate(PROCESS_TARGET.to_string()))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current `useTimeRange` value
    pub fn time_range_choice(&self) -> &str {
        &self.use_time_range
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Text of `inputFileLabel`
    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Folder to reveal for the chosen file; only when the view has host access
    pub fn open_folder_target(&self, host_access: bool) -> Option<&Path> {
        if !host_access {
            return None;
        }
        self.selected_file()
            .and_then(Path::parent)
            .filter(|folder| !folder.as_os_str().is_empty())
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Final path component, or the whole path when there is none
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
