//! Main application window

use crate::config::WindowConfig;
use crate::form::{USE_TIME_RANGE_NO, USE_TIME_RANGE_YES, FormEffect, FormEvent, FormState};
use crate::view::{self, ViewKind};
use chrono::{NaiveDateTime, Timelike};
use eframe::egui;
use egui::{CentralPanel, RichText, Vec2};
use egui_extras::DatePickerButton;
use tracing::{debug, info, warn};

use super::theme::Colors;

/// Data file types offered by the file chooser
const DATA_FILE_TYPES: &[&str] = &["xlsx", "xls", "csv"];

/// View currently loaded in the window
enum LoadedView {
    Form(FormState),
    Progress,
    /// Unknown document
    Blank,
}

/// Application state
pub struct ShellApp {
    /// Fixed window configuration
    config: WindowConfig,
    /// Path of the loaded document
    current_document: String,
    view: LoadedView,
    /// Document to load at the start of the next frame
    pending: Option<String>,
}

impl ShellApp {
    pub fn new(config: WindowConfig) -> Self {
        let start = config.start_document.clone();
        let mut app = Self {
            config,
            current_document: String::new(),
            view: LoadedView::Blank,
            pending: None,
        };
        app.load(&start);
        app
    }

    pub fn current_document(&self) -> &str {
        &self.current_document
    }

    /// Form state when the form view is loaded
    pub fn form(&self) -> Option<&FormState> {
        match &self.view {
            LoadedView::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.view, LoadedView::Blank)
    }

    /// Apply a queued load, then signal view-ready to a fresh form
    pub fn begin_frame(&mut self) {
        if let Some(path) = self.pending.take() {
            self.load(&path);
        }

        let effect = match &mut self.view {
            LoadedView::Form(form) if !form.is_ready() => form.handle(FormEvent::ViewReady),
            _ => None,
        };
        self.apply(effect);
    }

    /// Send an event to the loaded form
    pub fn dispatch(&mut self, event: FormEvent) {
        let LoadedView::Form(form) = &mut self.view else {
            debug!(?event, "no form loaded, event ignored");
            return;
        };

        let effect = form.handle(event);
        self.apply(effect);
    }

    fn apply(&mut self, effect: Option<FormEffect>) {
        if let Some(FormEffect::Navigate(target)) = effect {
            self.navigate(&target);
        }
    }

    /// Return to the starting document with a fresh form
    pub fn start_over(&mut self) {
        self.pending = Some(self.config.start_document.clone());
    }

    fn navigate(&mut self, target: &str) {
        let path = view::resolve(&self.current_document, target);
        info!(from = %self.current_document, to = %path, "navigating");
        self.pending = Some(path);
    }

    /// Replace the current view, discarding its state
    fn load(&mut self, path: &str) {
        self.view = match view::lookup(path) {
            Some(ViewKind::Form) => LoadedView::Form(FormState::now()),
            Some(ViewKind::Progress) => LoadedView::Progress,
            None => {
                warn!(document = %path, "document not found, showing blank page");
                LoadedView::Blank
            }
        };
        info!(document = %path, "document loaded");
        self.current_document = path.to_string();
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.begin_frame();

        let mut events = Vec::new();
        let mut start_over = false;

        CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = Vec2::new(8.0, 12.0);

            match &self.view {
                LoadedView::Form(form) => {
                    events = form_ui(ui, form, self.config.host_access());
                }
                LoadedView::Progress => {
                    start_over = progress_ui(ui);
                }
                LoadedView::Blank => {}
            }
        });

        for event in events {
            self.dispatch(event);
        }

        if start_over {
            self.start_over();
        }

        // Apply queued loads promptly
        if self.pending.is_some() {
            ctx.request_repaint();
        }
    }
}

/// Draw the form and collect the events it raised
fn form_ui(ui: &mut egui::Ui, form: &FormState, host_access: bool) -> Vec<FormEvent> {
    let mut events = Vec::new();

    ui.heading(RichText::new("CDC Air Quality Analysis")
        .size(24.0)
        .color(Colors::PRIMARY));

    // File chooser
    ui.push_id("inputChooseFile", |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Select Data File:").color(Colors::TEXT));

            ui.add(
                egui::Label::new(RichText::new(form.file_label()).color(Colors::TEXT_MUTED))
                    .wrap(),
            )
            .on_hover_text(form.file_label());

            if ui.button("Browse").clicked() {
                let picked = rfd::FileDialog::new()
                    .set_title("Select Data File")
                    .add_filter("Data Files", DATA_FILE_TYPES)
                    .add_filter("All Files", &["*"])
                    .pick_file();
                if let Some(path) = picked {
                    events.push(FormEvent::FilesChosen(vec![path]));
                }
            }

            if let Some(folder) = form.open_folder_target(host_access) {
                if ui.button("Open Containing Folder").clicked() {
                    if let Err(e) = open::that(folder) {
                        warn!(folder = %folder.display(), error = %e, "could not open folder");
                    }
                }
            }
        });
    });

    // useTimeRange
    ui.push_id("useTimeRange", |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Use Time Range?").color(Colors::TEXT));

            let mut choice = form.time_range_choice().to_string();
            let yes = ui.radio_value(&mut choice, USE_TIME_RANGE_YES.to_string(), "Yes");
            let no = ui.radio_value(&mut choice, USE_TIME_RANGE_NO.to_string(), "No");
            if yes.changed() || no.changed() {
                events.push(FormEvent::TimeRangeChanged(choice));
            }
        });
    });

    let visibility = form.visibility();

    if visibility.start_date_visible() {
        ui.push_id("startDateFormGroup", |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Start Time:").color(Colors::TEXT));
                if let Some(at) = date_time_picker(ui, "timeRangeStartDateTimePicker", form.start()) {
                    events.push(FormEvent::StartChanged(at));
                }
            });
        });
    }

    if visibility.end_date_visible() {
        ui.push_id("endDateFormGroup", |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("End Time:").color(Colors::TEXT));
                if let Some(at) = date_time_picker(ui, "timeRangeEndDateTimePicker", form.end()) {
                    events.push(FormEvent::EndChanged(at));
                }
            });
        });
    }

    ui.add_space(10.0);

    let process = ui.push_id("process", |ui| {
        ui.add_sized([ui.available_width(), 32.0], egui::Button::new("Process File"))
    });
    if process.inner.clicked() {
        events.push(FormEvent::ProcessClicked);
    }

    events
}

/// Date button plus hour/minute fields; returns the new value when edited
fn date_time_picker(ui: &mut egui::Ui, id: &str, value: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut date = value.date();
    let mut hour = value.hour();
    let mut minute = value.minute();

    let mut changed = ui.add(DatePickerButton::new(&mut date).id_salt(id)).changed();
    changed |= ui
        .add(egui::DragValue::new(&mut hour).range(0..=23).suffix(" h"))
        .changed();
    changed |= ui
        .add(egui::DragValue::new(&mut minute).range(0..=59).suffix(" min"))
        .changed();

    if changed {
        date.and_hms_opt(hour, minute, 0)
    } else {
        None
    }
}

/// Draw the progress page; returns true when "Start Over" was clicked
fn progress_ui(ui: &mut egui::Ui) -> bool {
    ui.heading(RichText::new("Analysis in progress...")
        .size(24.0)
        .color(Colors::PRIMARY));

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.spinner();
        ui.add_space(20.0);
        ui.button("Start Over").clicked()
    })
    .inner
}
