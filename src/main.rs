use anm2_reorderer::cli::Args;
use anm2_reorderer::core::doc_events::*;
use anm2_reorderer::core::event_bus::{Event, EventBus};
use anm2_reorderer::main_events::{self, AppState};
use anm2_reorderer::widgets;
use anm2_reorderer::widgets::animations::AnimationsState;
use anm2_reorderer::widgets::file_dialogs::create_anm2_dialog;

use clap::Parser;
use eframe::egui;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Main application state
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct ReordererApp {
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    event_bus: EventBus,
    #[serde(skip)]
    animations_state: AnimationsState,
    /// Last directory used in a file dialog (persistent)
    last_dir: Option<PathBuf>,
    dark_mode: bool,
}

impl Default for ReordererApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            event_bus: EventBus::new(),
            animations_state: AnimationsState::default(),
            last_dir: None,
            dark_mode: true,
        }
    }
}

impl ReordererApp {
    fn dialog_dir(&self) -> PathBuf {
        self.last_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    fn remember_dir(&mut self, path: &Path) {
        if let Some(dir) = path.parent() {
            self.last_dir = Some(dir.to_path_buf());
        }
    }

    fn show_open_dialog(&mut self) {
        if let Some(path) = create_anm2_dialog("Open Animation File")
            .set_directory(self.dialog_dir())
            .pick_file()
        {
            self.remember_dir(&path);
            self.state.load_document(path);
        }
    }

    fn show_save_as_dialog(&mut self) {
        let Some(doc) = self.state.document.as_ref() else {
            return;
        };
        let file_name = doc
            .path()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or("animations.anm2")
            .to_string();

        if let Some(path) = create_anm2_dialog("Save Animation File As")
            .set_directory(self.dialog_dir())
            .set_file_name(file_name)
            .save_file()
        {
            self.remember_dir(&path);
            self.state.save_document(Some(path));
        }
    }

    /// Quick save - saves to the loaded path or falls back to Save As.
    fn quick_save(&mut self) {
        let Some(doc) = self.state.document.as_ref() else {
            return;
        };
        if doc.path().is_some() {
            self.state.save_document(None);
        } else {
            self.show_save_as_dialog();
        }
    }

    /// Drain the event queue and execute deferred file actions after
    /// the loop (dialogs and I/O must not run mid-drain).
    fn handle_events(&mut self, ctx: &egui::Context) {
        let mut deferred_load: Option<PathBuf> = None;
        let mut deferred_save: Option<PathBuf> = None;
        let mut deferred_quick_save = false;
        let mut deferred_show_open = false;
        let mut deferred_show_save_as = false;
        let mut deferred_exit = false;

        for event in self.event_bus.poll() {
            match main_events::handle_app_event(&event, &mut self.state) {
                Some(result) => {
                    if let Some(path) = result.load_document {
                        deferred_load = Some(path);
                    }
                    if let Some(path) = result.save_document {
                        deferred_save = Some(path);
                    }
                    deferred_quick_save |= result.quick_save;
                    deferred_show_open |= result.show_open_dialog;
                    deferred_show_save_as |= result.show_save_as_dialog;
                    deferred_exit |= result.exit;
                }
                None => debug!("Unhandled event: {}", (*event).type_name()),
            }
        }

        if let Some(path) = deferred_load {
            self.remember_dir(&path);
            self.state.load_document(path);
        }
        if let Some(path) = deferred_save {
            self.remember_dir(&path);
            self.state.save_document(Some(path));
        }
        if deferred_quick_save {
            self.quick_save();
        }
        if deferred_show_open {
            self.show_open_dialog();
        }
        if deferred_show_save_as {
            self.show_save_as_dialog();
        }
        if deferred_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let has_document = self.state.document.is_some();
                ui.menu_button("File", |ui| {
                    if ui.button("Open...").clicked() {
                        self.event_bus.emit(OpenFileDialogEvent);
                        ui.close();
                    }
                    if ui
                        .add_enabled(has_document, egui::Button::new("Save"))
                        .clicked()
                    {
                        self.event_bus.emit(QuickSaveEvent);
                        ui.close();
                    }
                    if ui
                        .add_enabled(has_document, egui::Button::new("Save As..."))
                        .clicked()
                    {
                        self.event_bus.emit(SaveAsDialogEvent);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        self.event_bus.emit(ExitEvent);
                        ui.close();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.dark_mode, "Dark mode");
                });
            });
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.state.document.as_ref().and_then(|d| d.path()) {
                    Some(path) => ui.label(path.display().to_string()),
                    None => ui.label("No file loaded"),
                };

                if self.state.error_msg.is_some() {
                    ui.separator();
                    if ui.small_button("x").clicked() {
                        self.state.error_msg = None;
                    }
                    if let Some(err) = &self.state.error_msg {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }
                }
            });
        });
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Don't process hotkeys when text input is active (rename field)
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::O)) {
            self.event_bus.emit(OpenFileDialogEvent);
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
            self.event_bus.emit(QuickSaveEvent);
        }
    }
}

impl eframe::App for ReordererApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Process all events queued since the last frame
        self.handle_events(ctx);

        // Handle dropped files - same path as File > Open
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    info!("File dropped: {}", path.display());
                    self.event_bus.emit(LoadDocumentEvent(path.clone()));
                }
            }
        });

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            // Projection of the document's current order, rebuilt every
            // frame so it can never drift from the tree.
            let names = self.state.animation_names();
            let actions = widgets::animations::render(
                ui,
                &names,
                self.state.selected.as_deref(),
                self.state.document.is_some(),
                &mut self.animations_state,
            );
            for evt in actions.events {
                self.event_bus.emit_boxed(evt);
            }
        });

        self.handle_keyboard_input(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            debug!("App state saved: dark_mode={}", self.dark_mode);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("anm2_reorderer.log"));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info)
            .format_timestamp_millis()
            .init();
    }

    info!("anm2 reorderer starting...");
    debug!("Command-line args: {:?}", args);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("anm2 reorderer v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size(egui::vec2(420.0, 640.0))
            .with_resizable(true)
            .with_drag_and_drop(true),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "anm2-reorderer",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: ReordererApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    ReordererApp::default()
                });

            if let Some(path) = args.file_path.clone() {
                info!("Input file: {}", path.display());
                app.state.load_document(path);
            }

            Ok(Box::new(app))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
