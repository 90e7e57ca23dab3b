//! Main application entry point

use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dm_core::progress::TICK_INTERVAL;
use dm_core::settings::SETTINGS_KEY;
use dm_core::{AppSettings, Session};
use dm_ui::{ShellAction, UiState};

mod file_dialogs;

/// Main application state
struct DataManagerApp {
    /// Grid, tree, log and control values of this window
    session: Session,

    /// Dock layout, dialogs and widget scratch state
    ui_state: UiState,

    /// Current user settings
    settings: AppSettings,

    /// Settings the theme was last built from
    applied_settings: AppSettings,

    /// When the progress animation last advanced
    last_tick: Instant,
}

impl DataManagerApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppSettings>(storage, SETTINGS_KEY))
            .unwrap_or_default()
            .sanitized();
        debug!(?settings, "loaded settings");

        dm_ui::apply_theme(&cc.egui_ctx, &settings);

        Self {
            session: Session::new(),
            ui_state: UiState::default(),
            applied_settings: settings.clone(),
            settings,
            last_tick: Instant::now(),
        }
    }

    /// Carry out the requests collected from menus, toolbar and shortcuts
    fn handle_actions(&mut self, ctx: &Context, actions: Vec<ShellAction>) {
        for action in actions {
            debug!(?action, "shell action");
            match action {
                ShellAction::NewFile => {
                    self.session.new_file();
                    self.last_tick = Instant::now();
                }
                ShellAction::OpenFile => {
                    if let Some(path) = file_dialogs::pick_open_file() {
                        self.session.file_opened(&path);
                    }
                }
                ShellAction::SaveFile => {
                    if let Some(path) = file_dialogs::pick_save_file() {
                        self.session.file_saved(&path);
                    }
                }
                ShellAction::SaveLog => {
                    if let Some(path) = file_dialogs::pick_log_file() {
                        self.session.log_saved(&path);
                    }
                }
                ShellAction::Quit => {
                    info!("quit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    /// Advance the cosmetic progress bar on its 100 ms interval
    fn drive_progress(&mut self, ctx: &Context) {
        if !self.session.progress.is_running() {
            return;
        }
        if self.last_tick.elapsed() >= TICK_INTERVAL {
            self.session.tick_progress();
            self.last_tick = Instant::now();
        }
        ctx.request_repaint_after(TICK_INTERVAL);
    }
}

impl eframe::App for DataManagerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        dm_ui::shell::handle_shortcuts(ctx, &mut actions);

        dm_ui::menu_bar(ctx, &mut self.ui_state, &mut self.settings, &mut actions);
        if self.settings.show_toolbar {
            dm_ui::tool_bar(ctx, &mut self.session, &mut actions);
        }
        if self.settings.show_status_bar {
            dm_ui::status_bar(ctx, &self.session);
        }
        dm_ui::central_panel(ctx, &mut self.session, &mut self.ui_state, &mut actions);
        dm_ui::show_dialogs(ctx, &mut self.ui_state, &mut self.session, &mut self.settings);

        self.handle_actions(ctx, actions);
        self.drive_progress(ctx);

        if self.settings != self.applied_settings {
            dm_ui::apply_theme(ctx, &self.settings);
            self.applied_settings = self.settings.clone();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting {} v{}", dm_ui::dialogs::APP_NAME, dm_ui::dialogs::APP_VERSION);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    eframe::run_native(
        dm_ui::dialogs::APP_NAME,
        options,
        Box::new(|cc| Box::new(DataManagerApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
