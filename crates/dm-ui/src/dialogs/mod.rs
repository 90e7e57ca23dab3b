//! Settings and about windows, plus the message box for session notices

use egui::{Align2, Context, RichText};

use dm_core::settings::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use dm_core::{AppSettings, Session};

use crate::UiState;

pub const APP_NAME: &str = "Gestionnaire de Données Avancé";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    About,
    Settings,
}

/// Draw the open dialog and the pending message box, if any
pub fn show_dialogs(ctx: &Context, ui_state: &mut UiState, session: &mut Session, settings: &mut AppSettings) {
    match ui_state.dialog {
        Some(DialogKind::About) => {
            if !about_window(ctx) {
                ui_state.dialog = None;
            }
        }
        Some(DialogKind::Settings) => {
            if !settings_window(ctx, settings) {
                ui_state.dialog = None;
            }
        }
        None => {}
    }

    if ui_state.notice.is_none() {
        ui_state.notice = session.take_notice();
    }
    if let Some(notice) = &ui_state.notice {
        let mut keep_open = true;
        egui::Window::new(&notice.title)
            .id(egui::Id::new("notice_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.body);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        keep_open = false;
                    }
                });
            });
        if !keep_open {
            ui_state.notice = None;
        }
    }
}

/// Returns false once the window should close
fn about_window(ctx: &Context) -> bool {
    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new("À propos")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(format!("{APP_NAME} v{APP_VERSION}")).strong());
            ui.label("Interface egui moderne avec de nombreuses fonctionnalités");
            ui.label("Créé avec egui et eframe");
            ui.add_space(8.0);
            close_clicked = ui.button("Fermer").clicked();
        });
    open && !close_clicked
}

/// Returns false once the window should close
fn settings_window(ctx: &Context, settings: &mut AppSettings) -> bool {
    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new("Paramètres")
        .open(&mut open)
        .collapsible(false)
        .default_size([400.0, 300.0])
        .show(ctx, |ui| {
            ui.checkbox(&mut settings.dark_mode, "Thème sombre");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Couleur de fond:");
                let mut color = settings.background.unwrap_or(DEFAULT_BACKGROUND);
                if ui.color_edit_button_srgb(&mut color).changed() {
                    settings.background = Some(color);
                }
                if settings.background.is_some() && ui.button("Par défaut").clicked() {
                    settings.background = None;
                }
            });

            ui.horizontal(|ui| {
                ui.label("Taille de police:");
                ui.add(egui::Slider::new(&mut settings.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE).suffix(" pt"));
            });

            ui.separator();

            ui.checkbox(&mut settings.show_toolbar, "Afficher la barre d'outils");
            ui.checkbox(&mut settings.show_status_bar, "Afficher la barre d'état");

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Réinitialiser").clicked() {
                    *settings = AppSettings::default();
                }
                close_clicked = ui.button("Fermer").clicked();
            });
        });
    open && !close_clicked
}
