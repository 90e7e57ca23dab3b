use egui::{CentralPanel, Context, Key, KeyboardShortcut, Modifiers, TopBottomPanel};
use egui_dock::{DockArea, Style as DockStyle};

use dm_core::{AppSettings, Session};

use crate::dialogs::DialogKind;
use crate::tabs::TabViewerImpl;
use crate::{icons, UiState};

pub const NEW_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
pub const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const QUIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);

/// Requests the shell cannot fulfil itself (native dialogs, window close)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    NewFile,
    OpenFile,
    SaveFile,
    SaveLog,
    Quit,
}

/// Consume the global keyboard shortcuts
pub fn handle_shortcuts(ctx: &Context, actions: &mut Vec<ShellAction>) {
    ctx.input_mut(|i| {
        for (shortcut, action) in [
            (NEW_SHORTCUT, ShellAction::NewFile),
            (OPEN_SHORTCUT, ShellAction::OpenFile),
            (SAVE_SHORTCUT, ShellAction::SaveFile),
            (QUIT_SHORTCUT, ShellAction::Quit),
        ] {
            if i.consume_shortcut(&shortcut) {
                actions.push(action);
            }
        }
    });
}

/// Render the main menu bar
pub fn menu_bar(
    ctx: &Context,
    ui_state: &mut UiState,
    settings: &mut AppSettings,
    actions: &mut Vec<ShellAction>,
) {
    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Fichier", |ui| {
                let entries = [
                    ("Nouveau", NEW_SHORTCUT, "Créer un nouveau fichier", ShellAction::NewFile),
                    ("Ouvrir", OPEN_SHORTCUT, "Ouvrir un fichier existant", ShellAction::OpenFile),
                    ("Sauvegarder", SAVE_SHORTCUT, "Sauvegarder le fichier actuel", ShellAction::SaveFile),
                ];
                for (label, shortcut, tip, action) in entries {
                    let button = egui::Button::new(label).shortcut_text(ctx.format_shortcut(&shortcut));
                    if ui.add(button).on_hover_text(tip).clicked() {
                        actions.push(action);
                        ui.close_menu();
                    }
                }

                ui.separator();

                let quit = egui::Button::new("Quitter").shortcut_text(ctx.format_shortcut(&QUIT_SHORTCUT));
                if ui.add(quit).on_hover_text("Quitter l'application").clicked() {
                    actions.push(ShellAction::Quit);
                    ui.close_menu();
                }
            });

            ui.menu_button("Affichage", |ui| {
                if ui.checkbox(&mut settings.show_toolbar, "Barre d'outils").clicked() {
                    ui.close_menu();
                }
                if ui.checkbox(&mut settings.show_status_bar, "Barre d'état").clicked() {
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Réinitialiser la disposition").clicked() {
                    ui_state.reset_layout();
                    ui.close_menu();
                }
            });

            ui.menu_button("Outils", |ui| {
                if ui
                    .button(format!("{} Paramètres", icons::SETTINGS))
                    .on_hover_text("Configurer l'application")
                    .clicked()
                {
                    ui_state.dialog = Some(DialogKind::Settings);
                    ui.close_menu();
                }
            });

            ui.menu_button("Aide", |ui| {
                if ui
                    .button("À propos")
                    .on_hover_text("À propos de cette application")
                    .clicked()
                {
                    ui_state.dialog = Some(DialogKind::About);
                    ui.close_menu();
                }
            });
        });
    });
}

/// Render the toolbar: file actions plus the quick search box
pub fn tool_bar(ctx: &Context, session: &mut Session, actions: &mut Vec<ShellAction>) {
    TopBottomPanel::top("tool_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (icon, tip, action) in [
                (icons::NEW, "Nouveau", ShellAction::NewFile),
                (icons::OPEN, "Ouvrir", ShellAction::OpenFile),
                (icons::SAVE, "Sauvegarder", ShellAction::SaveFile),
            ] {
                if ui.button(icon).on_hover_text(tip).clicked() {
                    actions.push(action);
                }
            }

            ui.separator();

            ui.label("Recherche rapide:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut session.quick_search_text)
                    .hint_text("Recherche rapide...")
                    .desired_width(200.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                session.quick_search();
            }
        });
    });
}

/// Render the status bar: status text on the left, progress and connection on the right
pub fn status_bar(ctx: &Context, session: &Session) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(&session.status);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("Connecté").color(crate::theme::success_color()));
                if session.progress.is_running() {
                    ui.separator();
                    ui.add(
                        egui::ProgressBar::new(session.progress.fraction())
                            .desired_width(150.0)
                            .show_percentage(),
                    );
                }
            });
        });
    });
}

/// Render the central panel with the dock area
pub fn central_panel(
    ctx: &Context,
    session: &mut Session,
    ui_state: &mut UiState,
    actions: &mut Vec<ShellAction>,
) {
    CentralPanel::default().show(ctx, |ui| {
        let mut viewer = TabViewerImpl {
            session,
            state: &mut ui_state.tabs,
            actions,
        };
        DockArea::new(&mut ui_state.dock_state)
            .style(DockStyle::from_egui(ui.style().as_ref()))
            .show_close_buttons(false)
            .draggable_tabs(true)
            .show_inside(ui, &mut viewer);
    });
}
