//! Log tab: level filter, clear/save buttons and the read-only log view

use egui::{RichText, ScrollArea, Ui};

use dm_core::{LogFilter, Session};

use super::TabState;
use crate::shell::ShellAction;
use crate::theme::log_level_color;

pub(super) fn show(ui: &mut Ui, session: &mut Session, state: &mut TabState, actions: &mut Vec<ShellAction>) {
    ui.horizontal(|ui| {
        ui.label("Niveau:");
        egui::ComboBox::from_id_source("log_level_combo")
            .selected_text(state.log_filter.label())
            .show_ui(ui, |ui| {
                for filter in LogFilter::CHOICES {
                    ui.selectable_value(&mut state.log_filter, filter, filter.label());
                }
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Sauvegarder Log").clicked() {
                actions.push(ShellAction::SaveLog);
            }
            if ui.button("Effacer").clicked() {
                session.clear_log();
            }
        });
    });

    ui.separator();

    ScrollArea::vertical()
        .id_source("log_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in session.log.filtered(state.log_filter) {
                let mut text = RichText::new(format!(
                    "{} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry
                ))
                .monospace();
                if let Some(color) = log_level_color(entry.level) {
                    text = text.color(color);
                }
                ui.label(text);
            }
        });
}
