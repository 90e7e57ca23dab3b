//! Data tab: search bar, the table and the add/edit/delete buttons

use egui::{Align, Key, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use dm_core::sample::CATEGORIES;
use dm_core::{GridView, SearchHandler, SearchResult, Session};

use super::TabState;
use crate::icons;

pub(super) fn show(ui: &mut Ui, session: &mut Session, state: &mut TabState) {
    search_bar(ui, session, state);
    ui.add_space(4.0);

    egui::TopBottomPanel::bottom("data_actions")
        .show_separator_line(false)
        .show_inside(ui, |ui| action_buttons(ui, session, state));

    egui::CentralPanel::default().show_inside(ui, |ui| table(ui, session, state));
}

fn search_bar(ui: &mut Ui, session: &mut Session, state: &mut TabState) {
    ui.horizontal(|ui| {
        ui.label("Recherche:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut session.search_text)
                .hint_text("Rechercher...")
                .desired_width(240.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button(format!("{} Chercher", icons::SEARCH)).clicked() || submitted {
            if let SearchResult::Found(row) = session.search() {
                state.scroll_to_row = Some(row);
            }
        }

        ui.separator();

        ui.label("Catégorie:");
        let mut category = session.category.clone();
        egui::ComboBox::from_id_source("category_combo")
            .selected_text(&category)
            .show_ui(ui, |ui| {
                for choice in CATEGORIES {
                    ui.selectable_value(&mut category, choice.to_string(), choice);
                }
            });
        session.on_category_changed(&category);
    });
}

fn table(ui: &mut Ui, session: &mut Session, state: &mut TabState) {
    let grid = &session.grid;
    let selected = session.selected_row;
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
    let selection_fill = ui.visuals().selection.bg_fill;
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), grid.column_count())
        .min_scrolled_height(0.0);

    if let Some(row) = state.scroll_to_row.take() {
        builder = builder.scroll_to_row(row, Some(Align::Center));
    }

    builder
        .header(20.0, |mut header| {
            for title in grid.headers() {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row_index in 0..grid.row_count() {
                let is_selected = selected == Some(row_index);
                body.row(text_height, |mut row| {
                    for column in 0..grid.column_count() {
                        row.col(|ui| {
                            if is_selected {
                                ui.painter()
                                    .rect_filled(ui.available_rect_before_wrap(), 0.0, selection_fill);
                            }
                            let text = grid.cell(row_index, column).unwrap_or_default();
                            if ui.selectable_label(is_selected, text).clicked() {
                                clicked = Some(row_index);
                            }
                        });
                    }
                });
            }
        });

    if let Some(row) = clicked {
        session.on_row_selected(row);
    }
}

fn action_buttons(ui: &mut Ui, session: &mut Session, state: &mut TabState) {
    ui.horizontal(|ui| {
        if ui.button("Ajouter").clicked() {
            if let Ok(row) = session.add_row() {
                state.scroll_to_row = Some(row);
            }
        }

        let has_selection = session.selected_row.is_some();

        if ui
            .add_enabled(has_selection, egui::Button::new("Modifier"))
            .clicked()
        {
            // Errors are already reported in the log
            let _ = session.edit_selected(state.edit_column, &state.edit_text);
        }

        if ui
            .add_enabled(has_selection, egui::Button::new("Supprimer"))
            .clicked()
        {
            let _ = session.delete_selected();
        }

        ui.separator();

        let headers = session.grid.headers();
        let current = headers
            .get(state.edit_column)
            .map(String::as_str)
            .unwrap_or_default();
        egui::ComboBox::from_id_source("edit_column_combo")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (index, title) in headers.iter().enumerate() {
                    ui.selectable_value(&mut state.edit_column, index, title);
                }
            });
        ui.add(
            egui::TextEdit::singleline(&mut state.edit_text)
                .hint_text("Nouvelle valeur")
                .desired_width(160.0),
        );

        if let Some(row) = session.selected_row {
            ui.label(format!("Ligne {} sélectionnée", row + 1));
        }
    });
}
