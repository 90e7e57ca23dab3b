//! Controls tab: numeric inputs, date/time pickers, list and editable combo

use chrono::{NaiveTime, Timelike};
use egui::Ui;
use egui_extras::DatePickerButton;

use dm_core::sample::COMBO_OPTIONS;
use dm_core::session::{DECIMAL_RANGE, INTEGER_RANGE, VOLUME_RANGE};
use dm_core::Session;

pub(super) fn show(ui: &mut Ui, session: &mut Session) {
    egui::ScrollArea::vertical()
        .id_source("controls_scroll")
        .show(ui, |ui| {
            numeric_group(ui, session);
            ui.add_space(8.0);
            date_group(ui, session);
            ui.add_space(8.0);
            list_group(ui, session);
        });
}

fn numeric_group(ui: &mut Ui, session: &mut Session) {
    ui.group(|ui| {
        ui.strong("Contrôles Numériques");
        egui::Grid::new("numeric_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let controls = &mut session.controls;

                ui.label("Entier:");
                ui.add(egui::DragValue::new(&mut controls.integer).clamp_range(INTEGER_RANGE));
                ui.end_row();

                ui.label("Décimal:");
                ui.add(
                    egui::DragValue::new(&mut controls.decimal)
                        .clamp_range(DECIMAL_RANGE)
                        .speed(0.05)
                        .fixed_decimals(2),
                );
                ui.end_row();

                ui.label("Slider:");
                let mut volume = controls.volume;
                if ui.add(egui::Slider::new(&mut volume, VOLUME_RANGE)).changed() {
                    session.on_volume_changed(volume);
                }
                ui.end_row();

                ui.label("Progrès:");
                ui.add(egui::ProgressBar::new(session.progress.fraction()).show_percentage());
                ui.end_row();
            });
    });
}

fn date_group(ui: &mut Ui, session: &mut Session) {
    ui.group(|ui| {
        ui.strong("Date et Temps");
        egui::Grid::new("date_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let controls = &mut session.controls;

                ui.label("Date:");
                ui.add(DatePickerButton::new(&mut controls.date).id_source("date_only"));
                ui.end_row();

                ui.label("Temps:");
                time_edit(ui, &mut controls.time);
                ui.end_row();

                ui.label("Date/Temps:");
                ui.horizontal(|ui| {
                    let mut date = controls.date_time.date();
                    let mut time = controls.date_time.time();
                    ui.add(DatePickerButton::new(&mut date).id_source("date_time"));
                    time_edit(ui, &mut time);
                    controls.date_time = date.and_time(time);
                });
                ui.end_row();
            });
    });
}

/// Hour/minute/second spinners
fn time_edit(ui: &mut Ui, time: &mut NaiveTime) {
    let mut hour = time.hour();
    let mut minute = time.minute();
    let mut second = time.second();

    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut hour).clamp_range(0..=23));
        ui.label(":");
        ui.add(egui::DragValue::new(&mut minute).clamp_range(0..=59));
        ui.label(":");
        ui.add(egui::DragValue::new(&mut second).clamp_range(0..=59));
    });

    if let Some(updated) = NaiveTime::from_hms_opt(hour, minute, second) {
        *time = updated;
    }
}

fn list_group(ui: &mut Ui, session: &mut Session) {
    ui.group(|ui| {
        ui.strong("Listes et Sélections");
        ui.horizontal_top(|ui| {
            let controls = &mut session.controls;

            egui::ScrollArea::vertical()
                .id_source("option_list")
                .max_height(180.0)
                .show(ui, |ui| {
                    ui.set_min_width(140.0);
                    for (index, item) in controls.list_items.iter().enumerate() {
                        let selected = controls.list_selected == Some(index);
                        if ui.selectable_label(selected, item).clicked() {
                            controls.list_selected = Some(index);
                        }
                    }
                });

            ui.vertical(|ui| {
                ui.label("ComboBox éditable:");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut controls.combo_text).desired_width(140.0));
                    egui::ComboBox::from_id_source("editable_combo")
                        .selected_text("")
                        .width(24.0)
                        .show_ui(ui, |ui| {
                            for option in COMBO_OPTIONS {
                                ui.selectable_value(&mut controls.combo_text, option.to_string(), option);
                            }
                        });
                });
            });
        });
    });
}
