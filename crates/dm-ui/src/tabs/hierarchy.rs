//! Hierarchy tab: tree on the left, details of the selected node on the right

use egui::{RichText, ScrollArea, Ui};

use dm_core::{NodePath, Session};

const INDENT: f32 = 18.0;

/// One visible line of the tree, detached from the session borrow
struct TreeLine {
    depth: usize,
    path: NodePath,
    label: String,
    kind: String,
    value: String,
    has_children: bool,
    expanded: bool,
}

enum TreeEvent {
    Toggle(NodePath),
    Select(NodePath),
    ExpandAll,
    CollapseAll,
}

pub(super) fn show(ui: &mut Ui, session: &mut Session) {
    let mut events = Vec::new();

    egui::SidePanel::right("tree_details")
        .resizable(true)
        .default_width(ui.available_width() / 3.0)
        .show_inside(ui, |ui| {
            ui.label("Détails de l'élément sélectionné:");
            ui.add_space(4.0);
            let mut details = session.tree_details();
            ui.add(
                egui::TextEdit::multiline(&mut details)
                    .interactive(false)
                    .desired_width(f32::INFINITY),
            );
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Tout déplier").clicked() {
                events.push(TreeEvent::ExpandAll);
            }
            if ui.button("Tout replier").clicked() {
                events.push(TreeEvent::CollapseAll);
            }
        });
        ui.separator();

        let lines = visible_lines(session);
        let headers = session.tree.headers().to_vec();

        ScrollArea::both().id_source("tree_scroll").show(ui, |ui| {
            egui::Grid::new("tree_grid")
                .striped(true)
                .num_columns(3)
                .show(ui, |ui| {
                    for header in &headers {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for line in &lines {
                        tree_row(ui, line, session.selected_node.as_ref(), &mut events);
                        ui.end_row();
                    }
                });
        });
    });

    for event in events {
        match event {
            TreeEvent::Toggle(path) => {
                session.tree.toggle(&path);
            }
            TreeEvent::Select(path) => session.select_tree_node(path),
            TreeEvent::ExpandAll => session.tree.expand_all(),
            TreeEvent::CollapseAll => session.tree.collapse_all(),
        }
    }
}

fn visible_lines(session: &Session) -> Vec<TreeLine> {
    session
        .tree
        .visible()
        .into_iter()
        .map(|(depth, path, node)| TreeLine {
            depth,
            path,
            label: node.label.clone(),
            kind: node.kind.clone(),
            value: node.value.clone(),
            has_children: !node.is_leaf(),
            expanded: node.expanded,
        })
        .collect()
}

fn tree_row(ui: &mut Ui, line: &TreeLine, selected: Option<&NodePath>, events: &mut Vec<TreeEvent>) {
    let is_selected = selected == Some(&line.path);

    ui.horizontal(|ui| {
        ui.add_space(line.depth as f32 * INDENT);
        if line.has_children {
            let arrow = if line.expanded { "⏷" } else { "⏵" };
            if ui.small_button(arrow).clicked() {
                events.push(TreeEvent::Toggle(line.path.clone()));
            }
        } else {
            ui.add_space(INDENT);
        }
        if ui.selectable_label(is_selected, &line.label).clicked() {
            events.push(TreeEvent::Select(line.path.clone()));
        }
    });
    ui.label(&line.kind);
    ui.label(RichText::new(&line.value).monospace());
}
