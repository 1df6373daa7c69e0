use eframe::egui;

use super::animations::{AnimationsActions, AnimationsState};
use crate::core::doc_events::*;
use crate::entities::Direction;

/// Render the animations panel: control buttons plus the ordered name
/// list. `names` is the document projection for this frame; `selected`
/// is the selected animation name, if any.
pub fn render(
    ui: &mut egui::Ui,
    names: &[String],
    selected: Option<&str>,
    has_document: bool,
    state: &mut AnimationsState,
) -> AnimationsActions {
    let mut actions = AnimationsActions::new();

    // Action buttons - disabled until something is selected
    ui.horizontal(|ui| {
        let has_selection = selected.is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Move Up"))
            .clicked()
            && let Some(name) = selected
        {
            actions.send(MoveAnimationEvent {
                name: name.to_string(),
                direction: Direction::Up,
            });
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Move Down"))
            .clicked()
            && let Some(name) = selected
        {
            actions.send(MoveAnimationEvent {
                name: name.to_string(),
                direction: Direction::Down,
            });
        }
        ui.separator();
        if ui
            .add_enabled(has_selection, egui::Button::new("Rename"))
            .clicked()
            && let Some(name) = selected
        {
            state.open_rename(name);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
            && let Some(name) = selected
        {
            actions.send(DeleteAnimationEvent(name.to_string()));
        }
    });

    ui.separator();

    // Animation list fills remaining space
    let scroll_height = ui.available_height();
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_min_height(scroll_height);

            if names.is_empty() {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    if has_document {
                        ui.colored_label(
                            ui.visuals().weak_text_color(),
                            "No animations in this file",
                        );
                    } else {
                        ui.colored_label(ui.visuals().weak_text_color(), "No file loaded");
                        ui.colored_label(
                            ui.visuals().weak_text_color(),
                            "File > Open or drop an .anm2 here",
                        );
                    }
                });
                return;
            }

            for name in names {
                let is_selected = selected == Some(name.as_str());
                if ui.selectable_label(is_selected, name).clicked() {
                    actions.send(SelectAnimationEvent(name.clone()));
                }
            }
        });

    render_rename_modal(ui, state, &mut actions);

    actions
}

/// Small modal window for renaming the selected animation.
fn render_rename_modal(
    ui: &egui::Ui,
    state: &mut AnimationsState,
    actions: &mut AnimationsActions,
) {
    let Some(target) = state.rename_target.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new("Rename Animation")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            ui.label(format!("New name for \"{}\":", target));

            let response = ui.text_edit_singleline(&mut state.rename_buffer);
            if state.rename_needs_focus {
                response.request_focus();
                state.rename_needs_focus = false;
            }

            let confirmed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("Rename").clicked() || confirmed {
                    let new_name = state.rename_buffer.trim().to_string();
                    if !new_name.is_empty() && new_name != target {
                        actions.send(RenameAnimationEvent {
                            old_name: target.clone(),
                            new_name,
                        });
                    }
                    state.close_rename();
                }
                if ui.button("Cancel").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    state.close_rename();
                }
            });
        });

    if !open {
        state.close_rename();
    }
}
