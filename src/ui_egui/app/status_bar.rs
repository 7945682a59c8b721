//! Bottom status line: last store rejection, drag hint and counts.

use egui::{Color32, RichText};

use super::CalendarApp;
use crate::scheduling::DragSourceKind;
use crate::services::store::TaskStore;

impl CalendarApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let mut dismiss = false;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(error) = self.session.last_error() {
                    ui.label(
                        RichText::new(format!("⚠ {}", error))
                            .color(Color32::from_rgb(220, 80, 60)),
                    );
                    if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                        dismiss = true;
                    }
                } else {
                    let hint = match self.interaction.drag_source() {
                        DragSourceKind::FromTaskList => "Drop on a day column to schedule",
                        DragSourceKind::FromCalendar => "Drop to move, Esc to cancel",
                        DragSourceKind::None => "Drag a task onto the grid to schedule it",
                    };
                    ui.label(RichText::new(hint).weak());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let store = self.session.store();
                    ui.label(
                        RichText::new(format!(
                            "{} tasks, {} scheduled",
                            store.tasks().len(),
                            store.calendar_blocks().len()
                        ))
                        .weak(),
                    );
                });
            });
        });

        if dismiss {
            self.session.clear_error();
        }
    }
}
