//! Task list sidebar. Rows are drag sources for new blocks.

use egui::{pos2, vec2, Align2, FontId, RichText, Rounding, Sense, Stroke};

use super::CalendarApp;
use crate::models::task::Task;
use crate::scheduling::{CalendarInputs, GridEvent, StatusTone};
use crate::services::store::TaskStore;

const SIDEBAR_MIN_WIDTH: f32 = 200.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 240.0;
const SIDEBAR_MAX_WIDTH: f32 = 360.0;
const ROW_HEIGHT: f32 = 44.0;

impl CalendarApp {
    /// Render the task panel and return the grid events its rows produced.
    pub(super) fn render_task_panel(&mut self, ctx: &egui::Context) -> Vec<GridEvent> {
        let mut events = Vec::new();
        let inputs = self.session.inputs(&self.settings);

        egui::SidePanel::left("task_list")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Tasks");
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .id_source("task_list_scroll")
                    .max_height(ui.available_height() * 0.6)
                    .show(ui, |ui| {
                        let store = self.session.store();
                        for task in store.tasks() {
                            let scheduled = store
                                .calendar_blocks()
                                .iter()
                                .any(|block| block.task_id == task.id);
                            if let Some(event) = self.render_task_row(ui, task, scheduled, &inputs) {
                                events.push(event);
                            }
                        }
                    });

                ui.add_space(8.0);
                ui.separator();
                self.render_task_details(ui);
            });

        events
    }

    fn render_task_row(
        &self,
        ui: &mut egui::Ui,
        task: &Task,
        scheduled: bool,
        inputs: &CalendarInputs,
    ) -> Option<GridEvent> {
        let width = ui.available_width();
        let (rect, response) = ui.allocate_exact_size(vec2(width, ROW_HEIGHT), Sense::click_and_drag());
        let theme = &self.active_theme;
        let is_selected = self.session.selected_task() == Some(&task.id);
        let is_dragged = inputs.is_dragging(&task.id);

        let painter = ui.painter();
        let bg = if is_selected || is_dragged {
            theme.today_background
        } else if response.hovered() {
            theme.weekend_background
        } else {
            theme.day_background
        };
        painter.rect_filled(rect, Rounding::same(4.0), bg);
        if is_selected {
            painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.0, theme.today_border));
        }

        let tone = StatusTone::for_status(task.status);
        painter.circle_filled(
            pos2(rect.left() + 10.0, rect.center().y),
            5.0,
            theme.tone_fill(tone),
        );
        painter.text(
            pos2(rect.left() + 22.0, rect.top() + 6.0),
            Align2::LEFT_TOP,
            &task.title,
            FontId::proportional(14.0),
            theme.text_primary,
        );

        let mut detail = format!("{} min · {}", task.expected_time, task.status.label());
        if scheduled {
            detail.push_str(" · 📅");
        }
        painter.text(
            pos2(rect.left() + 22.0, rect.bottom() - 6.0),
            Align2::LEFT_BOTTOM,
            detail,
            FontId::proportional(11.0),
            theme.text_secondary,
        );

        ui.add_space(2.0);

        if self.interaction.dragging().is_some() {
            return None;
        }
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
        if response.drag_started() {
            return Some(GridEvent::DragBegin {
                task_id: task.id.clone(),
                block_id: None,
            });
        }
        response
            .clicked()
            .then(|| GridEvent::TaskClick(task.id.clone()))
    }

    fn render_task_details(&self, ui: &mut egui::Ui) {
        let Some(task_id) = self.session.selected_task() else {
            ui.label(RichText::new("Select a task to see its details").weak());
            return;
        };
        let snapshot = self.session.snapshot();
        let Some(task) = snapshot.task(task_id) else {
            ui.label(RichText::new("Task no longer exists").weak());
            return;
        };

        ui.label(RichText::new(&task.title).strong());
        if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
            ui.label(description);
        }
        ui.add_space(4.0);

        egui::Grid::new("task_details")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Status");
                ui.label(task.status.label());
                ui.end_row();

                ui.label("Expected");
                ui.label(format!("{} min", task.expected_time));
                ui.end_row();

                ui.label("Spent");
                let spent = RichText::new(format!("{} min", task.actual_time));
                if task.is_over_estimate() {
                    ui.label(spent.color(self.active_theme.block_alert));
                } else {
                    ui.label(spent);
                }
                ui.end_row();

                ui.label("Visibility");
                ui.label(format!("{:?}", task.visibility));
                ui.end_row();

                if let Some(block) = snapshot.blocks.iter().find(|block| block.task_id == task.id) {
                    ui.label("Scheduled");
                    ui.label(format!(
                        "{} {} - {}",
                        block.start.format("%a %b %-d"),
                        block.start.format("%H:%M"),
                        block.end.format("%H:%M")
                    ));
                    ui.end_row();
                }
            });
    }
}
