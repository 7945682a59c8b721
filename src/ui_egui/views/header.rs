//! Navigation bar and day header row.

use chrono::NaiveDate;
use egui::{pos2, vec2, Align2, FontId, Rounding, Sense, Stroke};

use super::{HeaderPalette, COLUMN_SPACING, HEADER_HEIGHT, TIME_LABEL_WIDTH};
use crate::models::settings::CalendarView;
use crate::scheduling::{GridEvent, HeaderCell, NavDirection};

/// Something the user asked for in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Navigate(NavDirection),
    SetView(CalendarView),
    ShowWeekends(bool),
    JumpTo(NaiveDate),
}

/// Previous / today / next, the range title, view toggle, weekend toggle
/// and the jump-to-date picker.
pub fn render_nav_bar(
    ui: &mut egui::Ui,
    range_label: &str,
    view: CalendarView,
    show_weekends: bool,
    view_date: NaiveDate,
) -> Vec<NavAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous").clicked() {
            actions.push(NavAction::Navigate(NavDirection::Previous));
        }
        if ui.button("Today").clicked() {
            actions.push(NavAction::Navigate(NavDirection::Today));
        }
        if ui.button("▶").on_hover_text("Next").clicked() {
            actions.push(NavAction::Navigate(NavDirection::Next));
        }

        ui.add_space(12.0);
        ui.heading(range_label);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut picked = view_date;
            let picker = ui.add(
                egui_extras::DatePickerButton::new(&mut picked).id_source("nav_date_picker"),
            );
            if picker.changed() && picked != view_date {
                actions.push(NavAction::JumpTo(picked));
            }

            let mut weekends = show_weekends;
            if ui.checkbox(&mut weekends, "Weekends").changed() {
                actions.push(NavAction::ShowWeekends(weekends));
            }

            ui.separator();
            if ui
                .selectable_label(view == CalendarView::Day, "Day")
                .clicked()
            {
                actions.push(NavAction::SetView(CalendarView::Day));
            }
            if ui
                .selectable_label(view == CalendarView::Week, "Week")
                .clicked()
            {
                actions.push(NavAction::SetView(CalendarView::Week));
            }
        });
    });

    actions
}

/// Column headers aligned with the time grid. Clicking one selects its date.
pub fn render_header_row(
    ui: &mut egui::Ui,
    cells: &[HeaderCell],
    column_width: f32,
    palette: &HeaderPalette,
) -> Option<GridEvent> {
    let mut selected = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(TIME_LABEL_WIDTH + COLUMN_SPACING);

        for (index, cell) in cells.iter().enumerate() {
            let (rect, response) =
                ui.allocate_exact_size(vec2(column_width, HEADER_HEIGHT), Sense::click());
            let painter = ui.painter();

            let bg = if cell.is_today {
                palette.today_cell_bg
            } else if cell.is_weekend {
                palette.weekend_cell_bg
            } else {
                palette.cell_bg
            };
            painter.rect_filled(rect, Rounding::same(2.0), bg);

            let border = if cell.is_selected {
                Stroke::new(2.0, palette.selected_border)
            } else {
                Stroke::new(1.0, palette.border)
            };
            painter.rect_stroke(rect.shrink(1.0), Rounding::same(2.0), border);

            painter.text(
                pos2(rect.center().x, rect.top() + 4.0),
                Align2::CENTER_TOP,
                &cell.weekday,
                FontId::proportional(12.0),
                palette.secondary_text,
            );

            let day_center = pos2(rect.center().x, rect.bottom() - 13.0);
            let day_color = if cell.is_today {
                painter.circle_filled(day_center, 11.0, palette.badge_bg);
                palette.badge_text
            } else {
                palette.text
            };
            painter.text(
                day_center,
                Align2::CENTER_CENTER,
                cell.day.to_string(),
                FontId::proportional(15.0),
                day_color,
            );

            if response
                .on_hover_text(cell.date.format("%A, %B %-d, %Y").to_string())
                .clicked()
            {
                selected = Some(GridEvent::SelectDate(cell.date));
            }

            if index + 1 < cells.len() {
                ui.add_space(COLUMN_SPACING);
            }
        }
    });

    selected
}
