//! Time grid rendering for the week and day views.
//!
//! Lays out the hour gutter and one column per visible date inside the
//! caller's scroll area, registers each column with the drag tracker and
//! delegates painting to `day_column`.

use chrono::{NaiveDate, NaiveDateTime};
use egui::{pos2, vec2, Align, Align2, FontId, Rect, Sense};

use super::day_column::{render_day_column, ColumnStyle};
use super::{TimeGridPalette, COLUMN_SPACING, TIME_LABEL_WIDTH};
use crate::scheduling::time_grid::minute_of_day;
use crate::scheduling::{layout_day_column, GridEvent, GridMetrics, InteractionState, ScheduleSnapshot};
use crate::ui_egui::drag::DragTracker;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

/// Hour to center on when today is not visible
const DEFAULT_FOCUS_HOUR: i64 = 8;

/// Everything one frame of the grid reads
pub struct GridFrame<'a> {
    pub days: &'a [NaiveDate],
    pub snapshot: ScheduleSnapshot<'a>,
    pub state: &'a InteractionState,
    pub now: NaiveDateTime,
    pub metrics: &'a GridMetrics,
    pub palette: &'a TimeGridPalette,
    pub theme: &'a CalendarTheme,
    pub column_width: f32,
}

/// Render the full time grid for `frame.days`.
///
/// `scroll_to_now` is consumed on the first frame it is set: the view centers
/// on the current time when today is visible, otherwise on 08:00.
pub fn render_time_grid(
    ui: &mut egui::Ui,
    frame: &GridFrame<'_>,
    tracker: &mut DragTracker,
    scroll_to_now: &mut bool,
) -> Vec<GridEvent> {
    let metrics = frame.metrics;
    let day_count = frame.days.len() as f32;
    let total_width = TIME_LABEL_WIDTH + (frame.column_width + COLUMN_SPACING) * day_count;
    let (grid_rect, _) =
        ui.allocate_exact_size(vec2(total_width, metrics.day_height()), Sense::hover());
    let clip = ui.clip_rect();

    draw_time_gutter(ui, grid_rect, frame);

    let dragging = frame.state.dragging();
    let moving_block = dragging.and_then(|drag| drag.block_id());
    let mut events = Vec::new();

    for (index, date) in frame.days.iter().enumerate() {
        let left = grid_rect.left()
            + TIME_LABEL_WIDTH
            + COLUMN_SPACING
            + index as f32 * (frame.column_width + COLUMN_SPACING);
        let rect = Rect::from_min_size(
            pos2(left, grid_rect.top()),
            vec2(frame.column_width, metrics.day_height()),
        );
        tracker.register_column(*date, rect, clip);

        let layout = layout_day_column(*date, &frame.snapshot, frame.state, frame.now, metrics);
        let style = ColumnStyle {
            palette: frame.palette,
            theme: frame.theme,
            metrics,
            is_weekend: is_weekend(*date),
            dragging: dragging.is_some(),
            moving_block,
        };
        events.extend(render_day_column(ui, rect, &layout, &style));
    }

    if std::mem::take(scroll_to_now) {
        let minutes = if frame.days.contains(&frame.now.date()) {
            minute_of_day(frame.now.time())
        } else {
            DEFAULT_FOCUS_HOUR * 60
        };
        let y = grid_rect.top() + metrics.minutes_to_pixels(minutes);
        let target = Rect::from_min_size(pos2(grid_rect.left(), y), vec2(1.0, metrics.row_height));
        ui.scroll_to_rect(target, Some(Align::Center));
    }

    events
}

/// Hour labels down the left gutter.
fn draw_time_gutter(ui: &egui::Ui, grid_rect: Rect, frame: &GridFrame<'_>) {
    let gutter = Rect::from_min_size(
        grid_rect.min,
        vec2(TIME_LABEL_WIDTH, frame.metrics.day_height()),
    );
    let painter = ui.painter_at(gutter);
    painter.rect_filled(gutter, 0.0, frame.palette.gutter_bg);

    for hour in 0..24 {
        let y = gutter.top() + frame.metrics.minutes_to_pixels(hour * 60);
        painter.text(
            pos2(gutter.right() - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            format!("{:02}:00", hour),
            FontId::proportional(12.0),
            frame.palette.gutter_text,
        );
    }
}
