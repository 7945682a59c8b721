//! Painting and hit-testing for one day column.
//!
//! Geometry comes from [`DayColumnLayout`]; this module only turns it into
//! shapes and reads pointer responses off the block rects.

use egui::{pos2, vec2, Align2, FontId, Rect, Rounding, Sense, Stroke};

use crate::models::calendar_block::BlockId;
use crate::scheduling::{
    BlockPlacement, DayColumnLayout, GhostBlock, GridEvent, GridMetrics, MenuAnchor,
};
use crate::ui_egui::theme::CalendarTheme;

use super::{BlockColors, TimeGridPalette};

const BLOCK_INSET: f32 = 2.0;
const BLOCK_ROUNDING: f32 = 4.0;
/// Below this height only the title fits
const TWO_LINE_HEIGHT: f32 = 36.0;

pub struct ColumnStyle<'a> {
    pub palette: &'a TimeGridPalette,
    pub theme: &'a CalendarTheme,
    pub metrics: &'a GridMetrics,
    pub is_weekend: bool,
    /// A drag is in flight; blocks stop reacting to hover and clicks
    pub dragging: bool,
    /// Block being moved, drawn faded at its old position
    pub moving_block: Option<&'a BlockId>,
}

/// Paint `layout` into `rect` and return the events its blocks produced.
pub fn render_day_column(
    ui: &mut egui::Ui,
    rect: Rect,
    layout: &DayColumnLayout,
    style: &ColumnStyle<'_>,
) -> Vec<GridEvent> {
    let palette = style.palette;
    let painter = ui.painter_at(rect);

    let background = if layout.is_today {
        palette.today_bg
    } else if style.is_weekend {
        palette.weekend_bg
    } else {
        palette.regular_bg
    };
    painter.rect_filled(rect, 0.0, background);

    for (hour, offset) in layout.hour_lines.iter().enumerate() {
        let y = rect.top() + offset;
        painter.line_segment(
            [pos2(rect.left(), y), pos2(rect.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );
        if hour < 24 {
            let half = rect.top() + style.metrics.minutes_to_pixels(hour as i64 * 60 + 30);
            painter.line_segment(
                [pos2(rect.left(), half), pos2(rect.right(), half)],
                Stroke::new(1.0, palette.half_hour_line),
            );
        }
    }

    let mut events = Vec::new();
    for placement in &layout.blocks {
        if let Some(event) = render_block(ui, rect, placement, style) {
            events.push(event);
        }
    }

    if let Some(ghost) = &layout.ghost {
        paint_ghost(&painter, rect, ghost, palette);
    }

    if let Some(offset) = layout.now_line {
        let y = rect.top() + offset;
        painter.circle_filled(pos2(rect.left() + 4.0, y), 3.0, palette.now_line);
        painter.line_segment(
            [pos2(rect.left(), y), pos2(rect.right(), y)],
            Stroke::new(2.0, palette.now_line),
        );
    }

    events
}

fn block_rect(column: Rect, top: f32, height: f32) -> Rect {
    Rect::from_min_size(
        pos2(column.left() + BLOCK_INSET, column.top() + top),
        vec2((column.width() - 2.0 * BLOCK_INSET).max(1.0), height),
    )
}

fn render_block(
    ui: &mut egui::Ui,
    column: Rect,
    placement: &BlockPlacement,
    style: &ColumnStyle<'_>,
) -> Option<GridEvent> {
    let rect = block_rect(column, placement.geometry.top, placement.geometry.height);
    let is_moving = style.moving_block == Some(&placement.block_id);

    let mut colors = BlockColors::for_tone(style.theme, placement.tone);
    if is_moving {
        colors = colors.faded();
    }

    let painter = ui.painter_at(column);
    painter.rect_filled(rect, Rounding::same(BLOCK_ROUNDING), colors.fill);
    painter.rect_stroke(rect, Rounding::same(BLOCK_ROUNDING), Stroke::new(1.0, colors.stroke));
    paint_block_text(&painter, rect, placement, style.palette);

    let id = ui.id().with(("calendar_block", placement.block_id.as_str()));
    let response = ui.interact(rect.intersect(column), id, Sense::click_and_drag());

    if style.dragging {
        return None;
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    if response.drag_started() {
        return Some(GridEvent::DragBegin {
            task_id: placement.task_id.clone(),
            block_id: Some(placement.block_id.clone()),
        });
    }

    if response.secondary_clicked() {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| ui.ctx().pointer_latest_pos())
            .unwrap_or(rect.center());
        return Some(GridEvent::OpenContextMenu {
            anchor: MenuAnchor::new(pos.x, pos.y),
            task_id: placement.task_id.clone(),
            block_id: Some(placement.block_id.clone()),
        });
    }

    let clicked = response.clicked();
    response.on_hover_text(format!(
        "{}\n{}\n{}",
        placement.title,
        placement.time_label(),
        placement.status.label()
    ));

    clicked.then(|| GridEvent::TaskClick(placement.task_id.clone()))
}

fn paint_block_text(
    painter: &egui::Painter,
    rect: Rect,
    placement: &BlockPlacement,
    palette: &TimeGridPalette,
) {
    let text_painter = painter.with_clip_rect(rect.shrink(2.0).intersect(painter.clip_rect()));
    let title_pos = pos2(rect.left() + 6.0, rect.top() + 4.0);
    let title = text_painter.layout_no_wrap(
        placement.title.clone(),
        FontId::proportional(13.0),
        palette.block_text,
    );
    let title_rect = Rect::from_min_size(title_pos, title.size());
    text_painter.galley(title_pos, title, palette.block_text);

    if placement.tone.struck_through() {
        let y = title_rect.center().y;
        text_painter.line_segment(
            [pos2(title_rect.left(), y), pos2(title_rect.right(), y)],
            Stroke::new(1.0, palette.block_text),
        );
    }

    if rect.height() >= TWO_LINE_HEIGHT {
        text_painter.text(
            pos2(rect.left() + 6.0, title_rect.bottom() + 2.0),
            Align2::LEFT_TOP,
            placement.time_label(),
            FontId::proportional(11.0),
            palette.block_secondary_text,
        );
    }
}

fn paint_ghost(painter: &egui::Painter, column: Rect, ghost: &GhostBlock, palette: &TimeGridPalette) {
    let rect = block_rect(column, ghost.geometry.top, ghost.geometry.height);
    painter.rect_filled(rect, Rounding::same(BLOCK_ROUNDING), palette.ghost_fill);
    painter.rect_stroke(
        rect,
        Rounding::same(BLOCK_ROUNDING),
        Stroke::new(1.5, palette.ghost_stroke),
    );

    let label = format!(
        "{:02}:{:02}  {}",
        ghost.minutes / 60,
        ghost.minutes % 60,
        ghost.title.as_deref().unwrap_or_default()
    );
    painter.text(
        pos2(rect.left() + 6.0, rect.top() + 4.0),
        Align2::LEFT_TOP,
        label,
        FontId::proportional(12.0),
        palette.block_text,
    );
}
