//! Pointer tracking for grid drags.
//!
//! Day columns register their screen rects every frame; while a drag is in
//! flight the tracker turns the global pointer into `DragOver`, `DragLeave`,
//! `Drop` and `DragCancel` events. This is the only place that reads egui
//! pointer state for drag and drop.

use chrono::NaiveDate;
use egui::{Context, Pos2, Rect};

use crate::scheduling::GridEvent;

/// One day column as laid out this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnRect {
    pub date: NaiveDate,
    /// Full 24-hour area, including the part scrolled out of view
    pub rect: Rect,
    /// Part of `rect` currently on screen
    pub visible: Rect,
}

/// Pointer input relevant to an active drag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub released: bool,
    pub escape: bool,
}

impl PointerSample {
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            pos: i.pointer.latest_pos(),
            released: i.pointer.any_released(),
            escape: i.key_pressed(egui::Key::Escape),
        })
    }
}

#[derive(Debug, Default)]
pub struct DragTracker {
    columns: Vec<ColumnRect>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's columns.
    pub fn begin_frame(&mut self) {
        self.columns.clear();
    }

    pub fn register_column(&mut self, date: NaiveDate, rect: Rect, clip: Rect) {
        self.columns.push(ColumnRect {
            date,
            rect,
            visible: rect.intersect(clip),
        });
    }

    pub fn columns(&self) -> &[ColumnRect] {
        &self.columns
    }

    /// Column under `pos` and the offset below that column's midnight line.
    pub fn column_at(&self, pos: Pos2) -> Option<(NaiveDate, f32)> {
        self.columns
            .iter()
            .find(|column| column.visible.contains(pos))
            .map(|column| (column.date, pos.y - column.rect.top()))
    }

    /// Events for the current pointer while a drag is active.
    ///
    /// A release over a column sends the final `DragOver` before the `Drop`
    /// so the drop lands where the pointer actually let go.
    pub fn pointer_events(&self, sample: PointerSample) -> Vec<GridEvent> {
        if sample.escape {
            return vec![GridEvent::DragCancel];
        }

        let hit = sample.pos.and_then(|pos| self.column_at(pos));
        let mut events = Vec::with_capacity(2);
        match hit {
            Some((date, offset_px)) => events.push(GridEvent::DragOver { date, offset_px }),
            None => events.push(GridEvent::DragLeave),
        }
        if sample.released {
            events.push(GridEvent::Drop {
                target: hit.map(|(date, _)| date),
            });
        }
        events
    }
}
