//! Day column layout.
//!
//! [`layout_day_column`] turns (date, snapshot, interaction state, now) into
//! everything one column draws: hour lines, the current time line, the drag
//! ghost and the placed blocks. It is recomputed from scratch every frame.
//!
//! Blocks belong to the column of their start date only. Overlapping blocks
//! are not split into lanes; each spans the full column width and later
//! blocks in the snapshot paint over earlier ones.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_block::BlockId;
use crate::models::task::{TaskId, TaskStatus};

use super::interaction::{drop_duration, InteractionState};
use super::time_grid::{minute_of_day, BlockGeometry, GridMetrics};
use super::ScheduleSnapshot;

/// Visual treatment for a block, keyed by task status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Accent,
    Muted,
    Alert,
}

impl StatusTone {
    pub fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Planned => StatusTone::Neutral,
            TaskStatus::InProgress => StatusTone::Accent,
            TaskStatus::Completed => StatusTone::Muted,
            TaskStatus::Overrun => StatusTone::Alert,
        }
    }

    pub fn struck_through(&self) -> bool {
        matches!(self, StatusTone::Muted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockPlacement {
    pub block_id: BlockId,
    pub task_id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub tone: StatusTone,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub geometry: BlockGeometry,
}

impl BlockPlacement {
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.geometry.top && y < self.geometry.bottom()
    }
}

/// Placeholder drawn at the snapped drop position
#[derive(Debug, Clone, PartialEq)]
pub struct GhostBlock {
    pub task_id: TaskId,
    pub title: Option<String>,
    pub minutes: i64,
    pub geometry: BlockGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumnLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    /// Offsets of the 25 hour boundaries, midnight to midnight
    pub hour_lines: Vec<f32>,
    pub now_line: Option<f32>,
    pub ghost: Option<GhostBlock>,
    /// Paint order; the last entry is on top
    pub blocks: Vec<BlockPlacement>,
    pub height: f32,
}

impl DayColumnLayout {
    /// Topmost block under a column-relative `y`.
    pub fn block_at(&self, y: f32) -> Option<&BlockPlacement> {
        self.blocks.iter().rev().find(|block| block.contains_y(y))
    }
}

pub fn layout_day_column(
    date: NaiveDate,
    snapshot: &ScheduleSnapshot<'_>,
    state: &InteractionState,
    now: NaiveDateTime,
    metrics: &GridMetrics,
) -> DayColumnLayout {
    let hour_lines = (0..=24)
        .map(|hour| metrics.minutes_to_pixels(hour * 60))
        .collect();

    let is_today = now.date() == date;
    let now_line = is_today.then(|| metrics.minutes_to_pixels(minute_of_day(now.time())));

    let ghost = state.dragging().and_then(|drag| {
        let preview = drag.preview.filter(|preview| preview.date == date)?;
        let task = snapshot.task(&drag.task_id);
        let duration = task
            .map(|task| drop_duration(task, metrics).num_minutes())
            .unwrap_or(metrics.snap_increment);
        Some(GhostBlock {
            task_id: drag.task_id.clone(),
            title: task.map(|task| task.title.clone()),
            minutes: preview.minutes,
            geometry: metrics.geometry_for(preview.minutes, duration),
        })
    });

    let blocks = snapshot
        .blocks_on(date)
        .filter_map(|block| {
            let Some(task) = snapshot.task(&block.task_id) else {
                log::debug!("block {} references missing task {}", block.id, block.task_id);
                return None;
            };
            Some(BlockPlacement {
                block_id: block.id.clone(),
                task_id: task.id.clone(),
                title: task.title.clone(),
                status: task.status,
                tone: StatusTone::for_status(task.status),
                start: block.start,
                end: block.end,
                geometry: metrics.block_geometry(block.start, block.end),
            })
        })
        .collect();

    DayColumnLayout {
        date,
        is_today,
        hour_lines,
        now_line,
        ghost,
        blocks,
        height: metrics.day_height(),
    }
}
