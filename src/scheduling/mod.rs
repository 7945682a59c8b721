//! Calendar scheduling surface.
//!
//! Toolkit-independent core of the planner grid: pixel/time conversions,
//! the drag/drop and context-menu state machine, per-day layout and header
//! navigation. The egui adapter in `ui_egui` feeds pointer input in as
//! [`GridEvent`]s and paints the layouts produced here.

use chrono::NaiveDate;

use crate::models::calendar_block::{BlockId, CalendarBlock};
use crate::models::settings::CalendarView;
use crate::models::task::{Task, TaskId};

pub mod context_menu;
pub mod day_column;
pub mod intent;
pub mod interaction;
pub mod navigation;
pub mod time_grid;

pub use context_menu::{ContextMenu, MenuAction, MenuAnchor};
pub use day_column::{layout_day_column, BlockPlacement, DayColumnLayout, GhostBlock, StatusTone};
pub use intent::{CalendarCallbacks, Intent};
pub use interaction::{DragPreview, DragSource, DragSourceKind, DragState, GridEvent, InteractionState};
pub use navigation::{header_cells, range_label, step, visible_days, HeaderCell, NavDirection};
pub use time_grid::{BlockGeometry, GridMetrics};

/// Read-only view of the store's tasks and blocks for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleSnapshot<'a> {
    pub tasks: &'a [Task],
    pub blocks: &'a [CalendarBlock],
}

impl<'a> ScheduleSnapshot<'a> {
    pub fn new(tasks: &'a [Task], blocks: &'a [CalendarBlock]) -> Self {
        Self { tasks, blocks }
    }

    pub fn task(&self, id: &TaskId) -> Option<&'a Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&'a CalendarBlock> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    /// Blocks drawn in the column for `date`, in snapshot order.
    pub fn blocks_on(&self, date: NaiveDate) -> impl Iterator<Item = &'a CalendarBlock> + 'a {
        self.blocks
            .iter()
            .filter(move |block| block.start_date() == date)
    }
}

/// Host-owned inputs that decide what the grid shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarInputs {
    pub selected_date: NaiveDate,
    pub view_date: NaiveDate,
    pub view: CalendarView,
    pub show_weekends: bool,
    pub first_day_of_week: u8,
    /// Task currently dragged from the host's task list, if any
    pub dragging_task: Option<TaskId>,
}

impl CalendarInputs {
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        visible_days(
            self.view_date,
            self.view,
            self.show_weekends,
            self.first_day_of_week,
        )
    }

    /// Whether `task_id` is the task the host reports as being dragged
    pub fn is_dragging(&self, task_id: &TaskId) -> bool {
        self.dragging_task.as_ref() == Some(task_id)
    }
}
