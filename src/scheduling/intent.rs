//! Intents emitted by the grid and the host callback boundary.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_block::BlockId;
use crate::models::task::{Task, TaskId};

/// Requests the grid hands back to its host. The grid never waits on them.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectDate(NaiveDate),
    /// `Some` when a drag begins, `None` once it ends for any reason
    DragStart(Option<TaskId>),
    CreateBlock {
        task_id: TaskId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    UpdateBlock {
        block_id: BlockId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    DeleteBlock(BlockId),
    TaskClick(Task),
}

impl Intent {
    pub fn dispatch<C: CalendarCallbacks + ?Sized>(self, callbacks: &mut C) {
        match self {
            Intent::SelectDate(date) => callbacks.on_select_date(date),
            Intent::DragStart(task_id) => callbacks.on_drag_start(task_id),
            Intent::CreateBlock {
                task_id,
                start,
                end,
            } => callbacks.on_create_block(task_id, start, end),
            Intent::UpdateBlock {
                block_id,
                start,
                end,
            } => callbacks.on_update_block(block_id, start, end),
            Intent::DeleteBlock(block_id) => callbacks.on_delete_block(block_id),
            Intent::TaskClick(task) => callbacks.on_task_click(task),
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Intent::CreateBlock { .. } | Intent::UpdateBlock { .. } | Intent::DeleteBlock(_)
        )
    }
}

/// Deliver intents in emission order.
pub fn dispatch_all<C: CalendarCallbacks + ?Sized>(intents: Vec<Intent>, callbacks: &mut C) {
    for intent in intents {
        intent.dispatch(callbacks);
    }
}

/// Callbacks the host implements to receive grid intents.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarCallbacks {
    fn on_select_date(&mut self, date: NaiveDate);
    fn on_drag_start(&mut self, task_id: Option<TaskId>);
    fn on_create_block(&mut self, task_id: TaskId, start: NaiveDateTime, end: NaiveDateTime);
    fn on_update_block(&mut self, block_id: BlockId, start: NaiveDateTime, end: NaiveDateTime);
    fn on_delete_block(&mut self, block_id: BlockId);
    fn on_task_click(&mut self, task: Task);
}
