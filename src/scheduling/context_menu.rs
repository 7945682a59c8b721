//! Block context menu state.
//!
//! A right-click on a block opens a menu at the pointer with a single
//! "remove from calendar" action. The menu is closed by any outside click or
//! after the action runs; both transitions live in
//! [`InteractionState::update`](super::InteractionState::update).

use crate::models::calendar_block::BlockId;
use crate::models::task::TaskId;

use super::intent::Intent;

/// Screen position the menu is pinned to, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnchor {
    pub x: f32,
    pub y: f32,
}

impl MenuAnchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RemoveFromCalendar,
}

impl MenuAction {
    pub const ALL: [MenuAction; 1] = [MenuAction::RemoveFromCalendar];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::RemoveFromCalendar => "🗑 Remove from calendar",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub anchor: MenuAnchor,
    pub task_id: TaskId,
    pub block_id: Option<BlockId>,
}

impl ContextMenu {
    pub fn new(anchor: MenuAnchor, task_id: TaskId, block_id: Option<BlockId>) -> Self {
        Self {
            anchor,
            task_id,
            block_id,
        }
    }

    /// Intent produced by running `action` from this menu.
    pub fn resolve(&self, action: MenuAction) -> Option<Intent> {
        match action {
            MenuAction::RemoveFromCalendar => self.block_id.clone().map(Intent::DeleteBlock),
        }
    }
}
