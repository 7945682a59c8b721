//! Drag/drop coordinator.
//!
//! The grid's interactive state is one [`InteractionState`] value advanced by
//! [`InteractionState::update`]. Platform pointer handling is reduced to
//! [`GridEvent`]s by the toolkit adapter, so every transition here is a pure
//! function of (state, event, snapshot).
//!
//! A drag carries the task id and, when an existing block was grabbed, the
//! block id. On drop the carried ids decide between creating a block and
//! moving one. Every drop or cancel returns to [`InteractionState::Idle`],
//! whether or not an intent was produced.

use chrono::{Duration, NaiveDate};

use crate::models::calendar_block::BlockId;
use crate::models::task::{Task, TaskId};

use super::context_menu::{ContextMenu, MenuAction, MenuAnchor};
use super::intent::Intent;
use super::time_grid::{time_from_minutes, GridMetrics};
use super::ScheduleSnapshot;

/// Where the dragged item came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    TaskList,
    Calendar { block_id: BlockId },
}

/// Flat tag for the drag source, `None` while no drag is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSourceKind {
    None,
    FromTaskList,
    FromCalendar,
}

/// Snapped candidate drop position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    pub date: NaiveDate,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub source: DragSource,
    pub task_id: TaskId,
    pub preview: Option<DragPreview>,
}

impl DragState {
    pub fn block_id(&self) -> Option<&BlockId> {
        match &self.source {
            DragSource::Calendar { block_id } => Some(block_id),
            DragSource::TaskList => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragState),
    MenuOpen(ContextMenu),
}

/// Input to the coordinator, one per platform pointer notification.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    DragBegin {
        task_id: TaskId,
        block_id: Option<BlockId>,
    },
    /// Pointer over the column for `date`, `offset_px` below the column top
    DragOver {
        date: NaiveDate,
        offset_px: f32,
    },
    /// Pointer left every day column
    DragLeave,
    /// Pointer released; `target` is the column under it, if any
    Drop {
        target: Option<NaiveDate>,
    },
    DragCancel,
    OpenContextMenu {
        anchor: MenuAnchor,
        task_id: TaskId,
        block_id: Option<BlockId>,
    },
    /// Click anywhere outside the open menu
    CloseContextMenu,
    MenuAction(MenuAction),
    SelectDate(NaiveDate),
    TaskClick(TaskId),
}

/// Length given to a dropped block. Zero-minute tasks get one snap increment
/// so the block still ends after it starts.
pub fn drop_duration(task: &Task, metrics: &GridMetrics) -> Duration {
    if task.expected_time == 0 {
        Duration::minutes(metrics.snap_increment)
    } else {
        task.expected_duration()
    }
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn dragging(&self) -> Option<&DragState> {
        match self {
            InteractionState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn drag_source(&self) -> DragSourceKind {
        match self.dragging().map(|drag| &drag.source) {
            None => DragSourceKind::None,
            Some(DragSource::TaskList) => DragSourceKind::FromTaskList,
            Some(DragSource::Calendar { .. }) => DragSourceKind::FromCalendar,
        }
    }

    pub fn drag_preview(&self) -> Option<DragPreview> {
        self.dragging().and_then(|drag| drag.preview)
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        match self {
            InteractionState::MenuOpen(menu) => Some(menu),
            _ => None,
        }
    }

    /// Apply one event and return the intents it produced, in order.
    pub fn update(
        &mut self,
        event: GridEvent,
        snapshot: &ScheduleSnapshot<'_>,
        metrics: &GridMetrics,
    ) -> Vec<Intent> {
        let previous = std::mem::take(self);
        let (next, intents) = transition(previous, event, snapshot, metrics);
        *self = next;
        intents
    }
}

fn transition(
    state: InteractionState,
    event: GridEvent,
    snapshot: &ScheduleSnapshot<'_>,
    metrics: &GridMetrics,
) -> (InteractionState, Vec<Intent>) {
    use InteractionState::{Dragging, Idle, MenuOpen};

    match (state, event) {
        (_, GridEvent::DragBegin { task_id, block_id }) => {
            let source = match block_id {
                Some(block_id) => DragSource::Calendar { block_id },
                None => DragSource::TaskList,
            };
            log::debug!("drag started for task {} from {:?}", task_id, source);
            let intents = vec![Intent::DragStart(Some(task_id.clone()))];
            let drag = DragState {
                source,
                task_id,
                preview: None,
            };
            (Dragging(drag), intents)
        }
        (Dragging(mut drag), GridEvent::DragOver { date, offset_px }) => {
            drag.preview = Some(DragPreview {
                date,
                minutes: metrics.snapped_minutes_at(offset_px),
            });
            (Dragging(drag), Vec::new())
        }
        (Dragging(mut drag), GridEvent::DragLeave) => {
            drag.preview = None;
            (Dragging(drag), Vec::new())
        }
        (Dragging(drag), GridEvent::Drop { target }) => {
            let mut intents: Vec<Intent> =
                resolve_drop(&drag, target, snapshot, metrics).into_iter().collect();
            intents.push(Intent::DragStart(None));
            (Idle, intents)
        }
        (Dragging(_), GridEvent::DragCancel) => {
            log::debug!("drag cancelled");
            (Idle, vec![Intent::DragStart(None)])
        }
        (Dragging(drag), GridEvent::OpenContextMenu { .. }) => (Dragging(drag), Vec::new()),
        (
            _,
            GridEvent::OpenContextMenu {
                anchor,
                task_id,
                block_id,
            },
        ) => (
            MenuOpen(ContextMenu::new(anchor, task_id, block_id)),
            Vec::new(),
        ),
        (MenuOpen(_), GridEvent::CloseContextMenu) => (Idle, Vec::new()),
        (MenuOpen(menu), GridEvent::MenuAction(action)) => {
            (Idle, menu.resolve(action).into_iter().collect())
        }
        (state, GridEvent::SelectDate(date)) => (state, vec![Intent::SelectDate(date)]),
        (state, GridEvent::TaskClick(task_id)) => {
            let intents = snapshot
                .task(&task_id)
                .cloned()
                .map(Intent::TaskClick)
                .into_iter()
                .collect();
            (state, intents)
        }
        (state, event) => {
            log::debug!("ignoring {:?} while {:?}", event, state);
            (state, Vec::new())
        }
    }
}

fn resolve_drop(
    drag: &DragState,
    target: Option<NaiveDate>,
    snapshot: &ScheduleSnapshot<'_>,
    metrics: &GridMetrics,
) -> Option<Intent> {
    let Some(date) = target else {
        log::debug!("drop outside the grid discarded");
        return None;
    };
    let Some(preview) = drag.preview else {
        log::debug!("drop without a preview position discarded");
        return None;
    };
    let Some(task) = snapshot.task(&drag.task_id) else {
        log::debug!("drop for unknown task {} discarded", drag.task_id);
        return None;
    };

    let start = time_from_minutes(date, preview.minutes);
    let end = start + drop_duration(task, metrics);

    match &drag.source {
        DragSource::Calendar { block_id } => {
            if snapshot.block(block_id).is_none() {
                log::debug!("drop for unknown block {} discarded", block_id);
                return None;
            }
            Some(Intent::UpdateBlock {
                block_id: block_id.clone(),
                start,
                end,
            })
        }
        DragSource::TaskList => Some(Intent::CreateBlock {
            task_id: task.id.clone(),
            start,
            end,
        }),
    }
}
