// Integration tests: grid events flowing through the coordinator into a
// planner session backed by the in-memory store

mod fixtures;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use fixtures::dates::{self, at};
use task_calendar::models::calendar_block::BlockId;
use task_calendar::models::settings::{CalendarView, Settings};
use task_calendar::models::task::TaskId;
use task_calendar::scheduling::intent::dispatch_all;
use task_calendar::scheduling::{
    layout_day_column, GridEvent, GridMetrics, InteractionState, MenuAction, MenuAnchor,
};
use task_calendar::services::planner::PlannerSession;
use task_calendar::services::settings::SettingsService;
use task_calendar::services::store::{MemoryStore, StoreError, TaskStore};

/// Coordinator plus session, wired the way the desktop app wires them.
struct Harness {
    session: PlannerSession<MemoryStore>,
    state: InteractionState,
    metrics: GridMetrics,
}

impl Harness {
    fn new() -> Self {
        Self {
            session: PlannerSession::new(fixtures::seeded_store(), dates::monday()),
            state: InteractionState::default(),
            metrics: GridMetrics::default(),
        }
    }

    fn send(&mut self, event: GridEvent) {
        let intents = self
            .state
            .update(event, &self.session.snapshot(), &self.metrics);
        dispatch_all(intents, &mut self.session);
    }

    fn drag_task_to(&mut self, task: &str, date: NaiveDate, offset_px: f32) {
        self.send(GridEvent::DragBegin {
            task_id: TaskId::new(task),
            block_id: None,
        });
        self.send(GridEvent::DragOver { date, offset_px });
        self.send(GridEvent::Drop { target: Some(date) });
    }

    fn monday_block_id(&self) -> BlockId {
        self.session.store().calendar_blocks()[0].id.clone()
    }

    fn block_for(&self, task: &str) -> Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
        self.session
            .store()
            .calendar_blocks()
            .iter()
            .find(|block| block.task_id.as_str() == task)
            .map(|block| (block.start, block.end))
    }
}

#[test]
fn test_drop_from_task_list_creates_snapped_block() {
    let mut harness = Harness::new();
    let offset = harness.metrics.minutes_to_pixels(8 * 60 + 7);

    harness.drag_task_to("t1", dates::monday(), offset);

    assert_eq!(
        harness.block_for("t1"),
        Some((at(dates::monday(), 8, 0), at(dates::monday(), 8, 30)))
    );
    assert!(harness.state.is_idle());
    assert_eq!(harness.session.dragging_task(), None);
    assert!(harness.session.last_error().is_none());
}

#[test]
fn test_dragging_task_is_reported_while_in_flight() {
    let mut harness = Harness::new();
    harness.send(GridEvent::DragBegin {
        task_id: TaskId::new("t1"),
        block_id: None,
    });
    assert_eq!(harness.session.dragging_task(), Some(&TaskId::new("t1")));

    harness.send(GridEvent::DragCancel);
    assert_eq!(harness.session.dragging_task(), None);
    assert_eq!(harness.session.store().calendar_blocks().len(), 1);
}

#[test]
fn test_moving_block_keeps_id_and_duration() {
    let mut harness = Harness::new();
    let block_id = harness.monday_block_id();

    harness.send(GridEvent::DragBegin {
        task_id: TaskId::new("t2"),
        block_id: Some(block_id.clone()),
    });
    harness.send(GridEvent::DragOver {
        date: dates::wednesday(),
        offset_px: 576.0,
    });
    harness.send(GridEvent::Drop {
        target: Some(dates::wednesday()),
    });

    let blocks = harness.session.store().calendar_blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, block_id);
    assert_eq!(blocks[0].start, at(dates::wednesday(), 9, 0));
    assert_eq!(blocks[0].end, at(dates::wednesday(), 10, 0));

    let snapshot = harness.session.snapshot();
    let wednesday = layout_day_column(
        dates::wednesday(),
        &snapshot,
        &harness.state,
        at(dates::monday(), 12, 0),
        &harness.metrics,
    );
    let monday = layout_day_column(
        dates::monday(),
        &snapshot,
        &harness.state,
        at(dates::monday(), 12, 0),
        &harness.metrics,
    );
    assert_eq!(wednesday.blocks.len(), 1);
    assert_eq!(wednesday.blocks[0].geometry.top, 576.0);
    assert!(monday.blocks.is_empty());
}

#[test]
fn test_drop_outside_grid_changes_nothing() {
    let mut harness = Harness::new();
    harness.send(GridEvent::DragBegin {
        task_id: TaskId::new("t1"),
        block_id: None,
    });
    harness.send(GridEvent::DragOver {
        date: dates::monday(),
        offset_px: 300.0,
    });
    harness.send(GridEvent::DragLeave);
    harness.send(GridEvent::Drop { target: None });

    assert_eq!(harness.block_for("t1"), None);
    assert!(harness.state.is_idle());
    assert_eq!(harness.session.dragging_task(), None);
}

#[test]
fn test_second_block_for_scheduled_task_is_rejected() {
    let mut harness = Harness::new();
    harness.drag_task_to("t2", dates::wednesday(), 0.0);

    assert!(matches!(
        harness.session.last_error(),
        Some(StoreError::TaskAlreadyScheduled(_))
    ));
    assert_eq!(
        harness.block_for("t2"),
        Some((at(dates::monday(), 10, 0), at(dates::monday(), 11, 0)))
    );
    assert!(harness.state.is_idle());
}

#[test]
fn test_context_menu_remove_deletes_block() {
    let mut harness = Harness::new();
    let block_id = harness.monday_block_id();

    harness.send(GridEvent::OpenContextMenu {
        anchor: MenuAnchor::new(320.0, 410.0),
        task_id: TaskId::new("t2"),
        block_id: Some(block_id.clone()),
    });
    assert_eq!(
        harness.state.context_menu().and_then(|menu| menu.block_id.clone()),
        Some(block_id)
    );

    harness.send(GridEvent::MenuAction(MenuAction::RemoveFromCalendar));
    assert!(harness.session.store().calendar_blocks().is_empty());
    assert!(harness.state.context_menu().is_none());

    // The task itself stays
    assert_eq!(harness.session.store().tasks().len(), 2);
}

#[test]
fn test_context_menu_outside_click_keeps_block() {
    let mut harness = Harness::new();
    let block_id = harness.monday_block_id();

    harness.send(GridEvent::OpenContextMenu {
        anchor: MenuAnchor::new(0.0, 0.0),
        task_id: TaskId::new("t2"),
        block_id: Some(block_id),
    });
    harness.send(GridEvent::CloseContextMenu);
    harness.send(GridEvent::MenuAction(MenuAction::RemoveFromCalendar));

    assert_eq!(harness.session.store().calendar_blocks().len(), 1);
    assert!(harness.state.is_idle());
}

#[test]
fn test_header_click_and_task_click_reach_session() {
    let mut harness = Harness::new();
    harness.send(GridEvent::SelectDate(dates::wednesday()));
    harness.send(GridEvent::TaskClick(TaskId::new("t2")));
    harness.send(GridEvent::TaskClick(TaskId::new("missing")));

    assert_eq!(harness.session.selected_date(), dates::wednesday());
    assert_eq!(harness.session.selected_task(), Some(&TaskId::new("t2")));
}

#[test]
fn test_deleting_task_removes_its_block_from_layout() {
    let mut harness = Harness::new();
    harness
        .session
        .store_mut()
        .delete_task(&TaskId::new("t2"))
        .unwrap();

    let snapshot = harness.session.snapshot();
    let layout = layout_day_column(
        dates::monday(),
        &snapshot,
        &harness.state,
        at(dates::monday(), 9, 0),
        &harness.metrics,
    );
    assert!(layout.blocks.is_empty());
}

#[test]
fn test_settings_and_tasks_survive_restart() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("config").join("settings.toml");
    let tasks_path = dir.path().join("tasks.json");

    // First launch: change the view, schedule a task, exit
    {
        let settings_service = SettingsService::new(&settings_path);
        let mut settings = settings_service.get_or_default();
        settings.current_view = CalendarView::Day;
        settings.show_weekends = false;
        settings_service.update(&settings).unwrap();

        let mut harness = Harness::new();
        harness.drag_task_to("t1", dates::monday(), 0.0);
        harness.session.store().save_json(&tasks_path).unwrap();
    }

    // Second launch
    let settings = SettingsService::new(&settings_path).get().unwrap();
    assert_eq!(
        settings,
        Settings {
            current_view: CalendarView::Day,
            show_weekends: false,
            ..Settings::default()
        }
    );

    let store = MemoryStore::load_json(&tasks_path).unwrap();
    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.calendar_blocks().len(), 2);
    let t1_block = store
        .calendar_blocks()
        .iter()
        .find(|block| block.task_id.as_str() == "t1")
        .unwrap();
    assert_eq!(t1_block.start, at(dates::monday(), 0, 0));
    assert_eq!(t1_block.owner, "alice");
}
