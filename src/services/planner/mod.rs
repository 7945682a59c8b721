//! Host-side planner session.
//!
//! Owns the store plus the host's view state (selected and anchor dates,
//! dragged task, selected task) and receives grid intents through
//! [`CalendarCallbacks`]. Store rejections are logged and remembered for the
//! status line; nothing is rolled back because nothing was applied.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_block::BlockId;
use crate::models::settings::Settings;
use crate::models::task::{Task, TaskId};
use crate::scheduling::intent::CalendarCallbacks;
use crate::scheduling::navigation::{step, NavDirection};
use crate::scheduling::{CalendarInputs, ScheduleSnapshot};

use super::store::{StoreError, TaskStore};

pub struct PlannerSession<S: TaskStore> {
    store: S,
    selected_date: NaiveDate,
    view_date: NaiveDate,
    dragging_task: Option<TaskId>,
    selected_task: Option<TaskId>,
    last_error: Option<StoreError>,
}

impl<S: TaskStore> PlannerSession<S> {
    pub fn new(store: S, today: NaiveDate) -> Self {
        Self {
            store,
            selected_date: today,
            view_date: today,
            dragging_task: None,
            selected_task: None,
            last_error: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn snapshot(&self) -> ScheduleSnapshot<'_> {
        self.store.snapshot()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn view_date(&self) -> NaiveDate {
        self.view_date
    }

    pub fn dragging_task(&self) -> Option<&TaskId> {
        self.dragging_task.as_ref()
    }

    pub fn selected_task(&self) -> Option<&TaskId> {
        self.selected_task.as_ref()
    }

    /// Most recent store rejection, if any
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn navigate(&mut self, direction: NavDirection, settings: &Settings, today: NaiveDate) {
        self.view_date = step(
            self.view_date,
            settings.current_view,
            direction,
            settings.show_weekends,
            today,
        );
        if direction == NavDirection::Today {
            self.selected_date = today;
        }
    }

    /// Jump to an arbitrary date, selecting it.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.view_date = date;
        self.selected_date = date;
    }

    pub fn inputs(&self, settings: &Settings) -> CalendarInputs {
        CalendarInputs {
            selected_date: self.selected_date,
            view_date: self.view_date,
            view: settings.current_view,
            show_weekends: settings.show_weekends,
            first_day_of_week: settings.first_day_of_week,
            dragging_task: self.dragging_task.clone(),
        }
    }

    fn record(&mut self, action: &str, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::warn!("Store rejected {}: {}", action, e);
                self.last_error = Some(e);
            }
        }
    }
}

impl<S: TaskStore> CalendarCallbacks for PlannerSession<S> {
    fn on_select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.view_date = date;
    }

    fn on_drag_start(&mut self, task_id: Option<TaskId>) {
        self.dragging_task = task_id;
    }

    fn on_create_block(&mut self, task_id: TaskId, start: NaiveDateTime, end: NaiveDateTime) {
        let result = self.store.create_block(&task_id, start, end).map(|_| ());
        self.record("create block", result);
    }

    fn on_update_block(&mut self, block_id: BlockId, start: NaiveDateTime, end: NaiveDateTime) {
        let result = self.store.update_block(&block_id, start, end);
        self.record("move block", result);
    }

    fn on_delete_block(&mut self, block_id: BlockId) {
        let result = self.store.delete_block(&block_id);
        self.record("remove block", result);
    }

    fn on_task_click(&mut self, task: Task) {
        log::debug!("Selected task {}", task.id);
        self.selected_task = Some(task.id);
    }
}
