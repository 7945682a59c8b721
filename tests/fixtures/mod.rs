// Test fixtures - reusable test data
// Provides consistent tasks, blocks and dates across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use task_calendar::models::calendar_block::CalendarBlock;
use task_calendar::models::task::{Task, TaskStatus};
use task_calendar::services::store::{MemoryStore, TaskStore};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, June 3 2024
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    /// Wednesday, June 5 2024
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample tasks for testing
pub mod tasks {
    use super::*;

    /// 30 minute planned task
    pub fn write_report() -> Task {
        Task::new("t1", "Write report", 30).unwrap()
    }

    /// 60 minute task already in progress
    pub fn review() -> Task {
        Task::new("t2", "Review", 60)
            .unwrap()
            .with_status(TaskStatus::InProgress)
    }

    pub fn all() -> Vec<Task> {
        vec![write_report(), review()]
    }
}

/// Store holding both sample tasks, with `t2` placed Monday 10:00-11:00.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new().with_owner("alice", "acme");
    for task in tasks::all() {
        store.add_task(task).unwrap();
    }
    store
        .create_block(
            &tasks::review().id,
            dates::at(dates::monday(), 10, 0),
            dates::at(dates::monday(), 11, 0),
        )
        .unwrap();
    store
}

pub fn monday_block() -> CalendarBlock {
    CalendarBlock::new(
        "b1",
        "t2",
        dates::at(dates::monday(), 10, 0),
        dates::at(dates::monday(), 11, 0),
    )
    .unwrap()
}
