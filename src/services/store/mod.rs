//! Task and block storage boundary.
//!
//! The grid only reads snapshots and emits intents; a [`TaskStore`] applies
//! those intents. [`MemoryStore`] is the in-process implementation used by
//! the desktop host and tests, seeded from a JSON snapshot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar_block::{BlockId, CalendarBlock};
use crate::models::task::{Task, TaskId, TaskStatus, Visibility};
use crate::models::ModelError;
use crate::scheduling::ScheduleSnapshot;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("task {0} already has a calendar block")]
    TaskAlreadyScheduled(TaskId),
    #[error("task {0} does not exist")]
    UnknownTask(TaskId),
    #[error("calendar block {0} does not exist")]
    UnknownBlock(BlockId),
    #[error("task {0} already exists")]
    DuplicateTask(TaskId),
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

pub trait TaskStore {
    fn tasks(&self) -> &[Task];
    fn calendar_blocks(&self) -> &[CalendarBlock];

    fn add_task(&mut self, task: Task) -> Result<(), StoreError>;
    fn set_task_status(&mut self, task_id: &TaskId, status: TaskStatus) -> Result<(), StoreError>;
    /// Remove a task and every block placed for it.
    fn delete_task(&mut self, task_id: &TaskId) -> Result<(), StoreError>;

    fn create_block(
        &mut self,
        task_id: &TaskId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<BlockId, StoreError>;
    fn update_block(
        &mut self,
        block_id: &BlockId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), StoreError>;
    fn delete_block(&mut self, block_id: &BlockId) -> Result<(), StoreError>;

    fn snapshot(&self) -> ScheduleSnapshot<'_> {
        ScheduleSnapshot::new(self.tasks(), self.calendar_blocks())
    }
}

/// Serialized form of a store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub calendar_blocks: Vec<CalendarBlock>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    blocks: Vec<CalendarBlock>,
    next_block: u64,
    owner: String,
    organization: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner and organization stamped on new blocks
    pub fn with_owner(mut self, owner: impl Into<String>, organization: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.organization = organization.into();
        self
    }

    /// Build a store from a snapshot, dropping entries that fail validation.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store = Self::new();

        for task in snapshot.tasks {
            if let Err(e) = task.validate() {
                log::warn!("Skipping invalid task {}: {}", task.id, e);
                continue;
            }
            if let Err(e) = store.add_task(task) {
                log::warn!("Skipping task: {}", e);
            }
        }

        for block in snapshot.calendar_blocks {
            if let Err(e) = block.validate() {
                log::warn!("Skipping invalid block {}: {}", block.id, e);
                continue;
            }
            if !store.tasks.iter().any(|task| task.id == block.task_id) {
                log::warn!(
                    "Skipping block {} for unknown task {}",
                    block.id,
                    block.task_id
                );
                continue;
            }
            if store.blocks.iter().any(|existing| existing.task_id == block.task_id) {
                log::warn!(
                    "Skipping block {}: task {} already has a block",
                    block.id,
                    block.task_id
                );
                continue;
            }
            store.blocks.push(block);
        }

        store.next_block = store.blocks.len() as u64;
        store
    }

    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            calendar_blocks: self.blocks.clone(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(json).context("Failed to parse store snapshot")?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let store = Self::from_json(&content)?;
        log::info!(
            "Loaded {} tasks and {} blocks from {}",
            store.tasks.len(),
            store.blocks.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.to_snapshot())
            .context("Failed to serialize store snapshot")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// A handful of tasks, two of them already placed around `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let seed = [
            ("t1", "Write sprint summary", 30, TaskStatus::Planned),
            ("t2", "Review pull requests", 60, TaskStatus::InProgress),
            ("t3", "Customer call prep", 45, TaskStatus::Planned),
            ("t4", "Fix flaky login test", 90, TaskStatus::Overrun),
            ("t5", "Update roadmap doc", 120, TaskStatus::Completed),
        ];

        let mut store = Self::new().with_owner("me", "team");
        for (id, title, minutes, status) in seed {
            if let Ok(task) = Task::new(id, title, minutes) {
                let task = task.with_status(status).with_visibility(Visibility::Team);
                if let Err(e) = store.add_task(task) {
                    log::warn!("Failed to seed demo task: {}", e);
                }
            }
        }

        let nine = today.and_hms_opt(9, 0, 0).unwrap_or_default();
        for (id, start) in [("t2", nine), ("t5", nine + Duration::days(1) + Duration::hours(4))] {
            let task_id = TaskId::new(id);
            let Some(minutes) = store.task(&task_id).map(|task| task.expected_duration()) else {
                continue;
            };
            if let Err(e) = store.create_block(&task_id, start, start + minutes) {
                log::warn!("Failed to seed demo block: {}", e);
            }
        }
        store
    }

    fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    fn block_index(&self, block_id: &BlockId) -> Result<usize, StoreError> {
        self.blocks
            .iter()
            .position(|block| &block.id == block_id)
            .ok_or_else(|| StoreError::UnknownBlock(block_id.clone()))
    }

    fn allocate_block_id(&mut self) -> BlockId {
        loop {
            self.next_block += 1;
            let id = BlockId::new(format!("blk-{}", self.next_block));
            if !self.blocks.iter().any(|block| block.id == id) {
                return id;
            }
        }
    }
}

impl TaskStore for MemoryStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn calendar_blocks(&self) -> &[CalendarBlock] {
        &self.blocks
    }

    fn add_task(&mut self, task: Task) -> Result<(), StoreError> {
        task.validate()?;
        if self.task(&task.id).is_some() {
            return Err(StoreError::DuplicateTask(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn set_task_status(&mut self, task_id: &TaskId, status: TaskStatus) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == task_id)
            .ok_or_else(|| StoreError::UnknownTask(task_id.clone()))?;
        task.status = status;
        Ok(())
    }

    fn delete_task(&mut self, task_id: &TaskId) -> Result<(), StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != task_id);
        if self.tasks.len() == before {
            return Err(StoreError::UnknownTask(task_id.clone()));
        }
        let blocks_before = self.blocks.len();
        self.blocks.retain(|block| &block.task_id != task_id);
        log::info!(
            "Deleted task {} and {} block(s)",
            task_id,
            blocks_before - self.blocks.len()
        );
        Ok(())
    }

    fn create_block(
        &mut self,
        task_id: &TaskId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<BlockId, StoreError> {
        if self.task(task_id).is_none() {
            return Err(StoreError::UnknownTask(task_id.clone()));
        }
        if self.blocks.iter().any(|block| &block.task_id == task_id) {
            return Err(StoreError::TaskAlreadyScheduled(task_id.clone()));
        }

        let id = self.allocate_block_id();
        let block = CalendarBlock::new(id.clone(), task_id.clone(), start, end)?
            .with_owner(self.owner.clone(), self.organization.clone());
        log::info!("Scheduled task {} as block {} at {}", task_id, id, start);
        self.blocks.push(block);
        Ok(id)
    }

    fn update_block(
        &mut self,
        block_id: &BlockId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), StoreError> {
        let index = self.block_index(block_id)?;
        let moved = self.blocks[index].moved_to(start, end)?;
        log::info!("Moved block {} to {}", block_id, start);
        self.blocks[index] = moved;
        Ok(())
    }

    fn delete_block(&mut self, block_id: &BlockId) -> Result<(), StoreError> {
        let index = self.block_index(block_id)?;
        self.blocks.remove(index);
        log::info!("Removed block {}", block_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn store_with_task() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_task(Task::new("t1", "Write", 30).unwrap()).unwrap();
        store
    }

    #[test]
    fn test_create_block() {
        let mut store = store_with_task();
        let id = store.create_block(&TaskId::new("t1"), at(3, 9), at(3, 10)).unwrap();

        assert_eq!(store.calendar_blocks().len(), 1);
        assert_eq!(store.calendar_blocks()[0].id, id);
        assert_eq!(store.snapshot().blocks_on(at(3, 9).date()).count(), 1);
    }

    #[test]
    fn test_second_block_for_task_rejected() {
        let mut store = store_with_task();
        let task_id = TaskId::new("t1");
        store.create_block(&task_id, at(3, 9), at(3, 10)).unwrap();

        let result = store.create_block(&task_id, at(4, 9), at(4, 10));
        assert_eq!(result, Err(StoreError::TaskAlreadyScheduled(task_id)));
        assert_eq!(store.calendar_blocks().len(), 1);
    }

    #[test]
    fn test_create_for_unknown_task_rejected() {
        let mut store = store_with_task();
        let result = store.create_block(&TaskId::new("nope"), at(3, 9), at(3, 10));
        assert!(matches!(result, Err(StoreError::UnknownTask(_))));
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut store = store_with_task();
        let result = store.create_block(&TaskId::new("t1"), at(3, 10), at(3, 9));
        assert!(matches!(result, Err(StoreError::Invalid(ModelError::InvalidRange { .. }))));
    }

    #[test]
    fn test_update_and_delete_block() {
        let mut store = store_with_task();
        let id = store.create_block(&TaskId::new("t1"), at(3, 9), at(3, 10)).unwrap();

        store.update_block(&id, at(5, 14), at(5, 15)).unwrap();
        assert_eq!(store.calendar_blocks()[0].start, at(5, 14));

        store.delete_block(&id).unwrap();
        assert!(store.calendar_blocks().is_empty());
        assert_eq!(store.delete_block(&id), Err(StoreError::UnknownBlock(id)));
    }

    #[test]
    fn test_delete_task_cascades_blocks() {
        let mut store = store_with_task();
        store.create_block(&TaskId::new("t1"), at(3, 9), at(3, 10)).unwrap();

        store.delete_task(&TaskId::new("t1")).unwrap();
        assert!(store.tasks().is_empty());
        assert!(store.calendar_blocks().is_empty());
    }

    #[test]
    fn test_duplicate_task_rejected() {
        let mut store = store_with_task();
        let result = store.add_task(Task::new("t1", "Again", 10).unwrap());
        assert!(matches!(result, Err(StoreError::DuplicateTask(_))));
    }

    #[test]
    fn test_block_ids_do_not_collide_with_loaded_ones() {
        let json = r#"{
            "tasks": [
                {"id": "t1", "title": "A", "expected_time": 30},
                {"id": "t2", "title": "B", "expected_time": 30}
            ],
            "calendar_blocks": [
                {"id": "blk-1", "task_id": "t1", "start": "2024-06-03T09:00:00", "end": "2024-06-03T09:30:00"}
            ]
        }"#;
        let mut store = MemoryStore::from_json(json).unwrap();
        let id = store.create_block(&TaskId::new("t2"), at(3, 11), at(3, 12)).unwrap();
        assert_ne!(id, BlockId::new("blk-1"));
    }

    #[test]
    fn test_from_snapshot_skips_orphans_duplicates_and_invalid_ranges() {
        let json = r#"{
            "tasks": [{"id": "t1", "title": "A", "expected_time": 30}],
            "calendar_blocks": [
                {"id": "b1", "task_id": "t1", "start": "2024-06-03T09:00:00", "end": "2024-06-03T09:30:00"},
                {"id": "b2", "task_id": "ghost", "start": "2024-06-03T09:00:00", "end": "2024-06-03T09:30:00"},
                {"id": "b3", "task_id": "t1", "start": "2024-06-03T10:00:00", "end": "2024-06-03T09:30:00"},
                {"id": "b4", "task_id": "t1", "start": "2024-06-04T10:00:00", "end": "2024-06-04T10:30:00"}
            ]
        }"#;
        let store = MemoryStore::from_json(json).unwrap();
        let ids: Vec<&str> = store.calendar_blocks().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1"]);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.json");

        let mut store = store_with_task();
        store.create_block(&TaskId::new("t1"), at(3, 9), at(3, 10)).unwrap();
        store.save_json(&path).unwrap();

        let loaded = MemoryStore::load_json(&path).unwrap();
        assert_eq!(loaded.to_snapshot(), store.to_snapshot());
    }

    #[test]
    fn test_demo_store_is_consistent() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let store = MemoryStore::demo(today);
        assert_eq!(store.tasks().len(), 5);
        assert_eq!(store.calendar_blocks().len(), 2);
        assert!(store.calendar_blocks().iter().all(|b| b.owner == "me"));
    }
}
