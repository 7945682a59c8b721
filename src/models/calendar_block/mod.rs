// Calendar block module
// Scheduled placement of a single task on the timeline

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::task::TaskId;
use super::ModelError;

/// Opaque block identifier assigned by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A task placed on the calendar between `start` and `end` (naive wall-clock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarBlock {
    pub id: BlockId,
    pub task_id: TaskId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub organization: String,
}

impl CalendarBlock {
    /// Create a block, rejecting ranges where `end` is not after `start`.
    pub fn new(
        id: impl Into<BlockId>,
        task_id: impl Into<TaskId>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, ModelError> {
        let block = Self {
            id: id.into(),
            task_id: task_id.into(),
            start,
            end,
            owner: String::new(),
            organization: String::new(),
        };
        block.validate()?;
        Ok(block)
    }

    pub fn with_owner(mut self, owner: impl Into<String>, organization: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.organization = organization.into();
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.end <= self.start {
            return Err(ModelError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar date the block is drawn on
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Copy of this block shifted to a new range.
    pub fn moved_to(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ModelError> {
        let mut moved = self.clone();
        moved.start = start;
        moved.end = end;
        moved.validate()?;
        Ok(moved)
    }
}
