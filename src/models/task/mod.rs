// Task module
// Unit of work that can be placed on the calendar grid

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Opaque task identifier assigned by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Progress state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Planned,
    InProgress,
    Overrun,
    Completed,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Planned",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Overrun => "Overrun",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// Who can see a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
    Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Planned effort in minutes, used as the default block length
    pub expected_time: u32,
    /// Minutes tracked against the task so far
    #[serde(default)]
    pub actual_time: u32,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Task {
    /// Create a planned task with the given expected duration in minutes.
    ///
    /// # Examples
    /// ```
    /// use task_calendar::models::task::{Task, TaskStatus};
    ///
    /// let task = Task::new("t1", "Write report", 30).unwrap();
    /// assert_eq!(task.status, TaskStatus::Planned);
    /// assert_eq!(task.expected_duration().num_minutes(), 30);
    /// ```
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        expected_time: u32,
    ) -> Result<Self, ModelError> {
        let task = Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::Planned,
            expected_time,
            actual_time: 0,
            visibility: Visibility::Private,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        Ok(())
    }

    pub fn expected_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.expected_time))
    }

    /// True once tracked time exceeds the estimate
    pub fn is_over_estimate(&self) -> bool {
        self.actual_time > self.expected_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("t1", "Plan sprint", 45).unwrap();
        assert_eq!(task.id.as_str(), "t1");
        assert_eq!(task.status, TaskStatus::Planned);
        assert_eq!(task.visibility, Visibility::Private);
        assert_eq!(task.actual_time, 0);
        assert!(task.description.is_none());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Task::new("t1", "   ", 30);
        assert!(matches!(result, Err(ModelError::EmptyTitle)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Task::new("", "Title", 30);
        assert!(matches!(result, Err(ModelError::EmptyId)));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let status: TaskStatus = serde_json::from_str("\"overrun\"").unwrap();
        assert_eq!(status, TaskStatus::Overrun);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id":"t9","title":"Review","expected_time":20}"#).unwrap();
        assert_eq!(task.id, TaskId::new("t9"));
        assert_eq!(task.status, TaskStatus::Planned);
        assert_eq!(task.visibility, Visibility::Private);
    }

    #[test]
    fn test_over_estimate() {
        let mut task = Task::new("t1", "Refactor", 30).unwrap();
        assert!(!task.is_over_estimate());
        task.actual_time = 31;
        assert!(task.is_over_estimate());
    }
}
