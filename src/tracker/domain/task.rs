//! Task entity and its priority and lifecycle state types.

use super::{ParsePriorityError, ParseTaskStateError, TaskId, TrackerDomainError};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Task priority, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Should be handled first.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task lifecycle state.
///
/// No transition rules apply: any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Work has not started.
    ToDo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns `true` for [`TaskState::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" | "todo" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// A single unit of work owned by a project.
///
/// Tasks compare equal when their priority and description match; the
/// identifier, state, assignee and date take no part in equality or
/// ordering. Use [`Task::same_record`] to compare every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    priority: TaskPriority,
    state: TaskState,
    assignee: Option<String>,
    last_updated: NaiveDate,
}

impl Task {
    /// Creates a fresh task in the `ToDo` state with no assignee.
    ///
    /// Only [`super::Project::add_task`] creates tasks so that identifiers
    /// stay unique within a project.
    pub(crate) fn new(
        id: TaskId,
        description: String,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            description,
            priority,
            state: TaskState::ToDo,
            assignee: None,
            last_updated: today(clock),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the assignee, if one has been set.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the date of the latest change to this task.
    #[must_use]
    pub const fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    /// Assigns the task to `name`.
    ///
    /// Assignment is one-shot: once set, the assignee cannot be replaced,
    /// not even with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::AlreadyAssigned`] when an assignee is
    /// already set, or [`TrackerDomainError::EmptyAssignee`] when `name` is
    /// blank.
    pub fn assign(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TrackerDomainError> {
        if let Some(current) = &self.assignee {
            return Err(TrackerDomainError::AlreadyAssigned {
                task_id: self.id,
                assignee: current.clone(),
            });
        }

        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerDomainError::EmptyAssignee);
        }

        self.assignee = Some(trimmed.to_owned());
        self.touch(clock);
        Ok(())
    }

    /// Overwrites the lifecycle state.
    pub fn set_state(&mut self, state: TaskState, clock: &impl Clock) {
        self.state = state;
        self.touch(clock);
    }

    /// Overwrites the priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Returns `true` when every field, including the identifier, matches.
    #[must_use]
    pub fn same_record(&self, other: &Self) -> bool {
        self.id == other.id
            && self.description == other.description
            && self.priority == other.priority
            && self.state == other.state
            && self.assignee == other.assignee
            && self.last_updated == other.last_updated
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.last_updated = today(clock);
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.description == other.description
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.priority.hash(state);
        self.description.hash(state);
    }
}

impl Ord for Task {
    /// Higher priority first, then description in ascending order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the current UTC date according to `clock`.
pub(crate) fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}
