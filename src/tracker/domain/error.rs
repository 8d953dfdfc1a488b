//! Error types for tracker domain validation and parsing.

use super::{ProjectId, TaskId};
use thiserror::Error;

/// Errors returned by tracker domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// A project with the same title (ignoring case) already exists.
    #[error("project with title '{0}' already exists")]
    DuplicateTitle(String),

    /// The task already has an assignee; assignment is one-shot.
    #[error("task {task_id} is already assigned to {assignee}")]
    AlreadyAssigned {
        /// Task that rejected the assignment.
        task_id: TaskId,
        /// Current assignee of the task.
        assignee: String,
    },

    /// The operation requires at least one project.
    #[error("no projects found")]
    EmptyCollection,

    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// The assignee name is empty after trimming.
    #[error("assignee name must not be empty")]
    EmptyAssignee,

    /// A bulk load contained the same project identifier twice.
    #[error("duplicate project identifier: {0}")]
    DuplicateProjectId(ProjectId),

    /// A bulk load contained the same task identifier twice in one project.
    #[error("project {project_id} contains task identifier {task_id} more than once")]
    DuplicateTaskId {
        /// Project holding the repeated identifier.
        project_id: ProjectId,
        /// Identifier that appears more than once.
        task_id: TaskId,
    },

    /// No project identifiers remain to hand out.
    #[error("project identifiers are exhausted")]
    ProjectIdsExhausted,

    /// No task identifiers remain to hand out in the project.
    #[error("task identifiers are exhausted in project {0}")]
    TaskIdsExhausted(ProjectId),
}

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
