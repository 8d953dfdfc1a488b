//! Domain model for project and task tracking.
//!
//! Projects own their tasks and the manager owns its projects; each
//! aggregate root allocates identifiers for the entities it owns. Time is
//! read from an injected [`mockable::Clock`] so the domain stays free of
//! ambient state.

mod error;
mod ids;
mod manager;
mod matcher;
mod project;
mod task;

pub use error::{ParsePriorityError, ParseTaskStateError, TrackerDomainError};
pub use ids::{ProjectId, TaskId};
pub use manager::ProjectsManager;
pub use matcher::{AssigneeMatcher, NotDoneMatcher, PriorityMatcher, TaskMatcher};
pub use project::{PersistedProjectData, Project, ProjectState};
pub use task::{Task, TaskPriority, TaskState};
