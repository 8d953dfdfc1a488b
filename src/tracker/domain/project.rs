//! Project aggregate root owning an ordered collection of tasks.

use super::{
    ProjectId, Task, TaskId, TaskMatcher, TaskPriority, TrackerDomainError, task::today,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Aggregate state derived from a project's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    /// The project has no tasks.
    Empty,
    /// At least one task is not done.
    Ongoing,
    /// Every task is done.
    Completed,
}

impl ProjectState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

/// Project aggregate root.
///
/// The project is the sole mutator of its task list and allocates task
/// identifiers from a counter that never goes backwards. Projects are
/// identified by title, compared without regard to case or surrounding
/// whitespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PersistedProjectData")]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    created: NaiveDate,
    tasks: Vec<Task>,
    next_task_id: TaskId,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation date.
    pub created: NaiveDate,
    /// Persisted tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Persisted task identifier counter.
    pub next_task_id: TaskId,
}

impl From<PersistedProjectData> for Project {
    fn from(data: PersistedProjectData) -> Self {
        Self::from_persisted(data)
    }
}

impl Project {
    pub(crate) fn new(
        id: ProjectId,
        title: String,
        description: String,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created: today(clock),
            tasks: Vec::new(),
            next_task_id: TaskId::FIRST,
        }
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// The task counter is raised past the highest stored task identifier
    /// if the persisted counter lags behind it. A stored task holding
    /// [`TaskId::MAX`] parks the counter there, exhausting it.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let next_task_id = data
            .tasks
            .iter()
            .map(|task| task.id().next().unwrap_or(TaskId::MAX))
            .fold(data.next_task_id.max(TaskId::FIRST), Ord::max);

        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created: data.created,
            tasks: data.tasks,
            next_task_id,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title normalized for identity comparisons.
    #[must_use]
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created(&self) -> NaiveDate {
        self.created
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the project has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the identifier the next added task will receive.
    #[must_use]
    pub const fn next_task_id(&self) -> TaskId {
        self.next_task_id
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by identifier for mutation.
    #[must_use]
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Returns the tasks accepted by `matcher`, highest priority first and
    /// then by description.
    #[must_use]
    pub fn find_tasks<M>(&self, matcher: &M) -> Vec<&Task>
    where
        M: TaskMatcher + ?Sized,
    {
        let mut found: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| matcher.matches(task))
            .collect();
        found.sort();
        found
    }

    /// Appends a new `ToDo` task and returns a copy of it.
    ///
    /// Mutate the stored task through [`Project::task_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyTaskDescription`] when the
    /// description is blank, or [`TrackerDomainError::TaskIdsExhausted`]
    /// when the task counter has no successor left.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Result<Task, TrackerDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerDomainError::EmptyTaskDescription);
        }

        let id = self.next_task_id;
        self.next_task_id = id
            .next()
            .ok_or(TrackerDomainError::TaskIdsExhausted(self.id))?;
        let task = Task::new(id, trimmed.to_owned(), priority, clock);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes the task with the given identifier.
    ///
    /// Removal is by identity: a different task with the same priority and
    /// description is left in place. The identifier is not reused.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Derives the aggregate state from the current tasks.
    #[must_use]
    pub fn state(&self) -> ProjectState {
        if self.tasks.is_empty() {
            ProjectState::Empty
        } else if self.tasks.iter().all(|task| task.state().is_done()) {
            ProjectState::Completed
        } else {
            ProjectState::Ongoing
        }
    }

    /// Returns the latest task update date, or the creation date when no
    /// task is more recent.
    #[must_use]
    pub fn last_updated(&self) -> NaiveDate {
        self.tasks
            .iter()
            .map(Task::last_updated)
            .fold(self.created, Ord::max)
    }

    /// Returns `true` when every field of both projects and all of their
    /// tasks match.
    #[must_use]
    pub fn same_record(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.created == other.created
            && self.next_task_id == other.next_task_id
            && self.tasks.len() == other.tasks.len()
            && self
                .tasks
                .iter()
                .zip(&other.tasks)
                .all(|(left, right)| left.same_record(right))
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.title_key() == other.title_key()
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title_key().hash(state);
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title_key().cmp(&other.title_key())
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalizes a title into the key used for uniqueness and equality.
pub(crate) fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}
