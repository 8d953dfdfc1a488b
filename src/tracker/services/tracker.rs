//! Service layer owning the project registry and its snapshot lifecycle.

use crate::tracker::{
    domain::{
        Project, ProjectId, ProjectState, ProjectsManager, Task, TaskId, TaskMatcher,
        TaskPriority, TaskState, TrackerDomainError,
    },
    ports::{SnapshotStore, SnapshotStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Service-level errors for tracker operations.
#[derive(Debug, Error)]
pub enum TrackerServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TrackerDomainError),
    /// Snapshot persistence failed.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
    /// No project has the requested identifier.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The project has no task with the requested identifier.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project that was searched.
        project_id: ProjectId,
        /// Missing task identifier.
        task_id: TaskId,
    },
}

/// Result type for tracker service operations.
pub type TrackerServiceResult<T> = Result<T, TrackerServiceError>;

/// Process-scoped owner of the [`ProjectsManager`].
///
/// Every operation runs under one exclusive lock, so identifier allocation
/// and the title uniqueness check cannot interleave with other writers.
/// Returned projects and tasks are copies taken while the lock was held.
pub struct TrackerService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    manager: Mutex<ProjectsManager>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TrackerService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty registry.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            manager: Mutex::new(ProjectsManager::new()),
            store,
            clock,
        }
    }

    /// Creates a service and loads the stored snapshot into it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError`] when the snapshot cannot be loaded
    /// or breaks the registry's uniqueness rules.
    pub async fn open(store: Arc<S>, clock: Arc<C>) -> TrackerServiceResult<Self> {
        let service = Self::new(store, clock);
        service.load().await?;
        Ok(service)
    }

    /// Replaces the in-memory registry with the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Store`] when loading fails, or
    /// [`TrackerServiceError::Domain`] when the snapshot contains duplicate
    /// titles or identifiers. The registry is unchanged on error.
    pub async fn load(&self) -> TrackerServiceResult<()> {
        let projects = self.store.load().await?;
        let count = projects.len();
        let mut manager = self.manager.lock().await;
        manager.set_projects(projects)?;
        info!(
            projects = count,
            next_project_id = %manager.next_project_id(),
            "loaded project snapshot"
        );
        Ok(())
    }

    /// Writes the current registry to the snapshot store.
    ///
    /// The registry lock is held until the store finishes, so concurrent
    /// saves land in the order their snapshots were taken.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Store`] when saving fails.
    pub async fn save(&self) -> TrackerServiceResult<()> {
        let manager = self.manager.lock().await;
        let projects = manager.projects();
        self.store.save(&projects).await?;
        drop(manager);
        info!(projects = projects.len(), "saved project snapshot");
        Ok(())
    }

    /// Creates a project with a unique title.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Domain`] when the title is blank or
    /// already used.
    pub async fn create_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> TrackerServiceResult<Project> {
        let mut manager = self.manager.lock().await;
        let project = manager.add_project(title, description, &*self.clock)?;
        debug!(project_id = %project.id(), title = project.title(), "created project");
        Ok(project)
    }

    /// Removes a project, returning it when it existed.
    pub async fn remove_project(&self, id: ProjectId) -> Option<Project> {
        let removed = self.manager.lock().await.remove_project(id);
        if removed.is_some() {
            debug!(project_id = %id, "removed project");
        }
        removed
    }

    /// Returns a copy of the project with the given identifier.
    pub async fn project(&self, id: ProjectId) -> Option<Project> {
        self.manager.lock().await.project(id).cloned()
    }

    /// Returns a copy of every project.
    pub async fn projects(&self) -> Vec<Project> {
        self.manager.lock().await.projects()
    }

    /// Returns copies of the projects whose title contains `substring`.
    pub async fn find_projects(&self, substring: &str) -> Vec<Project> {
        self.manager
            .lock()
            .await
            .find_projects(substring)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns the highest project identifier in use.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Domain`] when there are no projects.
    pub async fn highest_project_id(&self) -> TrackerServiceResult<ProjectId> {
        Ok(self.manager.lock().await.highest_id()?)
    }

    /// Returns the derived state of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::ProjectNotFound`] for unknown projects.
    pub async fn project_state(&self, project_id: ProjectId) -> TrackerServiceResult<ProjectState> {
        let manager = self.manager.lock().await;
        let project = manager
            .project(project_id)
            .ok_or(TrackerServiceError::ProjectNotFound(project_id))?;
        Ok(project.state())
    }

    /// Adds a task to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::ProjectNotFound`] for unknown
    /// projects or [`TrackerServiceError::Domain`] for a blank description.
    pub async fn add_task(
        &self,
        project_id: ProjectId,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> TrackerServiceResult<Task> {
        let mut manager = self.manager.lock().await;
        let project = manager
            .project_mut(project_id)
            .ok_or(TrackerServiceError::ProjectNotFound(project_id))?;
        let task = project.add_task(description, priority, &*self.clock)?;
        debug!(
            project_id = %project_id,
            task_id = %task.id(),
            priority = task.priority().as_str(),
            "added task"
        );
        Ok(task)
    }

    /// Removes a task from a project, returning it when it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::ProjectNotFound`] for unknown projects.
    pub async fn remove_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TrackerServiceResult<Option<Task>> {
        let mut manager = self.manager.lock().await;
        let project = manager
            .project_mut(project_id)
            .ok_or(TrackerServiceError::ProjectNotFound(project_id))?;
        Ok(project.remove_task(task_id))
    }

    /// Assigns a task to a person.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Domain`] wrapping
    /// [`TrackerDomainError::AlreadyAssigned`] when the task already has an
    /// assignee, or a not-found error for unknown identifiers.
    pub async fn assign_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        assignee: impl Into<String>,
    ) -> TrackerServiceResult<Task> {
        let clock = Arc::clone(&self.clock);
        self.update_task(project_id, task_id, |task| task.assign(assignee, &*clock))
            .await
    }

    /// Overwrites the state of a task.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown identifiers.
    pub async fn set_task_state(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        state: TaskState,
    ) -> TrackerServiceResult<Task> {
        let clock = Arc::clone(&self.clock);
        self.update_task(project_id, task_id, |task| {
            task.set_state(state, &*clock);
            Ok(())
        })
        .await
    }

    /// Overwrites the priority of a task.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown identifiers.
    pub async fn set_task_priority(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        priority: TaskPriority,
    ) -> TrackerServiceResult<Task> {
        let clock = Arc::clone(&self.clock);
        self.update_task(project_id, task_id, |task| {
            task.set_priority(priority, &*clock);
            Ok(())
        })
        .await
    }

    /// Returns copies of a project's tasks accepted by `matcher`, sorted
    /// by priority then description.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::ProjectNotFound`] for unknown projects.
    pub async fn find_tasks<M>(
        &self,
        project_id: ProjectId,
        matcher: &M,
    ) -> TrackerServiceResult<Vec<Task>>
    where
        M: TaskMatcher + Sync + ?Sized,
    {
        let manager = self.manager.lock().await;
        let project = manager
            .project(project_id)
            .ok_or(TrackerServiceError::ProjectNotFound(project_id))?;
        Ok(project.find_tasks(matcher).into_iter().cloned().collect())
    }

    async fn update_task<F>(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        update: F,
    ) -> TrackerServiceResult<Task>
    where
        F: FnOnce(&mut Task) -> Result<(), TrackerDomainError>,
    {
        let mut manager = self.manager.lock().await;
        let project = manager
            .project_mut(project_id)
            .ok_or(TrackerServiceError::ProjectNotFound(project_id))?;
        let task = project
            .task_mut(task_id)
            .ok_or(TrackerServiceError::TaskNotFound {
                project_id,
                task_id,
            })?;
        update(task)?;
        debug!(
            project_id = %project_id,
            task_id = %task_id,
            state = task.state().as_str(),
            "updated task"
        );
        Ok(task.clone())
    }
}
