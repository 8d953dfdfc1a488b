//! Registry owning every project and allocating project identifiers.

use super::{Project, ProjectId, TrackerDomainError, project::title_key};
use mockable::Clock;
use std::collections::HashSet;

/// Top-level registry of projects.
///
/// Titles are unique under case-insensitive comparison. Because titles are
/// immutable the check made on insertion holds for the project's lifetime.
#[derive(Debug, Clone)]
pub struct ProjectsManager {
    projects: Vec<Project>,
    next_project_id: ProjectId,
}

impl Default for ProjectsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsManager {
    /// Creates an empty manager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_project_id: ProjectId::FIRST,
        }
    }

    /// Returns a copy of all projects in insertion order.
    ///
    /// Changing the returned vector does not affect the manager.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Iterates over the managed projects without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when no project is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the identifier the next created project will receive.
    #[must_use]
    pub const fn next_project_id(&self) -> ProjectId {
        self.next_project_id
    }

    /// Replaces every project at once and re-derives the identifier counter
    /// from the highest identifier present.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::DuplicateProjectId`],
    /// [`TrackerDomainError::DuplicateTitle`] or
    /// [`TrackerDomainError::DuplicateTaskId`] when the incoming list breaks
    /// the uniqueness rules, and [`TrackerDomainError::ProjectIdsExhausted`]
    /// or [`TrackerDomainError::TaskIdsExhausted`] when a counter could not
    /// advance past the identifiers already in use. The current projects
    /// are kept in every error case.
    pub fn set_projects(&mut self, projects: Vec<Project>) -> Result<(), TrackerDomainError> {
        let mut ids = HashSet::with_capacity(projects.len());
        let mut titles = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !ids.insert(project.id()) {
                return Err(TrackerDomainError::DuplicateProjectId(project.id()));
            }
            if !titles.insert(project.title_key()) {
                return Err(TrackerDomainError::DuplicateTitle(project.title().to_owned()));
            }
            check_task_ids(project)?;
        }

        let next_project_id = match projects.iter().map(Project::id).max() {
            Some(highest) => highest
                .next()
                .ok_or(TrackerDomainError::ProjectIdsExhausted)?,
            None => ProjectId::FIRST,
        };
        self.next_project_id = next_project_id;
        self.projects = projects;
        Ok(())
    }

    /// Returns `true` when no project uses `title`, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn is_title_unique(&self, title: &str) -> bool {
        let key = title_key(title);
        self.projects.iter().all(|project| project.title_key() != key)
    }

    /// Creates a project and returns a copy of it.
    ///
    /// Mutate the stored project through [`ProjectsManager::project_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyTitle`] when the title is blank,
    /// [`TrackerDomainError::DuplicateTitle`] when another project already
    /// uses it, or [`TrackerDomainError::ProjectIdsExhausted`] when no
    /// identifier is left. The manager is unchanged on error.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Project, TrackerDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerDomainError::EmptyTitle);
        }
        if !self.is_title_unique(trimmed) {
            return Err(TrackerDomainError::DuplicateTitle(trimmed.to_owned()));
        }

        let id = self.next_project_id;
        self.next_project_id = id
            .next()
            .ok_or(TrackerDomainError::ProjectIdsExhausted)?;
        let project = Project::new(id, trimmed.to_owned(), description.into(), clock);
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Removes the project with the given identifier.
    ///
    /// The identifier counter is left untouched.
    pub fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        let position = self.projects.iter().position(|project| project.id() == id)?;
        Some(self.projects.remove(position))
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Finds a project by identifier for mutation.
    #[must_use]
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    /// Returns the projects whose title contains `substring`.
    ///
    /// The comparison is case-sensitive; an empty substring matches every
    /// project.
    #[must_use]
    pub fn find_projects(&self, substring: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.title().contains(substring))
            .collect()
    }

    /// Returns the highest project identifier in use.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyCollection`] when there are no
    /// projects.
    pub fn highest_id(&self) -> Result<ProjectId, TrackerDomainError> {
        self.projects
            .iter()
            .map(Project::id)
            .max()
            .ok_or(TrackerDomainError::EmptyCollection)
    }
}

/// Task identifiers must be unique within a project, and the project's task
/// counter must still have a successor.
fn check_task_ids(project: &Project) -> Result<(), TrackerDomainError> {
    if project.next_task_id().next().is_none() {
        return Err(TrackerDomainError::TaskIdsExhausted(project.id()));
    }
    let mut seen = HashSet::with_capacity(project.task_count());
    for task in project.tasks() {
        if !seen.insert(task.id()) {
            return Err(TrackerDomainError::DuplicateTaskId {
                project_id: project.id(),
                task_id: task.id(),
            });
        }
    }
    Ok(())
}
