//! Shared world state for tracker workflow BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::tracker::domain::{
    Project, ProjectId, ProjectsManager, Task, TaskId, TrackerDomainError,
};

/// Scenario world for tracker behaviour tests.
pub struct BoardWorld {
    pub manager: ProjectsManager,
    pub clock: DefaultClock,
    pub project_id: Option<ProjectId>,
    pub listed: Vec<String>,
    pub last_error: Option<TrackerDomainError>,
}

impl BoardWorld {
    /// Creates a world with an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: ProjectsManager::new(),
            clock: DefaultClock,
            project_id: None,
            listed: Vec::new(),
            last_error: None,
        }
    }

    /// Returns the project created by the scenario.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        let id = self
            .project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
        self.manager
            .project(id)
            .ok_or_else(|| eyre::eyre!("project {id} not found"))
    }

    /// Returns the task with the given description.
    pub fn task(&self, description: &str) -> Result<&Task, eyre::Report> {
        self.project()?
            .tasks()
            .iter()
            .find(|task| task.description() == description)
            .ok_or_else(|| eyre::eyre!("task '{description}' not found"))
    }

    /// Returns the identifier of the task with the given description.
    pub fn task_id(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.task(description).map(Task::id)
    }

    /// Runs `update` against the named task.
    pub fn with_task<T>(
        &mut self,
        description: &str,
        update: impl FnOnce(&mut Task, &DefaultClock) -> T,
    ) -> Result<T, eyre::Report> {
        let task_id = self.task_id(description)?;
        let project_id = self
            .project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
        let task = self
            .manager
            .project_mut(project_id)
            .and_then(|project| project.task_mut(task_id))
            .ok_or_else(|| eyre::eyre!("task '{description}' not found"))?;
        Ok(update(task, &self.clock))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
