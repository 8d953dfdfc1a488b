//! Given steps for tracker workflow BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::tracker::domain::{ProjectsManager, TaskPriority};

#[given("an empty projects manager")]
fn empty_manager(world: &mut BoardWorld) {
    world.manager = ProjectsManager::new();
    world.project_id = None;
}

#[given(r#"a project titled "{title}""#)]
fn project_titled(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let project = world
        .manager
        .add_project(title, "scenario project", &world.clock)
        .wrap_err("create scenario project")?;
    world.project_id = Some(project.id());
    Ok(())
}

#[given(r#"a task "{description}" with priority "{priority}""#)]
fn task_with_priority(
    world: &mut BoardWorld,
    description: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())?;
    let project_id = world
        .project_id
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let project = world
        .manager
        .project_mut(project_id)
        .ok_or_else(|| eyre::eyre!("project {project_id} not found"))?;
    project
        .add_task(description, parsed, &world.clock)
        .wrap_err("add scenario task")?;
    Ok(())
}

#[given(r#"task "{description}" has been assigned to "{name}""#)]
fn task_has_been_assigned(
    world: &mut BoardWorld,
    description: String,
    name: String,
) -> Result<(), eyre::Report> {
    world
        .with_task(&description, |task, clock| task.assign(name, clock))?
        .wrap_err("assign scenario task")
}
