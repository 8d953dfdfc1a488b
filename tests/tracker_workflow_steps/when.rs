//! When steps for tracker workflow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use taskboard::tracker::domain::{NotDoneMatcher, Task, TaskState};

#[when("the open tasks are listed")]
fn list_open_tasks(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let listed = world
        .project()?
        .find_tasks(&NotDoneMatcher)
        .into_iter()
        .map(Task::description)
        .map(str::to_owned)
        .collect();
    world.listed = listed;
    Ok(())
}

#[when(r#"task "{description}" is marked done"#)]
fn mark_done(world: &mut BoardWorld, description: String) -> Result<(), eyre::Report> {
    world.with_task(&description, |task, clock| {
        task.set_state(TaskState::Done, clock);
    })
}

#[when(r#"another project titled "{title}" is created"#)]
fn create_another_project(world: &mut BoardWorld, title: String) {
    world.last_error = world.manager.add_project(title, "", &world.clock).err();
}

#[when(r#"task "{description}" is assigned to "{name}""#)]
fn assign_task(
    world: &mut BoardWorld,
    description: String,
    name: String,
) -> Result<(), eyre::Report> {
    let result = world.with_task(&description, |task, clock| task.assign(name, clock))?;
    world.last_error = result.err();
    Ok(())
}
