//! Then steps for tracker workflow BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::tracker::domain::TrackerDomainError;

#[then(r#"the listed tasks are "{names}""#)]
fn listed_tasks_are(world: &BoardWorld, names: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    if world.listed != expected {
        return Err(eyre::eyre!(
            "expected tasks {expected:?}, found {:?}",
            world.listed
        ));
    }
    Ok(())
}

#[then(r#"the project state is "{state}""#)]
fn project_state_is(world: &BoardWorld, state: String) -> Result<(), eyre::Report> {
    let actual = world.project()?.state();
    if actual.as_str() != state {
        return Err(eyre::eyre!(
            "expected project state {state}, found {}",
            actual.as_str()
        ));
    }
    Ok(())
}

#[then("creation fails with a duplicate title error")]
fn creation_fails_with_duplicate_title(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_error, Some(TrackerDomainError::DuplicateTitle(_))) {
        return Err(eyre::eyre!(
            "expected DuplicateTitle error, got {:?}",
            world.last_error
        ));
    }
    if world.manager.len() != 1 {
        return Err(eyre::eyre!("duplicate project was stored"));
    }
    Ok(())
}

#[then("assignment fails with an already assigned error")]
fn assignment_fails(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(
        world.last_error,
        Some(TrackerDomainError::AlreadyAssigned { .. })
    ) {
        return Err(eyre::eyre!(
            "expected AlreadyAssigned error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}

#[then(r#"the assignee of task "{description}" is "{name}""#)]
fn assignee_is(world: &BoardWorld, description: String, name: String) -> Result<(), eyre::Report> {
    let task = world.task(&description)?;
    if task.assignee() != Some(name.as_str()) {
        return Err(eyre::eyre!(
            "expected assignee {name}, found {:?}",
            task.assignee()
        ));
    }
    Ok(())
}
