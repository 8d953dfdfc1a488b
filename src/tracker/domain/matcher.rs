//! Task predicates used to filter a project's tasks.

use super::{Task, TaskPriority};

/// Boolean predicate over a task.
///
/// Implementations must be free of side effects so that one matcher can be
/// reused across any number of queries. Closures of type `Fn(&Task) -> bool`
/// are matchers too.
pub trait TaskMatcher {
    /// Returns `true` when `task` satisfies the predicate.
    fn matches(&self, task: &Task) -> bool;
}

impl<F> TaskMatcher for F
where
    F: Fn(&Task) -> bool,
{
    fn matches(&self, task: &Task) -> bool {
        self(task)
    }
}

/// Matches every task whose state is not `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotDoneMatcher;

impl TaskMatcher for NotDoneMatcher {
    fn matches(&self, task: &Task) -> bool {
        !task.state().is_done()
    }
}

/// Matches tasks with exactly the configured priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityMatcher {
    priority: TaskPriority,
}

impl PriorityMatcher {
    /// Creates a matcher for `priority`.
    #[must_use]
    pub const fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }

    /// Returns the required priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}

impl TaskMatcher for PriorityMatcher {
    fn matches(&self, task: &Task) -> bool {
        task.priority() == self.priority
    }
}

/// Matches tasks assigned to the configured person.
///
/// Names are compared after trimming and lowercasing both sides; an
/// unassigned task never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeMatcher {
    assignee: String,
}

impl AssigneeMatcher {
    /// Creates a matcher for `assignee`.
    #[must_use]
    pub fn new(assignee: impl AsRef<str>) -> Self {
        Self {
            assignee: normalize(assignee.as_ref()),
        }
    }

    /// Returns the normalized name this matcher looks for.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }
}

impl TaskMatcher for AssigneeMatcher {
    fn matches(&self, task: &Task) -> bool {
        task.assignee()
            .map(normalize)
            .is_some_and(|name| !name.is_empty() && name == self.assignee)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
