//! Application services for project and task orchestration.

mod tracker;

pub use tracker::{TrackerService, TrackerServiceError, TrackerServiceResult};
