//! Project and task tracking.
//!
//! Projects group prioritized tasks; a registry enforces unique project
//! titles and allocates identifiers, and matchers filter a project's tasks
//! into sorted result lists. The whole registry is persisted as one
//! snapshot. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
