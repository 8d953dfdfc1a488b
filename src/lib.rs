//! Taskboard: in-memory project and task tracking.
//!
//! This crate models projects that own prioritized tasks, a registry that
//! enforces unique project titles, and predicate matchers for querying a
//! project's tasks. The registry is persisted as a single snapshot.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory)
//!
//! # Modules
//!
//! - [`tracker`]: Projects, tasks, matchers and snapshot persistence
//! - [`config`]: Snapshot location and format settings

pub mod config;
pub mod tracker;
