//! Adapter implementations of tracker ports.

pub mod file;
pub mod memory;
