//! Step definitions for tracker workflow scenarios.

pub mod world;

mod given;
mod then;
mod when;
