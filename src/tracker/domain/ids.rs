//! Sequential identifier types for the tracker domain.
//!
//! Identifiers are allocated by their owning aggregate root, start at one,
//! and are never reused once handed out.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// First identifier handed out by a fresh counter.
            pub const FIRST: Self = Self(1);

            /// Largest representable identifier. A counter parked here is
            /// exhausted and hands out nothing further.
            pub const MAX: Self = Self(u32::MAX);

            /// Creates an identifier from a raw value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value.
            #[must_use]
            pub const fn value(self) -> u32 {
                self.0
            }

            /// Returns the identifier that follows this one, or `None` once
            /// the numeric range is used up.
            #[must_use]
            pub const fn next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(value) => Some(Self(value)),
                    None => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

sequential_id! {
    /// Identifier of a task, unique within its owning project.
    TaskId
}

sequential_id! {
    /// Identifier of a project, unique within its owning manager.
    ProjectId
}
