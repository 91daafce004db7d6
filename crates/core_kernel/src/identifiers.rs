//! Strongly-typed identifiers for domain entities
//!
//! Records are keyed by database-assigned integers. Wrapping them in newtypes
//! keeps a `CarId` from being passed where a `PolicyId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(CarId);
define_id!(OwnerId);
define_id!(PolicyId);
define_id!(ClaimId);
