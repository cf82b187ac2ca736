//! Strongly-typed identifiers for domain entities
//!
//! Every entity is keyed by a storage-generated `BIGSERIAL`. Wrapping the raw
//! `i64` in a newtype per entity keeps a `ContractId` from being passed where
//! a `TargetId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a storage-assigned key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw key as stored in the database
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            /// Parses `PREFIX-n` or a bare `n`; keys start at 1
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                let value: i64 = raw.parse().map_err(|_| {
                    CoreError::validation(format!("'{}' is not a {} identifier", s, $prefix))
                })?;
                if value < 1 {
                    return Err(CoreError::validation(format!(
                        "{} identifiers start at 1, got {}",
                        $prefix, value
                    )));
                }
                Ok(Self(value))
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

define_id!(TargetId, "TGT");
define_id!(CampaignId, "CMP");
define_id!(ContractId, "CTR");
define_id!(ContractTargetId, "CTT");
