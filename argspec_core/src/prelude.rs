//! Traits which, typically, may be imported without concern: `use argspec::prelude::*`.

pub use crate::api::FromValue;
