//! Engine crate for `argspec`.
//! See the `argspec` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    Error, ParseError, ParseOutcome, ParseSettings, QueryError, RegistrationError, WrapWidth,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
