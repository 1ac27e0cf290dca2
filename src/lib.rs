//! `argspec` is a declare-then-parse command line parser for Rust.
//!
//! A program declares its *arguments* and *options*, each with a value [`Kind`] and an [`Arity`].
//! `argspec` then matches the command line tokens against those declarations, validates every token against its kind, and exposes the bound values by name.
//! The usage line and help text are generated from the same declarations.
//!
//! `argspec` keeps a deliberately small surface:
//! * *Positional arguments*: bound in declaration order from the tokens no option consumed.
//! * *Options*: identified by one or more directives (ex: `-v`, `--verbose`), taking 0, N, or a variable number of values.
//! * *Typed values*: every token is checked against its declared kind as it is bound, and converted to the requested Rust type as it is read.
//!
//! There is no support for combined short options (`-abc`), the `--option=value` syntax, sub-commands, or environment variable fallbacks.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! Sum up some numbers.
//!
//! usage:
//!   summer [{-h|--help}] item...
//!
//! Arguments
//!   item [integer,...]:
//!         The items to sum.
//!
//! Options
//!   -h|--help:
//!         Show a help message
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer
//! usage:
//!   summer [{-h|--help}] item...
//!
//! ^
//!
//! error: insufficient number of arguments for 'item' (provided=0, expected=1).
//!
//! $ summer 1 blah
//! usage:
//!   summer [{-h|--help}] item...
//! 1 blah
//!   ^
//!
//! error: 'blah' cannot convert to integer.
//! ```
//!
//! # Declarations
//! Start with an [`ArgumentParser`], built over the invocation arguments (see [`ArgumentParser::from_env`]).
//! Then register [`Positional`] arguments via [`ArgumentParser::add_argument`] and [`Optional`] options via [`ArgumentParser::add_option`].
//!
//! Every declaration has a *name*, which is how its values are read back.
//! Names must be unique; `help` is taken by the built-in `-h`/`--help` option unless the parser is built [`ArgumentParser::without_help`].
//!
//! ### Arity
//! * [`Arity::Exactly(0)`](Arity::Exactly): a presence switch (see [`Optional::switch`]); only applies to options.
//! When matched, it binds a single `true`.
//! * [`Arity::Exactly(n)`](Arity::Exactly): precisely `n` values.
//! * [`Arity::Variable`]: every value up to the stopping condition.
//! An option stops at the next recognized directive, and may bind zero values.
//! An argument takes every remaining token, and requires at least one.
//! Only the final argument may be variable.
//!
//! # Parsing
//! Parsing happens in two phases:
//! 1. The tokens are scanned left to right for option directives.
//! Each matched option consumes its values right after the directive; when an option repeats, its values accumulate.
//! 2. The tokens left over bind to the arguments, in declaration order.
//! Any token still left over is an error.
//!
//! [`ArgumentParser::parse`] acts on the outcome: the help option prints the full help and exits the process, while an error prints the usage along with the error and exits with `1`.
//! Use [`ArgumentParser::help_on_error`] to receive the error instead, or [`ArgumentParser::try_parse`] to receive the [`ParseOutcome`] without any printing at all.
//!
//! ```
//! use argspec::{ArgumentParser, Kind, Optional};
//!
//! let mut parser = ArgumentParser::new(["program", "--count"]).help_on_error(false);
//! parser
//!     .add_option(Optional::new("--count", "count", Kind::Integer))
//!     .unwrap();
//!
//! let error = parser.parse().unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "insufficient number of arguments for 'count' (provided=0, expected=1)."
//! );
//! ```
//!
//! # Reading values
//! Values are read with [`ArgumentParser::get`] (the first value) and [`ArgumentParser::get_all`] (every value, in binding order).
//! Reading converts the raw token to any type in the [`FromValue`] table, regardless of the declared kind.
//! The `_or` variants fall back to a default instead of failing.
//!
//! ```
//! use argspec::{Arity, ArgumentParser, Kind, Optional, Positional};
//!
//! let mut parser = ArgumentParser::new(["program", "--tags", "a", "b", "--verbose", "alice"]);
//! parser
//!     .add_option(Optional::new("--tags", "tags", Kind::String).arity(Arity::Variable))
//!     .unwrap()
//!     .add_option(Optional::switch("--verbose", "verbose"))
//!     .unwrap()
//!     .add_argument(Positional::new("name", Kind::String))
//!     .unwrap();
//! parser.parse().unwrap();
//!
//! assert_eq!(parser.get_all::<String>("tags").unwrap(), vec!["a", "b"]);
//! assert!(parser.get::<bool>("verbose").unwrap());
//! assert_eq!(parser.get::<String>("name").unwrap(), "alice");
//! assert_eq!(parser.get_or("missing", 3u8), 3);
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while matching.

pub use argspec_core::*;
