use thiserror::Error;

use crate::api::ConversionError;

/// A specification was rejected at registration.
/// Nothing is registered when this is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The name belongs to the implicit help option.
    #[error("Config error: the name '{0}' is predefined.")]
    ReservedName(String),

    /// The name is already used by another argument or option.
    #[error("Config error: cannot duplicate the parameter '{0}'.")]
    DuplicateName(String),

    /// A variable-arity argument was already registered, so no further arguments may follow.
    #[error("Config error: cannot add the argument '{0}' after a variable-arity argument.")]
    AfterVariable(String),

    /// Arguments must bind at least one value.
    #[error("Config error: the argument '{0}' must take at least one value.")]
    ZeroArityArgument(String),

    /// Options must be identifiable by at least one directive.
    #[error("Config error: the option '{0}' requires at least one directive.")]
    NoDirectives(String),
}

/// The raw tokens could not be bound to the registered specifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token cannot be converted into its specification's kind.
    #[error("{source}")]
    Conversion {
        /// The index of the offending token.
        position: usize,
        /// The underlying conversion failure.
        source: ConversionError,
    },

    /// The input ran out before a fixed-arity specification was satisfied.
    #[error("insufficient number of arguments for '{name}' (provided={provided}, expected={expected}).")]
    InsufficientArguments {
        /// The specification being bound.
        name: String,
        /// The number of values it requires.
        expected: usize,
        /// The number of values that were available.
        provided: usize,
        /// The token index at which the input ran out.
        position: usize,
    },

    /// Tokens remained after every argument was bound.
    #[error("too many arguments: '{token}' is not bound to any parameter.")]
    TooManyArguments {
        /// The first unbound token.
        token: String,
        /// The index of the unbound token.
        position: usize,
    },
}

impl ParseError {
    /// The index of the token which caused the error.
    /// This is the token count when the input ran out.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Conversion { position, .. }
            | ParseError::InsufficientArguments { position, .. }
            | ParseError::TooManyArguments { position, .. } => *position,
        }
    }
}

/// A value query failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No values are bound under the name.
    #[error("argument '{0}' not found.")]
    NotFound(String),

    /// The parser has not completed a successful parse.
    #[error("arguments are not parsed.")]
    ParserNotReady,

    /// The bound value cannot be read as the requested type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Any error raised by `argspec`.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`RegistrationError`].
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`QueryError`].
    #[error(transparent)]
    Query(#[from] QueryError),

    /// See [`ConversionError`].
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// What a parse resulted in, before anything is printed or the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every specification is bound; values may be queried.
    Success,
    /// The help option was given (and the settings ask to act on it).
    HelpRequested,
    /// The tokens could not be bound.
    Failed(ParseError),
}

/// The flags which control how a parse reacts to errors and to the help option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSettings {
    /// On a parse error, print the usage and error (or the full help, if requested) and exit.
    /// Otherwise, the error is returned to the caller.
    pub help_on_error: bool,
    /// After a successful parse that includes the help option, print the full help and exit.
    pub exit_on_help: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            help_on_error: true,
            exit_on_help: true,
        }
    }
}
