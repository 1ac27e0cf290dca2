/// The type a raw token is declared to convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `true`/`false` (case-insensitive), or an integer literal where `0` is false.
    Bool,
    /// A signed 64-bit decimal integer.
    Integer,
    /// A double precision float.
    Float,
    /// Any text, taken verbatim.
    String,
}

impl Kind {
    /// The short type descriptor shown in help explanations.
    pub fn describe(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// The number of value tokens a specification consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `N`: Precisely `N` values.
    /// `Exactly(0)` is a presence switch, and only applies to options.
    Exactly(u16),
    /// `...`: Every value up to the stopping condition.
    /// For an option, that is the next recognized directive.
    /// For an argument, that is the end of the input.
    Variable,
}

impl Arity {
    pub(crate) fn is_switch(&self) -> bool {
        matches!(self, Arity::Exactly(0))
    }
}

impl From<u16> for Arity {
    fn from(value: u16) -> Self {
        Arity::Exactly(value)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::Variable => write!(f, "..."),
        }
    }
}
