use crate::model::{Arity, Kind};
use crate::parser::{DescriptionRenderer, TotalWidth};

/// The alias tokens which identify an [`Optional`] on the command line (ex: `-v`, `--verbose`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directives(Vec<String>);

impl Directives {
    /// The directives, in declaration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|directive| directive == token)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Directives {
    fn from(value: &str) -> Self {
        Directives(vec![value.to_string()])
    }
}

impl From<String> for Directives {
    fn from(value: String) -> Self {
        Directives(vec![value])
    }
}

impl From<Vec<String>> for Directives {
    fn from(value: Vec<String>) -> Self {
        Directives(value)
    }
}

impl From<Vec<&str>> for Directives {
    fn from(value: Vec<&str>) -> Self {
        Directives(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Directives {
    fn from(value: &[&str]) -> Self {
        Directives(value.iter().map(|d| d.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Directives {
    fn from(value: [&str; N]) -> Self {
        Directives(value.iter().map(|d| d.to_string()).collect())
    }
}

/// An argument bound by its position amongst the non-option tokens.
///
/// ### Example
/// ```
/// # use argspec_core as argspec;
/// use argspec::{Arity, Kind, Positional};
///
/// let file = Positional::new("file", Kind::String).help("The file to read.");
/// let numbers = Positional::new("numbers", Kind::Integer).arity(Arity::Variable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) arity: Arity,
    pub(crate) help: Option<String>,
}

impl Positional {
    /// Create a positional argument taking precisely 1 value.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            arity: Arity::Exactly(1),
            help: None,
        }
    }

    /// Set the number of values to bind.
    /// Only the final positional argument may use [`Arity::Variable`].
    pub fn arity(mut self, arity: impl Into<Arity>) -> Self {
        self.arity = arity.into();
        self
    }

    /// Document the argument for the help explanation.
    /// If repeated, only the final description applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    fn format(&self) -> String {
        match self.arity {
            Arity::Exactly(1) => self.name.clone(),
            Arity::Exactly(n) => (0..n)
                .map(|i| format!("{}({i})", self.name))
                .collect::<Vec<String>>()
                .join(" "),
            Arity::Variable => format!("{}...", self.name),
        }
    }

    fn explain_header(&self) -> String {
        let kind = self.kind.describe();
        let types = match self.arity {
            Arity::Exactly(n) => (0..n)
                .map(|_| kind)
                .collect::<Vec<&str>>()
                .join(","),
            Arity::Variable => format!("{kind},..."),
        };
        format!("  {} [{types}]:", self.name)
    }
}

/// An option bound by recognizing one of its directives amongst the tokens.
///
/// ### Example
/// ```
/// # use argspec_core as argspec;
/// use argspec::{Arity, Kind, Optional};
///
/// let verbose = Optional::switch(["-v", "--verbose"], "verbose");
/// let count = Optional::new("--count", "count", Kind::Integer).help("How many.");
/// let tags = Optional::new("--tags", "tags", Kind::String).arity(Arity::Variable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional {
    pub(crate) directives: Directives,
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) arity: Arity,
    pub(crate) help: Option<String>,
}

impl Optional {
    /// Create an option taking precisely 1 value.
    pub fn new(directives: impl Into<Directives>, name: impl Into<String>, kind: Kind) -> Self {
        Self {
            directives: directives.into(),
            name: name.into(),
            kind,
            arity: Arity::Exactly(1),
            help: None,
        }
    }

    /// Create a presence switch: a `Bool` option taking no values.
    /// When matched, it binds a single `true`.
    pub fn switch(directives: impl Into<Directives>, name: impl Into<String>) -> Self {
        Self::new(directives, name, Kind::Bool).arity(Arity::Exactly(0))
    }

    /// Set the number of values to bind after the directive.
    pub fn arity(mut self, arity: impl Into<Arity>) -> Self {
        self.arity = arity.into();
        self
    }

    /// Document the option for the help explanation.
    /// If repeated, only the final description applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// The directives which identify this option.
    pub fn directives(&self) -> &[String] {
        self.directives.as_slice()
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.directives.contains(token)
    }

    fn show_directives(&self) -> String {
        self.directives.as_slice().join("|")
    }

    fn format(&self) -> String {
        let directives = if self.directives.as_slice().len() > 1 {
            format!("{{{}}}", self.show_directives())
        } else {
            self.show_directives()
        };
        let grammar = match self.arity {
            Arity::Exactly(0) => "".to_string(),
            Arity::Exactly(1) => format!(" {}", self.name),
            Arity::Exactly(n) => (0..n).map(|i| format!(" {}({i})", self.name)).collect(),
            Arity::Variable => format!(" {}...", self.name),
        };
        format!("[{directives}{grammar}]")
    }

    fn explain_header(&self) -> String {
        let kind = self.kind.describe();
        // Switches never render a type descriptor.
        let grammar = match self.arity {
            Arity::Exactly(0) => "".to_string(),
            Arity::Exactly(1) => format!(" [{}:{kind}]", self.name),
            Arity::Exactly(n) => format!(
                " [{}]",
                (0..n)
                    .map(|i| format!("{}({i}):{kind}", self.name))
                    .collect::<Vec<String>>()
                    .join(",")
            ),
            Arity::Variable => format!(" [{}:{kind},...]", self.name),
        };
        format!("  {}{grammar}:", self.show_directives())
    }
}

/// A registered argument or option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specification {
    /// See [`Positional`].
    Positional(Positional),
    /// See [`Optional`].
    Optional(Optional),
}

impl From<Positional> for Specification {
    fn from(value: Positional) -> Self {
        Specification::Positional(value)
    }
}

impl From<Optional> for Specification {
    fn from(value: Optional) -> Self {
        Specification::Optional(value)
    }
}

impl Specification {
    /// The lookup name of the bound values.
    pub fn name(&self) -> &str {
        match self {
            Specification::Positional(p) => &p.name,
            Specification::Optional(o) => &o.name,
        }
    }

    /// The declared kind of each value.
    pub fn kind(&self) -> Kind {
        match self {
            Specification::Positional(p) => p.kind,
            Specification::Optional(o) => o.kind,
        }
    }

    /// The declared number of values.
    pub fn arity(&self) -> Arity {
        match self {
            Specification::Positional(p) => p.arity,
            Specification::Optional(o) => o.arity,
        }
    }

    /// The help description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Specification::Positional(p) => p.help.as_deref(),
            Specification::Optional(o) => o.help.as_deref(),
        }
    }

    /// Identity test against a raw token.
    /// An argument is identified by its name, an option by any of its directives.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Specification::Positional(p) => p.name == token,
            Specification::Optional(o) => o.matches(token),
        }
    }

    /// The usage line fragment (ex: `[{-c|--count} count]` or `files...`).
    pub fn format(&self) -> String {
        match self {
            Specification::Positional(p) => p.format(),
            Specification::Optional(o) => o.format(),
        }
    }

    /// The explanation entry: a header line, followed by the description wrapped to `width` columns.
    pub fn explain(&self, width: usize) -> Vec<String> {
        self.explain_with(&DescriptionRenderer::new(TotalWidth(width)))
    }

    pub(crate) fn explain_with(&self, renderer: &DescriptionRenderer) -> Vec<String> {
        let header = match self {
            Specification::Positional(p) => p.explain_header(),
            Specification::Optional(o) => o.explain_header(),
        };
        let mut lines = vec![header];

        if let Some(description) = self.description() {
            lines.extend(renderer.render(description));
        }

        lines
    }

    pub(crate) fn as_positional(&self) -> Option<&Positional> {
        match self {
            Specification::Positional(p) => Some(p),
            Specification::Optional(_) => None,
        }
    }

    pub(crate) fn as_optional(&self) -> Option<&Optional> {
        match self {
            Specification::Positional(_) => None,
            Specification::Optional(o) => Some(o),
        }
    }
}
