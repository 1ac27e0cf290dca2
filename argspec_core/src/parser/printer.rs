use crate::api::Specification;
use crate::matcher::Bindings;
use crate::model::Arity;
use crate::parser::interface::{DescriptionRenderer, TotalWidth, UserInterface};
use crate::parser::ParseError;

pub(crate) struct Printer<'a> {
    program: &'a str,
    description: Option<&'a str>,
    specifications: &'a [Specification],
    renderer: DescriptionRenderer,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(
        program: &'a str,
        description: Option<&'a str>,
        specifications: &'a [Specification],
        total_width: TotalWidth,
    ) -> Self {
        Self {
            program,
            description,
            specifications,
            renderer: DescriptionRenderer::new(total_width),
        }
    }

    fn positionals(&self) -> impl Iterator<Item = &'a Specification> {
        self.specifications
            .iter()
            .filter(|specification| specification.as_positional().is_some())
    }

    fn optionals(&self) -> impl Iterator<Item = &'a Specification> {
        self.specifications
            .iter()
            .filter(|specification| specification.as_optional().is_some())
    }

    /// The usage line.
    /// Switches come first, then the fixed-arity options, the positionals, and finally the variable-arity options.
    pub(crate) fn usage(&self) -> String {
        let switches = self
            .optionals()
            .filter(|specification| specification.arity().is_switch());
        let fixed = self.optionals().filter(|specification| {
            matches!(specification.arity(), Arity::Exactly(n) if n > 0)
        });
        let variable = self
            .optionals()
            .filter(|specification| specification.arity() == Arity::Variable);

        let mut parts = vec![self.program.to_string()];
        parts.extend(
            switches
                .chain(fixed)
                .chain(self.positionals())
                .chain(variable)
                .map(Specification::format),
        );
        parts.join(" ")
    }

    pub(crate) fn explain(&self) -> Vec<String> {
        let mut lines = Vec::default();
        let mut positionals = self.positionals().peekable();

        if positionals.peek().is_some() {
            lines.push("".to_string());
            lines.push("Arguments".to_string());

            for specification in positionals {
                lines.extend(specification.explain_with(&self.renderer));
            }
        }

        let mut optionals = self.optionals().peekable();

        if optionals.peek().is_some() {
            lines.push("".to_string());
            lines.push("Options".to_string());

            for specification in optionals {
                lines.extend(specification.explain_with(&self.renderer));
            }
        }

        lines
    }

    /// The help text: the full explanation, or only the usage when `abbreviated`.
    pub(crate) fn help(&self, abbreviated: bool) -> Vec<String> {
        let mut lines = Vec::default();

        if let Some(description) = self.description {
            lines.push(description.to_string());
            lines.push("".to_string());
        }

        lines.push("usage:".to_string());
        lines.push(format!("  {}", self.usage()));

        if !abbreviated {
            lines.extend(self.explain());
        }

        lines
    }

    pub(crate) fn status(&self, tokens: &[String], bindings: &Bindings) -> Vec<String> {
        let mut lines = vec![
            format!("# input arguments:{}", spaced(tokens.iter().cloned())),
            format!(
                "# defined options:{}",
                spaced(self.optionals().map(Specification::format))
            ),
            format!(
                "# named arguments:{}",
                spaced(self.positionals().map(Specification::format))
            ),
            "# parsed arguments:".to_string(),
        ];

        for (name, values) in bindings.iter() {
            lines.push(format!(
                "    {name}:{}",
                spaced(values.iter().map(ToString::to_string))
            ));
        }

        lines
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.help(false) {
            user_interface.print(line);
        }
    }

    /// Print the abbreviated usage, the error context, and the error itself, all to the error stream.
    pub(crate) fn print_error(
        &self,
        error: &ParseError,
        tokens: &[String],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.help(true) {
            user_interface.print_error(line);
        }

        user_interface.print_error(ErrorContext::new(error.position(), tokens).to_string());
        user_interface.print_error("".to_string());
        user_interface.print_error(format!("error: {error}"));
    }
}

// Each item is preceded by a space.
fn spaced(items: impl Iterator<Item = String>) -> String {
    items.map(|item| format!(" {item}")).collect()
}

/// The raw tokens, with a caret under the one at `position`.
/// When `position` is past the end, the caret sits just beyond the final token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext<'a> {
    position: usize,
    tokens: &'a [String],
}

impl<'a> ErrorContext<'a> {
    pub(crate) fn new(position: usize, tokens: &'a [String]) -> Self {
        Self { position, tokens }
    }
}

impl<'a> std::fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let offset = if self.position < self.tokens.len() {
            // Each preceding token plus its separating space.
            self.tokens[..self.position]
                .iter()
                .map(|token| token.chars().count() + 1)
                .sum::<usize>()
        } else if self.tokens.is_empty() {
            0
        } else {
            projection.chars().count() + 1
        };

        write!(f, "{projection}\n{:offset$}^", "")
    }
}
