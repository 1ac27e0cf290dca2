use crate::api::{FromValue, Optional, Positional, Specification, Value};
use crate::constant::*;
use crate::matcher::{bind_positionals, scan_options, Bindings, Scan};
use crate::model::Arity;
use crate::parser::{
    respond, ConsoleInterface, ParseError, ParseOutcome, ParseSettings, Printer, QueryError,
    RegistrationError, Response, UserInterface, WrapWidth,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser.
///
/// Holds the raw tokens, the registered specifications, and (after a successful parse) the bound values.
///
/// ### Example
/// ```
/// # use argspec_core as argspec;
/// use argspec::{ArgumentParser, Kind, Optional, Positional};
///
/// let mut parser = ArgumentParser::new(["program", "--count", "5", "report.txt"]);
/// parser
///     .add_option(Optional::new("--count", "count", Kind::Integer))
///     .unwrap()
///     .add_argument(Positional::new("file", Kind::String))
///     .unwrap();
///
/// parser.parse().unwrap();
///
/// assert_eq!(parser.get::<u32>("count").unwrap(), 5);
/// assert_eq!(parser.get::<String>("file").unwrap(), "report.txt");
/// ```
pub struct ArgumentParser {
    program: String,
    description: Option<String>,
    tokens: Vec<String>,
    specifications: Vec<Specification>,
    bindings: Bindings,
    completed: bool,
    help_enabled: bool,
    settings: ParseSettings,
    wrap_width: WrapWidth,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program", &self.program)
            .field("tokens", &self.tokens)
            .field("specifications", &self.specifications)
            .field("completed", &self.completed)
            .finish()
    }
}

impl ArgumentParser {
    /// Create a parser over the invocation arguments.
    /// The first element is the program name; the rest are the tokens to parse.
    ///
    /// The help option (`-h`/`--help`) is registered automatically (see [`ArgumentParser::without_help`]).
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_default();
        let tokens = argv.collect();

        Self {
            program,
            description: None,
            tokens,
            specifications: vec![Optional::switch([HELP_SHORT, HELP_LONG], HELP_NAME)
                .help(HELP_MESSAGE)
                .into()],
            bindings: Bindings::default(),
            completed: false,
            help_enabled: true,
            settings: ParseSettings::default(),
            wrap_width: WrapWidth::default(),
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Create a parser over [`std::env::args`].
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    #[cfg(test)]
    pub(crate) fn with_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// Document the program, shown at the top of the full help.
    /// If repeated, only the final description applies.
    ///
    /// ### Example
    /// ```
    /// # use argspec_core as argspec;
    /// use argspec::ArgumentParser;
    ///
    /// let parser = ArgumentParser::new(["program"])
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.");
    ///
    /// assert!(parser.help().starts_with("My program that does awesome stuff.\n"));
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Document the program in place.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description.replace(description.into());
    }

    /// Do not register the `-h`/`--help` option.
    /// The name `help` becomes available to other specifications.
    pub fn without_help(mut self) -> Self {
        self.help_enabled = false;
        self.specifications
            .retain(|specification| specification.name() != HELP_NAME);
        self
    }

    /// Whether a parse error is printed (followed by exiting the process), or returned to the caller.
    /// Defaults to `true`.
    pub fn help_on_error(mut self, enabled: bool) -> Self {
        self.settings.help_on_error = enabled;
        self
    }

    /// Whether the help option prints the full help and exits the process, or is bound like any other switch.
    /// Defaults to `true`.
    pub fn exit_on_help(mut self, enabled: bool) -> Self {
        self.settings.exit_on_help = enabled;
        self
    }

    /// The column width that help descriptions wrap to.
    /// Defaults to `WrapWidth::Fixed(80)`.
    pub fn wrap_width(mut self, wrap_width: WrapWidth) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Register a positional argument.
    ///
    /// Arguments bind in registration order.
    /// Only the final argument may use [`Arity::Variable`]; registering any argument after it fails.
    ///
    /// ### Example
    /// ```
    /// # use argspec_core as argspec;
    /// use argspec::{Arity, ArgumentParser, Kind, Positional, RegistrationError};
    ///
    /// let mut parser = ArgumentParser::new(["program"]);
    /// parser
    ///     .add_argument(Positional::new("numbers", Kind::Integer).arity(Arity::Variable))
    ///     .unwrap();
    ///
    /// let error = parser
    ///     .add_argument(Positional::new("file", Kind::String))
    ///     .unwrap_err();
    /// assert_eq!(error, RegistrationError::AfterVariable("file".to_string()));
    /// ```
    pub fn add_argument(&mut self, positional: Positional) -> Result<&mut Self, RegistrationError> {
        self.check_name(&positional.name)?;

        if positional.arity.is_switch() {
            return Err(RegistrationError::ZeroArityArgument(positional.name));
        }

        if self
            .specifications
            .iter()
            .filter_map(Specification::as_positional)
            .any(|existing| existing.arity == Arity::Variable)
        {
            return Err(RegistrationError::AfterVariable(positional.name));
        }

        self.register(positional.into());
        Ok(self)
    }

    /// Register an option.
    ///
    /// When options share a directive, the one registered first is matched.
    pub fn add_option(&mut self, optional: Optional) -> Result<&mut Self, RegistrationError> {
        self.check_name(&optional.name)?;

        if optional.directives.is_empty() {
            return Err(RegistrationError::NoDirectives(optional.name));
        }

        self.register(optional.into());
        Ok(self)
    }

    fn check_name(&self, name: &str) -> Result<(), RegistrationError> {
        if self.help_enabled && name == HELP_NAME {
            return Err(RegistrationError::ReservedName(name.to_string()));
        }

        if self
            .specifications
            .iter()
            .any(|specification| specification.name() == name)
        {
            return Err(RegistrationError::DuplicateName(name.to_string()));
        }

        Ok(())
    }

    fn register(&mut self, specification: Specification) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering '{}'.", specification.name());
        }

        self.specifications.push(specification);
        // The previous parse no longer reflects the specifications.
        self.completed = false;
    }

    /// Run both phases of the matching algorithm, without printing anything or exiting.
    ///
    /// 1. The tokens are scanned left to right for option directives; each matched option consumes its values.
    /// 2. The tokens left over bind to the arguments, in registration order.
    ///
    /// The bound values are rebuilt on every call.
    /// After a failure nothing is bound and queries fail with [`QueryError::ParserNotReady`].
    ///
    /// The help option results in `HelpRequested` when `exit_on_help` is set (after a successful parse) or `help_on_error` is set (after a failed parse).
    pub fn try_parse(&mut self) -> ParseOutcome {
        let result = {
            let options: Vec<&Optional> = self
                .specifications
                .iter()
                .filter_map(Specification::as_optional)
                .collect();
            let arguments: Vec<&Positional> = self
                .specifications
                .iter()
                .filter_map(Specification::as_positional)
                .collect();

            match scan_options(&self.tokens, &options) {
                Ok(Scan {
                    mut bindings,
                    remaining,
                }) => match bind_positionals(&remaining, &arguments, self.tokens.len()) {
                    Ok(positionals) => {
                        bindings.extend(positionals);
                        Ok(bindings)
                    }
                    Err(error) => Err((error, bindings)),
                },
                Err((error, partial)) => Err((error, partial)),
            }
        };

        let outcome = match result {
            Ok(bindings) => {
                let help_requested = self.help_enabled && bindings.contains(HELP_NAME);
                self.bindings = bindings;
                self.completed = true;

                if help_requested && self.settings.exit_on_help {
                    ParseOutcome::HelpRequested
                } else {
                    ParseOutcome::Success
                }
            }
            Err((error, partial)) => {
                let help_requested = self.help_enabled && partial.contains(HELP_NAME);
                self.bindings = Bindings::default();
                self.completed = false;

                if help_requested && self.settings.help_on_error {
                    ParseOutcome::HelpRequested
                } else {
                    ParseOutcome::Failed(error)
                }
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parse outcome: {outcome:?}.");
        }

        outcome
    }

    /// Parse the tokens, and act on the outcome.
    ///
    /// If the help option is given, the full help is printed and the process exits with `0`.
    /// If the tokens cannot be bound, the usage and the error are printed and the process exits with `1`.
    /// With `help_on_error(false)`, the error is returned instead.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        match self.run() {
            Ok(()) => Ok(()),
            Err(Response::Exit(code)) => std::process::exit(code),
            Err(Response::Raise(error)) => Err(error),
        }
    }

    pub(crate) fn run(&mut self) -> Result<(), Response> {
        let outcome = self.try_parse();
        respond(
            outcome,
            &self.printer(),
            &self.tokens,
            &self.settings,
            &*self.user_interface,
        )
    }

    fn printer(&self) -> Printer<'_> {
        Printer::new(
            &self.program,
            self.description.as_deref(),
            &self.specifications,
            self.wrap_width.resolve(),
        )
    }

    fn values(&self, name: &str) -> Result<&[Value], QueryError> {
        if !self.completed {
            return Err(QueryError::ParserNotReady);
        }

        self.bindings
            .get(name)
            .ok_or_else(|| QueryError::NotFound(name.to_string()))
    }

    /// Read the first value bound to `name`.
    ///
    /// ### Example
    /// ```
    /// # use argspec_core as argspec;
    /// use argspec::{ArgumentParser, Kind, Optional, QueryError};
    ///
    /// let mut parser = ArgumentParser::new(["program", "-v"]);
    /// parser
    ///     .add_option(Optional::switch(["-v", "--verbose"], "verbose"))
    ///     .unwrap()
    ///     .add_option(Optional::switch("-q", "quiet"))
    ///     .unwrap();
    /// parser.parse().unwrap();
    ///
    /// assert!(parser.get::<bool>("verbose").unwrap());
    /// assert_eq!(
    ///     parser.get::<bool>("quiet"),
    ///     Err(QueryError::NotFound("quiet".to_string()))
    /// );
    /// assert!(!parser.get_or("quiet", false));
    /// ```
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, QueryError> {
        let value = self
            .values(name)?
            .first()
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?;
        Ok(value.get::<T>()?)
    }

    /// Read the first value bound to `name`, or `default` on any failure.
    pub fn get_or<T: FromValue>(&self, name: &str, default: T) -> T {
        self.get(name).unwrap_or(default)
    }

    /// Read every value bound to `name`, in binding order.
    pub fn get_all<T: FromValue>(&self, name: &str) -> Result<Vec<T>, QueryError> {
        self.values(name)?
            .iter()
            .map(|value| value.get::<T>().map_err(QueryError::from))
            .collect()
    }

    /// Read every value bound to `name`, or a single `default` on any failure.
    pub fn get_all_or<T: FromValue>(&self, name: &str, default: T) -> Vec<T> {
        self.get_all(name).unwrap_or_else(|_| vec![default])
    }

    /// Whether any value is bound to `name`.
    /// Unlike the readers, this does not require a completed parse.
    pub fn has(&self, name: &str) -> bool {
        self.bindings
            .get(name)
            .is_some_and(|values| !values.is_empty())
    }

    /// The registered specifications, in registration order.
    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }

    /// The raw tokens (excluding the program name).
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the most recent parse succeeded (and nothing was registered since).
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The one line usage summary.
    pub fn usage(&self) -> String {
        self.printer().usage()
    }

    /// The full help text.
    pub fn help(&self) -> String {
        self.printer().help(false).join("\n")
    }

    /// The diagnostic dump of the tokens, the specifications, and the bound values.
    pub fn status(&self) -> String {
        self.printer()
            .status(&self.tokens, &self.bindings)
            .join("\n")
    }

    /// Print the full help to standard out.
    pub fn print_help(&self) {
        self.printer().print_help(&*self.user_interface);
    }

    /// Print the diagnostic dump to standard out.
    pub fn display_status(&self) {
        for line in self.printer().status(&self.tokens, &self.bindings) {
            self.user_interface.print(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConversionError;
    use crate::model::Kind;
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn argv(tokens: &[&str]) -> Vec<String> {
        std::iter::once("program")
            .chain(tokens.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new() {
        // Execute
        let parser = ArgumentParser::new(argv(&["a", "b"]));

        // Verify
        assert_eq!(parser.program, "program");
        assert_eq!(parser.tokens(), &["a".to_string(), "b".to_string()]);
        assert_eq!(parser.specifications().len(), 1);
        assert_eq!(parser.specifications()[0].name(), "help");
        assert!(parser.specifications()[0].matches("-h"));
        assert!(parser.specifications()[0].matches("--help"));
        assert!(!parser.is_completed());
    }

    #[test]
    fn new_empty() {
        let parser = ArgumentParser::new(Vec::<String>::default());
        assert_eq!(parser.program, "");
        assert!(parser.tokens().is_empty());
    }

    #[test]
    fn without_help() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["--help"])).without_help();

        // Execute
        parser
            .add_option(Optional::new("--help", "help", Kind::String))
            .unwrap();
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(outcome, ParseOutcome::Failed(ParseError::InsufficientArguments {
            name: "help".to_string(),
            expected: 1,
            provided: 0,
            position: 1,
        }));
    }

    #[rstest]
    #[case(Specification::from(Positional::new("help", Kind::String)))]
    #[case(Specification::from(Optional::switch("--assist", "help")))]
    fn add_reserved(#[case] specification: Specification) {
        // Setup
        let mut parser = ArgumentParser::new(argv(&[]));

        // Execute
        let result = match specification {
            Specification::Positional(p) => parser.add_argument(p).map(|_| ()),
            Specification::Optional(o) => parser.add_option(o).map(|_| ()),
        };

        // Verify
        assert_eq!(
            result,
            Err(RegistrationError::ReservedName("help".to_string()))
        );
        assert_eq!(parser.specifications().len(), 1);
    }

    #[test]
    fn add_duplicate() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&[]));
        parser
            .add_argument(Positional::new("value", Kind::String))
            .unwrap();

        // Execute
        let argument = parser
            .add_argument(Positional::new("value", Kind::Integer))
            .map(|_| ());
        let option = parser
            .add_option(Optional::new("--value", "value", Kind::Integer))
            .map(|_| ());

        // Verify
        assert_matches!(argument, Err(RegistrationError::DuplicateName(name)) => {
            assert_eq!(name, "value");
        });
        assert_matches!(option, Err(RegistrationError::DuplicateName(_)));
        assert_eq!(parser.specifications().len(), 2);
    }

    #[test]
    fn add_after_variable() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&[]));
        parser
            .add_argument(Positional::new("first", Kind::String).arity(Arity::Variable))
            .unwrap();

        // Execute
        let result = parser
            .add_argument(Positional::new("second", Kind::String))
            .map(|_| ());

        // Verify
        assert_eq!(
            result,
            Err(RegistrationError::AfterVariable("second".to_string()))
        );

        // Options are unaffected.
        parser
            .add_option(Optional::new("--more", "more", Kind::String).arity(Arity::Variable))
            .unwrap();
    }

    #[test]
    fn add_invalid() {
        let mut parser = ArgumentParser::new(argv(&[]));
        assert_eq!(
            parser
                .add_argument(Positional::new("none", Kind::Bool).arity(0))
                .map(|_| ()),
            Err(RegistrationError::ZeroArityArgument("none".to_string()))
        );
        assert_eq!(
            parser
                .add_option(Optional::switch(Vec::<String>::default(), "hidden"))
                .map(|_| ()),
            Err(RegistrationError::NoDirectives("hidden".to_string()))
        );
    }

    #[test]
    fn parse_mixed() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["--count", "5", "report.txt"]));
        parser
            .add_option(Optional::new("--count", "count", Kind::Integer))
            .unwrap()
            .add_argument(Positional::new("file", Kind::String))
            .unwrap();

        // Execute
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(outcome, ParseOutcome::Success);
        assert!(parser.is_completed());
        assert_eq!(parser.get::<i64>("count").unwrap(), 5);
        assert_eq!(parser.get::<String>("file").unwrap(), "report.txt");
        assert!(!parser.has("help"));
    }

    #[test]
    fn parse_repeated() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["-n", "1", "-v", "-n", "2", "-v"]));
        parser
            .add_option(Optional::new("-n", "number", Kind::Integer))
            .unwrap()
            .add_option(Optional::switch("-v", "verbose"))
            .unwrap();

        // Execute
        parser.try_parse();

        // Verify
        assert_eq!(parser.get::<i32>("number").unwrap(), 1);
        assert_eq!(parser.get_all::<i32>("number").unwrap(), vec![1, 2]);
        assert_eq!(parser.get_all::<bool>("verbose").unwrap(), vec![true, true]);
    }

    #[test]
    fn parse_idempotent() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["alice", "1", "2", "3"]));
        parser
            .add_argument(Positional::new("name", Kind::String))
            .unwrap()
            .add_argument(Positional::new("nums", Kind::Integer).arity(Arity::Variable))
            .unwrap();

        // Execute
        parser.try_parse();
        let first = parser.bindings.clone();
        parser.try_parse();

        // Verify
        assert_eq!(parser.bindings, first);
        assert_eq!(parser.get_all::<u8>("nums").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_failed() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["abc"]));
        parser
            .add_argument(Positional::new("count", Kind::Integer))
            .unwrap();

        // Execute
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(
            outcome,
            ParseOutcome::Failed(ParseError::Conversion {
                position: 0,
                source: ConversionError::new("abc", "integer"),
            })
        );
        assert!(!parser.is_completed());
        assert_eq!(parser.get::<i64>("count"), Err(QueryError::ParserNotReady));
        assert_eq!(parser.get_or("count", 7), 7);
        assert_eq!(parser.get_all_or("count", 7), vec![7]);
    }

    #[test]
    fn parse_failed_clears() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["1"]));
        parser
            .add_argument(Positional::new("count", Kind::Integer))
            .unwrap();
        assert_eq!(parser.try_parse(), ParseOutcome::Success);
        assert!(parser.has("count"));

        // Execute
        parser
            .add_argument(Positional::new("extra", Kind::Integer))
            .unwrap();
        assert!(!parser.is_completed());
        let outcome = parser.try_parse();

        // Verify
        assert_matches!(
            outcome,
            ParseOutcome::Failed(ParseError::InsufficientArguments { .. })
        );
        assert!(!parser.has("count"));
        assert_eq!(parser.get::<i64>("count"), Err(QueryError::ParserNotReady));
    }

    #[rstest]
    #[case(true, ParseOutcome::HelpRequested)]
    #[case(false, ParseOutcome::Success)]
    fn parse_help(#[case] exit_on_help: bool, #[case] expected: ParseOutcome) {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["-h"])).exit_on_help(exit_on_help);

        // Execute
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(outcome, expected);
        assert!(parser.has("help"));
        assert!(parser.get::<bool>("help").unwrap());
    }

    #[rstest]
    #[case(true, ParseOutcome::HelpRequested)]
    #[case(false, ParseOutcome::Failed(ParseError::TooManyArguments { token: "extra".to_string(), position: 1 }))]
    fn parse_help_on_error(#[case] help_on_error: bool, #[case] expected: ParseOutcome) {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["--help", "extra"])).help_on_error(help_on_error);

        // Execute
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(outcome, expected);
        assert!(!parser.is_completed());
    }

    #[test]
    fn get_errors() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["--tags", "hello"]));
        parser
            .add_option(Optional::new("--tags", "tags", Kind::String).arity(Arity::Variable))
            .unwrap()
            .add_option(Optional::new("--empty", "empty", Kind::String).arity(Arity::Variable))
            .unwrap();
        assert_eq!(parser.get::<String>("tags"), Err(QueryError::ParserNotReady));

        // Execute
        parser.try_parse();

        // Verify
        assert_eq!(
            parser.get::<String>("missing"),
            Err(QueryError::NotFound("missing".to_string()))
        );
        assert_matches!(parser.get::<i64>("tags"), Err(QueryError::Conversion(error)) => {
            assert_eq!(error.token(), "hello");
        });
        assert_eq!(parser.get_all_or::<i64>("tags", 3), vec![3]);
        assert_eq!(parser.get_or("tags", "x".to_string()), "hello");
    }

    #[test]
    fn variable_option_empty() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&["--empty"]));
        parser
            .add_option(Optional::new("--empty", "empty", Kind::String).arity(Arity::Variable))
            .unwrap();

        // Execute
        parser.try_parse();

        // Verify
        assert!(!parser.has("empty"));
        assert_eq!(
            parser.get::<String>("empty"),
            Err(QueryError::NotFound("empty".to_string()))
        );
        assert_eq!(parser.get_all::<String>("empty").unwrap(), Vec::<String>::default());
    }

    #[test]
    fn fixed_arity_random() {
        // Setup
        let arity: u16 = thread_rng().gen_range(1..8);
        let values: Vec<i64> = (0..arity).map(|_| thread_rng().gen()).collect();
        let mut tokens = vec!["--values".to_string()];
        tokens.extend(values.iter().map(|v| v.to_string()));
        let mut parser = ArgumentParser::new(
            std::iter::once("program".to_string()).chain(tokens.into_iter()),
        );
        parser
            .add_option(Optional::new("--values", "values", Kind::Integer).arity(arity))
            .unwrap();

        // Execute
        let outcome = parser.try_parse();

        // Verify
        assert_eq!(outcome, ParseOutcome::Success);
        assert_eq!(parser.get_all::<i64>("values").unwrap(), values);
    }

    #[test]
    fn run_help() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = ArgumentParser::new(argv(&["--help"]))
            .about("Sums numbers.")
            .with_interface(Box::new(sender));
        parser
            .add_argument(Positional::new("nums", Kind::Integer).arity(Arity::Variable))
            .unwrap();

        // Execute
        let result = parser.run();
        drop(parser);

        // Verify
        assert_eq!(result, Err(Response::Exit(0)));
        let message = receiver.consume_message();
        assert_contains!(message, "Sums numbers.\n\nusage:\n  program [{-h|--help}] nums...");
        assert_contains!(message, "Arguments\n  nums [integer,...]:");
    }

    #[test]
    fn run_error() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = ArgumentParser::new(argv(&["1", "x"])).with_interface(Box::new(sender));
        parser
            .add_argument(Positional::new("a", Kind::Integer))
            .unwrap()
            .add_argument(Positional::new("b", Kind::Integer))
            .unwrap();

        // Execute
        let result = parser.run();
        drop(parser);

        // Verify
        assert_eq!(result, Err(Response::Exit(1)));
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(
            error.unwrap(),
            r#"usage:
  program [{-h|--help}] a b
1 x
  ^

error: 'x' cannot convert to integer."#
        );
    }

    #[test]
    fn run_raise() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = ArgumentParser::new(argv(&[]))
            .help_on_error(false)
            .with_interface(Box::new(sender));
        parser
            .add_argument(Positional::new("a", Kind::Integer))
            .unwrap();

        // Execute
        let result = parser.run();
        drop(parser);

        // Verify
        assert_matches!(
            result,
            Err(Response::Raise(ParseError::InsufficientArguments { expected: 1, provided: 0, .. }))
        );
        assert_eq!(receiver.consume(), (None, None));
    }

    #[test]
    fn parse_success() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = ArgumentParser::new(argv(&["2"])).with_interface(Box::new(sender));
        parser
            .add_argument(Positional::new("a", Kind::Float))
            .unwrap();

        // Execute
        parser.parse().unwrap();
        let a = parser.get::<f64>("a").unwrap();
        drop(parser);

        // Verify
        assert_eq!(a, 2.0);
        assert_eq!(receiver.consume(), (None, None));
    }

    #[test]
    fn display_status() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = ArgumentParser::new(argv(&["-v", "3"])).with_interface(Box::new(sender));
        parser
            .add_option(Optional::switch("-v", "verbose"))
            .unwrap()
            .add_argument(Positional::new("level", Kind::Integer))
            .unwrap();
        parser.try_parse();

        // Execute
        parser.display_status();
        drop(parser);

        // Verify
        assert_eq!(
            receiver.consume_message(),
            r#"# input arguments: -v 3
# defined options: [{-h|--help}] [-v]
# named arguments: level
# parsed arguments:
    level: 3
    verbose: true"#
        );
    }

    #[test]
    fn usage_and_help() {
        // Setup
        let mut parser = ArgumentParser::new(argv(&[])).wrap_width(WrapWidth::Fixed(30));
        parser
            .add_option(
                Optional::new("--ratio", "ratio", Kind::Float)
                    .help("The quick brown fox jumps over the lazy dog."),
            )
            .unwrap();

        // Execute
        let usage = parser.usage();
        let help = parser.help();

        // Verify
        assert_eq!(usage, "program [{-h|--help}] [--ratio ratio]");
        assert_eq!(
            help,
            r#"usage:
  program [{-h|--help}] [--ratio ratio]

Options
  -h|--help:
        Show a help message
  --ratio [ratio:float]:
        The quick brown fox
        jumps over the lazy
        dog."#
        );
    }
}
