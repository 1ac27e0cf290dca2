use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// What the caller of `respond` must do next.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Response {
    /// Terminate the process with this exit code.
    Exit(i32),
    /// Hand the error back to the host.
    Raise(ParseError),
}

/// Carry out the effects of a parse: print the help or the error, and decide how the parse concludes.
///
/// `HelpRequested` prints the full help and exits with `0`.
/// `Failed` prints the usage and error context and exits with `1` when `help_on_error` is set, otherwise it is raised.
pub(crate) fn respond(
    outcome: ParseOutcome,
    printer: &Printer,
    tokens: &[String],
    settings: &ParseSettings,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), Response> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Responding to {outcome:?} with {settings:?}.");
    }

    match outcome {
        ParseOutcome::Success => Ok(()),
        ParseOutcome::HelpRequested => {
            printer.print_help(user_interface);
            Err(Response::Exit(0))
        }
        ParseOutcome::Failed(error) => {
            if settings.help_on_error {
                printer.print_error(&error, tokens, user_interface);
                Err(Response::Exit(1))
            } else {
                Err(Response::Raise(error))
            }
        }
    }
}
