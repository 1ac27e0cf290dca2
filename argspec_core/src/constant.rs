pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_LONG: &str = "--help";
pub(crate) const HELP_MESSAGE: &str = "Show a help message";

// The description block of the explanation.
pub(crate) const DEFAULT_WRAP_WIDTH: usize = 80;
pub(crate) const DESCRIPTION_INDENT: usize = 8;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_TEXT_WIDTH: usize = 17;
