use terminal_size::{terminal_size, Width};

use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

/// The column width that help descriptions are wrapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapWidth {
    /// Wrap at precisely this many columns.
    Fixed(usize),
    /// Wrap at the width of the attached terminal, or 80 columns when there isn't one.
    Terminal,
}

impl Default for WrapWidth {
    fn default() -> Self {
        WrapWidth::Fixed(DEFAULT_WRAP_WIDTH)
    }
}

impl WrapWidth {
    pub(crate) fn resolve(&self) -> TotalWidth {
        let width = match self {
            WrapWidth::Fixed(width) => *width,
            WrapWidth::Terminal => match terminal_size() {
                Some((Width(terminal_width), _)) => terminal_width as usize,
                None => DEFAULT_WRAP_WIDTH,
            },
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Wrap width {:?} resolves to {width} columns.", self);
        }

        TotalWidth(width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TotalWidth(pub usize);

/// Renders a description as an indented block, word wrapped to the total width.
#[derive(Debug)]
pub(crate) struct DescriptionRenderer {
    text_width: usize,
}

impl DescriptionRenderer {
    pub(crate) fn new(total_width: TotalWidth) -> Self {
        Self {
            text_width: std::cmp::max(
                total_width.0.saturating_sub(DESCRIPTION_INDENT),
                MINIMUM_TEXT_WIDTH,
            ),
        }
    }

    pub(crate) fn render(&self, description: &str) -> Vec<String> {
        description
            .lines()
            .flat_map(|paragraph| chunk(paragraph, self.text_width))
            .map(|line| format!("{:indent$}{line}", "", indent = DESCRIPTION_INDENT))
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // Leave room for the hyphen.
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
