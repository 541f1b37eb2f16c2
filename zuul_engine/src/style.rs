//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn health_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().bold().underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(150, 230, 30)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn health_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255).bold()
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn health_style(&self) -> ColoredString {
        self.as_str().health_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary paragraphs at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(100))
}

/// Wrapping options for list entries, indented under a heading.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("      ")
}
