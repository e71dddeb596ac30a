//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn image_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn image_style(&self) -> ColoredString {
        let bracketed = format!("[image: {self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn title_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn image_style(&self) -> ColoredString {
        self.as_str().image_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_style_brackets_the_name() {
        colored::control::set_override(false);
        assert_eq!("outside.gif".image_style().to_string(), "[image: outside.gif]");
        assert_eq!(String::from("no color").error_style().to_string(), "no color");
        colored::control::unset_override();
    }
}
