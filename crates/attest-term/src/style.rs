//! ANSI styling table for terminal output
//!
//! Each variant carries the standard SGR code it renders as, so callers can
//! reason about output in terms of the escape sequences that reach the
//! terminal. Rendering goes through `colored`, which also honors `NO_COLOR`
//! and the global override used to disable styling in tests.

use colored::{ColoredString, Colorize};

/// A terminal style, one per supported SGR code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset = 0,
    Bright = 1,
    Dim = 2,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Hidden = 8,
    FgBlack = 30,
    FgRed = 31,
    FgGreen = 32,
    FgYellow = 33,
    FgBlue = 34,
    FgMagenta = 35,
    FgCyan = 36,
    FgWhite = 37,
    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgWhite = 47,
}

impl Style {
    /// The SGR code this style renders as.
    pub fn code(self) -> u8 {
        self as u8
    }

    fn apply(self, text: ColoredString) -> ColoredString {
        match self {
            Style::Reset => text.clear(),
            Style::Bright => text.bold(),
            Style::Dim => text.dimmed(),
            Style::Underline => text.underline(),
            Style::Blink => text.blink(),
            Style::Reverse => text.reversed(),
            Style::Hidden => text.hidden(),
            Style::FgBlack => text.black(),
            Style::FgRed => text.red(),
            Style::FgGreen => text.green(),
            Style::FgYellow => text.yellow(),
            Style::FgBlue => text.blue(),
            Style::FgMagenta => text.magenta(),
            Style::FgCyan => text.cyan(),
            Style::FgWhite => text.white(),
            Style::BgBlack => text.on_black(),
            Style::BgRed => text.on_red(),
            Style::BgGreen => text.on_green(),
            Style::BgYellow => text.on_yellow(),
            Style::BgBlue => text.on_blue(),
            Style::BgMagenta => text.on_magenta(),
            Style::BgCyan => text.on_cyan(),
            Style::BgWhite => text.on_white(),
        }
    }
}

/// Apply `styles` to `text` in order.
pub(crate) fn stylize(text: &str, styles: &[Style]) -> ColoredString {
    styles.iter().fold(text.normal(), |out, style| style.apply(out))
}
