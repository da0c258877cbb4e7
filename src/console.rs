//! Operator console.

use std::io::{BufRead, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Width of the text inside a boxed banner.
const BANNER_WIDTH: usize = 21;

/// Screen titles, shown boxed at the top of a cleared screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Menu,
    Lights,
    TurnOn,
    TurnOff,
    Goodbye,
    Error,
}

impl Banner {
    /// The title padded to the box width. Odd padding leans left.
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Menu => "         MENU        ",
            Banner::Lights => "        LIGHTS       ",
            Banner::TurnOn => "   TURN ON LIGHTS    ",
            Banner::TurnOff => "   TURN OFF LIGHTS   ",
            Banner::Goodbye => "      GOODBYE!       ",
            Banner::Error => "        ERROR        ",
        }
    }
}

/// Line-oriented operator I/O.
///
/// Reading blocks until the operator answers; there is no timeout.
pub trait Console {
    /// Clear the screen.
    fn clear(&mut self);

    fn print(&mut self, line: &str);

    fn error(&mut self, line: &str);

    /// Show `prompt` and read one line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Wait for the operator to acknowledge.
    fn pause(&mut self) {
        self.read_line("\nPress any key to continue...");
    }

    /// Clear the screen and show a boxed title.
    fn banner(&mut self, banner: Banner) {
        self.clear();
        for line in boxed(banner) {
            self.print(&line);
        }
    }
}

/// The three lines of a rounded box around `banner`.
pub fn boxed(banner: Banner) -> [String; 3] {
    let edge = "─".repeat(BANNER_WIDTH);
    [
        format!("╭{edge}╮"),
        format!("│{}│", banner.text()),
        format!("╰{edge}╯"),
    ]
}

/// A [`Console`] over any reader and pair of writers.
///
/// Write failures are ignored; there is nowhere left to report them.
pub struct Terminal<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Terminal {
            input,
            output,
            errors,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }
}

impl<R: BufRead, W: Write, E: Write> Console for Terminal<R, W, E> {
    fn clear(&mut self) {
        let _ = self
            .output
            .queue(Clear(ClearType::All))
            .and_then(|out| out.queue(MoveTo(0, 0)));
        let _ = self.output.flush();
    }

    fn print(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    fn error(&mut self, line: &str) {
        let _ = self.output.flush();
        let _ = writeln!(self.errors, "{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_boxed() {
        assert_eq!(
            boxed(Banner::Menu),
            [
                "╭─────────────────────╮".to_string(),
                "│         MENU        │".to_string(),
                "╰─────────────────────╯".to_string(),
            ]
        );
        assert_eq!(boxed(Banner::Lights)[1], "│        LIGHTS       │");
        assert_eq!(boxed(Banner::TurnOn)[1], "│   TURN ON LIGHTS    │");
        assert_eq!(boxed(Banner::TurnOff)[1], "│   TURN OFF LIGHTS   │");
        assert_eq!(boxed(Banner::Goodbye)[1], "│      GOODBYE!       │");
        assert_eq!(boxed(Banner::Error)[1], "│        ERROR        │");
    }

    #[test]
    fn test_banner_texts_fill_the_box() {
        for banner in [
            Banner::Menu,
            Banner::Lights,
            Banner::TurnOn,
            Banner::TurnOff,
            Banner::Goodbye,
            Banner::Error,
        ] {
            assert_eq!(banner.text().chars().count(), BANNER_WIDTH, "{banner:?}");
        }
    }

    #[test]
    fn test_banner_clears_screen_first() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new(), Vec::new());
        term.banner(Banner::Goodbye);
        let out = String::from_utf8(term.output().clone()).unwrap();
        assert!(out.starts_with("\x1B[2J\x1B[1;1H"));
        assert!(out.ends_with("╰─────────────────────╯\n"));
    }

    #[test]
    fn test_read_line() {
        let mut term = Terminal::new(Cursor::new("1\r\n\n"), Vec::new(), Vec::new());
        assert_eq!(term.read_line("Command » ").as_deref(), Some("1"));
        assert_eq!(term.read_line("again: ").as_deref(), Some(""));
        assert_eq!(term.read_line("eof: "), None);
        assert_eq!(
            String::from_utf8(term.output().clone()).unwrap(),
            "Command » again: eof: "
        );
    }

    #[test]
    fn test_error_goes_to_error_stream() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new(), Vec::new());
        term.error("boom");
        assert!(term.output().is_empty());
        assert_eq!(term.errors().as_slice(), b"boom\n");
    }
}
