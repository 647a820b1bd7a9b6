//! Terminal UI implementations.

use std::io::Write;

use console::Term;

use super::theme::{should_use_colors, GapscanTheme};
use super::{OutputMode, UserInterface};

/// Styled terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: GapscanTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, honoring NO_COLOR and TTY detection.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GapscanTheme::new()
        } else {
            GapscanTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn result(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
            writeln!(self.term).ok();
        }
    }
}

/// Unstyled UI for non-TTY and CI environments.
///
/// Prints bare lines to stdout/stderr so output stays greppable in logs.
pub struct PlainUI {
    mode: OutputMode,
}

impl PlainUI {
    /// Create a new plain UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }

    fn result(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
            println!();
        }
    }
}

/// Create the appropriate UI for the current environment.
///
/// `plain` forces the unstyled implementation (used for `--no-color` and
/// non-TTY stdout).
pub fn create_ui(plain: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if plain || !should_use_colors() {
        Box::new(PlainUI::new(mode))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ui_reports_mode() {
        let ui = PlainUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn create_ui_plain_flag_forces_plain() {
        let ui = create_ui(true, OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }
}
