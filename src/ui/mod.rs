//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal usage
//! - [`PlainUI`] for non-TTY/CI environments
//! - [`Table`] for box-drawing table output
//!
//! # Example
//!
//! ```
//! use gapscan::ui::{create_ui, OutputMode};
//!
//! // Plain mode is the testable path
//! let mut ui = create_ui(true, OutputMode::Quiet);
//! ui.show_header("gapscan");
//! ui.success("no gaps found");
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::{Align, Table};
pub use terminal::{create_ui, PlainUI, TerminalUI};
pub use theme::{should_use_colors, GapscanTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests via [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message. Suppressed in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a verbose-only detail line.
    fn detail(&mut self, msg: &str);

    /// Display primary command output. Never suppressed: this is the
    /// product of the command (a report, a listing), not commentary.
    fn result(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
