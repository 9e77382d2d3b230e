//! Colored terminal output for CLI commands.
//!
//! Uses `termcolor` for cross-platform colored terminal output.
//! Respects `NO_COLOR` environment variable and `--color` flag.

use depswitch::ResolvedDependency;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ if std::io::stdout().is_terminal() => ColorChoice::Auto,
        _ => ColorChoice::Never,
    }
}

/// Styled output writer for terminal.
pub struct StyledOutput {
    stdout: StandardStream,
}

impl StyledOutput {
    /// Create a new styled output with the given color choice.
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Write text with a specific color and style.
    pub fn write_styled(&mut self, text: &str, color: Option<Color>, bold: bool) {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        let _ = self.stdout.set_color(&spec);
        let _ = write!(self.stdout, "{}", text);
        let _ = self.stdout.reset();
    }

    /// Yellow bold text followed by a newline.
    pub fn warning(&mut self, text: &str) {
        self.write_styled(text, Some(Color::Yellow), true);
        self.newline();
    }

    /// Bold text followed by a newline.
    pub fn heading(&mut self, text: &str) {
        self.write_styled(text, None, true);
        self.newline();
    }

    /// Plain text (no color).
    pub fn plain(&mut self, text: &str) {
        let _ = write!(self.stdout, "{}", text);
    }

    /// Plain text followed by a newline.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.stdout, "{}", text);
    }

    /// Newline.
    pub fn newline(&mut self) {
        let _ = writeln!(self.stdout);
    }

    /// One resolution result: `name  source  reference`.
    pub fn resolution(&mut self, name: &str, width: usize, dependency: &ResolvedDependency) {
        self.plain(&format!("{:<width$}  ", name, width = width));

        let color = if dependency.is_local() {
            Color::Green
        } else {
            Color::Yellow
        };
        self.write_styled(&format!("{:<6}", dependency.source()), Some(color), true);
        self.plain("  ");

        if dependency.reference().is_empty() {
            self.write_styled("(no coordinate)", Some(Color::Red), false);
        } else {
            self.plain(dependency.reference());
        }
        self.newline();
    }
}
