//! Display capability used by the interactive session.
//!
//! All user-facing text goes through [`Screen`] so the session logic can run
//! against a recording screen in tests.

use std::io::{self, IsTerminal, Write};

/// Where prompts, diagnostics and reports are shown.
pub trait Screen {
    /// Write one line of text.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Clear the visible screen. May be a no-op.
    fn clear(&mut self) -> io::Result<()>;
}

/// Standard output screen.
///
/// Clearing emits ANSI escape codes, and only when stdout is a terminal and
/// clearing was requested.
pub struct StdoutScreen {
    clear_enabled: bool,
}

impl StdoutScreen {
    pub fn new(clear_enabled: bool) -> Self {
        Self {
            clear_enabled: clear_enabled && io::stdout().is_terminal(),
        }
    }
}

impl Screen for StdoutScreen {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.clear_enabled {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        // Erase display, then move the cursor home
        write!(out, "\x1B[2J\x1B[H")?;
        out.flush()
    }
}

/// Screen that records everything, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub lines: Vec<String>,
    pub clears: usize,
}

#[cfg(test)]
impl RecordingScreen {
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

#[cfg(test)]
impl Screen for RecordingScreen {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
