//! Line-oriented input and output boundary.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where commands come from and narration goes.
pub trait Console {
    /// Read one line of input. `None` means the input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line of narration.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over the process's stdin and stdout, with a `> ` prompt.
#[derive(Debug, Default)]
pub struct StdConsole {
    buffer: String,
}

impl StdConsole {
    /// A console on stdin and stdout.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "> ")?;
        stdout.flush()?;

        self.buffer.clear();
        if io::stdin().lock().read_line(&mut self.buffer)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(self.buffer.trim_end().to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

/// Console that replays queued input and records every line written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// A console that will answer reads with `lines`, then report end of input.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything written so far, joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not yet consumed.
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_and_records() {
        let mut console = ScriptedConsole::new(["look", "quit"]);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("look"));
        console.write_line("first").unwrap();
        console.write_line("second").unwrap();
        assert_eq!(console.pending(), 1);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("quit"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.transcript(), "first\nsecond");
    }
}
