//! Read-eval-print loop
//!
//! Each iteration redraws the listing of the working directory, shows the
//! command summary, reads one line and runs it. Errors are printed and the
//! loop continues; only `quit` or end of input stops it.

use anyhow::Result;
use filenav::{COMMAND_SUMMARY, Session};
use std::io::Write;

/// Prompt shown before each command.
const PROMPT: &str = "> ";

/// One read from the terminal.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C: drop the current line and redraw.
    Interrupted,
    /// Ctrl-D or closed stdin.
    Eof,
}

/// Source of command lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Run the explorer loop until `quit` or end of input.
pub fn run(session: &mut Session, input: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
    loop {
        match session.listing() {
            Ok(listing) => write!(out, "{}", listing)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
        writeln!(out, "\n{}", COMMAND_SUMMARY)?;
        out.flush()?;

        let line = match input.read_line(PROMPT)? {
            Input::Line(line) => line,
            Input::Interrupted => continue,
            Input::Eof => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
        };

        match session.exec(&line) {
            Ok(result) => {
                write!(out, "{}", result.stdout)?;
                if result.exit {
                    return Ok(());
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        writeln!(out)?;
    }
}

/// Line reader for the attached terminal.
pub fn terminal_input() -> Result<Box<dyn LineReader>> {
    #[cfg(feature = "interactive")]
    {
        Ok(Box::new(editor::EditorReader::new()?))
    }
    #[cfg(not(feature = "interactive"))]
    {
        Ok(Box::new(StdinReader))
    }
}

#[cfg(feature = "interactive")]
mod editor {
    use super::{Input, LineReader};
    use anyhow::Result;
    use rustyline::DefaultEditor;
    use rustyline::error::ReadlineError;

    /// Line editing with in-memory history.
    pub struct EditorReader {
        editor: DefaultEditor,
    }

    impl EditorReader {
        pub fn new() -> Result<Self> {
            Ok(Self {
                editor: DefaultEditor::new()?,
            })
        }
    }

    impl LineReader for EditorReader {
        fn read_line(&mut self, prompt: &str) -> Result<Input> {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }
                    Ok(Input::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
                Err(ReadlineError::Eof) => Ok(Input::Eof),
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Plain line reader over standard input.
#[cfg(not(feature = "interactive"))]
pub struct StdinReader;

#[cfg(not(feature = "interactive"))]
impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        Ok(Input::Line(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
