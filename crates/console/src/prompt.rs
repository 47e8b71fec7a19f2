use crate::error::ConsoleError;
use core_types::CoreError;
use std::io::{self, BufRead, Write};

/// Line-oriented prompts over any input/output pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Shows `label` and reads one line, trimmed.
    ///
    /// A line that is not UTF-8 (a Latin-1 terminal, say) is rejected as
    /// invalid input; the rest of the stream stays readable.
    pub fn ask(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8(raw).map_err(|_| {
            CoreError::InvalidInput(
                label.trim_end_matches([':', ' ']).to_string(),
                "the line is not valid UTF-8 text".to_string(),
            )
        })?;
        Ok(line.trim().to_string())
    }

    pub fn ask_parsed<T>(
        &mut self,
        label: &str,
        parse: impl FnOnce(&str) -> Result<T, CoreError>,
    ) -> Result<T, ConsoleError> {
        let raw = self.ask(label)?;
        Ok(parse(&raw)?)
    }
}
