//! Line-oriented console abstraction.
//!
//! The game only ever prints whole lines and reads whole lines, so the seam is
//! two methods. `LineConsole` adapts any reader/writer pair; the CLI hands it
//! locked stdin/stdout and tests hand it a `Cursor` and a `Vec<u8>`.

use std::io::{self, BufRead, Write};

use crate::error::SessionError;

/// Where the game prints to and reads answers from.
pub trait Console {
    /// Print one line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print `prompt` without a trailing newline and read one line of input.
    ///
    /// Returns `None` at end of input. The returned line has its line
    /// terminator stripped but is otherwise untouched.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`Console`] over a buffered reader and a writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Width of banners and horizontal rules.
pub const RULE_WIDTH: usize = 50;

/// A horizontal rule of `ch`.
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Print `title` centred between two `=` rules.
pub fn banner<C: Console + ?Sized>(console: &mut C, title: &str) -> io::Result<()> {
    console.say(&rule('='))?;
    console.say(&format!("{title:^width$}", width = RULE_WIDTH))?;
    console.say(&rule('='))
}

/// Ask a yes/no question until the answer is one of y, yes, n, no.
pub fn ask_yes_no<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<bool, SessionError> {
    let full_prompt = format!("{prompt} (y/n): ");
    loop {
        let answer = console
            .ask(&full_prompt)?
            .ok_or(SessionError::InputClosed)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => console.say("Please type y or n.")?,
        }
    }
}
