use super::View;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::warn;

/// Terminal front end: prompts on stdout, reads lines from stdin.
///
/// Generic over the streams so other line-based transports can reuse it.
/// Input bytes that are not valid UTF-8 are replaced rather than ending the
/// session.
#[derive(Debug)]
pub struct ConsoleView<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn show_message(&mut self, message: &str) {
        self.write_line(message);
    }

    fn get_input(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            warn!("Failed to write prompt: {}", e);
        }

        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&line).into_owned()),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn display_contacts(&mut self, contacts: &str) {
        self.write_line(contacts);
    }

    fn display_help(&mut self, commands: &str) {
        self.write_line(commands);
    }
}
