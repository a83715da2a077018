use std::io::{self, BufRead};
use crate::command::Command;

pub trait CommandSource {
    type Error;

    /// Block until the pilot gives a valid command.
    fn next_command(&mut self) -> Result<Command, Self::Error>;

    /// Read the answer to a prompt, `None` once the input is exhausted.
    fn read_argument(&mut self) -> Result<Option<String>, Self::Error>;
}

/// Commands typed one per line, from stdin or a script file.
pub struct LineReader<R>(R);

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader(reader)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.0.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_owned()))
    }
}

impl<R: BufRead> CommandSource for LineReader<R> {
    type Error = io::Error;

    fn next_command(&mut self) -> Result<Command, Self::Error> {
        loop {
            let Some(line) = self.read_line()? else {
                log::info!("end of input, leaving the flight");
                return Ok(Command::Exit);
            };
            if line.is_empty() {
                continue;
            }
            match line.parse() {
                Ok(command) => return Ok(command),
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    fn read_argument(&mut self) -> Result<Option<String>, Self::Error> {
        self.read_line()
    }
}
