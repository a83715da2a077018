use std::io::{self, Write};
use chrono::{DateTime, Utc};
use atc::{Aircraft, TerminalFailure, MIN_DISPATCHERS};
use crate::command::{dispatcher_number, Command};
use crate::command_source::CommandSource;
use crate::screen::Screen;

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The pilot left before landing.
    Exited,
    Landed,
    Failed(TerminalFailure),
}

#[derive(Clone, Debug)]
pub struct Report {
    pub outcome: Outcome,
    pub total_points: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// What a single command did to the flight.
enum Step {
    Continue,
    Exit,
}

pub struct Session<S, W> {
    aircraft: Aircraft,
    source: S,
    screen: Screen<W>,
}

impl<S, W> Session<S, W>
where
    S: CommandSource<Error = io::Error>,
    W: Write,
{
    pub fn new(aircraft: Aircraft, source: S, screen: Screen<W>) -> Self {
        Session { aircraft, source, screen }
    }

    #[cfg(test)]
    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen<W> {
        &self.screen
    }

    /// Fly until the aircraft lands, crashes or the pilot leaves.
    pub fn run(&mut self, names: &[String]) -> io::Result<Report> {
        let started_at = Utc::now();
        self.start(names)?;
        let outcome = self.fly()?;

        let report = Report {
            outcome,
            total_points: self.aircraft.total_points(),
            started_at,
            finished_at: Utc::now(),
        };
        log::info!("flight over: {:?}, {} penalty points", report.outcome, report.total_points);
        self.screen.outcome(&report)?;
        Ok(report)
    }

    /// Staff the aircraft with the minimum number of dispatchers, asking for
    /// the names not given up front.
    fn start(&mut self, names: &[String]) -> io::Result<()> {
        self.screen.welcome()?;
        let mut names = names.iter();
        for n in self.aircraft.dispatchers().len()..MIN_DISPATCHERS {
            let name = match names.next() {
                Some(name) => name.clone(),
                None => {
                    let ordinal = if n == 0 { "first" } else { "second" };
                    self.screen
                        .prompt(&format!("Enter the name of the {} dispatcher: ", ordinal))?;
                    self.source
                        .read_argument()?
                        .unwrap_or_else(|| format!("Dispatcher {}", n + 1))
                }
            };
            self.aircraft.add_dispatcher(&name);
        }
        self.screen.flight_info(&mut self.aircraft)
    }

    fn fly(&mut self) -> io::Result<Outcome> {
        loop {
            let command = self.source.next_command()?;
            log::debug!("command {:?}", command);

            match self.apply(command)? {
                Ok(Step::Exit) => return Ok(Outcome::Exited),
                Ok(Step::Continue) => {}
                Err(failure) => {
                    self.screen.flight_info(&mut self.aircraft)?;
                    return Ok(Outcome::Failed(failure));
                }
            }

            self.screen.flight_info(&mut self.aircraft)?;
            if self.aircraft.landed() {
                return Ok(Outcome::Landed);
            }
        }
    }

    fn apply(&mut self, command: Command) -> io::Result<Result<Step, TerminalFailure>> {
        if let Some(delta) = command.speed_delta() {
            return Ok(self.aircraft.set_speed(delta).map(|_| Step::Continue));
        }
        if let Some(delta) = command.altitude_delta() {
            return Ok(self.aircraft.set_altitude(delta).map(|_| Step::Continue));
        }

        match command {
            Command::AddDispatcher(name) => {
                let name = match name {
                    Some(name) => name,
                    None => {
                        self.screen.prompt("Enter the name of the new dispatcher: ")?;
                        self.source.read_argument()?.unwrap_or_default()
                    }
                };
                self.aircraft.add_dispatcher(&name);
            }
            Command::RemoveDispatcher(number) => {
                let number = match number {
                    Some(number) => number,
                    None => {
                        self.screen
                            .prompt("Enter the number of the dispatcher to be deleted: ")?;
                        self.source.read_argument()?.unwrap_or_default()
                    }
                };
                self.aircraft.remove_dispatcher(dispatcher_number(&number));
            }
            Command::Exit => return Ok(Ok(Step::Exit)),
            _ => {}
        }
        Ok(Ok(Step::Continue))
    }
}
