use std::io::{self, Write};
use chrono::{DateTime, Utc};
use atc::Aircraft;
use crate::session::{Outcome, Report};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE: &str =
    "------------------------------------------------------------------------------------------------";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

fn date_to_string(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Everything the pilot sees.
pub struct Screen<W> {
    out: W,
    ansi: bool,
}

impl<W: Write> Screen<W> {
    /// `ansi` enables colours and clearing between frames.
    pub fn new(out: W, ansi: bool) -> Self {
        Screen { out, ansi }
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.ansi {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_owned()
        }
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nWelcome to the flight simulator pilot.\n")
    }

    pub fn prompt(&mut self, question: &str) -> io::Result<()> {
        write!(self.out, "{}", question)?;
        self.out.flush()
    }

    /// Draw the whole panel, handing over the pilot message.
    pub fn flight_info(&mut self, aircraft: &mut Aircraft) -> io::Result<()> {
        if self.ansi {
            write!(self.out, "{}", CLEAR)?;
        }
        writeln!(self.out, "-------------------------------To control, type one of the following:--------------------------")?;
        writeln!(self.out, "      REDUCE SPEED:     |      INCREASE SPEED:     |  DECREASE ALTITUDE:    |  INCREASE ALTITUDE:   ")?;
        writeln!(self.out, "   left  <  by 50 km/h  |   right  >  by 50 km/h   |   down  v  by 250 m    |    up  ^  by 250 m    ")?;
        writeln!(self.out, "ctrl+left << by 150 km/h| ctrl+right >> by 150 km/h| ctrl+down vv by 500 m  | ctrl+up ^^ by 500 m   ")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "  a [name] - add dispatcher     r [number] - remove dispatcher     esc - exit")?;
        writeln!(self.out, "{}\n", RULE)?;

        let flight = format!(
            "                FLIGHT SPEED: {:4} km/h           FLIGHT ALTITUDE: {:5} m",
            aircraft.speed(),
            aircraft.altitude()
        );
        let flight = self.paint(GREEN, &flight);
        writeln!(self.out, "{}\n", flight)?;
        writeln!(self.out, "{}", RULE)?;
        let message = self.paint(RED, &aircraft.take_message());
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, "{}\n", RULE)?;

        for (i, dispatcher) in aircraft.dispatchers().iter().enumerate() {
            writeln!(
                self.out,
                "Dispatcher {:2}: {:<10} | Penalty points: {:4} | Recommended altitude: {:5} m | {}",
                i + 1,
                dispatcher.name(),
                dispatcher.points(),
                dispatcher.recommended_altitude(),
                dispatcher.message()
            )?;
        }
        writeln!(self.out, "\nTotal penalty points: {}\n", aircraft.total_points())?;
        self.out.flush()
    }

    pub fn outcome(&mut self, report: &Report) -> io::Result<()> {
        match &report.outcome {
            Outcome::Exited => writeln!(self.out, "The flight is not completed.")?,
            Outcome::Landed => {
                let text = self.paint(GREEN, "Flight completed successfully!");
                writeln!(self.out, "{}", text)?;
            }
            Outcome::Failed(failure) => {
                let text = self.paint(RED, &format!("{}\nFlight failed.", failure));
                writeln!(self.out, "{}", text)?;
            }
        }

        writeln!(
            self.out,
            "Take-off: {}  Finished: {}  Duration: {} s",
            date_to_string(&report.started_at),
            date_to_string(&report.finished_at),
            (report.finished_at - report.started_at).num_seconds()
        )?;
        writeln!(self.out, "Total penalty points: {}\n", report.total_points)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use atc::Dispatcher;

    fn render(ansi: bool, aircraft: &mut Aircraft) -> String {
        let mut screen = Screen::new(Vec::new(), ansi);
        screen.flight_info(aircraft).unwrap();
        String::from_utf8(screen.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_flight_info_rows() {
        let mut aircraft = Aircraft::with_seed(3);
        aircraft.attach(Dispatcher::new("Kerry", 100, 0));
        aircraft.attach(Dispatcher::new("Sam", -100, 0));
        aircraft.set_speed(50).unwrap();

        let out = render(false, &mut aircraft);
        assert!(out.contains("FLIGHT SPEED:   50 km/h"));
        assert!(out.contains("FLIGHT ALTITUDE:     0 m"));
        assert!(out.contains(
            "Dispatcher  1: Kerry      | Penalty points:    0 | Recommended altitude:   250 m | Normal flight"
        ));
        assert!(out.contains("Dispatcher  2: Sam        |"));
        assert!(out.contains("Recommended altitude:   450 m"));
        assert!(out.contains("Total penalty points: 0"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_message_shown_once() {
        let mut aircraft = Aircraft::with_seed(3);
        aircraft.attach(Dispatcher::new("A", 0, 0));
        aircraft.attach(Dispatcher::new("B", 0, 0));

        let first = render(false, &mut aircraft);
        assert!(first.contains("To start the flight, increase the speed and altitude."));
        let second = render(false, &mut aircraft);
        assert!(!second.contains("To start the flight"));
    }

    #[test]
    fn test_ansi_colours() {
        let mut aircraft = Aircraft::with_seed(3);
        let out = render(true, &mut aircraft);
        assert!(out.starts_with(CLEAR));
        assert!(out.contains(GREEN));
    }

    #[test]
    fn test_date_format() {
        let dt = DateTime::parse_from_rfc3339("2024-05-01T10:20:30Z").unwrap().with_timezone(&Utc);
        assert_eq!("2024-05-01 10:20:30", date_to_string(&dt));
    }
}
