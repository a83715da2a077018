use std::ops::RangeInclusive;
use rand::Rng;
use crate::aircraft::FlightDetails;
use crate::failure::TerminalFailure;

/// Range the per-dispatcher offset `N` is drawn from.
pub const OFFSET_RANGE: RangeInclusive<i32> = -200..=200;

/// Deviations (in meters) from the recommended altitude.
const CRASH_DEVIATION: i32 = 1000;
const HEAVY_FINE_DEVIATION: i32 = 600;
const LIGHT_FINE_DEVIATION: i32 = 300;

const HEAVY_FINE: u32 = 50;
const LIGHT_FINE: u32 = 25;
const OVERSPEED_FINE: u32 = 100;

/// A single dispatcher may not hand out more than this.
pub const MAX_POINTS: u32 = 1000;

/// An air traffic controller watching the aircraft.
///
/// Every dispatcher recommends an altitude of `7 * speed - N`, where `N` is
/// fixed when the dispatcher is created, and fines the pilot whenever the
/// aircraft strays too far from that recommendation.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    name: String,
    offset: i32,
    points: u32,
    recommended_altitude: i32,
    message: String,
}

impl Dispatcher {
    pub fn new(name: &str, offset: i32, speed: i32) -> Self {
        let mut dispatcher = Self {
            name: name.to_owned(),
            offset,
            points: 0,
            recommended_altitude: 0,
            message: String::new(),
        };
        dispatcher.recommend(speed);
        dispatcher
    }

    /// Create a dispatcher with an offset drawn from [`OFFSET_RANGE`].
    pub fn random<R: Rng>(name: &str, rng: &mut R, speed: i32) -> Self {
        Self::new(name, rng.random_range(OFFSET_RANGE), speed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn recommended_altitude(&self) -> i32 {
        self.recommended_altitude
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Judge the latest flight update.
    ///
    /// The altitude is compared against the recommendation made on the
    /// previous update, only then is a new recommendation computed.
    pub fn check_flight(&mut self, flight: &FlightDetails) -> Result<(), TerminalFailure> {
        let deviation = (flight.altitude - self.recommended_altitude).abs();
        if deviation > CRASH_DEVIATION {
            return Err(self.crash(TerminalFailure::IgnoredInstructions {
                dispatcher: self.name.clone(),
            }));
        } else if deviation >= HEAVY_FINE_DEVIATION {
            self.add_points(HEAVY_FINE)?;
            self.message = format!("Fine {} points", HEAVY_FINE);
        } else if deviation >= LIGHT_FINE_DEVIATION {
            self.add_points(LIGHT_FINE)?;
            self.message = format!("Fine {} points", LIGHT_FINE);
        } else {
            self.message = String::from("Normal flight");
        }

        if flight.overspeed {
            self.add_points(OVERSPEED_FINE)?;
            self.message = String::from("Slow down!");
        }

        if flight.speed == 0 && flight.altitude > 0 {
            return Err(self.crash(TerminalFailure::SpeedResetAirborne));
        }

        log::debug!(
            "{}: deviation {} m, {} points, {}",
            self.name, deviation, self.points, self.message
        );
        self.recommend(flight.speed);
        Ok(())
    }

    fn recommend(&mut self, speed: i32) {
        self.recommended_altitude = (7 * speed - self.offset).max(0);
    }

    fn add_points(&mut self, points: u32) -> Result<(), TerminalFailure> {
        self.points += points;
        if self.points >= MAX_POINTS {
            self.message = String::from("Unfit to fly");
            return Err(TerminalFailure::UnfitPilot { dispatcher: self.name.clone() });
        }
        Ok(())
    }

    fn crash(&mut self, failure: TerminalFailure) -> TerminalFailure {
        self.message = String::from("The plane crashed");
        failure
    }
}
