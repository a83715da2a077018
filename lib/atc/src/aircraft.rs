use rand::{rngs::StdRng, SeedableRng};
use crate::dispatcher::Dispatcher;
use crate::failure::TerminalFailure;

/// Hard ceiling for the speed, in km/h.
pub const MAX_SPEED: i32 = 1000;

/// Dispatchers that must stay attached once the flight started.
pub const MIN_DISPATCHERS: usize = 2;

/// What every dispatcher gets to see after a speed or altitude change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlightDetails {
    pub speed: i32,
    pub altitude: i32,
    /// The last speed change asked for more than [`MAX_SPEED`].
    pub overspeed: bool,
}

/// The one aircraft being flown, along with the dispatchers watching it.
#[derive(Debug)]
pub struct Aircraft {
    speed: i32,
    altitude: i32,
    reached_max_speed: bool,
    landed: bool,
    message: String,
    dispatchers: Vec<Dispatcher>,
    points_from_removed: u32,
    rng: StdRng,
}

impl Aircraft {
    pub fn new(rng: StdRng) -> Self {
        Self {
            speed: 0,
            altitude: 0,
            reached_max_speed: false,
            landed: false,
            message: String::from("To start the flight, increase the speed and altitude."),
            dispatchers: Vec::with_capacity(MIN_DISPATCHERS),
            points_from_removed: 0,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn altitude(&self) -> i32 {
        self.altitude
    }

    pub fn reached_max_speed(&self) -> bool {
        self.reached_max_speed
    }

    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hand the pilot message over to whoever displays it, clearing it.
    pub fn take_message(&mut self) -> String {
        std::mem::take(&mut self.message)
    }

    pub fn dispatchers(&self) -> &[Dispatcher] {
        &self.dispatchers
    }

    pub fn points_from_removed(&self) -> u32 {
        self.points_from_removed
    }

    /// Penalty points of the whole flight, removed dispatchers included.
    pub fn total_points(&self) -> u32 {
        self.dispatchers.iter().map(Dispatcher::points).sum::<u32>() + self.points_from_removed
    }

    pub fn set_speed(&mut self, delta: i32) -> Result<(), TerminalFailure> {
        let requested = self.speed.saturating_add(delta);
        if requested >= MAX_SPEED {
            self.speed = MAX_SPEED;
            self.reached_max_speed = true;
            self.message =
                String::from("The maximum speed was fixed. You can begin to decline and landing.");
        } else {
            self.speed = requested.max(0);
        }

        let overspeed = requested > MAX_SPEED;
        self.report(overspeed)?;
        if overspeed {
            self.message = format!(
                "The maximum speed of the aircraft is {} km/h! You can begin to decline and landing.",
                MAX_SPEED
            );
        }

        self.check_if_landed();
        Ok(())
    }

    pub fn set_altitude(&mut self, delta: i32) -> Result<(), TerminalFailure> {
        if self.speed > 0 {
            self.altitude = self.altitude.saturating_add(delta).max(0);
        } else {
            log::warn!("altitude change of {} m refused at zero speed", delta);
            self.message = String::from("Unable to change the altitude at zero speed.");
        }

        self.report(false)?;

        self.check_if_landed();
        Ok(())
    }

    /// Attach a new dispatcher with a random offset.
    pub fn add_dispatcher(&mut self, name: &str) {
        let dispatcher = Dispatcher::random(name, &mut self.rng, self.speed);
        self.attach(dispatcher);
    }

    pub fn attach(&mut self, dispatcher: Dispatcher) {
        log::info!(
            "dispatcher {} attached (offset {})",
            dispatcher.name(),
            dispatcher.offset()
        );
        self.dispatchers.push(dispatcher);
    }

    /// Detach the dispatcher with the given 1-based number.
    ///
    /// Refused while only [`MIN_DISPATCHERS`] are attached or when the
    /// number is out of range. The points of a removed dispatcher are kept.
    pub fn remove_dispatcher(&mut self, number: usize) -> Option<Dispatcher> {
        if self.dispatchers.len() <= MIN_DISPATCHERS {
            log::warn!("refusing to go below {} dispatchers", MIN_DISPATCHERS);
            self.message = format!(
                "The aircraft must be controlled by a minimum of {} dispatchers!",
                MIN_DISPATCHERS
            );
            return None;
        }

        if number == 0 || number > self.dispatchers.len() {
            log::warn!("no dispatcher number {}", number);
            self.message = String::from("Invalid dispatcher number.");
            return None;
        }

        let dispatcher = self.dispatchers.remove(number - 1);
        self.points_from_removed += dispatcher.points();
        log::info!(
            "dispatcher {} detached with {} points",
            dispatcher.name(),
            dispatcher.points()
        );
        Some(dispatcher)
    }

    /// Let every dispatcher, in order, judge the current state.
    ///
    /// Stops at the first terminal failure, the remaining dispatchers are
    /// not consulted for this update.
    fn report(&mut self, overspeed: bool) -> Result<(), TerminalFailure> {
        let details = FlightDetails {
            speed: self.speed,
            altitude: self.altitude,
            overspeed,
        };
        log::debug!("reporting {:?} to {} dispatchers", details, self.dispatchers.len());

        for dispatcher in self.dispatchers.iter_mut() {
            if let Err(failure) = dispatcher.check_flight(&details) {
                log::error!("{}", failure);
                return Err(failure);
            }
        }
        Ok(())
    }

    fn check_if_landed(&mut self) {
        if self.speed == 0 && self.altitude == 0 && self.reached_max_speed && !self.landed {
            log::info!("aircraft landed");
            self.landed = true;
        }
    }
}
