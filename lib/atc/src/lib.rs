pub use crate::aircraft::{Aircraft, FlightDetails, MAX_SPEED, MIN_DISPATCHERS};
pub use crate::dispatcher::{Dispatcher, MAX_POINTS, OFFSET_RANGE};
pub use crate::failure::TerminalFailure;

mod aircraft;
mod dispatcher;
mod failure;
