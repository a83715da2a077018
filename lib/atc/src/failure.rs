use std::fmt;

/// An unrecoverable condition that ends the flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalFailure {
    /// The altitude drifted more than 1000 m away from a recommendation.
    IgnoredInstructions { dispatcher: String },
    /// The speed dropped to zero while the aircraft was still in the air.
    SpeedResetAirborne,
    /// A single dispatcher handed out 1000 penalty points.
    UnfitPilot { dispatcher: String },
}

impl fmt::Display for TerminalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredInstructions { dispatcher } => write!(
                f,
                "The plane crashed, because the pilot ignored the instructions of the dispatcher {}.",
                dispatcher
            ),
            Self::SpeedResetAirborne => write!(
                f,
                "The plane crashed, because the speed was reset to 0 while airborne."
            ),
            Self::UnfitPilot { dispatcher } => write!(
                f,
                "The pilot is not suitable for flying, because scored 1000 penalty points from the dispatcher {}.",
                dispatcher
            ),
        }
    }
}

impl std::error::Error for TerminalFailure {}
