use std::{fmt, str::FromStr};

/// Everything the pilot can ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SpeedUpFast,
    SpeedDown,
    SpeedDownFast,
    AltitudeUp,
    AltitudeUpFast,
    AltitudeDown,
    AltitudeDownFast,
    /// Name of the new dispatcher, asked for when missing.
    AddDispatcher(Option<String>),
    /// 1-based number of the dispatcher, asked for when missing.
    RemoveDispatcher(Option<String>),
    Exit,
}

impl Command {
    /// Speed change in km/h.
    pub fn speed_delta(&self) -> Option<i32> {
        match self {
            Command::SpeedUp => Some(50),
            Command::SpeedUpFast => Some(150),
            Command::SpeedDown => Some(-50),
            Command::SpeedDownFast => Some(-150),
            _ => None,
        }
    }

    /// Altitude change in meters.
    pub fn altitude_delta(&self) -> Option<i32> {
        match self {
            Command::AltitudeUp => Some(250),
            Command::AltitudeUpFast => Some(500),
            Command::AltitudeDown => Some(-250),
            Command::AltitudeDownFast => Some(-500),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}'", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let argument = Some(rest.trim())
            .filter(|arg| !arg.is_empty())
            .map(str::to_owned);

        let command = match keyword.to_ascii_lowercase().as_str() {
            "right" | ">" => Command::SpeedUp,
            "ctrl+right" | ">>" => Command::SpeedUpFast,
            "left" | "<" => Command::SpeedDown,
            "ctrl+left" | "<<" => Command::SpeedDownFast,
            "up" | "^" => Command::AltitudeUp,
            "ctrl+up" | "^^" => Command::AltitudeUpFast,
            "down" | "v" => Command::AltitudeDown,
            "ctrl+down" | "vv" => Command::AltitudeDownFast,
            "a" | "add" => return Ok(Command::AddDispatcher(argument)),
            "r" | "remove" => return Ok(Command::RemoveDispatcher(argument)),
            "esc" | "q" | "quit" | "exit" => Command::Exit,
            _ => return Err(UnknownCommand(s.to_owned())),
        };

        if argument.is_some() {
            return Err(UnknownCommand(s.to_owned()));
        }
        Ok(command)
    }
}

/// Turn the pilot's answer into a dispatcher number.
///
/// Anything that isn't a positive number becomes 0, which no dispatcher has.
pub fn dispatcher_number(input: &str) -> usize {
    input.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_movement() {
        assert_eq!(Ok(Command::SpeedUp), "right".parse());
        assert_eq!(Ok(Command::SpeedUpFast), "CTRL+RIGHT".parse());
        assert_eq!(Ok(Command::SpeedDownFast), "<<".parse());
        assert_eq!(Ok(Command::AltitudeUpFast), "  ^^ ".parse());
        assert_eq!(Ok(Command::AltitudeDown), "v".parse());
        assert_eq!(Ok(Command::AltitudeDownFast), "ctrl+down".parse());
    }

    #[test]
    fn test_parse_dispatcher_commands() {
        assert_eq!(Ok(Command::AddDispatcher(None)), "a".parse());
        assert_eq!(
            Ok(Command::AddDispatcher(Some("Mary Ann".to_string()))),
            "add  Mary Ann ".parse()
        );
        assert_eq!(Ok(Command::RemoveDispatcher(Some("3".to_string()))), "r 3".parse());
        assert_eq!(Ok(Command::RemoveDispatcher(None)), "REMOVE".parse());
    }

    #[test]
    fn test_parse_exit() {
        for input in ["esc", "q", "Quit", "exit"] {
            assert_eq!(Ok(Command::Exit), input.parse::<Command>());
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("fly".parse::<Command>().is_err());
        assert!("up 3".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Some(-150), Command::SpeedDownFast.speed_delta());
        assert_eq!(None, Command::SpeedUp.altitude_delta());
        assert_eq!(Some(500), Command::AltitudeUpFast.altitude_delta());
        assert_eq!(None, Command::Exit.speed_delta());
    }

    #[test]
    fn test_dispatcher_number() {
        assert_eq!(2, dispatcher_number(" 2 "));
        assert_eq!(0, dispatcher_number("-1"));
        assert_eq!(0, dispatcher_number("second"));
    }
}
