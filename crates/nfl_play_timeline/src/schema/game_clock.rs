use crate::error::GameClockError;
use std::fmt;
use std::str::FromStr;

/// Length of a regulation quarter; the clock restarts from here.
pub const QUARTER_MINUTES: f64 = 15.0;

pub const QUARTER_SECONDS: u32 = 900;

/// Where the overtime clock starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OvertimeLength {
	/// 10:00
	#[default]
	RegularSeason,
	/// 15:00, a full quarter
	Postseason,
}

impl OvertimeLength {
	pub const fn seconds(self) -> u32 {
		match self {
			Self::RegularSeason => 600,
			Self::Postseason => QUARTER_SECONDS,
		}
	}

	/// Only a postseason overtime clock ever reads above 10:00.
	pub fn infer<'a>(readings: impl IntoIterator<Item = &'a (Quarter, ClockReading)>) -> Self {
		let full_length = readings
			.into_iter()
			.any(|(quarter, clock)| *quarter == Quarter::Overtime && clock.seconds_remaining() > Self::RegularSeason.seconds());
		if full_length {
			Self::Postseason
		} else {
			Self::RegularSeason
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
	First,
	Second,
	Third,
	Fourth,
	Overtime,
}

impl FromStr for Quarter {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" | "1st" => Ok(Self::First),
			"2" | "2nd" => Ok(Self::Second),
			"3" | "3rd" => Ok(Self::Third),
			"4" | "4th" => Ok(Self::Fourth),
			"5" | "OT" => Ok(Self::Overtime),
			other => Err(GameClockError::invalid_quarter_error(other)),
		}
	}
}

impl Quarter {
	/// Seconds on the clock when this period starts.
	pub const fn length_seconds(self, overtime: OvertimeLength) -> u32 {
		match self {
			Self::Overtime => overtime.seconds(),
			_ => QUARTER_SECONDS,
		}
	}

	/// Period number, overtime counting as the fifth.
	pub const fn number(self) -> u8 {
		match self {
			Self::First => 1,
			Self::Second => 2,
			Self::Third => 3,
			Self::Fourth => 4,
			Self::Overtime => 5,
		}
	}
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::First => "1",
			Self::Second => "2",
			Self::Third => "3",
			Self::Fourth => "4",
			Self::Overtime => "OT",
		};
		f.write_str(label)
	}
}

/// Minutes left on the quarter clock (valid range: 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u8);

impl Minutes {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 15 {
			Err(GameClockError::invalid_minutes_error(value))
		} else {
			Ok(Self(value))
		}
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u8>()?;
		Self::new(value)
	}
}

/// Seconds part of the quarter clock (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u8);

impl Seconds {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value >= 60 {
			Err(GameClockError::invalid_seconds_error(value))
		} else {
			Ok(Self(value))
		}
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u8>()?;
		Self::new(value)
	}
}

/// A raw "MM:SS" reading of the countdown clock within a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockReading {
	minutes: Minutes,
	seconds: Seconds,
}

impl ClockReading {
	pub const fn new(minutes: Minutes, seconds: Seconds) -> Self {
		Self { minutes, seconds }
	}

	/// Time left in the quarter as fractional minutes, e.g. `2:30` is `2.5`.
	pub fn minutes_remaining(&self) -> f64 {
		f64::from(self.minutes.0) + f64::from(self.seconds.0) / 60.0
	}

	/// Time left in the quarter in whole seconds, e.g. `2:30` is `150`.
	pub fn seconds_remaining(&self) -> u32 {
		u32::from(self.minutes.0) * 60 + u32::from(self.seconds.0)
	}
}

impl FromStr for ClockReading {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (minutes_str, seconds_str) = s.trim().split_once(':').ok_or_else(|| GameClockError::invalid_format_error(s))?;

		let minutes = minutes_str.parse::<Minutes>()?;
		let seconds = seconds_str.parse::<Seconds>()?;

		if minutes.0 == 15 && seconds.0 > 0 {
			return Err(GameClockError::invalid_format_error(s));
		}

		Ok(Self::new(minutes, seconds))
	}
}

impl fmt::Display for ClockReading {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{:02}", self.minutes.0, self.seconds.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quarter_from_str() {
		assert_eq!(Quarter::from_str("1"), Ok(Quarter::First));
		assert_eq!(Quarter::from_str("2"), Ok(Quarter::Second));
		assert_eq!(Quarter::from_str("3rd"), Ok(Quarter::Third));
		assert_eq!(Quarter::from_str(" 4 "), Ok(Quarter::Fourth));
		assert_eq!(Quarter::from_str("OT"), Ok(Quarter::Overtime));
		assert_eq!(Quarter::from_str("6"), Err(GameClockError::invalid_quarter_error("6")));
	}

	#[test]
	fn test_quarter_ordering() {
		assert!(Quarter::First < Quarter::Fourth);
		assert!(Quarter::Fourth < Quarter::Overtime);
		assert_eq!(Quarter::Overtime.number() - Quarter::Second.number(), 3);
	}

	#[test]
	fn test_clock_reading_from_str() {
		let test_cases = vec![
			("14:32", Ok(ClockReading::new(Minutes(14), Seconds(32)))),
			("0:05", Ok(ClockReading::new(Minutes(0), Seconds(5)))),
			("15:00", Ok(ClockReading::new(Minutes(15), Seconds(0)))),
			("16:00", Err(GameClockError::invalid_minutes_error(16))),
			("14:60", Err(GameClockError::invalid_seconds_error(60))),
			("15:01", Err(GameClockError::invalid_format_error("15:01"))),
			("1432", Err(GameClockError::invalid_format_error("1432"))),
		];

		for (input, expected) in test_cases {
			assert_eq!(ClockReading::from_str(input), expected, "input: {input}");
		}
	}

	#[test]
	fn test_non_numeric_clock_is_parse_error() {
		assert!(matches!(ClockReading::from_str("ab:12"), Err(GameClockError::ParseError { .. })));
	}

	#[test]
	fn test_minutes_remaining() {
		let clock = ClockReading::from_str("2:30").unwrap();
		assert!((clock.minutes_remaining() - 2.5).abs() < f64::EPSILON);
		assert_eq!(clock.seconds_remaining(), 150);
		assert_eq!(clock.to_string(), "2:30");
	}

	#[test]
	fn test_overtime_length() {
		let reading = |quarter, clock: &str| (quarter, ClockReading::from_str(clock).unwrap());

		let regular = [reading(Quarter::Fourth, "14:00"), reading(Quarter::Overtime, "10:00"), reading(Quarter::Overtime, "8:12")];
		assert_eq!(OvertimeLength::infer(&regular), OvertimeLength::RegularSeason);
		assert_eq!(Quarter::Overtime.length_seconds(OvertimeLength::infer(&regular)), 600);

		let postseason = [reading(Quarter::Overtime, "15:00"), reading(Quarter::Overtime, "12:40")];
		assert_eq!(OvertimeLength::infer(&postseason), OvertimeLength::Postseason);
		assert_eq!(Quarter::Third.length_seconds(OvertimeLength::RegularSeason), 900);
	}
}
