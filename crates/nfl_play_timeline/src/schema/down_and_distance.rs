use crate::error::FieldPositionError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Down {
	First,
	Second,
	Third,
	Fourth,
}

impl FromStr for Down {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" | "1st" => Ok(Self::First),
			"2" | "2nd" => Ok(Self::Second),
			"3" | "3rd" => Ok(Self::Third),
			"4" | "4th" => Ok(Self::Fourth),
			_ => Err("Invalid down".to_string()),
		}
	}
}

impl From<Down> for u8 {
	fn from(down: Down) -> Self {
		match down {
			Down::First => 1,
			Down::Second => 2,
			Down::Third => 3,
			Down::Fourth => 4,
		}
	}
}

/// Where the ball is spotted, as printed: a team's territory and a 0-50 line.
///
/// Midfield is printed as a bare `50` and carries no side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMark {
	side: Option<String>,
	yardline: u8,
}

impl FieldMark {
	pub fn new(side: Option<&str>, yardline: u8) -> Result<Self, FieldPositionError> {
		if yardline > 50 {
			return Err(FieldPositionError::InvalidYardline { yardline });
		}
		Ok(Self {
			side: side.map(str::to_string),
			yardline,
		})
	}

	pub fn side(&self) -> Option<&str> {
		self.side.as_deref()
	}

	/// Always within 0-50.
	pub const fn yardline(&self) -> u8 {
		self.yardline
	}
}

impl FromStr for FieldMark {
	type Err = FieldPositionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split_whitespace().collect();

		let (side, yardline) = match parts.as_slice() {
			[side, yardline] if side.chars().all(|c| c.is_ascii_alphabetic()) => (Some(*side), *yardline),
			[yardline] => (None, *yardline),
			_ => return Err(FieldPositionError::invalid_location_error(s)),
		};

		let yardline = yardline.parse::<u8>().map_err(|_| FieldPositionError::invalid_location_error(s))?;
		if side.is_none() && yardline != 50 {
			return Err(FieldPositionError::invalid_location_error(s));
		}

		Self::new(side, yardline)
	}
}

impl fmt::Display for FieldMark {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.side {
			Some(side) => write!(f, "{side} {}", self.yardline),
			None => write!(f, "{}", self.yardline),
		}
	}
}
