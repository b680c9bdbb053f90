use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameClockError {
	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },

	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Failed to parse game clock format: {0}")]
	InvalidFormat(String),

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},

	#[error("Clock sequence is empty")]
	EmptySequence,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPositionError {
	#[error("Invalid location: {location}")]
	InvalidLocation { location: String },

	#[error("Invalid yardline: {yardline}, must be between 0 and 50")]
	InvalidYardline { yardline: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YardsError {
	#[error("Invalid yards description: {0}")]
	InvalidYardsFormat(String),

	#[error("No yards information found in the play description")]
	NoYardsInfo,
}

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
	#[error("Malformed {table} row {row}: missing or invalid {field}")]
	MalformedPlayRow {
		table: &'static str,
		row: usize,
		field: &'static str,
	},

	#[error("{table} table is empty")]
	EmptyTable { table: &'static str },

	#[error("Game clock error: {0}")]
	GameClock(#[from] GameClockError),

	#[error("Field position error: {0}")]
	FieldPosition(#[from] FieldPositionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoxScoreError {
	#[error("Invalid selector: {0}")]
	InvalidSelector(String),

	#[error("Missing table wrapper #{id} in the HTML")]
	MissingTable { id: &'static str },

	#[error("Missing column {column} in table #{id}")]
	MissingColumn { id: &'static str, column: &'static str },

	#[error("Missing team name header in #{id}")]
	MissingTeamName { id: &'static str },

	#[error("Missing score columns between Location and Detail")]
	MissingScoreColumns,
}

impl GameClockError {
	pub fn invalid_quarter_error(quarter: &str) -> Self {
		Self::InvalidQuarter {
			quarter: quarter.to_string(),
		}
	}

	pub const fn invalid_minutes_error(minutes: u8) -> Self {
		Self::InvalidMinutes { minutes }
	}

	pub const fn invalid_seconds_error(seconds: u8) -> Self {
		Self::InvalidSeconds { seconds }
	}

	pub fn invalid_format_error(input: &str) -> Self {
		Self::InvalidFormat(input.to_string())
	}
}

impl FieldPositionError {
	pub fn invalid_location_error(location: &str) -> Self {
		Self::InvalidLocation {
			location: location.to_string(),
		}
	}
}

impl TimelineError {
	pub const fn malformed_play(row: usize, field: &'static str) -> Self {
		Self::MalformedPlayRow { table: "plays", row, field }
	}

	pub const fn malformed_drive(row: usize, field: &'static str) -> Self {
		Self::MalformedPlayRow { table: "drives", row, field }
	}
}
