use crate::error::TimelineError;
use crate::schema::{ClockReading, Down, FieldMark, Quarter};
use serde::Deserialize;
use std::str::FromStr;

/// A drive row as scraped: quarter, clock at the drive start and the team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawDriveRow {
	pub quarter: String,
	pub time: String,
	pub team: String,
}

/// A play row as scraped, every cell still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPlayRow {
	pub quarter: String,
	pub time: String,
	#[serde(default)]
	pub down: String,
	#[serde(default)]
	pub to_go: String,
	pub location: String,
	pub visitor_score: String,
	pub home_score: String,
	pub detail: String,
	#[serde(default)]
	pub epb: String,
	#[serde(default)]
	pub epa: String,
}

/// Both tables of one box score plus the teams named by its score columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameTables {
	pub visitor: String,
	pub home: String,
	pub drives: Vec<RawDriveRow>,
	pub plays: Vec<RawPlayRow>,
	pub opening_receiver: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drive {
	pub quarter: Quarter,
	pub clock: ClockReading,
	pub team: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Play {
	pub quarter: Quarter,
	pub clock: ClockReading,
	pub down: Option<Down>,
	pub to_go: Option<u8>,
	pub mark: FieldMark,
	pub visitor_score: u16,
	pub home_score: u16,
	pub detail: String,
	pub expected_points_before: Option<f64>,
	pub expected_points_after: Option<f64>,
}

fn required<'a>(value: &'a str, field: &'static str, malformed: impl Fn(&'static str) -> TimelineError) -> Result<&'a str, TimelineError> {
	let value = value.trim();
	if value.is_empty() {
		Err(malformed(field))
	} else {
		Ok(value)
	}
}

fn optional(value: &str) -> Option<&str> {
	Some(value.trim()).filter(|v| !v.is_empty())
}

impl Drive {
	/// Clock problems stay `GameClock` errors so callers can treat them as fatal.
	pub fn from_raw(row: usize, raw: &RawDriveRow) -> Result<Self, TimelineError> {
		let malformed = |field| TimelineError::malformed_drive(row, field);

		let quarter = Quarter::from_str(required(&raw.quarter, "quarter", malformed)?)?;
		let clock = ClockReading::from_str(required(&raw.time, "time", malformed)?)?;
		let team = required(&raw.team, "team", malformed)?.to_string();

		Ok(Self { quarter, clock, team })
	}
}

impl Play {
	pub fn from_raw(row: usize, raw: &RawPlayRow) -> Result<Self, TimelineError> {
		let malformed = |field| TimelineError::malformed_play(row, field);

		let quarter = Quarter::from_str(required(&raw.quarter, "quarter", malformed)?)?;
		let clock = ClockReading::from_str(required(&raw.time, "time", malformed)?)?;
		let mark = FieldMark::from_str(required(&raw.location, "location", malformed)?)?;

		let down = optional(&raw.down).map(Down::from_str).transpose().map_err(|_| malformed("down"))?;
		let to_go = optional(&raw.to_go).map(str::parse::<u8>).transpose().map_err(|_| malformed("to_go"))?;

		let visitor_score = required(&raw.visitor_score, "visitor_score", malformed)?
			.parse::<u16>()
			.map_err(|_| malformed("visitor_score"))?;
		let home_score = required(&raw.home_score, "home_score", malformed)?
			.parse::<u16>()
			.map_err(|_| malformed("home_score"))?;

		let detail = required(&raw.detail, "detail", malformed)?.to_string();

		let expected_points_before = optional(&raw.epb).map(str::parse::<f64>).transpose().map_err(|_| malformed("epb"))?;
		let expected_points_after = optional(&raw.epa).map(str::parse::<f64>).transpose().map_err(|_| malformed("epa"))?;

		Ok(Self {
			quarter,
			clock,
			down,
			to_go,
			mark,
			visitor_score,
			home_score,
			detail,
			expected_points_before,
			expected_points_after,
		})
	}
}
