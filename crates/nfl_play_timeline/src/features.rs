use crate::error::TimelineError;
use crate::schema::{ClockReading, DescribedYards, Drive, GameTables, OvertimeLength, Play, PlayType, Quarter, TeamDirectory};
use crate::timeline::{clock, yardage, DriveStart, PossessionResolver, Snap};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Regulation length; the time-decayed score feature measures distance from it.
pub const REGULATION_SECONDS: u32 = 3600;

const SCORE_DECAY_EXPONENT: f64 = 0.5;

/// One output row per play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayFeatures {
	pub game_id: u32,
	pub quarter: String,
	pub clock: String,
	pub down: Option<u8>,
	pub to_go: Option<u8>,
	pub location: String,
	pub field_side: Option<String>,
	pub yardline: u8,
	pub detail: String,
	pub visitor_score: u16,
	pub home_score: u16,
	pub expected_points_before: Option<f64>,
	pub expected_points_after: Option<f64>,
	/// Seconds until the next snap; 0 on the final play.
	pub elapsed_seconds: u32,
	pub game_seconds: u32,
	pub play_type: PlayType,
	pub possession: Option<String>,
	pub field_position: u8,
	pub yardage: i32,
	pub described_yards: Option<i32>,
	pub score_diff: i32,
	pub seconds_remaining: u32,
	pub adjusted_score: f64,
	pub win: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
	pub game_id: u32,
	pub visitor: String,
	pub home: String,
	pub link: String,
	pub opening_receiver: Option<String>,
	pub winner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameFeatures {
	pub summary: GameSummary,
	pub plays: Vec<PlayFeatures>,
}

impl GameFeatures {
	#[must_use]
	pub fn with_link(mut self, link: impl Into<String>) -> Self {
		self.summary.link = link.into();
		self
	}
}

/// Score gap shrunk by the square root of the time left, so early leads
/// weigh less than late ones.
pub fn adjusted_score(score_diff: i32, seconds_remaining: u32) -> f64 {
	f64::from(score_diff) / (f64::from(seconds_remaining) + 1.0).powf(SCORE_DECAY_EXPONENT)
}

pub fn seconds_remaining(game_second: u32) -> u32 {
	game_second.abs_diff(REGULATION_SECONDS)
}

/// Drives ordered by quarter, then by clock counting down.
fn ordered_drives(tables: &GameTables) -> Result<Vec<Drive>, TimelineError> {
	let mut drives = tables
		.drives
		.iter()
		.enumerate()
		.map(|(row, raw)| Drive::from_raw(row, raw))
		.collect::<Result<Vec<_>, _>>()?;

	drives.sort_by(|a, b| a.quarter.cmp(&b.quarter).then_with(|| b.clock.cmp(&a.clock)));
	Ok(drives)
}

fn possession_resolver(tables: &GameTables, teams: &TeamDirectory, overtime: OvertimeLength) -> Result<PossessionResolver, TimelineError> {
	let drives = ordered_drives(tables)?;
	if drives.is_empty() {
		return Err(TimelineError::EmptyTable { table: "drives" });
	}

	let clocks: Vec<_> = drives.iter().map(|drive| (drive.quarter, drive.clock)).collect();
	let starts = clock::game_seconds(&clocks, overtime)?;

	Ok(PossessionResolver::new(
		drives.into_iter().zip(starts).map(|(drive, start_second)| DriveStart {
			start_second,
			team: drive.team,
		}),
		teams,
	))
}

/// Turns one game's raw tables into feature rows, stage by stage:
/// clock, play type, possession, field position and yardage, score.
pub fn assemble(game_id: u32, tables: &GameTables, teams: &TeamDirectory) -> Result<GameFeatures, TimelineError> {
	let plays = tables
		.plays
		.iter()
		.enumerate()
		.map(|(row, raw)| Play::from_raw(row, raw))
		.collect::<Result<Vec<_>, _>>()?;
	let Some(last) = plays.last() else {
		return Err(TimelineError::EmptyTable { table: "plays" });
	};

	let visitor = teams.abbreviation(&tables.visitor).unwrap_or(tables.visitor.as_str()).to_string();
	let home = teams.abbreviation(&tables.home).unwrap_or(tables.home.as_str()).to_string();
	let winner = if last.visitor_score >= last.home_score { visitor.clone() } else { home.clone() };

	let readings: Vec<(Quarter, ClockReading)> = plays.iter().map(|play| (play.quarter, play.clock)).collect();
	let overtime = OvertimeLength::infer(&readings);
	let mut elapsed = clock::elapsed_by_quarter(&readings, overtime)?;
	let starts = clock::cumulative(&elapsed)?;
	if let Some(sentinel) = elapsed.last_mut() {
		*sentinel = 0;
	}
	debug!(game_id, plays = plays.len(), "clock normalised");

	let play_types: Vec<PlayType> = plays.iter().map(|play| PlayType::classify(&play.detail)).collect();

	let resolver = possession_resolver(tables, teams, overtime)?;
	let possessions: Vec<Option<&str>> = starts
		.iter()
		.enumerate()
		.map(|(row, start)| {
			let team = resolver.resolve(*start);
			if team.is_none() {
				warn!(game_id, row, "no drive starts at or before this play");
			}
			team
		})
		.collect();
	debug!(game_id, drives = resolver.drives().len(), "possession resolved");

	let snaps: Vec<Snap<'_>> = plays
		.iter()
		.zip(&play_types)
		.zip(&possessions)
		.map(|((play, play_type), possession)| Snap {
			play_type: *play_type,
			possession: *possession,
			mark: &play.mark,
		})
		.collect();
	let gained = yardage(&snaps);

	let rows: Vec<PlayFeatures> = plays
		.iter()
		.enumerate()
		.map(|(i, play)| {
			let game_seconds = starts[i];
			let score_diff = i32::from(play.visitor_score) - i32::from(play.home_score);
			let remaining = seconds_remaining(game_seconds);

			PlayFeatures {
				game_id,
				quarter: play.quarter.to_string(),
				clock: play.clock.to_string(),
				down: play.down.map(u8::from),
				to_go: play.to_go,
				location: play.mark.to_string(),
				field_side: play.mark.side().map(str::to_string),
				yardline: play.mark.yardline(),
				detail: play.detail.clone(),
				visitor_score: play.visitor_score,
				home_score: play.home_score,
				expected_points_before: play.expected_points_before,
				expected_points_after: play.expected_points_after,
				elapsed_seconds: elapsed[i],
				game_seconds,
				play_type: play_types[i],
				possession: possessions[i].map(str::to_string),
				field_position: snaps[i].position(),
				yardage: gained[i],
				described_yards: play.detail.parse::<DescribedYards>().ok().map(|yards| yards.0),
				score_diff,
				seconds_remaining: remaining,
				adjusted_score: adjusted_score(score_diff, remaining),
				win: u8::from(possessions[i] == Some(winner.as_str())),
			}
		})
		.collect();

	info!(game_id, %visitor, %home, %winner, plays = rows.len(), "game assembled");

	Ok(GameFeatures {
		summary: GameSummary {
			game_id,
			visitor,
			home,
			link: String::new(),
			opening_receiver: tables.opening_receiver.clone(),
			winner,
		},
		plays: rows,
	})
}
