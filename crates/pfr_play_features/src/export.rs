use crate::config::OutputFormat;
use crate::error::ExportError;
use csv::WriterBuilder;
use nfl_play_timeline::GameFeatures;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends each game's rows to the plays and games outputs.
#[derive(Debug, Clone)]
pub struct FeatureSink {
	format: OutputFormat,
	plays_out: PathBuf,
	games_out: PathBuf,
}

impl FeatureSink {
	pub fn new(format: OutputFormat, plays_out: impl Into<PathBuf>, games_out: impl Into<PathBuf>) -> Self {
		Self {
			format,
			plays_out: plays_out.into(),
			games_out: games_out.into(),
		}
	}

	/// Both outputs are opened and both tables encoded before anything is
	/// appended, so a game never lands in one file without the other.
	pub fn write(&self, game: &GameFeatures) -> Result<(), ExportError> {
		let mut plays_file = open_append(&self.plays_out)?;
		let mut games_file = open_append(&self.games_out)?;

		let plays = self.encode(&game.plays, is_empty(&plays_file))?;
		let games = self.encode(std::slice::from_ref(&game.summary), is_empty(&games_file))?;

		plays_file.write_all(&plays)?;
		games_file.write_all(&games)?;
		plays_file.flush()?;
		games_file.flush()?;

		debug!(game_id = game.summary.game_id, plays = game.plays.len(), "game written");
		Ok(())
	}

	fn encode<T: Serialize>(&self, rows: &[T], with_header: bool) -> Result<Vec<u8>, ExportError> {
		match self.format {
			OutputFormat::Csv => encode_csv(rows, with_header),
			OutputFormat::Json => encode_json_lines(rows),
		}
	}
}

fn open_append(path: &Path) -> Result<File, ExportError> {
	OpenOptions::new()
		.append(true)
		.create(true)
		.open(path)
		.map_err(|source| ExportError::open_error(path, source))
}

fn is_empty(file: &File) -> bool {
	file.metadata().map(|m| m.len() == 0).unwrap_or(true)
}

/// The header goes out only when the file starts empty, so repeated runs
/// keep a single header row.
fn encode_csv<T: Serialize>(rows: &[T], with_header: bool) -> Result<Vec<u8>, ExportError> {
	let mut wtr = WriterBuilder::new().has_headers(with_header).from_writer(Vec::new());
	for row in rows {
		wtr.serialize(row)?;
	}

	wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

fn encode_json_lines<T: Serialize>(rows: &[T]) -> Result<Vec<u8>, ExportError> {
	let mut out = Vec::new();
	for row in rows {
		serde_json::to_writer(&mut out, row)?;
		out.push(b'\n');
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use nfl_play_timeline::{assemble, GameTables, RawDriveRow, RawPlayRow, TeamDirectory};
	use tempfile::TempDir;

	fn play(time: &str, location: &str, detail: &str) -> RawPlayRow {
		RawPlayRow {
			quarter: "1".to_string(),
			time: time.to_string(),
			down: "1".to_string(),
			to_go: "10".to_string(),
			location: location.to_string(),
			visitor_score: "0".to_string(),
			home_score: "0".to_string(),
			detail: detail.to_string(),
			..RawPlayRow::default()
		}
	}

	fn game(game_id: u32) -> GameFeatures {
		let tables = GameTables {
			visitor: "DET".to_string(),
			home: "KAN".to_string(),
			drives: vec![RawDriveRow {
				quarter: "1".to_string(),
				time: "15:00".to_string(),
				team: "Lions".to_string(),
			}],
			plays: vec![
				play("15:00", "DET 25", "D.Montgomery left end for 4 yards"),
				play("14:30", "DET 29", "J.Goff pass incomplete short left"),
			],
			opening_receiver: None,
		};

		assemble(game_id, &tables, &TeamDirectory::pro_football_reference())
			.unwrap()
			.with_link("https://www.pro-football-reference.com/boxscores/202309070kan.htm")
	}

	fn sink(dir: &TempDir, format: OutputFormat) -> FeatureSink {
		FeatureSink::new(format, dir.path().join("plays.out"), dir.path().join("games.out"))
	}

	#[test]
	fn test_csv_header_written_once() {
		let dir = TempDir::new().unwrap();
		let sink = sink(&dir, OutputFormat::Csv);

		sink.write(&game(1)).unwrap();
		sink.write(&game(2)).unwrap();

		let plays = std::fs::read_to_string(dir.path().join("plays.out")).unwrap();
		let lines: Vec<&str> = plays.lines().collect();
		assert_eq!(lines.len(), 5);
		assert!(lines[0].starts_with("game_id,quarter,clock,"));
		assert_eq!(lines.iter().filter(|line| line.starts_with("game_id")).count(), 1);
		assert!(lines[3].starts_with("2,1,15:00,"));

		let games = std::fs::read_to_string(dir.path().join("games.out")).unwrap();
		assert_eq!(games.lines().count(), 3);
		assert!(games.lines().nth(1).unwrap().starts_with("1,DET,KAN,https://"));
	}

	#[test]
	fn test_csv_rows_read_back() {
		let dir = TempDir::new().unwrap();
		sink(&dir, OutputFormat::Csv).write(&game(9)).unwrap();

		let mut rdr = csv::Reader::from_path(dir.path().join("plays.out")).unwrap();
		let headers = rdr.headers().unwrap().clone();
		let first = rdr.records().next().unwrap().unwrap();
		let column = |name: &str| &first[headers.iter().position(|h| h == name).unwrap()];

		assert_eq!(column("play_type"), "Run");
		assert_eq!(column("possession"), "DET");
		assert_eq!(column("yardage"), "4");
		assert_eq!(column("expected_points_before"), "");
	}

	#[test]
	fn test_json_lines() {
		let dir = TempDir::new().unwrap();
		sink(&dir, OutputFormat::Json).write(&game(3)).unwrap();

		let plays = std::fs::read_to_string(dir.path().join("plays.out")).unwrap();
		let rows: Vec<serde_json::Value> = plays.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[1]["play_type"], "Pass");
		assert_eq!(rows[1]["described_yards"], 0);
		assert_eq!(rows[0]["win"], 1);

		let games = std::fs::read_to_string(dir.path().join("games.out")).unwrap();
		let summary: serde_json::Value = serde_json::from_str(games.trim()).unwrap();
		assert_eq!(summary["winner"], "DET");
		assert_eq!(summary["opening_receiver"], serde_json::Value::Null);
	}

	#[test]
	fn test_unwritable_path() {
		let dir = TempDir::new().unwrap();
		let sink = FeatureSink::new(OutputFormat::Csv, dir.path().join("missing/plays.out"), dir.path().join("games.out"));

		assert!(matches!(sink.write(&game(1)), Err(ExportError::Open { .. })));
	}

	#[test]
	fn test_failed_games_output_leaves_plays_untouched() {
		let dir = TempDir::new().unwrap();
		let plays_out = dir.path().join("plays.out");
		let sink = FeatureSink::new(OutputFormat::Csv, &plays_out, dir.path().join("missing/games.out"));

		assert!(matches!(sink.write(&game(1)), Err(ExportError::Open { .. })));
		assert_eq!(std::fs::read_to_string(&plays_out).unwrap_or_default(), "");

		// once the games side is writable the header still goes out exactly once
		let sink = FeatureSink::new(OutputFormat::Csv, &plays_out, dir.path().join("games.out"));
		sink.write(&game(2)).unwrap();
		let plays = std::fs::read_to_string(&plays_out).unwrap();
		assert_eq!(plays.lines().count(), 3);
		assert!(plays.lines().nth(1).unwrap().starts_with("2,"));
	}
}
