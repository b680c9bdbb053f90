mod config;
mod error;
mod export;

use crate::config::{Command, Config};
use crate::export::FeatureSink;
use anyhow::Context;
use clap::Parser;
use nfl_play_timeline::query_selectors::{parse_box_score, ParsedSelectors};
use nfl_play_timeline::{assemble, read_html_file, GameFeatures, GameTables, RawDriveRow, RawPlayRow, TeamDirectory};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let sink = FeatureSink::new(config.format, &config.plays_out, &config.games_out);
	let teams = TeamDirectory::pro_football_reference();

	let failed = match &config.command {
		Command::Pages { files, base_url } => {
			let selectors = ParsedSelectors::new()?;
			run_batch(number_games(config.first_game_id, files)?.into_iter(), &sink, |game_id, path| {
				page_features(game_id, path, base_url, &selectors, &teams)
			})
		}
		Command::Tables {
			drives,
			plays,
			visitor,
			home,
			link,
		} => run_batch(std::iter::once((config.first_game_id, drives)), &sink, |game_id, drive_rows| {
			let tables = GameTables {
				visitor: visitor.clone(),
				home: home.clone(),
				drives: read_csv_rows::<RawDriveRow>(drive_rows)?,
				plays: read_csv_rows::<RawPlayRow>(plays)?,
				opening_receiver: None,
			};
			Ok(assemble(game_id, &tables, &teams)?.with_link(link.as_str()))
		}),
	};

	if failed > 0 {
		anyhow::bail!("{failed} game(s) could not be processed");
	}
	Ok(())
}

/// Pairs each page with its game id, refusing a batch whose ids would run
/// past `u32::MAX`.
fn number_games(first_game_id: u32, files: &[PathBuf]) -> anyhow::Result<Vec<(u32, &PathBuf)>> {
	let count = u32::try_from(files.len()).context("too many pages in one batch")?;
	let last_game_id = first_game_id
		.checked_add(count.saturating_sub(1))
		.with_context(|| format!("{count} games starting at id {first_game_id} overflow the id range"))?;

	Ok((first_game_id..=last_game_id).zip(files).collect())
}

/// Runs every game, writing the ones that assemble and logging the rest.
/// Returns how many failed.
fn run_batch<'a>(
	games: impl Iterator<Item = (u32, &'a PathBuf)>,
	sink: &FeatureSink,
	features: impl Fn(u32, &Path) -> anyhow::Result<GameFeatures>,
) -> usize {
	let mut failed = 0;
	for (game_id, path) in games {
		let outcome = features(game_id, path).and_then(|game| sink.write(&game).context("could not write features"));
		match outcome {
			Ok(()) => info!(game_id, source = %path.display(), "game exported"),
			Err(e) => {
				error!(game_id, source = %path.display(), error = %format!("{e:#}"), "game skipped");
				failed += 1;
			}
		}
	}
	failed
}

fn page_features(
	game_id: u32,
	path: &Path,
	base_url: &str,
	selectors: &ParsedSelectors,
	teams: &TeamDirectory,
) -> anyhow::Result<GameFeatures> {
	let document = read_html_file(path).with_context(|| format!("could not read {}", path.display()))?;
	let tables = parse_box_score(&document, selectors).with_context(|| format!("no play tables in {}", path.display()))?;

	let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
	let link = format!("{base_url}{file_name}");

	Ok(assemble(game_id, &tables, teams)?.with_link(link))
}

fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
	csv::Reader::from_path(path)
		.and_then(|mut rdr| rdr.deserialize().collect::<Result<Vec<T>, _>>())
		.with_context(|| format!("could not read rows from {}", path.display()))
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::try_new(config.rust_log.as_deref().unwrap_or("info")).context("invalid log filter")?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
	Ok(())
}
