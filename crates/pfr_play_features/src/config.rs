use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Csv,
	/// One JSON object per line
	Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Derives per-play features from NFL play-by-play tables", long_about = None)]
pub struct Config {
	#[command(subcommand)]
	pub command: Command,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false", global = true)]
	pub log_json: bool,

	/// Log filter directives, `info` when unset
	#[arg(long, env = "RUST_LOG", global = true)]
	pub rust_log: Option<String>,

	/// Where play rows are appended
	#[arg(long, env = "PLAYS_CSV", default_value = "plays.csv", global = true)]
	pub plays_out: PathBuf,

	/// Where one summary row per game is appended
	#[arg(long, env = "GAMES_CSV", default_value = "games.csv", global = true)]
	pub games_out: PathBuf,

	#[arg(long, value_enum, default_value_t = OutputFormat::Csv, global = true)]
	pub format: OutputFormat,

	/// Id given to the first game; later games count up from it
	#[arg(long, default_value_t = 1, global = true)]
	pub first_game_id: u32,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Saved box score pages, one game each
	Pages {
		#[arg(required = true, value_name = "HTML")]
		files: Vec<PathBuf>,

		/// Prefix for each game's link; the page's file name is appended
		#[arg(long, env = "PFR_BASE_URL", default_value = "https://www.pro-football-reference.com/boxscores/")]
		base_url: String,
	},
	/// One game from drive and play tables kept as CSV
	Tables {
		#[arg(long, value_name = "CSV")]
		drives: PathBuf,

		#[arg(long, value_name = "CSV")]
		plays: PathBuf,

		/// Visitor abbreviation or team name
		#[arg(long)]
		visitor: String,

		/// Home abbreviation or team name
		#[arg(long)]
		home: String,

		#[arg(long, default_value = "")]
		link: String,
	},
}
