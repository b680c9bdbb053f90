pub mod error;
pub mod features;
pub mod query_selectors;
pub mod schema;
pub mod timeline;

use scraper::Html;
use std::path::Path;

pub use features::{assemble, GameFeatures, GameSummary, PlayFeatures};
pub use schema::{GameTables, RawDriveRow, RawPlayRow, TeamDirectory};

pub fn read_html_file(file_path: impl AsRef<Path>) -> Result<Html, std::io::Error> {
	let html_content = std::fs::read_to_string(file_path)?;
	Ok(Html::parse_document(&html_content))
}
