use crate::error::BoxScoreError;
use crate::query_selectors::BoxScoreSelectors;
use crate::schema::{GameTables, RawDriveRow, RawPlayRow};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static OPENING_RECEIVER_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(\w+)\s+to\s+receive\s+the\s+opening\s+kickoff").expect("opening kickoff regex is valid"));

fn parse_selector(which: BoxScoreSelectors) -> Result<Selector, BoxScoreError> {
	Selector::parse(which.selector()).map_err(|_| BoxScoreError::InvalidSelector(which.selector().to_string()))
}

pub struct ParsedSelectors {
	pub play_by_play: (Selector, Selector),
	pub visitor_drives: (Selector, Selector),
	pub home_drives: (Selector, Selector),
	pub caption: Selector,
	pub header_row: Selector,
	pub header_cell: Selector,
	pub body_row: Selector,
	pub cell: Selector,
}

impl ParsedSelectors {
	pub fn new() -> Result<Self, BoxScoreError> {
		Ok(Self {
			play_by_play: (
				parse_selector(BoxScoreSelectors::PlayByPlayWrapper)?,
				parse_selector(BoxScoreSelectors::PlayByPlayTable)?,
			),
			visitor_drives: (
				parse_selector(BoxScoreSelectors::VisitorDrivesWrapper)?,
				parse_selector(BoxScoreSelectors::VisitorDrivesTable)?,
			),
			home_drives: (
				parse_selector(BoxScoreSelectors::HomeDrivesWrapper)?,
				parse_selector(BoxScoreSelectors::HomeDrivesTable)?,
			),
			caption: parse_selector(BoxScoreSelectors::Caption)?,
			header_row: parse_selector(BoxScoreSelectors::HeaderRow)?,
			header_cell: parse_selector(BoxScoreSelectors::HeaderCell)?,
			body_row: parse_selector(BoxScoreSelectors::BodyRow)?,
			cell: parse_selector(BoxScoreSelectors::Cell)?,
		})
	}
}

/// A table's header names and cell text, detached from the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TextTable {
	id: &'static str,
	headers: Vec<String>,
	rows: Vec<Vec<String>>,
}

impl TextTable {
	fn read(id: &'static str, table: ElementRef<'_>, selectors: &ParsedSelectors) -> Self {
		let headers = table
			.select(&selectors.header_row)
			.next()
			.map(|row| row.select(&selectors.header_cell).map(cell_text).collect())
			.unwrap_or_default();

		let rows = table
			.select(&selectors.body_row)
			.filter(|row| !row.value().attr("class").is_some_and(|class| class.contains("thead")))
			.map(|row| row.select(&selectors.cell).map(cell_text).collect())
			.collect();

		Self { id, headers, rows }
	}

	fn column(&self, name: &'static str) -> Result<usize, BoxScoreError> {
		self.headers
			.iter()
			.position(|header| header == name)
			.ok_or(BoxScoreError::MissingColumn { id: self.id, column: name })
	}
}

fn cell_text(element: ElementRef<'_>) -> String {
	element.text().collect::<String>().trim().to_string()
}

fn cell(row: &[String], index: usize) -> String {
	row.get(index).cloned().unwrap_or_default()
}

/// The site ships most tables inside an HTML comment in their wrapper; read
/// the table directly when it is live, otherwise re-parse the comment.
fn extract_table(
	document: &Html,
	(wrapper, table): &(Selector, Selector),
	id: &'static str,
	selectors: &ParsedSelectors,
) -> Result<(TextTable, Option<String>), BoxScoreError> {
	let wrapper = document.select(wrapper).next().ok_or(BoxScoreError::MissingTable { id })?;
	let caption = wrapper.select(&selectors.caption).next().map(cell_text);

	if let Some(live) = wrapper.select(table).next() {
		return Ok((TextTable::read(id, live, selectors), caption));
	}

	let commented = wrapper
		.descendants()
		.find_map(|node| node.value().as_comment().map(|comment| (**comment).to_string()))
		.ok_or(BoxScoreError::MissingTable { id })?;
	let fragment = Html::parse_fragment(&commented);
	let element = fragment.select(table).next().ok_or(BoxScoreError::MissingTable { id })?;

	Ok((TextTable::read(id, element, selectors), caption))
}

fn drive_rows(
	document: &Html,
	selectors: &(Selector, Selector),
	id: &'static str,
	parsed: &ParsedSelectors,
) -> Result<Vec<RawDriveRow>, BoxScoreError> {
	let (table, caption) = extract_table(document, selectors, id, parsed)?;
	let team = caption
		.as_deref()
		.and_then(|text| text.split_whitespace().next())
		.ok_or(BoxScoreError::MissingTeamName { id })?
		.to_string();

	let quarter = table.column("Quarter")?;
	let time = table.column("Time")?;

	Ok(table
		.rows
		.iter()
		.map(|row| RawDriveRow {
			quarter: cell(row, quarter),
			time: cell(row, time),
			team: team.clone(),
		})
		.filter(|drive| !drive.quarter.is_empty())
		.collect())
}

/// Pulls the play-by-play and both drive tables out of a saved box score.
///
/// Rows without a location (coin toss, timeouts, quarter breaks) are not
/// plays and are dropped here; the coin toss is mined for the opening
/// receiver first.
pub fn parse_box_score(document: &Html, selectors: &ParsedSelectors) -> Result<GameTables, BoxScoreError> {
	let (pbp, _) = extract_table(document, &selectors.play_by_play, "pbp", selectors)?;

	let quarter = pbp.column("Quarter")?;
	let time = pbp.column("Time")?;
	let down = pbp.column("Down")?;
	let to_go = pbp.column("ToGo")?;
	let location = pbp.column("Location")?;
	let detail = pbp.column("Detail")?;
	let epb = pbp.column("EPB").ok();
	let epa = pbp.column("EPA").ok();

	let (visitor_col, home_col) = match detail.checked_sub(location) {
		Some(3) => (location + 1, location + 2),
		_ => return Err(BoxScoreError::MissingScoreColumns),
	};

	let opening_receiver = pbp
		.rows
		.iter()
		.filter(|row| cell(row, location).is_empty())
		.find_map(|row| OPENING_RECEIVER_RE.captures(&cell(row, detail)).map(|caps| caps[1].to_string()));

	let plays: Vec<RawPlayRow> = pbp
		.rows
		.iter()
		.filter(|row| !cell(row, location).is_empty())
		.map(|row| RawPlayRow {
			quarter: cell(row, quarter),
			time: cell(row, time),
			down: cell(row, down),
			to_go: cell(row, to_go),
			location: cell(row, location),
			visitor_score: cell(row, visitor_col),
			home_score: cell(row, home_col),
			detail: cell(row, detail),
			epb: epb.map(|i| cell(row, i)).unwrap_or_default(),
			epa: epa.map(|i| cell(row, i)).unwrap_or_default(),
		})
		.collect();

	let mut drives = drive_rows(document, &selectors.visitor_drives, "vis_drives", selectors)?;
	drives.extend(drive_rows(document, &selectors.home_drives, "home_drives", selectors)?);

	debug!(plays = plays.len(), drives = drives.len(), "box score tables extracted");

	Ok(GameTables {
		visitor: pbp.headers[visitor_col].clone(),
		home: pbp.headers[home_col].clone(),
		drives,
		plays,
		opening_receiver,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page(pbp_rows: &str) -> String {
		format!(
			r#"<html><body>
<div class="table_wrapper" id="all_pbp"><h2>Full Play-By-Play</h2><!--
<table id="pbp"><thead><tr><th>Quarter</th><th>Time</th><th>Down</th><th>ToGo</th><th>Location</th><th>DET</th><th>KAN</th><th>Detail</th><th>EPB</th><th>EPA</th></tr></thead>
<tbody>{pbp_rows}</tbody></table>
--></div>
<div id="all_vis_drives"><h2>Lions Drives</h2><!--
<table id="vis_drives"><thead><tr><th>#</th><th>Quarter</th><th>Time</th><th>LOS</th></tr></thead>
<tbody><tr><th>1</th><td>1</td><td>15:00</td><td>DET 25</td></tr></tbody></table>
--></div>
<div id="all_home_drives"><h2>Chiefs Drives</h2>
<table id="home_drives"><thead><tr><th>#</th><th>Quarter</th><th>Time</th><th>LOS</th></tr></thead>
<tbody><tr><th>1</th><td>1</td><td>12:30</td><td>KAN 20</td></tr><tr class="thead"><th>#</th><th>Quarter</th><th>Time</th><th>LOS</th></tr></tbody></table>
</div>
</body></html>"#
		)
	}

	const ROWS: &str = r#"
<tr><th></th><td></td><td></td><td></td><td></td><td>0</td><td>0</td><td>Chiefs won the coin toss and deferred, Lions to receive the opening kickoff.</td><td></td><td></td></tr>
<tr><th>1</th><td>15:00</td><td></td><td></td><td>KAN 35</td><td>0</td><td>0</td><td>H.Butker kicks off 65 yards, touchback.</td><td>0.00</td><td>0.61</td></tr>
<tr class="divider"><th>1</th><td>15:00</td><td>1</td><td>10</td><td>DET 25</td><td>0</td><td>0</td><td>J.Goff pass complete short right to A.St. Brown for 9 yards</td><td>0.61</td><td>1.22</td></tr>
<tr><th>1</th><td>14:20</td><td></td><td></td><td></td><td>0</td><td>0</td><td>Timeout #1 by Kansas City Chiefs</td><td></td><td></td></tr>
"#;

	#[test]
	fn test_parse_commented_tables() {
		let document = Html::parse_document(&page(ROWS));
		let tables = parse_box_score(&document, &ParsedSelectors::new().unwrap()).unwrap();

		assert_eq!(tables.visitor, "DET");
		assert_eq!(tables.home, "KAN");
		assert_eq!(tables.opening_receiver.as_deref(), Some("Lions"));
		assert_eq!(tables.plays.len(), 2);
		assert_eq!(tables.plays[1].location, "DET 25");
		assert_eq!(tables.plays[1].down, "1");
		assert_eq!(tables.plays[1].epa, "1.22");
		assert_eq!(tables.plays[0].detail, "H.Butker kicks off 65 yards, touchback.");
	}

	#[test]
	fn test_drive_tables_from_comment_and_live_markup() {
		let document = Html::parse_document(&page(ROWS));
		let tables = parse_box_score(&document, &ParsedSelectors::new().unwrap()).unwrap();

		assert_eq!(
			tables.drives,
			vec![
				RawDriveRow {
					quarter: "1".to_string(),
					time: "15:00".to_string(),
					team: "Lions".to_string(),
				},
				RawDriveRow {
					quarter: "1".to_string(),
					time: "12:30".to_string(),
					team: "Chiefs".to_string(),
				},
			]
		);
	}

	#[test]
	fn test_missing_play_by_play() {
		let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");

		assert_eq!(
			parse_box_score(&document, &ParsedSelectors::new().unwrap()),
			Err(BoxScoreError::MissingTable { id: "pbp" })
		);
	}
}
