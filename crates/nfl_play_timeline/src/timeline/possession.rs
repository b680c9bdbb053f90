use crate::schema::TeamDirectory;
use tracing::warn;

/// A drive reduced to what possession lookup needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveStart {
	pub start_second: u32,
	pub team: String,
}

/// Answers "who had the ball at second `t`" from drive start times, both
/// counted in whole seconds since kickoff.
///
/// Team names are normalised through the directory once, at construction.
#[derive(Debug, Clone)]
pub struct PossessionResolver {
	starts: Vec<DriveStart>,
}

impl PossessionResolver {
	/// `drives` must already be in ascending start order.
	pub fn new(drives: impl IntoIterator<Item = DriveStart>, teams: &TeamDirectory) -> Self {
		let starts: Vec<DriveStart> = drives
			.into_iter()
			.map(|drive| {
				let team = teams.abbreviation(&drive.team).map_or_else(
					|| {
						warn!(team = %drive.team, "drive team not in directory, keeping raw name");
						drive.team.clone()
					},
					str::to_string,
				);
				DriveStart { team, ..drive }
			})
			.collect();

		debug_assert!(starts.windows(2).all(|pair| pair[0].start_second <= pair[1].start_second));

		Self { starts }
	}

	/// Team of the last drive starting at or before `play_second`.
	pub fn resolve(&self, play_second: u32) -> Option<&str> {
		let preceding = self.starts.partition_point(|drive| drive.start_second <= play_second);
		preceding.checked_sub(1).map(|index| self.starts[index].team.as_str())
	}

	pub fn drives(&self) -> &[DriveStart] {
		&self.starts
	}
}
