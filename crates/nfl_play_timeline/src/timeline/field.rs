use crate::schema::{FieldMark, PlayType};

/// Distance from the possessing team's own goal line, 0-100.
///
/// A mark in any territory other than the possessor's (including an unknown
/// possessor, or the sideless midfield mark) counts as opponent territory.
pub fn absolute_position(possession: Option<&str>, mark: &FieldMark) -> u8 {
	if possession == mark.side() {
		mark.yardline()
	} else {
		100 - mark.yardline()
	}
}

/// What the yardage pass needs from one play.
#[derive(Debug, Clone, Copy)]
pub struct Snap<'a> {
	pub play_type: PlayType,
	pub possession: Option<&'a str>,
	pub mark: &'a FieldMark,
}

impl Snap<'_> {
	pub fn position(&self) -> u8 {
		absolute_position(self.possession, self.mark)
	}
}

/// Yards between each snap and the next one.
///
/// Positions are possession-relative, so when the ball changes hands while
/// the printed side stays put the current spot is flipped into the new
/// possessor's frame before differencing. Special teams and the last snap
/// are 0.
pub fn yardage(snaps: &[Snap<'_>]) -> Vec<i32> {
	let mut gained: Vec<i32> = snaps
		.windows(2)
		.map(|pair| {
			let (current, next) = (&pair[0], &pair[1]);
			if !current.play_type.is_scrimmage() {
				return 0;
			}

			let mut from = i32::from(current.position());
			if current.possession != next.possession && current.mark.side() == next.mark.side() {
				from = 100 - from;
			}

			i32::from(next.position()) - from
		})
		.collect();

	if !snaps.is_empty() {
		gained.push(0);
	}
	gained
}
