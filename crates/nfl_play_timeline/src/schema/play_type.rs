use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayType {
	Pass,
	#[serde(rename = "Special Teams")]
	SpecialTeams,
	Run,
}

impl PlayType {
	/// Keyword match on the play description, first match wins.
	///
	/// There is no negation handling: a run with "no pass interference" in its
	/// penalty text still reads as a pass.
	pub fn classify(description: &str) -> Self {
		let lowercase = description.to_lowercase();

		match lowercase {
			s if s.contains("pass") || s.contains("scrambles") => Self::Pass,
			s if s.contains("kicks") || s.contains("punts") => Self::SpecialTeams,
			_ => Self::Run,
		}
	}

	/// Only snaps from scrimmage carry a yardage between spots.
	pub const fn is_scrimmage(self) -> bool {
		matches!(self, Self::Pass | Self::Run)
	}
}

impl fmt::Display for PlayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Pass => "Pass",
			Self::SpecialTeams => "Special Teams",
			Self::Run => "Run",
		};
		f.write_str(label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_play_type_classify() {
		let test_cases = vec![
			("Pass complete for 12 yards", PlayType::Pass),
			("punts 40 yards", PlayType::SpecialTeams),
			("runs up the middle", PlayType::Run),
			("H.Butker kicks off 65 yards, touchback.", PlayType::SpecialTeams),
			("(Shotgun) J.Goff pass short middle to A.St. Brown for 9 yards", PlayType::Pass),
			("P.Mahomes scrambles right end to KAN 48 for 6 yards", PlayType::Pass),
			("J.Fox punts 46 yards, out of bounds.", PlayType::SpecialTeams),
			("D.Montgomery left guard to DET 31 for 3 yards", PlayType::Run),
			("R.Patterson up the middle, no gain", PlayType::Run),
		];

		for (input, expected) in test_cases {
			assert_eq!(PlayType::classify(input), expected, "Failed for input: {input}");
		}
	}

	#[test]
	fn test_play_type_case_insensitivity() {
		assert_eq!(PlayType::classify("PASS INCOMPLETE"), PlayType::Pass);
		assert_eq!(PlayType::classify("Punts 40 Yards"), PlayType::SpecialTeams);
	}

	#[test]
	fn test_pass_wins_over_special_teams() {
		assert_eq!(PlayType::classify("fake punts, pass to the tight end"), PlayType::Pass);
	}

	#[test]
	fn test_negated_pass_still_reads_as_pass() {
		assert_eq!(PlayType::classify("run left, no pass interference called"), PlayType::Pass);
	}

	#[test]
	fn test_display_labels() {
		assert_eq!(PlayType::SpecialTeams.to_string(), "Special Teams");
		assert!(PlayType::Run.is_scrimmage());
		assert!(!PlayType::SpecialTeams.is_scrimmage());
	}
}
