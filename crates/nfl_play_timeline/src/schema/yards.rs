use crate::error::YardsError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static YARDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"for (-?\d+) yards?|for no gain|no gain").expect("yards regex is valid"));

/// Yardage as written in the play description, independent of spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribedYards(pub i32);

impl FromStr for DescribedYards {
	type Err = YardsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(caps) = YARDS_RE.captures(s) {
			caps.get(1).map_or(Ok(Self(0)), |yards| {
				yards
					.as_str()
					.parse::<i32>()
					.map(Self)
					.map_err(|_| YardsError::InvalidYardsFormat(s.to_string()))
			})
		} else if s.contains("pass incomplete") {
			Ok(Self(0))
		} else {
			Err(YardsError::NoYardsInfo)
		}
	}
}
