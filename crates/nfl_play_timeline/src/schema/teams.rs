use std::collections::HashMap;

/// Franchise abbreviations as printed in box-score locations and score
/// headers, paired with the mascot used in drive table captions.
const PRO_FOOTBALL_REFERENCE_TEAMS: [(&str, &str); 32] = [
	("ARI", "Cardinals"),
	("ATL", "Falcons"),
	("BAL", "Ravens"),
	("BUF", "Bills"),
	("CAR", "Panthers"),
	("CHI", "Bears"),
	("CIN", "Bengals"),
	("CLE", "Browns"),
	("DAL", "Cowboys"),
	("DEN", "Broncos"),
	("DET", "Lions"),
	("GNB", "Packers"),
	("HOU", "Texans"),
	("IND", "Colts"),
	("JAX", "Jaguars"),
	("KAN", "Chiefs"),
	("LAC", "Chargers"),
	("LAR", "Rams"),
	("LVR", "Raiders"),
	("MIA", "Dolphins"),
	("MIN", "Vikings"),
	("NOR", "Saints"),
	("NWE", "Patriots"),
	("NYG", "Giants"),
	("NYJ", "Jets"),
	("PHI", "Eagles"),
	("PIT", "Steelers"),
	("SEA", "Seahawks"),
	("SFO", "49ers"),
	("TAM", "Buccaneers"),
	("TEN", "Titans"),
	("WAS", "Commanders"),
];

/// Immutable abbreviation <-> mascot lookup, built once and shared by
/// reference with whatever needs to normalise team names.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
	by_mascot: HashMap<String, String>,
	by_abbreviation: HashMap<String, String>,
}

impl TeamDirectory {
	pub fn new<I, A, M>(entries: I) -> Self
	where
		I: IntoIterator<Item = (A, M)>,
		A: Into<String>,
		M: Into<String>,
	{
		let mut directory = Self::default();
		for (abbreviation, mascot) in entries {
			let (abbreviation, mascot) = (abbreviation.into(), mascot.into());
			directory.by_mascot.insert(mascot.to_lowercase(), abbreviation.clone());
			directory.by_abbreviation.insert(abbreviation, mascot);
		}
		directory
	}

	pub fn pro_football_reference() -> Self {
		Self::new(PRO_FOOTBALL_REFERENCE_TEAMS)
	}

	/// Abbreviation for a mascot or an abbreviation; `None` when unknown.
	pub fn abbreviation<'a>(&'a self, name: &str) -> Option<&'a str> {
		let name = name.trim();
		if let Some((abbreviation, _)) = self.by_abbreviation.get_key_value(name) {
			return Some(abbreviation.as_str());
		}
		self.by_mascot.get(&name.to_lowercase()).map(String::as_str)
	}

	pub fn mascot(&self, abbreviation: &str) -> Option<&str> {
		self.by_abbreviation.get(abbreviation.trim()).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.by_abbreviation.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_abbreviation.is_empty()
	}
}
