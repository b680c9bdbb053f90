pub mod config {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum BoxScoreSelectors {
		PlayByPlayWrapper,
		PlayByPlayTable,
		VisitorDrivesWrapper,
		VisitorDrivesTable,
		HomeDrivesWrapper,
		HomeDrivesTable,
		Caption,
		HeaderRow,
		HeaderCell,
		BodyRow,
		Cell,
	}

	impl BoxScoreSelectors {
		pub const fn selector(&self) -> &'static str {
			match self {
				Self::PlayByPlayWrapper => "div#all_pbp",
				Self::PlayByPlayTable => "table#pbp",
				Self::VisitorDrivesWrapper => "div#all_vis_drives",
				Self::VisitorDrivesTable => "table#vis_drives",
				Self::HomeDrivesWrapper => "div#all_home_drives",
				Self::HomeDrivesTable => "table#home_drives",
				Self::Caption => "h2",
				Self::HeaderRow => "thead tr",
				Self::HeaderCell => "th",
				Self::BodyRow => "tbody tr",
				Self::Cell => "th, td",
			}
		}
	}
}
