use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("could not open {path} for appending")]
	Open { path: PathBuf, source: io::Error },

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl ExportError {
	pub fn open_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Open { path: path.into(), source }
	}
}
