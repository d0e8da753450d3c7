use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to open corpus at {path:?}.")]
	Open { path: PathBuf, source: std::io::Error },
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	#[error("Corpus source is missing column {column:?}.")]
	MissingColumn { column: String },
	#[error("Corpus row {row} must be an object.")]
	InvalidRow { row: usize },
	#[error("Unsupported corpus format {format:?}.")]
	UnsupportedFormat { format: String },
	#[error("Corpus has no usable rows; {dropped} row(s) were dropped.")]
	Empty { dropped: usize },
}
