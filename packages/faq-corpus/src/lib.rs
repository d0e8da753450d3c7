mod corpus;
mod error;
mod models;

pub mod source;

pub use corpus::Corpus;
pub use error::Error;
pub use models::{CorpusEntry, QaRow};

pub type Result<T, E = Error> = std::result::Result<T, E>;

use std::{fs::File, io::BufReader, io::Read, path::Path};

use faq_config::{FORMAT_CSV, FORMAT_JSON};
use faq_domain::Normalizer;

/// Loads the corpus named by the config. Any failure here must stop the process from serving.
pub fn load(cfg: &faq_config::Corpus, normalizer: &Normalizer) -> Result<Corpus> {
	let path = Path::new(&cfg.path);
	let file =
		File::open(path).map_err(|err| Error::Open { path: path.to_path_buf(), source: err })?;
	let format = cfg.format.as_deref().unwrap_or_default();
	let corpus = load_from_reader(BufReader::new(file), format, &cfg.columns, normalizer)?;

	tracing::info!(
		path = %path.display(),
		entries = corpus.len(),
		dropped = corpus.dropped(),
		"Corpus loaded."
	);

	Ok(corpus)
}

pub fn load_from_reader<R>(
	reader: R,
	format: &str,
	columns: &faq_config::CorpusColumns,
	normalizer: &Normalizer,
) -> Result<Corpus>
where
	R: Read,
{
	let rows = match format {
		FORMAT_CSV => source::read_csv(reader, columns)?,
		FORMAT_JSON => source::read_json(reader, columns)?,
		other => return Err(Error::UnsupportedFormat { format: other.to_string() }),
	};

	Corpus::from_rows(rows, normalizer)
}
