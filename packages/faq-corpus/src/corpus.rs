use crate::{CorpusEntry, Error, QaRow, Result};
use faq_domain::Normalizer;

/// Immutable, ordered FAQ table. Row order is the tie-break order for matching.
#[derive(Clone, Debug)]
pub struct Corpus {
	entries: Vec<CorpusEntry>,
	dropped: usize,
}
impl Corpus {
	/// Builds entries from raw rows, discarding any row with a missing field as a whole.
	pub fn from_rows<I>(rows: I, normalizer: &Normalizer) -> Result<Self>
	where
		I: IntoIterator<Item = QaRow>,
	{
		let mut entries = Vec::new();
		let mut dropped = 0_usize;

		for (idx, row) in rows.into_iter().enumerate() {
			if let Some(field) = row.missing_field() {
				tracing::debug!(row = idx + 1, field, "Dropping corpus row with a missing field.");

				dropped += 1;

				continue;
			}
			if let Some(entry) = CorpusEntry::from_row(row, normalizer) {
				entries.push(entry);
			}
		}

		if entries.is_empty() {
			return Err(Error::Empty { dropped });
		}

		Ok(Self { entries, dropped })
	}

	pub fn entries(&self) -> &[CorpusEntry] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
		self.entries.iter()
	}

	pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
		self.entries.get(index)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Source rows discarded during load.
	pub fn dropped(&self) -> usize {
		self.dropped
	}
}
impl<'a> IntoIterator for &'a Corpus {
	type IntoIter = std::slice::Iter<'a, CorpusEntry>;
	type Item = &'a CorpusEntry;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
