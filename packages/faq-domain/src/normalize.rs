use std::collections::{BTreeSet, HashSet};

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::{language::Language, stopwords};

/// Ordered so the same text always yields a byte-identical set.
pub type KeywordSet = BTreeSet<String>;

/// Keyword extraction with an immutable stopword table built once at startup.
#[derive(Clone, Debug)]
pub struct Normalizer {
	stopwords: HashSet<String>,
}
impl Normalizer {
	pub fn new<I, S>(extra_stopwords: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut stopwords: HashSet<String> =
			stopwords::PRIMARY.iter().map(|word| word.to_string()).collect();

		for word in extra_stopwords {
			let folded = fold(word.as_ref().trim(), Language::Primary);

			if !folded.is_empty() {
				stopwords.insert(folded);
			}
		}

		Self { stopwords }
	}

	pub fn from_config(cfg: &faq_config::Normalizer) -> Self {
		Self::new(&cfg.extra_stopwords)
	}

	pub fn is_stopword(&self, token: &str) -> bool {
		self.stopwords.contains(token)
	}

	/// Splits `text` into word tokens and keeps the meaningful ones.
	///
	/// Tokens without a letter or digit (punctuation of any script, dashes, quotes) never become
	/// keywords. Primary-language text is lowercased and filtered through the stopword table.
	/// Secondary text keeps its casing and every word. Empty input yields an empty set.
	pub fn keywords(&self, text: &str, language: Language) -> KeywordSet {
		let folded = fold(text, language);
		let mut out = KeywordSet::new();

		for token in folded.unicode_words() {
			if language == Language::Primary && self.is_stopword(token) {
				continue;
			}

			out.insert(token.to_string());
		}

		out
	}
}
impl Default for Normalizer {
	fn default() -> Self {
		Self::new(std::iter::empty::<&str>())
	}
}

fn fold(text: &str, language: Language) -> String {
	// Typographic apostrophe, so "don’t" meets the stopword table as "don't".
	let normalized: String =
		text.nfkc().map(|ch| if ch == '\u{2019}' { '\'' } else { ch }).collect();

	match language {
		Language::Primary => normalized.to_lowercase(),
		Language::Secondary => normalized,
	}
}
