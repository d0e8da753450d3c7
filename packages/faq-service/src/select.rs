use faq_corpus::{Corpus, CorpusEntry};
use faq_domain::{KeywordSet, Language, Normalizer, jaccard, partial_ratio};

use crate::policy::Metric;

/// A single question as seen by the matcher. Lives for one request.
#[derive(Clone, Debug)]
pub struct Query {
	pub text: String,
	pub language: Language,
	pub keywords: KeywordSet,
}
impl Query {
	pub fn new(text: impl Into<String>, language: Language, normalizer: &Normalizer) -> Self {
		let text = text.into();
		let keywords = normalizer.keywords(&text, language);

		Self { text, language, keywords }
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchOutcome {
	/// Position of the winning entry in corpus order.
	pub index: usize,
	pub score: f32,
}

pub fn score_entry(query: &Query, entry: &CorpusEntry, metric: Metric) -> f32 {
	match metric {
		Metric::Jaccard { .. } => jaccard(&query.keywords, entry.keywords(query.language)),
		Metric::PartialRatio { .. } => {
			let question = entry.question(query.language).to_lowercase();

			f32::from(partial_ratio(&query.text.trim().to_lowercase(), &question))
		},
	}
}

/// Scores every entry into a request-local vector in corpus order.
pub fn score_corpus(query: &Query, corpus: &Corpus, metric: Metric) -> Vec<f32> {
	corpus.iter().map(|entry| score_entry(query, entry, metric)).collect()
}

/// Picks the first entry with the highest eligible score.
///
/// Only a strictly greater score replaces the current best, so earlier entries win ties. Entries
/// below the metric's threshold are never eligible; `None` means nothing qualified.
pub fn select_best(query: &Query, corpus: &Corpus, metric: Metric) -> Option<MatchOutcome> {
	let scores = score_corpus(query, corpus, metric);
	let threshold = metric.threshold();
	let mut best: Option<MatchOutcome> = None;

	for (index, score) in scores.into_iter().enumerate() {
		if threshold.map(|min| score < min).unwrap_or(false) {
			continue;
		}
		if best.map(|current| score > current.score).unwrap_or(true) {
			best = Some(MatchOutcome { index, score });
		}
	}

	best
}
