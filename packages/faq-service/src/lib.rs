pub mod policy;
pub mod select;

mod error;
mod translate;

pub use error::{Error, Result};
pub use faq_providers::{BoxFuture, HttpTranslator, Translator};
pub use policy::{Classifier, MatchPolicy, Metric, resolve_policy};
pub use select::{MatchOutcome, Query, score_corpus, score_entry, select_best};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use faq_config::Config;
use faq_corpus::Corpus;
use faq_domain::{Language, Normalizer, classify_script};

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
	pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
	pub answer: String,
}

/// Full account of how one question was answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
	pub language: Language,
	/// Winning entry in corpus order, or `None` when the fallback message was returned.
	pub matched_row: Option<usize>,
	pub score: Option<f32>,
	/// Set when the answer came from the back-translation path.
	pub translated: bool,
	pub answer: String,
}

pub struct FaqService {
	pub cfg: Config,
	pub policy: MatchPolicy,
	corpus: Arc<Corpus>,
	normalizer: Normalizer,
	translator: Arc<dyn Translator>,
}
impl FaqService {
	/// Loads the configured corpus. A load failure means the service must not start.
	pub fn new(cfg: Config) -> Result<Self> {
		let normalizer = Normalizer::from_config(&cfg.normalizer);
		let corpus = faq_corpus::load(&cfg.corpus, &normalizer)?;

		Self::with_corpus(cfg, corpus, Arc::new(HttpTranslator))
	}

	pub fn with_corpus(cfg: Config, corpus: Corpus, translator: Arc<dyn Translator>) -> Result<Self> {
		faq_config::validate(&cfg)?;

		let normalizer = Normalizer::from_config(&cfg.normalizer);
		let policy = resolve_policy(&cfg);

		tracing::info!(
			metric = policy.metric.label(),
			classifier = ?policy.classifier,
			translate_fallback = policy.translate_fallback,
			entries = corpus.len(),
			"FAQ service ready."
		);

		Ok(Self { cfg, policy, corpus: Arc::new(corpus), normalizer, translator })
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	pub async fn answer(&self, question: &str) -> AskResponse {
		AskResponse { answer: self.resolve(question).await.answer }
	}

	pub async fn classify(&self, text: &str) -> Language {
		match (self.policy.classifier, self.cfg.providers.translation.as_ref()) {
			(Classifier::Translation, Some(provider)) =>
				translate::classify_by_round_trip(self.translator.as_ref(), provider, text).await,
			_ => classify_script(text),
		}
	}

	pub async fn resolve(&self, question: &str) -> Resolution {
		let language = self.classify(question).await;
		let query = Query::new(question, language, &self.normalizer);

		if let Some(outcome) = select_best(&query, &self.corpus, self.policy.metric) {
			tracing::debug!(
				language = language.code(),
				row = outcome.index,
				score = outcome.score,
				metric = self.policy.metric.label(),
				"Matched corpus entry."
			);

			return Resolution {
				language,
				matched_row: Some(outcome.index),
				score: Some(outcome.score),
				translated: false,
				answer: self.entry_answer(outcome.index, language),
			};
		}
		if self.policy.translate_fallback
			&& language == Language::Secondary
			&& let Some(resolution) = self.resolve_via_translation(&query).await
		{
			return resolution;
		}

		tracing::debug!(language = language.code(), "No corpus entry qualified; using fallback.");

		Resolution {
			language,
			matched_row: None,
			score: None,
			translated: false,
			answer: self.fallback(language).to_string(),
		}
	}

	pub fn fallback(&self, language: Language) -> &str {
		match language {
			Language::Primary => &self.cfg.matching.fallback.primary,
			Language::Secondary => &self.cfg.matching.fallback.secondary,
		}
	}

	/// Matches a secondary-language query against primary questions and translates the answer
	/// back. `None` on any translation failure or when nothing clears the threshold.
	async fn resolve_via_translation(&self, query: &Query) -> Option<Resolution> {
		let provider = self.cfg.providers.translation.as_ref()?;
		let secondary = Language::Secondary.code();
		let primary = Language::Primary.code();
		let translated_query = translate::translate_or_none(
			self.translator.as_ref(),
			provider,
			&query.text,
			secondary,
			primary,
		)
		.await?;
		let primary_query = Query::new(translated_query, Language::Primary, &self.normalizer);
		let outcome = select_best(&primary_query, &self.corpus, self.policy.metric)?;
		let answer = translate::translate_or_none(
			self.translator.as_ref(),
			provider,
			&self.entry_answer(outcome.index, Language::Primary),
			primary,
			secondary,
		)
		.await?;

		tracing::debug!(
			row = outcome.index,
			score = outcome.score,
			"Matched corpus entry through back-translation."
		);

		Some(Resolution {
			language: Language::Secondary,
			matched_row: Some(outcome.index),
			score: Some(outcome.score),
			translated: true,
			answer,
		})
	}

	fn entry_answer(&self, index: usize, language: Language) -> String {
		self.corpus.get(index).map(|entry| entry.answer(language).to_string()).unwrap_or_default()
	}
}
