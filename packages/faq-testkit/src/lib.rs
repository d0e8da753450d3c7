use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};

use serde_json::Map;

use faq_config::{
	Config, Corpus as CorpusConfig, CorpusColumns, Matching, Normalizer as NormalizerConfig,
	Providers, Service, TranslationProviderConfig,
};
use faq_corpus::{Corpus, QaRow};
use faq_domain::Normalizer;
use faq_providers::{BoxFuture, Error, Result, Translator};

/// The eight-row cancer-awareness sheet shipped under `data/`. One row lacks an English answer.
pub const WOMEN_CANCER_CSV: &str = include_str!("../../../data/women_cancer_qa.csv");

pub const CERVICAL_ANSWER_EN: &str = "Cervical cancer is...";
pub const CERVICAL_ANSWER_BN: &str = "জরায়ুমুখ ক্যান্সার হলো...";
pub const BREAST_ANSWER_EN: &str = "Breast cancer causes...";
pub const BREAST_ANSWER_BN: &str = "স্তন ক্যান্সারের কারণ হলো...";

pub fn row(q_en: &str, q_bn: &str, a_en: &str, a_bn: &str) -> QaRow {
	QaRow {
		question_primary: Some(q_en.to_string()),
		question_secondary: Some(q_bn.to_string()),
		answer_primary: Some(a_en.to_string()),
		answer_secondary: Some(a_bn.to_string()),
	}
}

/// Two entries: cervical cancer first, breast cancer causes second.
pub fn sample_rows() -> Vec<QaRow> {
	vec![
		row(
			"what is cervical cancer",
			"জরায়ুমুখ ক্যান্সার কী",
			CERVICAL_ANSWER_EN,
			CERVICAL_ANSWER_BN,
		),
		row(
			"what causes breast cancer",
			"স্তন ক্যান্সারের কারণ কী",
			BREAST_ANSWER_EN,
			BREAST_ANSWER_BN,
		),
	]
}

pub fn sample_corpus() -> Corpus {
	Corpus::from_rows(sample_rows(), &Normalizer::default()).expect("Sample corpus must build.")
}

pub fn women_cancer_corpus() -> Corpus {
	faq_corpus::load_from_reader(
		WOMEN_CANCER_CSV.as_bytes(),
		faq_config::FORMAT_CSV,
		&CorpusColumns::default(),
		&Normalizer::default(),
	)
	.expect("Bundled corpus must load.")
}

pub fn translation_provider() -> TranslationProviderConfig {
	TranslationProviderConfig {
		provider_id: "test".to_string(),
		api_base: "http://127.0.0.1:1".to_string(),
		path: "/translate".to_string(),
		api_key: None,
		timeout_ms: 200,
		probe_chars: 64,
		default_headers: Map::new(),
	}
}

/// Jaccard, script classification, no translation provider.
pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
			cors_allowed_origins: vec!["http://localhost:3000".to_string()],
		},
		corpus: CorpusConfig {
			path: "data/women_cancer_qa.csv".to_string(),
			format: Some(faq_config::FORMAT_CSV.to_string()),
			columns: CorpusColumns::default(),
		},
		matching: Matching::default(),
		normalizer: NormalizerConfig::default(),
		providers: Providers::default(),
	}
}

/// Legacy configuration: partial ratio with the 80/100 threshold.
pub fn legacy_config() -> Config {
	let mut cfg = test_config();

	cfg.matching.metric = faq_config::METRIC_PARTIAL_RATIO.to_string();

	cfg
}

pub fn with_translation(mut cfg: Config) -> Config {
	cfg.providers.translation = Some(translation_provider());

	cfg
}

/// Returns the mapped translation for known inputs and echoes everything else.
#[derive(Default)]
pub struct MapTranslator {
	map: HashMap<String, String>,
	calls: Arc<AtomicUsize>,
}
impl MapTranslator {
	pub fn new<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			map: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl Translator for MapTranslator {
	fn translate<'a>(
		&'a self,
		_cfg: &'a TranslationProviderConfig,
		text: &'a str,
		_source: &'a str,
		_target: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let translated = self.map.get(text).cloned().unwrap_or_else(|| text.to_string());

		Box::pin(async move { Ok(translated) })
	}
}

/// Fails every request.
pub struct FailingTranslator;
impl Translator for FailingTranslator {
	fn translate<'a>(
		&'a self,
		_cfg: &'a TranslationProviderConfig,
		_text: &'a str,
		_source: &'a str,
		_target: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move {
			Err(Error::InvalidResponse { message: "Translation service unavailable.".to_string() })
		})
	}
}

/// Answers only after `delay`, with a translation that always differs from the input.
pub struct SlowTranslator {
	pub delay: Duration,
}
impl Translator for SlowTranslator {
	fn translate<'a>(
		&'a self,
		_cfg: &'a TranslationProviderConfig,
		text: &'a str,
		_source: &'a str,
		_target: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		let delay = self.delay;

		Box::pin(async move {
			tokio::time::sleep(delay).await;

			Ok(format!("translated: {text}"))
		})
	}
}
