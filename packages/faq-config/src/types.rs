use serde::Deserialize;
use serde_json::{Map, Value};

pub const METRIC_JACCARD: &str = "jaccard";
pub const METRIC_PARTIAL_RATIO: &str = "partial_ratio";
pub const CLASSIFIER_SCRIPT: &str = "script";
pub const CLASSIFIER_TRANSLATION: &str = "translation";
pub const FORMAT_CSV: &str = "csv";
pub const FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub corpus: Corpus,
	#[serde(default)]
	pub matching: Matching,
	#[serde(default)]
	pub normalizer: Normalizer,
	#[serde(default)]
	pub providers: Providers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
	#[serde(default = "default_cors_allowed_origins")]
	pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
	pub path: String,
	/// Optional. Inferred from the file extension when absent.
	pub format: Option<String>,
	#[serde(default)]
	pub columns: CorpusColumns,
}

/// Header names of the four required columns in the corpus source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusColumns {
	pub question_primary: String,
	pub question_secondary: String,
	pub answer_primary: String,
	pub answer_secondary: String,
}
impl Default for CorpusColumns {
	fn default() -> Self {
		Self {
			question_primary: "Queries".to_string(),
			question_secondary: "Queries_Bengali".to_string(),
			answer_primary: "Answers".to_string(),
			answer_secondary: "Ans_Bengali".to_string(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Matching {
	/// "jaccard" or "partial_ratio".
	pub metric: String,
	/// "script" or "translation".
	pub classifier: String,
	/// Optional minimum Jaccard score. Unset means the best entry is always returned.
	pub min_score: Option<f32>,
	/// Acceptance threshold on the 0-100 partial ratio scale.
	pub partial_ratio_threshold: u8,
	/// Retry unmatched secondary-language queries through translation. Partial ratio only.
	pub translate_fallback: bool,
	pub fallback: FallbackMessages,
}
impl Default for Matching {
	fn default() -> Self {
		Self {
			metric: METRIC_JACCARD.to_string(),
			classifier: CLASSIFIER_SCRIPT.to_string(),
			min_score: None,
			partial_ratio_threshold: 80,
			translate_fallback: false,
			fallback: FallbackMessages::default(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackMessages {
	pub primary: String,
	pub secondary: String,
}
impl Default for FallbackMessages {
	fn default() -> Self {
		Self {
			primary: "Sorry, I couldn't find an answer to this question. Please try another."
				.to_string(),
			secondary: "দুঃখিত, আমি এই প্রশ্নের উত্তর খুঁজে পাইনি। আরেকটি প্রশ্ন করুন।".to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Normalizer {
	/// Added to the built-in primary-language stopword list.
	pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Providers {
	pub translation: Option<TranslationProviderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub path: String,
	pub api_key: Option<String>,
	pub timeout_ms: u64,
	/// Number of leading characters compared by the round-trip classifier.
	#[serde(default = "default_probe_chars")]
	pub probe_chars: u32,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_cors_allowed_origins() -> Vec<String> {
	vec!["http://localhost:3000".to_string()]
}

fn default_probe_chars() -> u32 {
	64
}
