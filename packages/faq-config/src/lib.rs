mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	CLASSIFIER_SCRIPT, CLASSIFIER_TRANSLATION, Config, Corpus, CorpusColumns, FORMAT_CSV,
	FORMAT_JSON, FallbackMessages, METRIC_JACCARD, METRIC_PARTIAL_RATIO, Matching, Normalizer,
	Providers, Service, TranslationProviderConfig,
};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.corpus.path.trim().is_empty() {
		return Err(Error::Validation { message: "corpus.path must be non-empty.".to_string() });
	}

	match cfg.corpus.format.as_deref() {
		Some(FORMAT_CSV | FORMAT_JSON) => {},
		Some(other) => {
			return Err(Error::UnsupportedValue {
				key: "corpus.format",
				value: other.to_string(),
				expected: "csv or json",
			});
		},
		None => {
			return Err(Error::Validation {
				message: "corpus.format must be set when corpus.path has no csv or json extension."
					.to_string(),
			});
		},
	}

	let columns = &cfg.corpus.columns;
	let mut seen = HashSet::new();

	for (label, value) in [
		("corpus.columns.question_primary", &columns.question_primary),
		("corpus.columns.question_secondary", &columns.question_secondary),
		("corpus.columns.answer_primary", &columns.answer_primary),
		("corpus.columns.answer_secondary", &columns.answer_secondary),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
		if !seen.insert(value.as_str()) {
			return Err(Error::Validation {
				message: format!("{label} duplicates another corpus column."),
			});
		}
	}

	let matching = &cfg.matching;

	if !matches!(matching.metric.as_str(), METRIC_JACCARD | METRIC_PARTIAL_RATIO) {
		return Err(Error::UnsupportedValue {
			key: "matching.metric",
			value: matching.metric.clone(),
			expected: "jaccard or partial_ratio",
		});
	}
	if !matches!(matching.classifier.as_str(), CLASSIFIER_SCRIPT | CLASSIFIER_TRANSLATION) {
		return Err(Error::UnsupportedValue {
			key: "matching.classifier",
			value: matching.classifier.clone(),
			expected: "script or translation",
		});
	}
	if matching.partial_ratio_threshold > 100 {
		return Err(Error::Validation {
			message: "matching.partial_ratio_threshold must be in the range 0-100.".to_string(),
		});
	}
	if let Some(min_score) = matching.min_score {
		if !min_score.is_finite() {
			return Err(Error::Validation {
				message: "matching.min_score must be a finite number.".to_string(),
			});
		}
		if !(0.0..=1.0).contains(&min_score) {
			return Err(Error::Validation {
				message: "matching.min_score must be in the range 0.0-1.0.".to_string(),
			});
		}
	}

	for (label, message) in [
		("matching.fallback.primary", &matching.fallback.primary),
		("matching.fallback.secondary", &matching.fallback.secondary),
	] {
		if message.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	let needs_translation =
		matching.classifier == CLASSIFIER_TRANSLATION || matching.translate_fallback;

	match cfg.providers.translation.as_ref() {
		None if needs_translation => {
			return Err(Error::Validation {
				message: "providers.translation is required when matching.classifier is translation or matching.translate_fallback is true."
					.to_string(),
			});
		},
		None => {},
		Some(translation) => validate_translation(translation)?,
	}

	Ok(())
}

fn validate_translation(cfg: &TranslationProviderConfig) -> Result<()> {
	for (label, value) in [
		("providers.translation.provider_id", &cfg.provider_id),
		("providers.translation.api_base", &cfg.api_base),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.translation.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.probe_chars == 0 {
		return Err(Error::Validation {
			message: "providers.translation.probe_chars must be greater than zero.".to_string(),
		});
	}

	for value in cfg.default_headers.values() {
		if !value.is_string() {
			return Err(Error::Validation {
				message: "providers.translation.default_headers values must be strings."
					.to_string(),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.corpus.format.as_deref().map(|format| format.trim().is_empty()).unwrap_or(false) {
		cfg.corpus.format = None;
	}
	if let Some(format) = cfg.corpus.format.as_mut() {
		*format = format.trim().to_ascii_lowercase();
	}
	if cfg.corpus.format.is_none() {
		cfg.corpus.format = infer_format(Path::new(cfg.corpus.path.trim()));
	}

	cfg.normalizer.extra_stopwords.retain(|word| !word.trim().is_empty());

	if let Some(translation) = cfg.providers.translation.as_mut()
		&& translation.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false)
	{
		translation.api_key = None;
	}
}

fn infer_format(path: &Path) -> Option<String> {
	let extension = path.extension()?.to_str()?.to_ascii_lowercase();

	match extension.as_str() {
		FORMAT_CSV | FORMAT_JSON => Some(extension),
		_ => None,
	}
}
