use std::time::Duration;

use faq_config::TranslationProviderConfig;
use faq_domain::Language;
use faq_providers::{AUTO_DETECT, Translator};

/// Runs one translation under the provider's timeout. Failures are logged and become `None`.
pub(crate) async fn translate_or_none(
	translator: &dyn Translator,
	cfg: &TranslationProviderConfig,
	text: &str,
	source: &str,
	target: &str,
) -> Option<String> {
	let timeout = Duration::from_millis(cfg.timeout_ms);

	match tokio::time::timeout(timeout, translator.translate(cfg, text, source, target)).await {
		Ok(Ok(translated)) => Some(translated),
		Ok(Err(err)) => {
			tracing::warn!(
				error = %err,
				provider_id = %cfg.provider_id,
				source,
				target,
				"Translation request failed."
			);

			None
		},
		Err(_) => {
			tracing::warn!(
				provider_id = %cfg.provider_id,
				timeout_ms = cfg.timeout_ms,
				source,
				target,
				"Translation request timed out."
			);

			None
		},
	}
}

/// Round-trip classification: a probe that changes when translated into the primary language
/// is secondary-language text. Any provider failure resolves to the primary language.
pub(crate) async fn classify_by_round_trip(
	translator: &dyn Translator,
	cfg: &TranslationProviderConfig,
	text: &str,
) -> Language {
	let probe_chars = cfg.probe_chars as usize;
	let probe: String = text.chars().take(probe_chars).collect();

	if probe.trim().is_empty() {
		return Language::Primary;
	}

	let Some(translated) =
		translate_or_none(translator, cfg, &probe, AUTO_DETECT, Language::Primary.code()).await
	else {
		return Language::Primary;
	};
	let translated_probe: String = translated.chars().take(probe_chars).collect();

	if translated_probe.trim() == probe.trim() { Language::Primary } else { Language::Secondary }
}
