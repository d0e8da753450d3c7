use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use faq_config::TranslationProviderConfig;

/// Translates `text` from `source` to `target` through a LibreTranslate-compatible endpoint.
pub async fn translate(
	cfg: &TranslationProviderConfig,
	text: &str,
	source: &str,
	target: &str,
) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"q": text,
		"source": source,
		"target": target,
		"format": "text",
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(cfg.api_key.as_deref(), &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_translation_response(json)
}

/// Accepts both `{"translatedText": ..}` and the Google v2 `data.translations[0]` shape.
fn parse_translation_response(json: Value) -> Result<String> {
	if let Some(text) = json.get("translatedText").and_then(|v| v.as_str()) {
		return Ok(text.to_string());
	}

	json.get("data")
		.and_then(|data| data.get("translations"))
		.and_then(|v| v.as_array())
		.and_then(|translations| translations.first())
		.and_then(|item| item.get("translatedText"))
		.and_then(|v| v.as_str())
		.map(str::to_string)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Translation response is missing translatedText.".to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_libretranslate_shape() {
		let json = serde_json::json!({ "translatedText": "What is cervical cancer?" });
		let text = parse_translation_response(json).expect("parse failed");

		assert_eq!(text, "What is cervical cancer?");
	}

	#[test]
	fn parses_google_v2_shape() {
		let json = serde_json::json!({
			"data": { "translations": [{ "translatedText": "স্তন ক্যান্সার" }] }
		});
		let text = parse_translation_response(json).expect("parse failed");

		assert_eq!(text, "স্তন ক্যান্সার");
	}

	#[test]
	fn rejects_response_without_text() {
		let json = serde_json::json!({ "error": "quota exceeded" });

		assert!(matches!(parse_translation_response(json), Err(Error::InvalidResponse { .. })));
	}
}
