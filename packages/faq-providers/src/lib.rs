pub mod translation;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName};
use serde_json::{Map, Value};

use faq_config::TranslationProviderConfig;

/// Source language code asking the provider to detect the input language.
pub const AUTO_DETECT: &str = "auto";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait Translator
where
	Self: Send + Sync,
{
	fn translate<'a>(
		&'a self,
		cfg: &'a TranslationProviderConfig,
		text: &'a str,
		source: &'a str,
		target: &'a str,
	) -> BoxFuture<'a, Result<String>>;
}

/// Translator backed by the configured HTTP endpoint.
pub struct HttpTranslator;
impl Translator for HttpTranslator {
	fn translate<'a>(
		&'a self,
		cfg: &'a TranslationProviderConfig,
		text: &'a str,
		source: &'a str,
		target: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(translation::translate(cfg, text, source, target))
	}
}

pub fn auth_headers(api_key: Option<&str>, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	if let Some(api_key) = api_key {
		headers.insert(AUTHORIZATION, format!("Bearer {api_key}").parse()?);
	}

	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: "Default header values must be strings.".to_string(),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}
