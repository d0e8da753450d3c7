use faq_domain::{KeywordSet, Language, Normalizer};

/// One raw source row. `None` marks a missing or blank cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QaRow {
	pub question_primary: Option<String>,
	pub question_secondary: Option<String>,
	pub answer_primary: Option<String>,
	pub answer_secondary: Option<String>,
}
impl QaRow {
	/// Name of the first missing required field, if any.
	pub fn missing_field(&self) -> Option<&'static str> {
		[
			("question_primary", &self.question_primary),
			("question_secondary", &self.question_secondary),
			("answer_primary", &self.answer_primary),
			("answer_secondary", &self.answer_secondary),
		]
		.into_iter()
		.find(|(_, value)| value.as_deref().map(|text| text.trim().is_empty()).unwrap_or(true))
		.map(|(label, _)| label)
	}
}

/// A FAQ pair in both languages with keyword sets cached at load time.
#[derive(Clone, Debug)]
pub struct CorpusEntry {
	question_primary: String,
	question_secondary: String,
	answer_primary: String,
	answer_secondary: String,
	keywords_primary: KeywordSet,
	keywords_secondary: KeywordSet,
}
impl CorpusEntry {
	/// Returns `None` when any of the four fields is missing.
	pub fn from_row(row: QaRow, normalizer: &Normalizer) -> Option<Self> {
		if row.missing_field().is_some() {
			return None;
		}

		let QaRow {
			question_primary: Some(question_primary),
			question_secondary: Some(question_secondary),
			answer_primary: Some(answer_primary),
			answer_secondary: Some(answer_secondary),
		} = row
		else {
			return None;
		};
		let keywords_primary = normalizer.keywords(&question_primary, Language::Primary);
		let keywords_secondary = normalizer.keywords(&question_secondary, Language::Secondary);

		Some(Self {
			question_primary,
			question_secondary,
			answer_primary,
			answer_secondary,
			keywords_primary,
			keywords_secondary,
		})
	}

	pub fn question(&self, language: Language) -> &str {
		match language {
			Language::Primary => &self.question_primary,
			Language::Secondary => &self.question_secondary,
		}
	}

	pub fn answer(&self, language: Language) -> &str {
		match language {
			Language::Primary => &self.answer_primary,
			Language::Secondary => &self.answer_secondary,
		}
	}

	pub fn keywords(&self, language: Language) -> &KeywordSet {
		match language {
			Language::Primary => &self.keywords_primary,
			Language::Secondary => &self.keywords_secondary,
		}
	}
}
