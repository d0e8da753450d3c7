use serde::{Deserialize, Serialize};

/// Bengali Unicode block. Routing is defined by block membership, not by the script property.
const SECONDARY_SCRIPT_BLOCK: std::ops::RangeInclusive<u32> = 0x0980..=0x09FF;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
	/// English. Cased script with a stopword list.
	Primary,
	/// Bengali. Uncased script, no stopword removal.
	Secondary,
}
impl Language {
	/// ISO 639-1 code understood by translation providers.
	pub fn code(self) -> &'static str {
		match self {
			Self::Primary => "en",
			Self::Secondary => "bn",
		}
	}
}

pub fn contains_secondary_script(input: &str) -> bool {
	input.chars().any(|ch| SECONDARY_SCRIPT_BLOCK.contains(&(ch as u32)))
}

/// A single Bengali code point anywhere in the input routes it to the secondary language.
pub fn classify_script(input: &str) -> Language {
	if contains_secondary_script(input) { Language::Secondary } else { Language::Primary }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_english_is_primary() {
		assert_eq!(classify_script("What is cervical cancer?"), Language::Primary);
	}

	#[test]
	fn bengali_is_secondary() {
		assert_eq!(classify_script("জরায়ুমুখ ক্যান্সার কী?"), Language::Secondary);
	}

	#[test]
	fn one_bengali_char_in_english_is_secondary() {
		assert_eq!(classify_script("what is HPV ক"), Language::Secondary);
	}

	#[test]
	fn block_edges_are_inclusive() {
		assert!(contains_secondary_script("\u{0980}"));
		assert!(contains_secondary_script("\u{09FF}"));
		assert!(!contains_secondary_script("\u{097F}"));
		assert!(!contains_secondary_script("\u{0A00}"));
	}

	#[test]
	fn devanagari_and_empty_are_primary() {
		assert_eq!(classify_script("नमस्ते"), Language::Primary);
		assert_eq!(classify_script(""), Language::Primary);
	}

	#[test]
	fn codes_match_translation_conventions() {
		assert_eq!(Language::Primary.code(), "en");
		assert_eq!(Language::Secondary.code(), "bn");
	}
}
