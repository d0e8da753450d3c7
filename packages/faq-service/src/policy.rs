use faq_config::{CLASSIFIER_TRANSLATION, Config, METRIC_PARTIAL_RATIO};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
	/// Jaccard over keyword sets. Without `min_score` the best entry always wins.
	Jaccard { min_score: Option<f32> },
	/// Partial ratio over raw question text, on a 0-100 scale.
	PartialRatio { threshold: u8 },
}
impl Metric {
	pub fn label(self) -> &'static str {
		match self {
			Self::Jaccard { .. } => "jaccard",
			Self::PartialRatio { .. } => "partial_ratio",
		}
	}

	/// Lowest score an entry needs to be selected, if any.
	pub fn threshold(self) -> Option<f32> {
		match self {
			Self::Jaccard { min_score } => min_score,
			Self::PartialRatio { threshold } => Some(f32::from(threshold)),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classifier {
	Script,
	Translation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchPolicy {
	pub metric: Metric,
	pub classifier: Classifier,
	pub translate_fallback: bool,
}

pub fn resolve_policy(cfg: &Config) -> MatchPolicy {
	let matching = &cfg.matching;
	let metric = match matching.metric.as_str() {
		METRIC_PARTIAL_RATIO =>
			Metric::PartialRatio { threshold: matching.partial_ratio_threshold },
		_ => Metric::Jaccard { min_score: matching.min_score },
	};
	let classifier = match matching.classifier.as_str() {
		CLASSIFIER_TRANSLATION => Classifier::Translation,
		_ => Classifier::Script,
	};

	MatchPolicy {
		metric,
		classifier,
		translate_fallback: matching.translate_fallback
			&& matches!(metric, Metric::PartialRatio { .. }),
	}
}
