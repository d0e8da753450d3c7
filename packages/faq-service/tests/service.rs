use std::{sync::Arc, time::Duration};

use faq_domain::Language;
use faq_service::{Error, FaqService, Metric, Translator};
use faq_testkit::{
	BREAST_ANSWER_BN, CERVICAL_ANSWER_BN, CERVICAL_ANSWER_EN, FailingTranslator, MapTranslator,
	SlowTranslator,
};

fn service(cfg: faq_config::Config, translator: Arc<dyn Translator>) -> FaqService {
	FaqService::with_corpus(cfg, faq_testkit::sample_corpus(), translator)
		.expect("Test service must build.")
}

fn jaccard_service() -> FaqService {
	service(faq_testkit::test_config(), Arc::new(FailingTranslator))
}

fn legacy_service() -> FaqService {
	service(faq_testkit::legacy_config(), Arc::new(FailingTranslator))
}

fn round_trip_config() -> faq_config::Config {
	let mut cfg = faq_testkit::with_translation(faq_testkit::test_config());

	cfg.matching.classifier = faq_config::CLASSIFIER_TRANSLATION.to_string();

	cfg
}

fn back_translation_config() -> faq_config::Config {
	let mut cfg = faq_testkit::with_translation(faq_testkit::legacy_config());

	cfg.matching.translate_fallback = true;

	cfg
}

#[tokio::test]
async fn answers_cervical_cancer_question() {
	let service = jaccard_service();
	let resolution = service.resolve("What is Cervical Cancer?").await;

	assert_eq!(resolution.language, Language::Primary);
	assert_eq!(resolution.matched_row, Some(0));
	assert_eq!(resolution.score, Some(1.0));
	assert_eq!(resolution.answer, CERVICAL_ANSWER_EN);
}

#[tokio::test]
async fn repeated_questions_get_the_same_answer() {
	let service = service(faq_testkit::test_config(), Arc::new(FailingTranslator));
	let first = service.resolve("cancer").await;

	for _ in 0..10 {
		assert_eq!(service.resolve("cancer").await, first);
	}

	// Both entries share "cancer"; the shorter question scores higher.
	assert_eq!(first.matched_row, Some(0));
}

#[tokio::test]
async fn identical_entries_resolve_to_the_first() {
	let rows = vec![
		faq_testkit::row("pap test", "প্যাপ টেস্ট", "first", "প্রথম"),
		faq_testkit::row("Pap test?", "প্যাপ টেস্ট?", "second", "দ্বিতীয়"),
	];
	let corpus = faq_corpus::Corpus::from_rows(rows, &faq_domain::Normalizer::default())
		.expect("Test corpus must build.");
	let service =
		FaqService::with_corpus(faq_testkit::test_config(), corpus, Arc::new(FailingTranslator))
			.expect("Test service must build.");

	assert_eq!(service.answer("PAP test").await.answer, "first");
	assert_eq!(service.answer("প্যাপ টেস্ট").await.answer, "প্রথম");
}

#[tokio::test]
async fn mixed_script_question_uses_secondary_pipeline() {
	let service = jaccard_service();
	let resolution = service.resolve("breast cancer স্তন ক্যান্সারের কারণ কী").await;

	assert_eq!(resolution.language, Language::Secondary);
	assert_eq!(resolution.matched_row, Some(1));
	assert_eq!(resolution.answer, BREAST_ANSWER_BN);
}

#[tokio::test]
async fn unrelated_question_without_gate_returns_first_entry() {
	let resolution = jaccard_service().resolve("zebra stripes").await;

	assert_eq!(resolution.matched_row, Some(0));
	assert_eq!(resolution.score, Some(0.0));
	assert_eq!(resolution.answer, CERVICAL_ANSWER_EN);
}

#[tokio::test]
async fn unrelated_question_with_threshold_returns_fallback() {
	let service = legacy_service();
	let primary = service.resolve("zebra stripes").await;
	let secondary = service.resolve("১২৩৪৫৬৭৮৯").await;

	assert_eq!(primary.matched_row, None);
	assert_eq!(primary.answer, service.cfg.matching.fallback.primary);
	assert_eq!(secondary.language, Language::Secondary);
	assert_eq!(secondary.matched_row, None);
	assert_eq!(secondary.answer, service.cfg.matching.fallback.secondary);
}

#[tokio::test]
async fn min_score_gate_returns_fallback() {
	let mut cfg = faq_testkit::test_config();

	cfg.matching.min_score = Some(0.5);

	let service = service(cfg, Arc::new(FailingTranslator));

	assert_eq!(service.policy.metric, Metric::Jaccard { min_score: Some(0.5) });
	assert_eq!(service.answer("zebra").await.answer, service.cfg.matching.fallback.primary);
	assert_eq!(service.answer("cervical cancer").await.answer, CERVICAL_ANSWER_EN);
}

#[tokio::test]
async fn empty_question_is_answered() {
	let jaccard = jaccard_service().resolve("").await;
	let legacy = legacy_service().resolve("   ").await;

	assert_eq!(jaccard.language, Language::Primary);
	assert_eq!(jaccard.matched_row, Some(0));
	assert_eq!(legacy.matched_row, None);
	assert_eq!(legacy.answer, faq_config::FallbackMessages::default().primary);
}

#[tokio::test]
async fn legacy_metric_matches_substring_questions() {
	let resolution = legacy_service().resolve("Cervical Cancer").await;

	assert_eq!(resolution.matched_row, Some(0));
	assert_eq!(resolution.score, Some(100.0));
}

#[tokio::test]
async fn round_trip_classifier_detects_changed_text() {
	let translator =
		Arc::new(MapTranslator::new([("জরায়ুমুখ ক্যান্সার কী", "what is cervical cancer")]));
	let service = service(round_trip_config(), translator.clone());
	let resolution = service.resolve("জরায়ুমুখ ক্যান্সার কী").await;

	assert_eq!(resolution.language, Language::Secondary);
	assert_eq!(resolution.answer, CERVICAL_ANSWER_BN);
	assert_eq!(service.classify("what causes breast cancer").await, Language::Primary);
	assert_eq!(translator.calls(), 2);
}

#[tokio::test]
async fn round_trip_classifier_defaults_to_primary_on_failure() {
	let service = service(round_trip_config(), Arc::new(FailingTranslator));

	assert_eq!(service.classify("জরায়ুমুখ ক্যান্সার কী").await, Language::Primary);
}

#[tokio::test]
async fn round_trip_classifier_defaults_to_primary_on_timeout() {
	let translator = Arc::new(SlowTranslator { delay: Duration::from_secs(2) });
	let service = service(round_trip_config(), translator);

	assert_eq!(service.classify("জরায়ুমুখ ক্যান্সার কী").await, Language::Primary);
}

#[tokio::test]
async fn back_translation_answers_unmatched_secondary_question() {
	let translator = Arc::new(MapTranslator::new([
		("১২৩৪৫৬৭৮৯", "what is cervical cancer"),
		(CERVICAL_ANSWER_EN, "অনূদিত উত্তর"),
	]));
	let service = service(back_translation_config(), translator.clone());
	let resolution = service.resolve("১২৩৪৫৬৭৮৯").await;

	assert_eq!(resolution.language, Language::Secondary);
	assert_eq!(resolution.matched_row, Some(0));
	assert!(resolution.translated);
	assert_eq!(resolution.answer, "অনূদিত উত্তর");
	assert_eq!(translator.calls(), 2);
}

#[tokio::test]
async fn back_translation_failure_returns_secondary_fallback() {
	let service = service(back_translation_config(), Arc::new(FailingTranslator));
	let resolution = service.resolve("১২৩৪৫৬৭৮৯").await;

	assert!(!resolution.translated);
	assert_eq!(resolution.matched_row, None);
	assert_eq!(resolution.answer, service.cfg.matching.fallback.secondary);
}

#[tokio::test]
async fn back_translation_skips_primary_questions() {
	let translator = Arc::new(MapTranslator::default());
	let service = service(back_translation_config(), translator.clone());
	let resolution = service.resolve("zebra stripes").await;

	assert_eq!(resolution.answer, service.cfg.matching.fallback.primary);
	assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn back_translation_is_ignored_under_jaccard() {
	let mut cfg = faq_testkit::with_translation(faq_testkit::test_config());

	cfg.matching.translate_fallback = true;

	let service = service(cfg, Arc::new(FailingTranslator));

	assert!(!service.policy.translate_fallback);
}

#[test]
fn missing_corpus_stops_startup() {
	let mut cfg = faq_testkit::test_config();

	cfg.corpus.path = "/nonexistent/faq-corpus.csv".to_string();

	assert!(matches!(FaqService::new(cfg), Err(Error::Corpus(_))));
}

#[test]
fn invalid_config_is_rejected() {
	let mut cfg = faq_testkit::test_config();

	cfg.matching.metric = "cosine".to_string();

	let err = FaqService::with_corpus(cfg, faq_testkit::sample_corpus(), Arc::new(FailingTranslator))
		.err()
		.expect("Unknown metric must be rejected.");

	assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn resolution_serializes_for_reports() {
	let resolution = jaccard_service().resolve("স্তন ক্যান্সারের কারণ কী").await;
	let json = serde_json::to_value(&resolution).expect("Failed to serialize resolution.");

	assert_eq!(json["language"], "secondary");
	assert_eq!(json["matched_row"], 1);
	assert_eq!(json["translated"], false);
}
