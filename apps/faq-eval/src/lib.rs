use std::{
	fs,
	path::{Path, PathBuf},
	time::Instant,
};

use clap::Parser;
use color_eyre::eyre;
use serde::{Deserialize, Serialize};

use faq_config::Config;
use faq_domain::Language;
use faq_service::FaqService;

#[derive(Debug, Parser)]
#[command(
	version = faq_cli::VERSION,
	rename_all = "kebab",
	styles = faq_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[arg(long, short = 'd', value_name = "FILE")]
	pub dataset: PathBuf,
	/// Overrides `matching.metric`.
	#[arg(long, value_name = "jaccard|partial_ratio")]
	pub metric: Option<String>,
	/// Overrides `matching.classifier`.
	#[arg(long, value_name = "script|translation")]
	pub classifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EvalDataset {
	name: Option<String>,
	queries: Vec<EvalQuery>,
}

#[derive(Debug, Deserialize)]
struct EvalQuery {
	id: Option<String>,
	question: String,
	/// Zero-based corpus index, or `None` when the fallback message is expected.
	expected_row: Option<usize>,
}

#[derive(Debug, Serialize)]
struct EvalOutput {
	dataset: EvalDatasetInfo,
	settings: EvalSettings,
	summary: EvalSummary,
	queries: Vec<QueryReport>,
}

#[derive(Debug, Serialize)]
struct EvalDatasetInfo {
	name: Option<String>,
	path: String,
	corpus_entries: usize,
}

#[derive(Debug, Serialize)]
struct EvalSettings {
	config_path: String,
	metric: String,
	classifier: String,
	threshold: Option<f32>,
	translate_fallback: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct EvalSummary {
	total: usize,
	hits: usize,
	hit_rate: f64,
	latency_ms_p50: f64,
	latency_ms_p95: f64,
}

#[derive(Debug, Serialize)]
struct QueryReport {
	id: String,
	question: String,
	language: Language,
	expected_row: Option<usize>,
	matched_row: Option<usize>,
	score: Option<f32>,
	translated: bool,
	hit: bool,
	latency_ms: f64,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let mut config = faq_config::load(&args.config)?;

	faq_cli::init_tracing(&config.service.log_level);
	apply_overrides(&mut config, &args)?;

	let dataset = load_dataset(&args.dataset)?;
	let service = FaqService::new(config)?;
	let output = evaluate(&service, &dataset, &args.config, &args.dataset).await;
	let json = serde_json::to_string_pretty(&output)?;

	println!("{json}");

	Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) -> color_eyre::Result<()> {
	if let Some(metric) = &args.metric {
		config.matching.metric = metric.trim().to_string();
	}
	if let Some(classifier) = &args.classifier {
		config.matching.classifier = classifier.trim().to_string();
	}

	faq_config::validate(config)?;

	Ok(())
}

fn load_dataset(path: &Path) -> color_eyre::Result<EvalDataset> {
	let raw = fs::read_to_string(path)?;
	let dataset: EvalDataset = serde_json::from_str(&raw)?;

	if dataset.queries.is_empty() {
		return Err(eyre::eyre!("Dataset must include at least one query."));
	}

	Ok(dataset)
}

async fn evaluate(
	service: &FaqService,
	dataset: &EvalDataset,
	config_path: &Path,
	dataset_path: &Path,
) -> EvalOutput {
	let mut reports = Vec::with_capacity(dataset.queries.len());

	for (index, query) in dataset.queries.iter().enumerate() {
		let start = Instant::now();
		let resolution = service.resolve(&query.question).await;
		let latency_ms = start.elapsed().as_secs_f64() * 1_000.0;

		reports.push(QueryReport {
			id: query.id.clone().unwrap_or_else(|| index.to_string()),
			question: query.question.clone(),
			language: resolution.language,
			expected_row: query.expected_row,
			matched_row: resolution.matched_row,
			score: resolution.score,
			translated: resolution.translated,
			hit: resolution.matched_row == query.expected_row,
			latency_ms,
		});
	}

	let policy = service.policy;

	tracing::info!(
		queries = reports.len(),
		metric = policy.metric.label(),
		"Evaluation finished."
	);

	EvalOutput {
		dataset: EvalDatasetInfo {
			name: dataset.name.clone(),
			path: dataset_path.display().to_string(),
			corpus_entries: service.corpus().len(),
		},
		settings: EvalSettings {
			config_path: config_path.display().to_string(),
			metric: policy.metric.label().to_string(),
			classifier: service.cfg.matching.classifier.clone(),
			threshold: policy.metric.threshold(),
			translate_fallback: policy.translate_fallback,
		},
		summary: summarize(&reports),
		queries: reports,
	}
}

fn summarize(reports: &[QueryReport]) -> EvalSummary {
	let total = reports.len();
	let hits = reports.iter().filter(|report| report.hit).count();
	let hit_rate = if total == 0 { 0.0 } else { hits as f64 / total as f64 };
	let mut latencies: Vec<f64> = reports.iter().map(|report| report.latency_ms).collect();

	latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

	EvalSummary {
		total,
		hits,
		hit_rate,
		latency_ms_p50: percentile(&latencies, 0.50),
		latency_ms_p95: percentile(&latencies, 0.95),
	}
}

fn percentile(values: &[f64], percentile: f64) -> f64 {
	if values.is_empty() {
		return 0.0;
	}

	let clamped = percentile.clamp(0.0, 1.0);
	let pos = clamped * (values.len() as f64 - 1.0);
	let lower = pos.floor() as usize;
	let upper = pos.ceil() as usize;

	if lower == upper {
		values[lower]
	} else {
		let weight = pos - lower as f64;

		values[lower] * (1.0 - weight) + values[upper] * weight
	}
}
