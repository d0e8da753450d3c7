use std::io::Read;

use serde_json::Value;

use crate::{Error, QaRow, Result};
use faq_config::CorpusColumns;

/// Reads a CSV source with a header row naming the four columns.
pub fn read_csv<R>(reader: R, columns: &CorpusColumns) -> Result<Vec<QaRow>>
where
	R: Read,
{
	let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
	let headers: Vec<String> = reader
		.headers()?
		.iter()
		.map(|header| header.trim_start_matches('\u{FEFF}').trim().to_string())
		.collect();
	let position = |column: &str| {
		headers
			.iter()
			.position(|header| header == column)
			.ok_or_else(|| Error::MissingColumn { column: column.to_string() })
	};
	let question_primary = position(&columns.question_primary)?;
	let question_secondary = position(&columns.question_secondary)?;
	let answer_primary = position(&columns.answer_primary)?;
	let answer_secondary = position(&columns.answer_secondary)?;
	let mut rows = Vec::new();

	for record in reader.records() {
		let record = record?;
		let cell = |idx: usize| record.get(idx).map(str::to_string);

		rows.push(QaRow {
			question_primary: cell(question_primary),
			question_secondary: cell(question_secondary),
			answer_primary: cell(answer_primary),
			answer_secondary: cell(answer_secondary),
		});
	}

	Ok(rows)
}

/// Reads a JSON array of objects keyed by the four column names.
///
/// Numbers and booleans are coerced to their string form; `null` and absent keys are missing.
pub fn read_json<R>(reader: R, columns: &CorpusColumns) -> Result<Vec<QaRow>>
where
	R: Read,
{
	let value: Value = serde_json::from_reader(reader)?;
	let Value::Array(items) = value else {
		return Err(Error::InvalidRow { row: 0 });
	};

	if let Some(first) = items.iter().find_map(Value::as_object) {
		for column in [
			&columns.question_primary,
			&columns.question_secondary,
			&columns.answer_primary,
			&columns.answer_secondary,
		] {
			if !first.contains_key(column.as_str()) {
				return Err(Error::MissingColumn { column: column.clone() });
			}
		}
	}

	let mut rows = Vec::with_capacity(items.len());

	for (idx, item) in items.iter().enumerate() {
		let Some(object) = item.as_object() else {
			return Err(Error::InvalidRow { row: idx + 1 });
		};
		let cell = |column: &str| object.get(column).and_then(coerce_cell);

		rows.push(QaRow {
			question_primary: cell(&columns.question_primary),
			question_secondary: cell(&columns.question_secondary),
			answer_primary: cell(&columns.answer_primary),
			answer_secondary: cell(&columns.answer_secondary),
		});
	}

	Ok(rows)
}

fn coerce_cell(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn csv_columns_are_located_by_header() {
		let data = "\u{FEFF}Answers,Queries,Ans_Bengali,Queries_Bengali\nA1,Q1,AB1,QB1\n";
		let rows = read_csv(data.as_bytes(), &CorpusColumns::default()).expect("CSV must parse.");

		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].question_primary.as_deref(), Some("Q1"));
		assert_eq!(rows[0].answer_secondary.as_deref(), Some("AB1"));
	}

	#[test]
	fn short_csv_records_leave_cells_missing() {
		let data = "Queries,Queries_Bengali,Answers,Ans_Bengali\nQ1,QB1\n";
		let rows = read_csv(data.as_bytes(), &CorpusColumns::default()).expect("CSV must parse.");

		assert_eq!(rows[0].answer_primary, None);
		assert_eq!(rows[0].missing_field(), Some("answer_primary"));
	}

	#[test]
	fn csv_without_required_column_fails() {
		let data = "Queries,Answers\nQ1,A1\n";
		let err = read_csv(data.as_bytes(), &CorpusColumns::default())
			.expect_err("Expected missing column.");

		assert!(matches!(err, Error::MissingColumn { column } if column == "Queries_Bengali"));
	}

	#[test]
	fn json_cells_are_coerced() {
		let data = r#"[{"Queries": 42, "Queries_Bengali": "৪২", "Answers": true, "Ans_Bengali": null}]"#;
		let rows = read_json(data.as_bytes(), &CorpusColumns::default()).expect("JSON must parse.");

		assert_eq!(rows[0].question_primary.as_deref(), Some("42"));
		assert_eq!(rows[0].answer_primary.as_deref(), Some("true"));
		assert_eq!(rows[0].answer_secondary, None);
	}

	#[test]
	fn json_must_be_an_array_of_objects() {
		let columns = CorpusColumns::default();

		assert!(matches!(read_json("{}".as_bytes(), &columns), Err(Error::InvalidRow { row: 0 })));
		assert!(matches!(read_json("[1]".as_bytes(), &columns), Err(Error::InvalidRow { row: 1 })));
	}
}
