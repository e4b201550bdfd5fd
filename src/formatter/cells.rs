//! Cell text extraction and JSON-literal cell encoding

use crate::formatter::layout::ColumnLayout;
use crate::parser::records::{semester_grade, value_text, Record, INSTITUTE_NAME};
use serde_json::Value;

/// Raw text of every cell in a row, in layout order. Missing values are empty.
pub fn row_texts(record: &Record, layout: &ColumnLayout) -> Vec<String> {
    let base = layout
        .base_fields
        .iter()
        .map(|field| record.get(field.as_str()));
    let semesters = layout
        .semester_keys
        .iter()
        .map(|key| semester_grade(record, key));
    let institute = std::iter::once(record.get(INSTITUTE_NAME));

    base.chain(semesters)
        .chain(institute)
        .map(cell_text)
        .collect()
}

fn cell_text(value: Option<&Value>) -> String {
    value.map(value_text).unwrap_or_default()
}

/// Write text as a JSON string literal: `8.5` becomes `"8.5"`, `a"b` becomes `"a\"b"`.
pub fn json_cell(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}
