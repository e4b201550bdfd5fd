//! Column layout derivation for record tables
//!
//! Output columns are always `<base fields>, SGPA_sem1..SGPA_sem8, instituteName`.
//! Only the base fields depend on the data.

use crate::conversion::config::{ConversionConfig, HeaderStrategy};
use crate::parser::records::{Record, INSTITUTE_NAME, SGPA};

/// Prefix of the synthetic per-semester column names
pub const SEMESTER_COLUMN_PREFIX: &str = "SGPA_";

/// Every table carries exactly this many semester columns, whatever the data holds
pub const SEMESTER_COUNT: u8 = 8;

/// Resolved column set for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Ordinary fields copied straight from each record
    pub base_fields: Vec<String>,
    /// Keys looked up inside each record's `SGPA` mapping
    pub semester_keys: Vec<String>,
}

impl ColumnLayout {
    /// Derive the layout from records that are already in output order.
    pub fn derive(records: &[Record], config: &ConversionConfig) -> Self {
        let base_fields = match config.header_strategy {
            HeaderStrategy::FirstRecord => records
                .first()
                .map(|first| first.keys().filter(|k| is_base_field(k)).cloned().collect())
                .unwrap_or_default(),
            HeaderStrategy::Union => {
                let mut fields: Vec<String> = Vec::new();
                for key in records.iter().flat_map(|r| r.keys()) {
                    if is_base_field(key) && !fields.iter().any(|f| f == key) {
                        fields.push(key.clone());
                    }
                }
                fields
            }
        };

        Self {
            base_fields,
            semester_keys: (1..=SEMESTER_COUNT).map(|n| format!("sem{}", n)).collect(),
        }
    }

    /// Header names in output order
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.column_count());
        header.extend(self.base_fields.iter().cloned());
        header.extend(
            self.semester_keys
                .iter()
                .map(|key| format!("{}{}", SEMESTER_COLUMN_PREFIX, key)),
        );
        header.push(INSTITUTE_NAME.to_string());
        header
    }

    pub fn column_count(&self) -> usize {
        self.base_fields.len() + self.semester_keys.len() + 1
    }
}

fn is_base_field(key: &str) -> bool {
    key != SGPA && key != INSTITUTE_NAME
}
