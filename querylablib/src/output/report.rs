//! Exercise reports: what an exercise produced, ready for rendering.
//!
//! A report carries two views of the same result:
//! - `data`: the structured result, for machine-readable output
//! - `entries`: the text listing, as plain lines and values to dump

use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// One item of a text listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEntry {
    /// A line (or several) printed verbatim
    Text { text: String },
    /// A value rendered by the dumper, expanding nested members `depth` levels deep
    Value { value: Value, depth: usize },
}

/// Output of one exercise run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub data: Value,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Start a report whose structured result is `data`.
    pub fn new<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_value(data)?,
            entries: Vec::new(),
        })
    }

    /// Append a text line.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.entries.push(ReportEntry::Text { text: text.into() });
        self
    }

    /// Append a value to be dumped at the given depth.
    pub fn value<T: Serialize + ?Sized>(&mut self, value: &T, depth: usize) -> Result<&mut Self> {
        self.entries.push(ReportEntry::Value {
            value: serde_json::to_value(value)?,
            depth,
        });
        Ok(self)
    }

    /// Append every element of `values`, each dumped at the given depth.
    pub fn values<'v, T, I>(&mut self, values: I, depth: usize) -> Result<&mut Self>
    where
        T: Serialize + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        for value in values {
            self.value(value, depth)?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of text lines and dumped values
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        total: u32,
    }

    #[test]
    fn test_report_builds_in_order() {
        let rows = [Row { name: "a", total: 1 }, Row { name: "b", total: 2 }];
        let mut report = Report::new(&rows).unwrap();
        report.text("header");
        report.values(rows.iter(), 1).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.data, json!([{ "name": "a", "total": 1 }, { "name": "b", "total": 2 }]));
        assert_eq!(
            report.entries[0],
            ReportEntry::Text {
                text: "header".to_string()
            }
        );
        assert_eq!(
            report.entries[2],
            ReportEntry::Value {
                value: json!({ "name": "b", "total": 2 }),
                depth: 1
            }
        );
    }

    #[test]
    fn test_entry_serialization_is_tagged() {
        let entry = ReportEntry::Text {
            text: "x".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "kind": "text", "text": "x" })
        );
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.data, Value::Null);
    }
}
