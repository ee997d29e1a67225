//! Text rendering of arbitrary values.
//!
//! The dumper walks a `serde_json::Value` tree and prints it as indented
//! text:
//!
//! - scalars print as-is (strings unquoted, `null` as `<none>`)
//! - a record prints one line of `field=value` pairs; nested records show as
//!   `field={ }` and nested sequences as `field=...`
//! - below the depth limit, nested members are then printed on the following
//!   lines, indented and prefixed with `field: `
//! - a sequence prints its elements one after another
//!
//! Field order is the declaration order of the serialized type.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use super::report::{Report, ReportEntry};
use crate::Result;

/// Printed in place of absent values
pub const PLACEHOLDER: &str = "<none>";

const INDENT: &str = "  ";
const FIELD_SEPARATOR: &str = "  ";

/// Renders values to text, expanding nested members up to `depth` levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dumper {
    depth: usize,
}

impl Dumper {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Render any serializable value to a string.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let value = serde_json::to_value(value)?;
        let mut out = Vec::new();
        self.write_value(&mut out, &value)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Write a value tree to `out`.
    pub fn write_value<W: Write>(&self, out: &mut W, value: &Value) -> io::Result<()> {
        self.write_node(out, "", value, 0)
    }

    fn write_node<W: Write>(
        &self,
        out: &mut W,
        prefix: &str,
        value: &Value,
        level: usize,
    ) -> io::Result<()> {
        match value {
            Value::Array(items) => {
                for item in items {
                    if item.is_array() {
                        write_line(out, level, prefix, "...")?;
                        if level < self.depth {
                            self.write_node(out, prefix, item, level + 1)?;
                        }
                    } else {
                        self.write_node(out, prefix, item, level)?;
                    }
                }
                Ok(())
            }
            Value::Object(fields) => {
                let line = fields
                    .iter()
                    .map(|(name, v)| format!("{name}={}", inline(v)))
                    .collect::<Vec<_>>()
                    .join(FIELD_SEPARATOR);
                write_line(out, level, prefix, &line)?;

                if level < self.depth {
                    for (name, v) in fields {
                        if v.is_array() || v.is_object() {
                            self.write_node(out, &format!("{name}: "), v, level + 1)?;
                        }
                    }
                }
                Ok(())
            }
            scalar => write_line(out, level, prefix, &inline(scalar)),
        }
    }
}

/// Write every entry of a report. `depth_override` replaces each value's own depth.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    depth_override: Option<usize>,
) -> io::Result<()> {
    for entry in &report.entries {
        match entry {
            ReportEntry::Text { text } => writeln!(out, "{text}")?,
            ReportEntry::Value { value, depth } => {
                Dumper::new(depth_override.unwrap_or(*depth)).write_value(out, value)?
            }
        }
    }
    Ok(())
}

/// Render a report to a string.
pub fn render_report(report: &Report, depth_override: Option<usize>) -> Result<String> {
    let mut out = Vec::new();
    write_report(&mut out, report, depth_override)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Format a number exactly as the dumper prints it inside a record (`18.0`, `263.5`).
pub fn format_number(value: f64) -> String {
    inline(&Value::from(value))
}

fn write_line<W: Write>(out: &mut W, level: usize, prefix: &str, text: &str) -> io::Result<()> {
    writeln!(out, "{}{prefix}{text}", INDENT.repeat(level))
}

/// Single-line form of a value inside a record line.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) => "...".to_string(),
        Value::Object(_) => "{ }".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dump(value: Value, depth: usize) -> String {
        Dumper::new(depth).render(&value).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dump(json!("Alfreds Futterkiste"), 0), "Alfreds Futterkiste\n");
        assert_eq!(dump(json!(42), 0), "42\n");
        assert_eq!(dump(json!(true), 0), "true\n");
        assert_eq!(dump(Value::Null, 0), "<none>\n");
    }

    #[test]
    fn test_format_number_matches_record_values() {
        assert_eq!(format_number(18.0), "18.0");
        assert_eq!(format_number(263.5), "263.5");
        assert_eq!(
            dump(json!({ "price": 18.0 }), 0),
            format!("price={}\n", format_number(18.0))
        );
    }

    #[test]
    fn test_record_keeps_field_order() {
        let value = json!({ "zeta": 1, "alpha": "a", "region": null });
        assert_eq!(dump(value, 0), "zeta=1  alpha=a  region=<none>\n");
    }

    #[test]
    fn test_nested_collections_respect_depth() {
        let value = json!({
            "id": "ALFKI",
            "orders": [{ "id": 1, "total": 2.5 }, { "id": 2, "total": 3 }]
        });

        assert_eq!(dump(value.clone(), 0), "id=ALFKI  orders=...\n");
        assert_eq!(
            dump(value, 1),
            "id=ALFKI  orders=...\n  orders: id=1  total=2.5\n  orders: id=2  total=3\n"
        );
    }

    #[test]
    fn test_nested_record_marker() {
        let value = json!({ "name": "x", "address": { "city": "Berlin" } });
        assert_eq!(dump(value.clone(), 0), "name=x  address={ }\n");
        assert_eq!(dump(value, 1), "name=x  address={ }\n  address: city=Berlin\n");
    }

    #[test]
    fn test_sequence_of_records() {
        let value = json!([{ "a": 1 }, { "a": 2 }]);
        assert_eq!(dump(value, 0), "a=1\na=2\n");
    }

    #[test]
    fn test_sequence_of_sequences() {
        let value = json!([[1, 2], [3]]);
        assert_eq!(dump(value.clone(), 0), "...\n...\n");
        assert_eq!(dump(value, 1), "...\n  1\n  2\n...\n  3\n");
    }

    #[test]
    fn test_two_levels() {
        let value = json!({
            "category": "Beverages",
            "in_stock": [{ "units": 17, "products": [{ "name": "Chang" }] }]
        });
        assert_eq!(
            dump(value.clone(), 1),
            "category=Beverages  in_stock=...\n  in_stock: units=17  products=...\n"
        );
        assert_eq!(
            dump(value, 2),
            "category=Beverages  in_stock=...\n  in_stock: units=17  products=...\n    products: name=Chang\n"
        );
    }

    #[test]
    fn test_empty_sequence_prints_nothing() {
        assert_eq!(dump(json!([]), 3), "");
        assert_eq!(dump(json!({ "orders": [] }), 3), "orders=...\n");
    }

    #[test]
    fn test_report_rendering_and_override() {
        let mut report = Report::default();
        report.text("Header:");
        report
            .value(&json!({ "id": 1, "tags": ["a"] }), 1)
            .unwrap();

        assert_eq!(
            render_report(&report, None).unwrap(),
            "Header:\nid=1  tags=...\n  tags: a\n"
        );
        assert_eq!(
            render_report(&report, Some(0)).unwrap(),
            "Header:\nid=1  tags=...\n"
        );
    }
}
