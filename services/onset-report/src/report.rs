//! Output formatting for report views.

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use serde::Serialize;

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

/// A record that can be laid out as table rows.
pub trait Tabular {
    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Rows this record contributes, each matching `headers`.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render records in the requested format.
pub fn render<T: Tabular + Serialize>(
    records: &[T],
    format: OutputFormat,
    title: &str,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(records, title)),
        OutputFormat::Json => format_json(records),
        OutputFormat::Csv => format_csv(records),
    }
}

/// Format records as a console table.
pub fn format_table<T: Tabular>(records: &[T], title: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(T::headers());

    for record in records {
        for row in record.rows() {
            table.add_row(row);
        }
    }

    if title.is_empty() {
        table.to_string()
    } else {
        format!("{}\n{}", title, table)
    }
}

/// Format records as JSON.
pub fn format_json<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize report")
}

/// Format records as CSV, header first.
pub fn format_csv<T: Tabular>(records: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::headers())?;
    for record in records {
        for row in record.rows() {
            writer.write_record(&row)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        name: &'static str,
        value: f64,
    }

    impl Tabular for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["name", "value"]
        }

        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec![self.name.to_string(), format!("{:.2}", self.value)]]
        }
    }

    fn pairs() -> Vec<Pair> {
        vec![
            Pair { name: "a", value: 0.5 },
            Pair { name: "b, c", value: 0.25 },
        ]
    }

    #[test]
    fn test_csv_quotes_fields() {
        let csv = format_csv(&pairs()).unwrap();
        assert_eq!(csv, "name,value\na,0.50\n\"b, c\",0.25\n");
    }

    #[test]
    fn test_json_array() {
        let json = format_json(&pairs()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["name"], "b, c");
    }

    #[test]
    fn test_table_has_title_and_headers() {
        let out = render(&pairs(), OutputFormat::Table, "Pairs").unwrap();
        assert!(out.starts_with("Pairs\n"));
        assert!(out.contains("name"));
        assert!(out.contains("0.50"));
    }
}
