//!
//! Renders classifications and range tables, as colored text for humans or as TOML for scripts.
//! TOML integers are signed 64-bit, so bit patterns always go out as hex strings.
//!

use crate::category::Category;
use crate::config::Format;
use crate::error::Result;
use crate::ranges::{RangeRecord, Width};
use crate::sentinel::Sentinel;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::fmt::Display;

/// A single classified value
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub input: String,
    pub width: u32,
    pub bits: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<&'static str>,
}

impl Classification {
    pub fn new(input: &str, width: Width, bits: u64, category: Category) -> Self {
        // Sentinels only exist in double precision storage
        let sentinel = match width {
            Width::W64 => Sentinel::from_bits(bits).map(Sentinel::name),
            Width::W32 => None,
        };

        Self {
            input: input.to_string(),
            width: width.bits(),
            bits: width.hex(bits),
            category,
            sentinel,
        }
    }
}

#[derive(Debug, Serialize)]
struct Classifications<'a> {
    value: &'a [Classification],
}

#[derive(Debug, Serialize)]
struct TableRow {
    category: Category,
    min: String,
    max: String,
}

#[derive(Debug, Serialize)]
struct Table {
    width: u32,
    range: Vec<TableRow>,
}

pub struct Renderer {
    pub format: Format,
    pub color: bool,
}

impl Renderer {
    pub fn new(format: Format, color: bool) -> Self {
        Self { format, color }
    }

    fn paint(&self, text: impl Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn classifications(&self, values: &[Classification]) -> Result<String> {
        match self.format {
            Format::Toml => Ok(toml::to_string(&Classifications { value: values })?),
            Format::Text => {
                let input_width = values.iter().map(|v| v.input.len()).max().unwrap_or(0);
                let mut out = String::new();
                for v in values {
                    let category = if v.category == Category::Unclassified {
                        self.paint(v.category, Style::new().bright_red().bold())
                    } else {
                        self.paint(v.category, Style::new().bright_yellow())
                    };
                    out += &format!(
                        "{:<input_width$}  {}  {}",
                        v.input,
                        self.paint(&v.bits, Style::new().bright_blue()),
                        category,
                    );
                    if let Some(sentinel) = v.sentinel {
                        out += &format!("  [sentinel: {}]", self.paint(sentinel, Style::new().green()));
                    }
                    out.push('\n');
                }
                Ok(out)
            }
        }
    }

    pub fn table(&self, width: Width, records: &[RangeRecord]) -> Result<String> {
        match self.format {
            Format::Toml => {
                let table = Table {
                    width: width.bits(),
                    range: records
                        .iter()
                        .map(|r| TableRow {
                            category: r.category,
                            min: width.hex(r.min),
                            max: width.hex(r.max),
                        })
                        .collect(),
                };
                Ok(toml::to_string(&table)?)
            }
            Format::Text => {
                let mut out = format!("{}\n", self.paint(format!("{width}-bit ranges"), Style::new().bold()));
                for r in records {
                    out += &format!(
                        "{:<24}{}  {}\n",
                        r.category.to_string(),
                        self.paint(width.hex(r.min), Style::new().bright_blue()),
                        self.paint(width.hex(r.max), Style::new().bright_blue()),
                    );
                }
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::Width;

    #[test]
    fn test_classification_sentinel() {
        let c = Classification::new("inf", Width::W64, 0x7FF0_0000_0000_0000, Category::PositiveInfinity);
        assert_eq!(c.sentinel, Some("inf"));
        assert_eq!(c.bits, "0x7FF0000000000000");

        let c = Classification::new("inf", Width::W32, 0x7F80_0000, Category::PositiveInfinity);
        assert_eq!(c.sentinel, None);
    }

    #[test]
    fn test_text_without_color() {
        let renderer = Renderer::new(Format::Text, false);
        let values = [
            Classification::new("-0", Width::W64, 0x8000_0000_0000_0000, Category::NegativeZero),
            Classification::new("0", Width::W64, 0, Category::PositiveZero),
        ];
        let out = renderer.classifications(&values).unwrap();
        assert_eq!(
            out,
            "-0  0x8000000000000000  negative zero\n\
             0   0x0000000000000000  positive zero  [sentinel: zero]\n"
        );
    }

    #[test]
    fn test_toml_values() {
        let renderer = Renderer::new(Format::Toml, false);
        let values = [Classification::new(
            "nan",
            Width::W32,
            0x7FC0_0000,
            Category::PositiveQuietNaN,
        )];
        let out = renderer.classifications(&values).unwrap();
        let parsed: toml::Value = toml::from_str(&out).unwrap();
        let first = &parsed["value"][0];
        assert_eq!(first["bits"].as_str(), Some("0x7FC00000"));
        assert_eq!(first["category"].as_str(), Some("pos_qnan"));
        assert_eq!(first["width"].as_integer(), Some(32));
        assert!(first.get("sentinel").is_none());
    }

    #[test]
    fn test_toml_table() {
        let renderer = Renderer::new(Format::Toml, false);
        let out = renderer.table(Width::W64, &Width::W64.records()).unwrap();
        let parsed: toml::Value = toml::from_str(&out).unwrap();
        let ranges = parsed["range"].as_array().unwrap();
        assert_eq!(ranges.len(), 13);
        assert_eq!(ranges[12]["category"].as_str(), Some("neg_qnan"));
        assert_eq!(ranges[12]["min"].as_str(), Some("0xFFF8000000000001"));
        assert_eq!(ranges[12]["max"].as_str(), Some("0xFFFFFFFFFFFFFFFF"));
    }

    #[test]
    fn test_text_table() {
        let renderer = Renderer::new(Format::Text, false);
        let out = renderer.table(Width::W32, &Width::W32.records()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("32-bit ranges"));
        assert_eq!(lines.next(), Some("positive zero           0x00000000  0x00000000"));
        assert_eq!(out.lines().count(), 14);
    }
}
