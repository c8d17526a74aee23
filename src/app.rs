use crate::category::Category;
use crate::classify::classify_bits;
use crate::config::Config;
use crate::error::Result;
use crate::parser::parse_value;
use crate::report::{Classification, Renderer};
use std::io::Write;

/// How a run went, as far as the exit status is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Some value hit a hole in the range table
    Unclassified,
}

/// Classifies every value in the config and writes the report to `out`.
/// Stops at the first value that can't be parsed.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Status> {
    let renderer = Renderer::new(config.format, config.color);

    if config.table {
        let records = config.width.records();
        write!(out, "{}", renderer.table(config.width, &records)?)?;
    }

    if config.values.is_empty() {
        return Ok(Status::Ok);
    }

    let classified = config
        .values
        .iter()
        .map(|value| -> Result<Classification> {
            let bits = parse_value(value, config.width)?;
            let category = classify_bits(bits, config.width)?;
            tracing::debug!(value = %value, %category, "classified");
            Ok(Classification::new(value, config.width, bits, category))
        })
        .collect::<Result<Vec<_>>>()?;

    if config.table {
        writeln!(out)?;
    }
    write!(out, "{}", renderer.classifications(&classified)?)?;

    let unclassified = classified
        .iter()
        .any(|c| c.category == Category::Unclassified);
    Ok(if unclassified {
        Status::Unclassified
    } else {
        Status::Ok
    })
}
