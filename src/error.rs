use crate::ranges::Width;
use owo_colors::OwoColorize;
use std::io;
use thiserror::Error;

fn pattern(width: &Width, bits: &u64) -> String {
    width.hex(*bits).bright_yellow().to_string()
}

fn overflow(bits: &u64) -> String {
    format!("{:#X}", bits).bright_yellow().to_string()
}

/// Represents anything that can go wrong while classifying values or loading the configuration
#[derive(Debug, Error)]
pub enum Error {
    /// No range matched. The range table doesn't cover the whole bit pattern space, which is a
    /// bug in the table and not in the input.
    #[error("No range contains the {width}-bit pattern {}", pattern(.width, .bits))]
    Unclassified { width: Width, bits: u64 },

    #[error("The bit pattern {} doesn't fit in {width} bits", overflow(.bits))]
    BitsOutOfRange { width: Width, bits: u64 },

    #[error("'{}' is not a bit pattern nor a floating point number", .0.bright_yellow())]
    InvalidValue(String),

    #[error("'{}' is not a valid width, expected {} or {}", .0.bright_yellow(), "32".bright_blue(), "64".bright_blue())]
    InvalidWidth(String),

    /// Not our fault, some std::io went wrong
    #[error("I/O Error: {0}")]
    IO(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to render TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
