//!
//! Turns the values given on the command line into bit patterns.
//!
//! A value can be a raw bit pattern (`0x7ff0000000000000`, `0b1`, underscores allowed), a word
//! like `inf`, `-nan` or `snan`, or any float literal Rust can parse. Float literals are rounded
//! to the requested width; bit patterns are never truncated.
//!

use crate::error::{Error, Result};
use crate::ranges::constants::*;
use crate::ranges::Width;
use lazy_static::*;
use std::collections::HashMap;

lazy_static! {
    /// Named special values, as (32-bit, 64-bit) patterns
    static ref WORDS: HashMap<&'static str, (u32, u64)> = {
        let mut words = HashMap::new();

        for name in ["inf", "+inf", "infinity", "+infinity"] {
            words.insert(name, (pos_inf::MIN32, pos_inf::MIN64));
        }
        for name in ["-inf", "-infinity"] {
            words.insert(name, (neg_inf::MIN32, neg_inf::MIN64));
        }
        for name in ["nan", "+nan", "qnan", "+qnan"] {
            words.insert(name, (pos_qnan::MIN32, pos_qnan::MIN64));
        }
        for name in ["-nan", "-qnan"] {
            words.insert(name, (neg_qnan::MIN32, neg_qnan::MIN64));
        }
        for name in ["snan", "+snan"] {
            words.insert(name, (pos_snan::MIN32, pos_snan::MIN64));
        }
        words.insert("-snan", (neg_snan::MIN32, neg_snan::MIN64));
        for name in ["ind", "indeterminate"] {
            words.insert(name, (indeterm::MIN32, indeterm::MIN64));
        }

        words
    };
}

fn radix(s: &str, radix: u32) -> Option<u64> {
    let digits: String = s.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(&digits, radix).ok()
}

/// Reads a raw bit pattern, if `s` looks like one
fn bit_pattern(s: &str) -> Option<Option<u64>> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(radix(hex, 16))
    } else {
        let bin = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B"))?;
        Some(radix(bin, 2))
    }
}

/// Parses `value` into a bit pattern of the given width, widened to `u64`
pub fn parse_value(value: &str, width: Width) -> Result<u64> {
    let s = value.trim();
    let invalid = || Error::InvalidValue(value.to_string());

    if let Some(bits) = bit_pattern(s) {
        let bits = bits.ok_or_else(invalid)?;
        if bits > width.max_bits() {
            return Err(Error::BitsOutOfRange { width, bits });
        }
        return Ok(bits);
    }

    if let Some(&(bits32, bits64)) = WORDS.get(s.to_ascii_lowercase().as_str()) {
        return Ok(match width {
            Width::W32 => bits32 as u64,
            Width::W64 => bits64,
        });
    }

    match width {
        Width::W32 => s.parse::<f32>().map(|f| f.to_bits() as u64),
        Width::W64 => s.parse::<f64>().map(f64::to_bits),
    }
    .map_err(|_| invalid())
}
