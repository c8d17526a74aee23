//!
//! Sentinels a sparse vector encoder uses to drop special values out of its dense payload.
//! Zero and the two infinities are compressed away along with "no value present", and put back
//! on read by matching the stored 64-bit pattern against these.
//!
//! Values are built with [`f64::from_bits`], which is a defined reinterpretation of the bits.
//! Comparisons are always made on bits: `-0.0` is *not* the zero sentinel, and the "no value
//! present" NaN is one above the indeterminate NaN, so a real `0 * inf` result never reads back
//! as a missing value.
//!

use crate::category::Category;
use crate::classify::classify64;
use crate::ranges::constants::{neg_inf, neg_qnan, pos_inf};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

pub const ZERO_BITS: u64 = 0x0;
pub const INF_BITS: u64 = pos_inf::MIN64;
pub const NEG_INF_BITS: u64 = neg_inf::MIN64;
pub const NVP_BITS: u64 = neg_qnan::MIN64;

pub const ZERO: f64 = f64::from_bits(ZERO_BITS);
pub const INF: f64 = f64::from_bits(INF_BITS);
pub const NEG_INF: f64 = f64::from_bits(NEG_INF_BITS);
/// "No value present"
pub const NVP: f64 = f64::from_bits(NVP_BITS);

/// Size of a sentinel in storage, in bytes
pub const SENTINEL_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Zero,
    Infinity,
    NegativeInfinity,
    NoValuePresent,
}

impl Sentinel {
    pub const ALL: [Sentinel; 4] = [
        Sentinel::Zero,
        Sentinel::Infinity,
        Sentinel::NegativeInfinity,
        Sentinel::NoValuePresent,
    ];

    pub const fn bits(self) -> u64 {
        match self {
            Sentinel::Zero => ZERO_BITS,
            Sentinel::Infinity => INF_BITS,
            Sentinel::NegativeInfinity => NEG_INF_BITS,
            Sentinel::NoValuePresent => NVP_BITS,
        }
    }

    pub const fn value(self) -> f64 {
        f64::from_bits(self.bits())
    }

    /// Category of the sentinel's own bit pattern
    pub fn category(self) -> Category {
        classify64(self.bits())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Sentinel::Zero => "zero",
            Sentinel::Infinity => "inf",
            Sentinel::NegativeInfinity => "neginf",
            Sentinel::NoValuePresent => "nvp",
        }
    }

    /// Finds the sentinel with exactly these bits
    pub fn from_bits(bits: u64) -> Option<Sentinel> {
        Self::ALL.into_iter().find(|s| s.bits() == bits)
    }

    /// Finds the sentinel with exactly the bits of `value`
    pub fn of(value: f64) -> Option<Sentinel> {
        Self::from_bits(value.to_bits())
    }

    /// Reads a stored element (8 little-endian bytes) and tells whether it's a sentinel.
    /// Returns `None` if it isn't one, or if `buf` is too short to hold an element.
    pub fn from_le_bytes(buf: &[u8]) -> Option<Sentinel> {
        if buf.len() < SENTINEL_SIZE {
            return None;
        }
        Self::from_bits(LittleEndian::read_u64(buf))
    }

    /// Writes the sentinel to the start of `buf` as 8 little-endian bytes
    ///
    /// # Panics
    /// If `buf` is shorter than [`SENTINEL_SIZE`]
    pub fn write_le(self, buf: &mut [u8]) {
        LittleEndian::write_u64(buf, self.bits());
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::constants::indeterm;

    #[test]
    fn test_bits_round_trip() {
        assert_eq!(ZERO.to_bits(), 0x0000_0000_0000_0000);
        assert_eq!(INF.to_bits(), 0x7FF0_0000_0000_0000);
        assert_eq!(NEG_INF.to_bits(), 0xFFF0_0000_0000_0000);
        assert_eq!(NVP.to_bits(), 0xFFF8_0000_0000_0001);
        for s in Sentinel::ALL {
            assert_eq!(s.value().to_bits(), s.bits());
        }
    }

    #[test]
    fn test_values() {
        assert_eq!(ZERO, 0.0);
        assert!(ZERO.is_sign_positive());
        assert_eq!(INF, f64::INFINITY);
        assert_eq!(NEG_INF, f64::NEG_INFINITY);
        assert!(NVP.is_nan());
        assert!(NVP.is_sign_negative());
    }

    #[test]
    fn test_nvp_is_not_indeterminate() {
        assert_ne!(NVP_BITS, indeterm::MIN64);
        assert_eq!(Sentinel::NoValuePresent.category(), Category::NegativeQuietNaN);
        assert_eq!(Sentinel::of(f64::from_bits(indeterm::MIN64)), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Sentinel::Zero.category(), Category::PositiveZero);
        assert_eq!(Sentinel::Infinity.category(), Category::PositiveInfinity);
        assert_eq!(Sentinel::NegativeInfinity.category(), Category::NegativeInfinity);
    }

    #[test]
    fn test_of() {
        assert_eq!(Sentinel::of(0.0), Some(Sentinel::Zero));
        assert_eq!(Sentinel::of(-0.0), None);
        assert_eq!(Sentinel::of(f64::INFINITY), Some(Sentinel::Infinity));
        assert_eq!(Sentinel::of(f64::NEG_INFINITY), Some(Sentinel::NegativeInfinity));
        assert_eq!(Sentinel::of(NVP), Some(Sentinel::NoValuePresent));
        assert_eq!(Sentinel::of(f64::NAN), None);
        assert_eq!(Sentinel::of(1.0), None);
    }

    #[test]
    fn test_le_bytes() {
        let mut buf = [0xAAu8; 12];
        for s in Sentinel::ALL {
            s.write_le(&mut buf);
            assert_eq!(buf[..8], s.bits().to_le_bytes());
            assert_eq!(Sentinel::from_le_bytes(&buf), Some(s));
        }

        assert_eq!(
            Sentinel::from_le_bytes(&[0x01, 0, 0, 0, 0, 0, 0xF8, 0xFF]),
            Some(Sentinel::NoValuePresent)
        );
        assert_eq!(Sentinel::from_le_bytes(&[0, 0, 0, 0, 0, 0, 0xF8, 0xFF]), None);
        assert_eq!(Sentinel::from_le_bytes(&1.5f64.to_le_bytes()), None);
        assert_eq!(Sentinel::from_le_bytes(&[0; 4]), None);
    }
}
