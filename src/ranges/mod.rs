//!
//! The range tables: every bit pattern of a given width falls in exactly one inclusive
//! `[min, max]` range, and each range names the category of the patterns inside it.
//!
//! The tables are sorted by `min`, so a lookup is a binary search. They are plain `const` data
//! and can be inspected directly, e.g. to generate documentation or conformance tests.
//!

pub mod constants;

use crate::category::Category;
use crate::error::Error;
use constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a floating point encoding, in bits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Width {
    W32,
    #[default]
    W64,
}

impl Width {
    pub const fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Largest bit pattern representable in this width
    pub const fn max_bits(self) -> u64 {
        match self {
            Width::W32 => u32::MAX as u64,
            Width::W64 => u64::MAX,
        }
    }

    /// The range table of this width, with the bit patterns widened to `u64`
    pub fn records(self) -> Vec<RangeRecord> {
        match self {
            Width::W32 => RANGES_32.iter().map(Range::record).collect(),
            Width::W64 => RANGES_64.iter().map(Range::record).collect(),
        }
    }

    /// Formats `bits` as zero-padded uppercase hex of this width
    pub fn hex(self, bits: u64) -> String {
        match self {
            Width::W32 => format!("0x{:08X}", bits),
            Width::W64 => format!("0x{:016X}", bits),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(Error::InvalidWidth(bits.to_string())),
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> u32 {
        width.bits()
    }
}

impl FromStr for Width {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidWidth(s.to_string()))
            .and_then(Width::try_from)
    }
}

/// An unsigned integer holding the raw bits of a float. Implemented for `u32` (single precision)
/// and `u64` (double precision), so a 32-bit pattern can never end up in the 64-bit table.
pub trait Bits: Copy + Ord + Into<u64> + fmt::Debug + 'static {
    const WIDTH: Width;
    const SIGN_MASK: Self;
    const QUIET_MASK: Self;

    /// The canonical "no meaningful result" quiet NaN
    const INDETERMINATE: Self;

    /// The range table for this width, sorted by `min`
    fn table() -> &'static [Range<Self>];

    /// Narrows a `u64` to this width, failing if any bit above the width is set
    fn narrow(bits: u64) -> Option<Self>;

    #[inline]
    fn widen(self) -> u64 {
        self.into()
    }
}

impl Bits for u32 {
    const WIDTH: Width = Width::W32;
    const SIGN_MASK: u32 = 1 << 31;
    const QUIET_MASK: u32 = 1 << 22;
    const INDETERMINATE: u32 = indeterm::MIN32;

    fn table() -> &'static [Range<u32>] {
        &RANGES_32
    }

    fn narrow(bits: u64) -> Option<u32> {
        u32::try_from(bits).ok()
    }
}

impl Bits for u64 {
    const WIDTH: Width = Width::W64;
    const SIGN_MASK: u64 = 1 << 63;
    const QUIET_MASK: u64 = 1 << 51;
    const INDETERMINATE: u64 = indeterm::MIN64;

    fn table() -> &'static [Range<u64>] {
        &RANGES_64
    }

    fn narrow(bits: u64) -> Option<u64> {
        Some(bits)
    }
}

/// Inclusive range of bit patterns that share a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<B> {
    pub category: Category,
    pub min: B,
    pub max: B,
}

macro_rules! impl_between {
    ($($ty:ty),*) => {
        $(
            impl Range<$ty> {
                /// Builds the range between two endpoints, whichever order they're given in.
                /// The numerically smaller endpoint always becomes `min`.
                pub const fn between(category: Category, a: $ty, b: $ty) -> Self {
                    if a <= b {
                        Self { category, min: a, max: b }
                    } else {
                        Self { category, min: b, max: a }
                    }
                }
            }
        )*
    };
}

impl_between! { u32, u64 }

impl<B: Bits> Range<B> {
    #[inline]
    pub fn contains(&self, bits: B) -> bool {
        self.min <= bits && bits <= self.max
    }

    /// How many bit patterns the range holds. A `u128` so the full 64-bit space fits.
    pub fn len(&self) -> u128 {
        (self.max.widen() - self.min.widen()) as u128 + 1
    }

    pub fn record(&self) -> RangeRecord {
        RangeRecord {
            category: self.category,
            width: B::WIDTH,
            min: self.min.widen(),
            max: self.max.widen(),
        }
    }
}

/// A range with the width erased, for callers that want to look at the tables as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRecord {
    pub category: Category,
    pub width: Width,
    pub min: u64,
    pub max: u64,
}

impl RangeRecord {
    pub fn contains(&self, bits: u64) -> bool {
        self.min <= bits && bits <= self.max
    }
}

/// Finds the range a category occupies in the given width.
/// `Unclassified` owns no range, so it gives `None`.
pub fn range_of(category: Category, width: Width) -> Option<RangeRecord> {
    width.records().into_iter().find(|r| r.category == category)
}

pub const RANGE_COUNT: usize = 13;

pub static RANGES_32: [Range<u32>; RANGE_COUNT] = {
    use Category::*;
    [
        Range::<u32>::between(PositiveZero, pos_zero::MIN32, pos_zero::MAX32),
        Range::<u32>::between(PositiveDenormalized, pos_den::MIN32, pos_den::MAX32),
        Range::<u32>::between(PositiveNormalized, pos_nor::MIN32, pos_nor::MAX32),
        Range::<u32>::between(PositiveInfinity, pos_inf::MIN32, pos_inf::MAX32),
        Range::<u32>::between(PositiveSignalingNaN, pos_snan::MIN32, pos_snan::MAX32),
        Range::<u32>::between(PositiveQuietNaN, pos_qnan::MIN32, pos_qnan::MAX32),
        Range::<u32>::between(NegativeZero, neg_zero::MIN32, neg_zero::MAX32),
        Range::<u32>::between(NegativeDenormalized, neg_den::MIN32, neg_den::MAX32),
        Range::<u32>::between(NegativeNormalized, neg_nor::MIN32, neg_nor::MAX32),
        Range::<u32>::between(NegativeInfinity, neg_inf::MIN32, neg_inf::MAX32),
        Range::<u32>::between(NegativeSignalingNaN, neg_snan::MIN32, neg_snan::MAX32),
        Range::<u32>::between(Indeterminate, indeterm::MIN32, indeterm::MAX32),
        Range::<u32>::between(NegativeQuietNaN, neg_qnan::MIN32, neg_qnan::MAX32),
    ]
};

pub static RANGES_64: [Range<u64>; RANGE_COUNT] = {
    use Category::*;
    [
        Range::<u64>::between(PositiveZero, pos_zero::MIN64, pos_zero::MAX64),
        Range::<u64>::between(PositiveDenormalized, pos_den::MIN64, pos_den::MAX64),
        Range::<u64>::between(PositiveNormalized, pos_nor::MIN64, pos_nor::MAX64),
        Range::<u64>::between(PositiveInfinity, pos_inf::MIN64, pos_inf::MAX64),
        Range::<u64>::between(PositiveSignalingNaN, pos_snan::MIN64, pos_snan::MAX64),
        Range::<u64>::between(PositiveQuietNaN, pos_qnan::MIN64, pos_qnan::MAX64),
        Range::<u64>::between(NegativeZero, neg_zero::MIN64, neg_zero::MAX64),
        Range::<u64>::between(NegativeDenormalized, neg_den::MIN64, neg_den::MAX64),
        Range::<u64>::between(NegativeNormalized, neg_nor::MIN64, neg_nor::MAX64),
        Range::<u64>::between(NegativeInfinity, neg_inf::MIN64, neg_inf::MAX64),
        Range::<u64>::between(NegativeSignalingNaN, neg_snan::MIN64, neg_snan::MAX64),
        Range::<u64>::between(Indeterminate, indeterm::MIN64, indeterm::MAX64),
        Range::<u64>::between(NegativeQuietNaN, neg_qnan::MIN64, neg_qnan::MAX64),
    ]
};
