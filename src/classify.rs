//!
//! Maps raw bit patterns to their [`Category`].
//!
//! The lookup checks the `Indeterminate` point first and then binary searches the range table of
//! the pattern's width. Floats are never compared as floats here: `-0.0 == 0.0` and NaNs compare
//! unequal to themselves, so everything is done on the unsigned bit pattern.
//!

use crate::category::{Category, CategorySet};
use crate::error::{Error, Result};
use crate::ranges::{Bits, Range, Width};

/// Classifies `bits` using the table for its width.
///
/// Returns [`Category::Unclassified`] if no range matches, which can only happen if the table is
/// broken. That case is also logged, see [`try_classify`] for a version that turns it into an
/// error.
#[inline]
pub fn classify<B: Bits>(bits: B) -> Category {
    classify_in(B::table(), bits)
}

/// Same as [`classify`], but looks `bits` up in an arbitrary table. The table must be sorted by
/// `min` and its ranges must not overlap.
pub fn classify_in<B: Bits>(table: &[Range<B>], bits: B) -> Category {
    if bits == B::INDETERMINATE {
        return Category::Indeterminate;
    }

    let i = table.partition_point(|range| range.max < bits);
    match table.get(i) {
        Some(range) if range.contains(bits) => range.category,
        _ => {
            tracing::error!(
                width = B::WIDTH.bits(),
                bits = %B::WIDTH.hex(bits.widen()),
                "bit pattern is not covered by the range table"
            );
            Category::Unclassified
        }
    }
}

#[inline]
pub fn classify32(bits: u32) -> Category {
    classify(bits)
}

#[inline]
pub fn classify64(bits: u64) -> Category {
    classify(bits)
}

/// Classifies the bits of `f`. The float is reinterpreted, not converted.
#[inline]
pub fn classify_f32(f: f32) -> Category {
    classify(f.to_bits())
}

/// Classifies the bits of `f`. The float is reinterpreted, not converted.
#[inline]
pub fn classify_f64(f: f64) -> Category {
    classify(f.to_bits())
}

/// Like [`classify`], but a miss in the range table is an [`Error::Unclassified`]
pub fn try_classify<B: Bits>(bits: B) -> Result<Category> {
    match classify(bits) {
        Category::Unclassified => Err(Error::Unclassified {
            width: B::WIDTH,
            bits: bits.widen(),
        }),
        category => Ok(category),
    }
}

/// Classifies a bit pattern whose width is only known at runtime.
/// For [`Width::W32`], `bits` must fit in 32 bits; it is never truncated or sign extended.
pub fn classify_bits(bits: u64, width: Width) -> Result<Category> {
    match width {
        Width::W32 => <u32 as Bits>::narrow(bits)
            .map(classify32)
            .ok_or(Error::BitsOutOfRange { width, bits }),
        Width::W64 => Ok(classify64(bits)),
    }
}

/// Tests whether `bits` falls in any of the categories in `set`
#[inline]
pub fn matches<B: Bits>(bits: B, set: CategorySet) -> bool {
    set.contains(classify(bits))
}
