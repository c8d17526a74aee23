//!
//! Classifies IEEE-754 bit patterns into fourteen categories: quiet and signaling NaNs,
//! infinities, denormalized and normalized numbers and zeros, each with its sign, plus the
//! "indeterminate" NaN and an "unclassified" category that only shows up if the range tables are
//! broken. Works on raw bits of 32-bit and 64-bit floats, so `-0.0` and `+0.0` are different
//! categories and every NaN payload is accounted for.
//!
//! Also defines the four sentinels a sparse vector encoder uses to compress zeros, infinities
//! and missing values out of its dense storage.
//!
//! ```
//! use ieee_specials::{classify64, Category, CategorySet};
//!
//! assert_eq!(classify64(0x8000_0000_0000_0000), Category::NegativeZero);
//! assert_eq!(classify64(0xFFF8_0000_0000_0000), Category::Indeterminate);
//! assert!(CategorySet::NAN.contains(classify64(0x7FF0_0000_0000_0001)));
//! ```
//!

pub mod app;
pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod parser;
pub mod ranges;
pub mod report;
pub mod sentinel;

pub use category::{Category, CategorySet};
pub use classify::{
    classify, classify32, classify64, classify_bits, classify_f32, classify_f64, classify_in,
    matches, try_classify,
};
pub use error::Error;
pub use ranges::{range_of, Bits, Range, RangeRecord, Width, RANGES_32, RANGES_64};
pub use sentinel::Sentinel;
