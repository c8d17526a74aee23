//! Float categories and bitmasks of them.
//!
//! A [`Category`] is the single answer the classifier gives for a bit pattern. A [`CategorySet`]
//! is a union of categories, one bit each, so "is this any kind of NaN?" is a single AND:
//!
//! | bit | Category |
//! |----:|----------|
//! |   0 | positive quiet NaN |
//! |   1 | negative quiet NaN |
//! |   2 | positive signaling NaN |
//! |   3 | negative signaling NaN |
//! |   4 | +∞ |
//! |   5 | −∞ |
//! |   6 | positive denormalized |
//! |   7 | negative denormalized |
//! |   8 | positive normalized |
//! |   9 | negative normalized |
//! |  10 | +0 |
//! |  11 | −0 |
//! |  12 | indeterminate (the canonical quiet NaN with the sign bit set) |
//! |  13 | unclassified: no range matched, which means the range table is broken |

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    PositiveQuietNaN = 0,
    NegativeQuietNaN,
    PositiveSignalingNaN,
    NegativeSignalingNaN,
    PositiveInfinity,
    NegativeInfinity,
    PositiveDenormalized,
    NegativeDenormalized,
    PositiveNormalized,
    NegativeNormalized,
    PositiveZero,
    NegativeZero,
    Indeterminate,
    Unclassified,
}

impl Category {
    /// Every category, in bit order. Includes `Unclassified`.
    pub const ALL: [Category; 14] = {
        use Category::*;
        [
            PositiveQuietNaN,
            NegativeQuietNaN,
            PositiveSignalingNaN,
            NegativeSignalingNaN,
            PositiveInfinity,
            NegativeInfinity,
            PositiveDenormalized,
            NegativeDenormalized,
            PositiveNormalized,
            NegativeNormalized,
            PositiveZero,
            NegativeZero,
            Indeterminate,
            Unclassified,
        ]
    };

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub fn from_bit(bit: u8) -> Option<Category> {
        Self::ALL.get(bit as usize).copied()
    }

    #[inline]
    pub const fn mask(self) -> CategorySet {
        CategorySet(1 << self.bit())
    }

    pub const fn is_nan(self) -> bool {
        CategorySet::NAN.contains(self)
    }

    /// Whether the sign bit is set. `Indeterminate` counts as negative, `Unclassified` as neither.
    pub const fn is_negative(self) -> bool {
        CategorySet::NEGATIVE.contains(self)
    }

    pub const fn is_finite(self) -> bool {
        CategorySet::FINITE.contains(self)
    }

    /// Short identifier, stable across versions. Used in TOML output.
    pub const fn name(self) -> &'static str {
        use Category::*;
        match self {
            PositiveQuietNaN => "pos_qnan",
            NegativeQuietNaN => "neg_qnan",
            PositiveSignalingNaN => "pos_snan",
            NegativeSignalingNaN => "neg_snan",
            PositiveInfinity => "pos_inf",
            NegativeInfinity => "neg_inf",
            PositiveDenormalized => "pos_den",
            NegativeDenormalized => "neg_den",
            PositiveNormalized => "pos_nor",
            NegativeNormalized => "neg_nor",
            PositiveZero => "pos_zero",
            NegativeZero => "neg_zero",
            Indeterminate => "indeterminate",
            Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Category::*;
        let s = match self {
            PositiveQuietNaN => "positive quiet NaN",
            NegativeQuietNaN => "negative quiet NaN",
            PositiveSignalingNaN => "positive signaling NaN",
            NegativeSignalingNaN => "negative signaling NaN",
            PositiveInfinity => "positive infinity",
            NegativeInfinity => "negative infinity",
            PositiveDenormalized => "positive denormalized",
            NegativeDenormalized => "negative denormalized",
            PositiveNormalized => "positive normalized",
            NegativeNormalized => "negative normalized",
            PositiveZero => "positive zero",
            NegativeZero => "negative zero",
            Indeterminate => "indeterminate",
            Unclassified => "unclassified",
        };
        f.pad(s)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A set of categories, stored as a bitmask with bit `c.bit()` set for each member `c`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySet(u32);

macro_rules! set {
    ($($c:ident)|*) => {
        CategorySet(0 $(| (1 << Category::$c as u32))*)
    };
}

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub const QUIET_NAN: CategorySet = set!(PositiveQuietNaN | NegativeQuietNaN | Indeterminate);
    pub const SIGNALING_NAN: CategorySet = set!(PositiveSignalingNaN | NegativeSignalingNaN);
    pub const NAN: CategorySet = CategorySet(Self::QUIET_NAN.0 | Self::SIGNALING_NAN.0);
    pub const INFINITY: CategorySet = set!(PositiveInfinity | NegativeInfinity);
    pub const ZERO: CategorySet = set!(PositiveZero | NegativeZero);
    pub const DENORMALIZED: CategorySet = set!(PositiveDenormalized | NegativeDenormalized);
    pub const NORMALIZED: CategorySet = set!(PositiveNormalized | NegativeNormalized);
    pub const FINITE: CategorySet =
        CategorySet(Self::ZERO.0 | Self::DENORMALIZED.0 | Self::NORMALIZED.0);

    pub const POSITIVE: CategorySet = set!(
        PositiveQuietNaN
            | PositiveSignalingNaN
            | PositiveInfinity
            | PositiveDenormalized
            | PositiveNormalized
            | PositiveZero
    );
    pub const NEGATIVE: CategorySet = set!(
        NegativeQuietNaN
            | NegativeSignalingNaN
            | NegativeInfinity
            | NegativeDenormalized
            | NegativeNormalized
            | NegativeZero
            | Indeterminate
    );

    /// Every category a well formed bit pattern can have, i.e. all but `Unclassified`
    pub const ALL: CategorySet = CategorySet(Self::POSITIVE.0 | Self::NEGATIVE.0);

    pub const fn from_bits(bits: u32) -> CategorySet {
        CategorySet(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.mask().0 != 0
    }

    /// Whether the two sets share any category
    #[inline]
    pub const fn intersects(self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.mask().0;
    }

    pub fn remove(&mut self, category: Category) {
        self.0 &= !category.mask().0;
    }

    pub const fn union(self, other: CategorySet) -> CategorySet {
        CategorySet(self.0 | other.0)
    }

    pub const fn intersection(self, other: CategorySet) -> CategorySet {
        CategorySet(self.0 & other.0)
    }

    /// The categories of `ALL` not in this set
    pub const fn complement(self) -> CategorySet {
        CategorySet(!self.0 & Self::ALL.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        category.mask()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl BitOr for CategorySet {
    type Output = CategorySet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOr<Category> for CategorySet {
    type Output = CategorySet;

    fn bitor(self, rhs: Category) -> Self::Output {
        self.union(rhs.mask())
    }
}

impl BitOr for Category {
    type Output = CategorySet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.mask().union(rhs.mask())
    }
}

impl BitOrAssign for CategorySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CategorySet {
    type Output = CategorySet;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl Not for CategorySet {
    type Output = CategorySet;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for c in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", c.name())?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(Category::PositiveQuietNaN.bit(), 0);
        assert_eq!(Category::NegativeZero.bit(), 11);
        assert_eq!(Category::Indeterminate.bit(), 12);
        assert_eq!(Category::Unclassified.bit(), 13);
        for (i, c) in Category::ALL.into_iter().enumerate() {
            assert_eq!(c.bit() as usize, i);
            assert_eq!(Category::from_bit(i as u8), Some(c));
            assert_eq!(c.mask().bits(), 1 << i);
        }
        assert_eq!(Category::from_bit(14), None);
    }

    #[test]
    fn test_nan_mask() {
        use Category::*;
        let nan = PositiveQuietNaN | NegativeQuietNaN | PositiveSignalingNaN | NegativeSignalingNaN;
        assert_eq!(CategorySet::NAN, nan | Indeterminate);
        assert!(Indeterminate.is_nan());
        assert!(!PositiveInfinity.is_nan());
        assert!(!Unclassified.is_nan());
    }

    #[test]
    fn test_groups_partition_all() {
        let groups = [
            CategorySet::NAN,
            CategorySet::INFINITY,
            CategorySet::ZERO,
            CategorySet::DENORMALIZED,
            CategorySet::NORMALIZED,
        ];
        let mut union = CategorySet::EMPTY;
        for g in groups {
            assert!(!union.intersects(g));
            union |= g;
        }
        assert_eq!(union, CategorySet::ALL);
        assert_eq!(CategorySet::ALL.len(), 13);
        assert!(!CategorySet::ALL.contains(Category::Unclassified));
        assert_eq!(CategorySet::POSITIVE & CategorySet::NEGATIVE, CategorySet::EMPTY);
    }

    #[test]
    fn test_complement() {
        assert_eq!(!CategorySet::EMPTY, CategorySet::ALL);
        assert_eq!(!CategorySet::ALL, CategorySet::EMPTY);
        assert_eq!(!CategorySet::POSITIVE, CategorySet::NEGATIVE);
        assert_eq!(CategorySet::FINITE.complement(), CategorySet::NAN | CategorySet::INFINITY);
    }

    #[test]
    fn test_set_ops() {
        let mut set: CategorySet = [Category::PositiveZero, Category::NegativeZero]
            .into_iter()
            .collect();
        assert_eq!(set, CategorySet::ZERO);
        set.insert(Category::PositiveInfinity);
        assert_eq!(set.len(), 3);
        set.remove(Category::PositiveZero);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Category::PositiveInfinity, Category::NegativeZero]
        );
        assert_eq!(set.to_string(), "{pos_inf, neg_zero}");
    }
}
