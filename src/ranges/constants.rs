//! Inclusive bit pattern bounds of every category, for both widths.
//! Each category gets a module, so `neg_nor::MIN64` reads as "the smallest negative normalized
//! double, as an unsigned bit pattern". Bounds are stored in ascending unsigned order.

macro_rules! define_inner {
    () => {};
    (32: $min:expr, $max:expr $(; $($tts:tt)*)?) => {
        pub const MIN32: u32 = $min;
        pub const MAX32: u32 = $max;
        define_inner! { $($($tts)*)? }
    };
    (64: $min:expr, $max:expr $(; $($tts:tt)*)?) => {
        pub const MIN64: u64 = $min;
        pub const MAX64: u64 = $max;
        define_inner! { $($($tts)*)? }
    };
}

macro_rules! define {
    ($name:ident, $($props:tt)*) => {
        pub mod $name {
            define_inner! { $($props)* }
        }
    };
}

// Positive half
define! { pos_zero, 32: 0x0000_0000, 0x0000_0000; 64: 0x0000_0000_0000_0000, 0x0000_0000_0000_0000 }
define! { pos_den,  32: 0x0000_0001, 0x007F_FFFF; 64: 0x0000_0000_0000_0001, 0x000F_FFFF_FFFF_FFFF }
define! { pos_nor,  32: 0x0080_0000, 0x7F7F_FFFF; 64: 0x0010_0000_0000_0000, 0x7FEF_FFFF_FFFF_FFFF }
define! { pos_inf,  32: 0x7F80_0000, 0x7F80_0000; 64: 0x7FF0_0000_0000_0000, 0x7FF0_0000_0000_0000 }
define! { pos_snan, 32: 0x7F80_0001, 0x7FBF_FFFF; 64: 0x7FF0_0000_0000_0001, 0x7FF7_FFFF_FFFF_FFFF }
define! { pos_qnan, 32: 0x7FC0_0000, 0x7FFF_FFFF; 64: 0x7FF8_0000_0000_0000, 0x7FFF_FFFF_FFFF_FFFF }

// Negative half
define! { neg_zero, 32: 0x8000_0000, 0x8000_0000; 64: 0x8000_0000_0000_0000, 0x8000_0000_0000_0000 }
define! { neg_den,  32: 0x8000_0001, 0x807F_FFFF; 64: 0x8000_0000_0000_0001, 0x800F_FFFF_FFFF_FFFF }
define! { neg_nor,  32: 0x8080_0000, 0xFF7F_FFFF; 64: 0x8010_0000_0000_0000, 0xFFEF_FFFF_FFFF_FFFF }
define! { neg_inf,  32: 0xFF80_0000, 0xFF80_0000; 64: 0xFFF0_0000_0000_0000, 0xFFF0_0000_0000_0000 }
define! { neg_snan, 32: 0xFF80_0001, 0xFFBF_FFFF; 64: 0xFFF0_0000_0000_0001, 0xFFF7_FFFF_FFFF_FFFF }
define! { indeterm, 32: 0xFFC0_0000, 0xFFC0_0000; 64: 0xFFF8_0000_0000_0000, 0xFFF8_0000_0000_0000 }
define! { neg_qnan, 32: 0xFFC0_0001, 0xFFFF_FFFF; 64: 0xFFF8_0000_0000_0001, 0xFFFF_FFFF_FFFF_FFFF }
