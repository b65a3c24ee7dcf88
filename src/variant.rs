//! Variant configuration
//!
//! A SHA-2 variant is described entirely by associated constants, so the
//! engine can read it from `const fn` code. The traits are split by word
//! family because the family fixes the block size, the schedule length and
//! the width of the padding length field; everything that may differ
//! between two members of the same family lives here.
//!
//! The const parameter `N` is the digest length in bytes. Defaults carry the
//! FIPS 180-4 values, so a variant normally only supplies its initial hash
//! values.

use crate::consts::{K32, K64};

/// Schedule transform `σ(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^c(x)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SmallSigma {
    /// Right-rotation amounts `a` and `b`.
    pub rotate: [u32; 2],
    /// Right-shift amount `c`.
    pub shift: u32,
}

/// Round transform `Σ(x) = ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BigSigma {
    /// Right-rotation amounts `a`, `b` and `c`.
    pub rotate: [u32; 3],
}

impl SmallSigma {
    /// Applies the transform to a 32-bit schedule word.
    #[inline(always)]
    pub const fn apply_u32(self, x: u32) -> u32 {
        x.rotate_right(self.rotate[0]) ^ x.rotate_right(self.rotate[1]) ^ (x >> self.shift)
    }

    /// Applies the transform to a 64-bit schedule word.
    #[inline(always)]
    pub const fn apply_u64(self, x: u64) -> u64 {
        x.rotate_right(self.rotate[0]) ^ x.rotate_right(self.rotate[1]) ^ (x >> self.shift)
    }
}

impl BigSigma {
    /// Applies the transform to a 32-bit working variable.
    #[inline(always)]
    pub const fn apply_u32(self, x: u32) -> u32 {
        x.rotate_right(self.rotate[0]) ^ x.rotate_right(self.rotate[1]) ^ x.rotate_right(self.rotate[2])
    }

    /// Applies the transform to a 64-bit working variable.
    #[inline(always)]
    pub const fn apply_u64(self, x: u64) -> u64 {
        x.rotate_right(self.rotate[0]) ^ x.rotate_right(self.rotate[1]) ^ x.rotate_right(self.rotate[2])
    }
}

/// Configuration of a variant of the 32-bit family (SHA-224, SHA-256).
///
/// Blocks are 512 bits, words 32 bits, the schedule has 64 entries and the
/// message length is encoded on 64 bits.
pub trait Variant32<const N: usize> {
    /// Human-readable algorithm name, e.g. `"SHA-256"`.
    const NAME: &'static str;

    /// Initial hash value `H(0)`.
    const INITIAL_VALUES: [u32; 8];

    /// Per-round additive constants `K`.
    const ROUND_CONSTANTS: [u32; 64] = K32;

    /// σ0 of the message schedule.
    const SIGMA_0: SmallSigma = SmallSigma { rotate: [7, 18], shift: 3 };

    /// σ1 of the message schedule.
    const SIGMA_1: SmallSigma = SmallSigma { rotate: [17, 19], shift: 10 };

    /// Σ0 of the compression rounds.
    const BIG_SIGMA_0: BigSigma = BigSigma { rotate: [2, 13, 22] };

    /// Σ1 of the compression rounds.
    const BIG_SIGMA_1: BigSigma = BigSigma { rotate: [6, 11, 25] };
}

/// Configuration of a variant of the 64-bit family (SHA-384, SHA-512,
/// SHA-512/t).
///
/// Blocks are 1024 bits, words 64 bits, the schedule has 80 entries and the
/// message length is encoded on 128 bits.
pub trait Variant64<const N: usize> {
    /// Human-readable algorithm name, e.g. `"SHA-512"`.
    const NAME: &'static str;

    /// Initial hash value `H(0)`.
    const INITIAL_VALUES: [u64; 8];

    /// Per-round additive constants `K`.
    const ROUND_CONSTANTS: [u64; 80] = K64;

    /// σ0 of the message schedule.
    const SIGMA_0: SmallSigma = SmallSigma { rotate: [1, 8], shift: 7 };

    /// σ1 of the message schedule.
    const SIGMA_1: SmallSigma = SmallSigma { rotate: [19, 61], shift: 6 };

    /// Σ0 of the compression rounds.
    const BIG_SIGMA_0: BigSigma = BigSigma { rotate: [28, 34, 39] };

    /// Σ1 of the compression rounds.
    const BIG_SIGMA_1: BigSigma = BigSigma { rotate: [14, 18, 41] };
}
