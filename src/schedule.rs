//! Message schedule
//!
//! Expands one block into the sequence of words consumed by the
//! compression rounds. The first `block / word` entries are the block's
//! big-endian words; every following entry is
//!
//! `w[i] = w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])`
//!
//! with wrapping addition. The window offsets are fixed by FIPS 180-4; only
//! σ0 and σ1 come from the variant.

use crate::codec::{load_u32, load_u64};
use crate::variant::SmallSigma;

macro_rules! schedule {
    ($name:ident, $word:ty, $block:literal, $len:literal, $load:ident, $apply:ident) => {
        #[doc = concat!(
            "Expands a ", stringify!($block), "-byte block into ",
            stringify!($len), " `", stringify!($word), "` schedule words."
        )]
        #[inline(always)]
        pub const fn $name(
            block: &[u8; $block],
            sigma_0: SmallSigma,
            sigma_1: SmallSigma,
        ) -> [$word; $len] {
            const WORD_BYTES: usize = core::mem::size_of::<$word>();

            let mut w = [0 as $word; $len];
            let mut rest: &[u8] = block;
            let mut i = 0;

            while let Some((chunk, tail)) = rest.split_first_chunk::<WORD_BYTES>() {
                w[i] = $load(chunk);
                rest = tail;
                i += 1;
            }

            while i < $len {
                w[i] = w[i - 16]
                    .wrapping_add(sigma_0.$apply(w[i - 15]))
                    .wrapping_add(w[i - 7])
                    .wrapping_add(sigma_1.$apply(w[i - 2]));
                i += 1;
            }

            w
        }
    };
}

schedule!(expand32, u32, 64, 64, load_u32, apply_u32);
schedule!(expand64, u64, 128, 80, load_u64, apply_u64);
