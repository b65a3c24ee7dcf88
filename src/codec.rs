//! Big-endian byte-order codec
//!
//! SHA-2 reads message words and writes digest words in big-endian order.
//! This module provides the conversions between fixed-width byte arrays
//! and unsigned words used by the rest of the crate.
//!
//! Two implementations are provided for every width:
//! - the structural one at the module root, built only from shifts and
//!   masks, which behaves identically in `const` evaluation and at runtime
//!   on any host;
//! - [`native`], which reinterprets the bytes in host order and byte-swaps
//!   them on little-endian targets.
//!
//! Both are `const fn` and always compiled. The engine uses the structural
//! path unless the `speed` feature is enabled. The two paths must agree on
//! every input; this is covered by the crate's test-suite.

macro_rules! structural_codec {
    ($load:ident, $store:ident, $word:ty, $bytes:literal) => {
        #[doc = concat!("Reads a big-endian `", stringify!($word), "` using shifts and masks.")]
        #[inline(always)]
        pub const fn $load(bytes: &[u8; $bytes]) -> $word {
            let mut value: $word = 0;
            let mut i = 0;

            while i < $bytes {
                value = (value << 8) | bytes[i] as $word;
                i += 1;
            }

            value
        }

        #[doc = concat!("Writes a `", stringify!($word), "` as big-endian bytes using shifts and masks.")]
        #[inline(always)]
        pub const fn $store(value: $word) -> [u8; $bytes] {
            let mut out = [0u8; $bytes];
            let mut i = 0;

            while i < $bytes {
                out[i] = (value >> (8 * ($bytes - 1 - i) as u32)) as u8;
                i += 1;
            }

            out
        }
    };
}

structural_codec!(u32_from_be, u32_to_be, u32, 4);
structural_codec!(u64_from_be, u64_to_be, u64, 8);
structural_codec!(u128_from_be, u128_to_be, u128, 16);

/// Host-order fast path.
///
/// The bytes are reinterpreted as a native integer and swapped when the
/// target is little-endian. On big-endian targets this is a plain copy.
pub mod native {
    macro_rules! native_codec {
        ($load:ident, $store:ident, $word:ty, $bytes:literal) => {
            #[doc = concat!("Reads a big-endian `", stringify!($word), "` through a native byte swap.")]
            #[inline(always)]
            pub const fn $load(bytes: &[u8; $bytes]) -> $word {
                let value = <$word>::from_ne_bytes(*bytes);

                if cfg!(target_endian = "little") {
                    value.swap_bytes()
                } else {
                    value
                }
            }

            #[doc = concat!("Writes a `", stringify!($word), "` as big-endian bytes through a native byte swap.")]
            #[inline(always)]
            pub const fn $store(value: $word) -> [u8; $bytes] {
                let value = if cfg!(target_endian = "little") {
                    value.swap_bytes()
                } else {
                    value
                };

                value.to_ne_bytes()
            }
        };
    }

    native_codec!(u32_from_be, u32_to_be, u32, 4);
    native_codec!(u64_from_be, u64_to_be, u64, 8);
    native_codec!(u128_from_be, u128_to_be, u128, 16);
}

#[cfg(not(feature = "speed"))]
pub(crate) use self::{
    u32_from_be as load_u32, u32_to_be as store_u32, u64_from_be as load_u64,
    u64_to_be as store_u64, u128_to_be as store_u128,
};

#[cfg(feature = "speed")]
pub(crate) use self::native::{
    u32_from_be as load_u32, u32_to_be as store_u32, u64_from_be as load_u64,
    u64_to_be as store_u64, u128_to_be as store_u128,
};

macro_rules! word_packer {
    ($name:ident, $word:ty, $bytes:literal, $store:ident) => {
        #[doc = concat!("Packs `", stringify!($word), "` words into `out` as big-endian bytes.")]
        ///
        /// Exactly `out.len()` bytes are written: every whole word that fits
        /// is stored in order, then the leading bytes of the next word if
        /// `out.len()` is not a multiple of the word size. Words past the
        /// end of `out` are ignored, which is how truncated digests drop
        /// the tail of the state.
        ///
        /// # Panics
        /// If `out` is longer than the packed size of `words`.
        pub const fn $name(words: &[$word], out: &mut [u8]) {
            assert!(
                out.len() <= words.len() * $bytes,
                "output longer than the packed words"
            );

            let whole = out.len() / $bytes;
            let tail = out.len() % $bytes;

            let mut i = 0;
            while i < whole {
                let bytes = $store(words[i]);
                let mut j = 0;
                while j < $bytes {
                    out[i * $bytes + j] = bytes[j];
                    j += 1;
                }
                i += 1;
            }

            if tail != 0 {
                let bytes = $store(words[whole]);
                let mut j = 0;
                while j < tail {
                    out[whole * $bytes + j] = bytes[j];
                    j += 1;
                }
            }
        }
    };
}

word_packer!(pack_u32_words, u32, 4, store_u32);
word_packer!(pack_u64_words, u64, 8, store_u64);
