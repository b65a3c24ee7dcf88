//! Incremental SHA-2 engine
//!
//! The engine owns the running hash state, the pending partial block and
//! the absorbed-length counter. It accepts input in arbitrary chunks,
//! compresses every complete block as soon as it is available, and applies
//! the Merkle–Damgård padding on finalization.
//!
//! The skeleton is written once and instantiated for both word families:
//! - [`Engine32`]: 64-byte blocks, 64 rounds, 64-bit length field
//! - [`Engine64`]: 128-byte blocks, 80 rounds, 128-bit length field
//!
//! Every operation is a `const fn`, so a digest can be computed inside a
//! `const` item as well as at runtime, with identical results.
//!
//! # Lifecycle
//! An engine starts in the absorbing state. [`Engine32::finalize`] moves it
//! to the finalized state, after which only [`Engine32::extract`] and
//! [`Engine32::reset`] are meaningful. Misuse (absorbing or finalizing
//! twice, extracting too early) is a programmer error checked with
//! `debug_assert!`.

use core::fmt;
use core::marker::PhantomData;

use crate::codec::{pack_u32_words, pack_u64_words, store_u64, store_u128};
use crate::compress::{rounds32, rounds64};
use crate::schedule::{expand32, expand64};
use crate::variant::{Variant32, Variant64};

macro_rules! engine {
    (
        $(#[$meta:meta])*
        $engine:ident: $variant:ident,
        word = $word:ty,
        length = $length:ty,
        block = $block:literal,
        rounds = $rounds:literal,
        expand = $expand:ident,
        compress = $compress:ident,
        store_length = $store_length:ident,
        pack = $pack:ident $(,)?
    ) => {
        $(#[$meta])*
        pub struct $engine<V, const N: usize> {
            state: [$word; 8],
            buffer: [u8; $block],
            buffered: usize,
            total: $length,
            finalized: bool,
            variant: PhantomData<fn() -> V>,
        }

        impl<V: $variant<N>, const N: usize> $engine<V, N> {
            /// Bytes per block.
            pub const BLOCK_BYTES: usize = $block;

            /// Bytes per state and schedule word.
            pub const WORD_BYTES: usize = core::mem::size_of::<$word>();

            /// Bytes of the big-endian bit-length written by the padding.
            pub const LENGTH_FIELD_BYTES: usize = core::mem::size_of::<$length>();

            /// Compression rounds per block.
            pub const ROUNDS: usize = $rounds;

            /// Digest length in bytes.
            pub const DIGEST_BYTES: usize = N;

            const DIGEST_FITS: () = assert!(
                N > 0 && N <= 8 * core::mem::size_of::<$word>(),
                "digest length must be between one byte and the packed state size"
            );

            /// Creates an engine loaded with the variant's initial values.
            pub const fn new() -> Self {
                let () = Self::DIGEST_FITS;

                Self {
                    state: V::INITIAL_VALUES,
                    buffer: [0u8; $block],
                    buffered: 0,
                    total: 0,
                    finalized: false,
                    variant: PhantomData,
                }
            }

            /// Returns the engine to its freshly constructed state.
            pub const fn reset(&mut self) {
                *self = Self::new();
            }

            /// Number of bytes absorbed so far.
            pub const fn total_len(&self) -> $length {
                self.total
            }

            /// Number of bytes waiting in the partial block.
            pub const fn buffered_len(&self) -> usize {
                self.buffered
            }

            /// Whether [`Self::finalize`] has run since construction or the
            /// last [`Self::reset`].
            pub const fn is_finalized(&self) -> bool {
                self.finalized
            }

            /// Current hash state words.
            pub const fn state(&self) -> &[$word; 8] {
                &self.state
            }

            #[inline(always)]
            const fn compress(state: &mut [$word; 8], block: &[u8; $block]) {
                let w = $expand(block, V::SIGMA_0, V::SIGMA_1);
                $compress(state, &w, &V::ROUND_CONSTANTS, V::BIG_SIGMA_0, V::BIG_SIGMA_1);
            }

            /// Absorbs `input`.
            ///
            /// Bytes first top up a pending partial block. Complete blocks
            /// are then compressed straight from `input` without copying, and
            /// whatever is left is kept for the next call. Any chunking of
            /// the same byte stream yields the same state.
            pub const fn absorb(&mut self, input: &[u8]) {
                debug_assert!(!self.finalized, "absorb called on a finalized engine");

                let mut input = input;

                if self.buffered != 0 {
                    let free = $block - self.buffered;
                    let take = if input.len() < free { input.len() } else { free };
                    let (head, tail) = input.split_at(take);

                    let mut i = 0;
                    while i < take {
                        self.buffer[self.buffered + i] = head[i];
                        i += 1;
                    }

                    self.buffered += take;
                    self.total = self.total.wrapping_add(take as $length);
                    input = tail;

                    if self.buffered < $block {
                        debug_assert!(input.is_empty());
                        return;
                    }

                    Self::compress(&mut self.state, &self.buffer);
                    self.buffered = 0;
                }

                while let Some((block, tail)) = input.split_first_chunk::<$block>() {
                    Self::compress(&mut self.state, block);
                    self.total = self.total.wrapping_add($block);
                    input = tail;
                }

                if !input.is_empty() {
                    let mut i = 0;
                    while i < input.len() {
                        self.buffer[i] = input[i];
                        i += 1;
                    }

                    self.buffered = input.len();
                    self.total = self.total.wrapping_add(input.len() as $length);
                }

                debug_assert!(self.buffered < $block, "partial block reached the block size");
            }

            /// Pads the message and compresses the final block(s).
            ///
            /// Appends `0x80`, zero bytes, and the message length in bits as
            /// a big-endian integer filling the last
            /// [`Self::LENGTH_FIELD_BYTES`] bytes of the block. When the
            /// terminator and length do not fit after the pending bytes, the
            /// current block is compressed first and the length goes into a
            /// fresh zero block.
            pub const fn finalize(&mut self) {
                debug_assert!(!self.finalized, "engine finalized twice");
                debug_assert!(self.buffered < $block, "partial block reached the block size");

                let mut block = self.buffer;
                block[self.buffered] = 0x80;

                let mut i = self.buffered + 1;
                while i < $block {
                    block[i] = 0;
                    i += 1;
                }

                if $block - self.buffered < 1 + Self::LENGTH_FIELD_BYTES {
                    Self::compress(&mut self.state, &block);
                    block = [0u8; $block];
                }

                let bits = $store_length(self.total.wrapping_mul(8));
                let offset = $block - Self::LENGTH_FIELD_BYTES;

                let mut j = 0;
                while j < Self::LENGTH_FIELD_BYTES {
                    block[offset + j] = bits[j];
                    j += 1;
                }

                Self::compress(&mut self.state, &block);

                self.buffer = [0u8; $block];
                self.buffered = 0;
                self.finalized = true;
            }

            /// Writes the digest: the state words in big-endian order,
            /// truncated to `N` bytes.
            pub const fn extract(&self, out: &mut [u8; N]) {
                debug_assert!(self.finalized, "extract called before finalize");

                $pack(&self.state, out);
            }
        }

        impl<V: $variant<N>, const N: usize> Default for $engine<V, N> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<V, const N: usize> Clone for $engine<V, N> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<V, const N: usize> Copy for $engine<V, N> {}

        impl<V: $variant<N>, const N: usize> fmt::Debug for $engine<V, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($engine))
                    .field("variant", &V::NAME)
                    .field("total", &self.total)
                    .field("buffered", &self.buffered)
                    .field("finalized", &self.finalized)
                    .finish_non_exhaustive()
            }
        }
    };
}

engine! {
    /// Incremental engine for the 32-bit word family (SHA-224, SHA-256).
    Engine32: Variant32,
    word = u32,
    length = u64,
    block = 64,
    rounds = 64,
    expand = expand32,
    compress = rounds32,
    store_length = store_u64,
    pack = pack_u32_words,
}

engine! {
    /// Incremental engine for the 64-bit word family (SHA-384, SHA-512,
    /// SHA-512/t).
    Engine64: Variant64,
    word = u64,
    length = u128,
    block = 128,
    rounds = 80,
    expand = expand64,
    compress = rounds64,
    store_length = store_u128,
    pack = pack_u64_words,
}
