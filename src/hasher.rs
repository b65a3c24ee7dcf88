//! Hasher front-end
//!
//! [`Hasher32`] and [`Hasher64`] wrap the incremental engines with the
//! ergonomic surface callers use: chained updates from several input
//! representations, finalization into a [`Digest`] or a caller buffer, and
//! one-shot hashing.
//!
//! Finalization consumes the hasher, so absorbing after finalization is
//! rejected by the compiler instead of being a runtime error.
//!
//! The `const fn` methods take `&[u8]`, `&str` or `&CStr` and work in
//! `const` items. [`Hasher32::absorb`] and the [`Sha2`] trait accept any
//! [`Input`] at runtime.

use core::ffi::CStr;
use core::fmt;

use crate::digest::Digest;
use crate::engine::{Engine32, Engine64};
use crate::input::Input;
use crate::variant::{Variant32, Variant64};

/// Common runtime interface of every SHA-2 hasher.
pub trait Sha2: Default + Clone {
    /// Algorithm name, e.g. `"SHA-256"`.
    const NAME: &'static str;

    /// Bytes per compression block.
    const BLOCK_BYTES: usize;

    /// Bytes in the produced digest.
    const DIGEST_BYTES: usize;

    /// Digest produced by [`Sha2::finalize`].
    type Output: AsRef<[u8]> + Copy + Eq + fmt::Debug;

    /// Absorbs any [`Input`].
    fn absorb<I: Input + ?Sized>(&mut self, input: &I) -> &mut Self;

    /// Finishes the hash, consuming the hasher.
    fn finalize(self) -> Self::Output;
}

/// Hashes `value` in one call with a fresh `H`.
///
/// ```
/// use cryptal_sha2::{Sha256, hash_once};
///
/// let digest = hash_once::<Sha256>("abc");
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash_once<H: Sha2>(value: &(impl Input + ?Sized)) -> H::Output {
    let mut hasher = H::default();
    hasher.absorb(value);
    hasher.finalize()
}

macro_rules! hasher {
    (
        $(#[$meta:meta])*
        $hasher:ident: $engine:ident, $variant:ident, length = $length:ty
    ) => {
        $(#[$meta])*
        pub struct $hasher<V, const N: usize> {
            engine: $engine<V, N>,
        }

        impl<V: $variant<N>, const N: usize> $hasher<V, N> {
            /// Bytes per compression block.
            pub const BLOCK_BYTES: usize = $engine::<V, N>::BLOCK_BYTES;

            /// Bytes in the produced digest.
            pub const DIGEST_BYTES: usize = N;

            /// Creates a hasher with nothing absorbed.
            pub const fn new() -> Self {
                Self {
                    engine: $engine::new(),
                }
            }

            /// Absorbs raw bytes.
            pub const fn update(&mut self, input: &[u8]) -> &mut Self {
                self.engine.absorb(input);
                self
            }

            /// Absorbs the UTF-8 bytes of `input`.
            pub const fn update_str(&mut self, input: &str) -> &mut Self {
                self.update(input.as_bytes())
            }

            /// Absorbs a C string literal without its terminating NUL.
            pub const fn update_cstr(&mut self, input: &CStr) -> &mut Self {
                self.update(input.to_bytes())
            }

            /// Absorbs any [`Input`].
            pub fn absorb<I: Input + ?Sized>(&mut self, input: &I) -> &mut Self {
                self.update(input.as_input_bytes())
            }

            /// Number of bytes absorbed so far.
            pub const fn len(&self) -> $length {
                self.engine.total_len()
            }

            /// Whether no byte has been absorbed yet.
            pub const fn is_empty(&self) -> bool {
                self.engine.total_len() == 0
            }

            /// Discards everything absorbed so far.
            pub const fn reset(&mut self) {
                self.engine.reset();
            }

            /// Finishes the hash and writes the digest into `out`.
            pub const fn finalize_into(self, out: &mut [u8; N]) {
                let mut engine = self.engine;
                engine.finalize();
                engine.extract(out);
            }

            /// Finishes the hash and returns the digest.
            pub const fn finalize(self) -> Digest<N> {
                let mut out = [0u8; N];
                self.finalize_into(&mut out);
                Digest::from_bytes(out)
            }

            /// Hashes `input` in one call.
            pub const fn hash(input: &[u8]) -> Digest<N> {
                let mut hasher = Self::new();
                hasher.update(input);
                hasher.finalize()
            }

            /// Hashes the UTF-8 bytes of `input` in one call.
            pub const fn hash_str(input: &str) -> Digest<N> {
                Self::hash(input.as_bytes())
            }
        }

        impl<V: $variant<N>, const N: usize> Sha2 for $hasher<V, N> {
            const NAME: &'static str = V::NAME;
            const BLOCK_BYTES: usize = $engine::<V, N>::BLOCK_BYTES;
            const DIGEST_BYTES: usize = N;

            type Output = Digest<N>;

            fn absorb<I: Input + ?Sized>(&mut self, input: &I) -> &mut Self {
                self.update(input.as_input_bytes())
            }

            fn finalize(self) -> Digest<N> {
                let mut out = [0u8; N];
                self.finalize_into(&mut out);
                Digest::from_bytes(out)
            }
        }

        impl<V: $variant<N>, const N: usize> Default for $hasher<V, N> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<V, const N: usize> Clone for $hasher<V, N> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<V, const N: usize> Copy for $hasher<V, N> {}

        impl<V: $variant<N>, const N: usize> fmt::Debug for $hasher<V, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($hasher))
                    .field("engine", &self.engine)
                    .finish()
            }
        }
    };
}

hasher! {
    /// Hasher for the 32-bit word family.
    ///
    /// ```
    /// use cryptal_sha2::Sha224;
    ///
    /// let mut hasher = Sha224::new();
    /// hasher.update(b"a").update_str("b").update_cstr(c"c");
    ///
    /// assert_eq!(
    ///     hasher.finalize().to_string(),
    ///     "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    /// );
    /// ```
    Hasher32: Engine32, Variant32, length = u64
}

hasher! {
    /// Hasher for the 64-bit word family.
    Hasher64: Engine64, Variant64, length = u128
}
