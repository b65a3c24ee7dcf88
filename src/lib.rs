//! Compile-time capable SHA-2 hashing
//!
//! This crate implements the SHA-2 family (FIPS 180-4) with a single
//! incremental engine that runs unchanged in `const` evaluation and at
//! runtime. Digests of literals can be computed inside `const` items, and
//! the same code hashes streamed input at runtime.
//!
//! # Module overview
//!
//! - `codec`
//!   Big-endian conversions between bytes and words. A shift/mask
//!   implementation is always available; a native byte-swap path is
//!   selected with the `speed` feature.
//!
//! - `variant`
//!   The configuration traits describing a family member: initial values,
//!   round constants and the σ/Σ rotation amounts.
//!
//! - `schedule`, `compress`
//!   Message schedule expansion and the compression rounds.
//!
//! - `engine`
//!   The incremental engine: block buffering, zero-copy processing of
//!   complete blocks, padding and digest extraction.
//!
//! - `hasher`
//!   The caller-facing hashers, the [`Sha2`] trait and [`hash_once`].
//!
//! - `variants`
//!   SHA-224, SHA-256, SHA-384, SHA-512 and SHA-512/t.
//!
//! # Example
//!
//! ```
//! use cryptal_sha2::{Digest, Sha256};
//!
//! const ABC: Digest<32> = Sha256::hash(b"abc");
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a").update(b"bc");
//!
//! assert_eq!(hasher.finalize(), ABC);
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in the hashing path
//! - One engine skeleton for every variant, configured statically
//! - Identical results in `const` and runtime evaluation
//! - Contract violations fail fast in debug builds
//!
//! This crate does not provide HMAC, key derivation, or constant-time
//! guarantees beyond the branch-free round function.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod codec;
pub mod compress;
pub mod consts;
pub mod engine;
pub mod schedule;
pub mod variant;
pub mod variants;

mod digest;
mod error;
mod hasher;
mod input;

pub use digest::Digest;
pub use engine::{Engine32, Engine64};
pub use error::ParseDigestError;
pub use hasher::{Hasher32, Hasher64, Sha2, hash_once};
pub use input::Input;
pub use variant::{BigSigma, SmallSigma, Variant32, Variant64};
pub use variants::{
    Sha224, Sha224Config, Sha256, Sha256Config, Sha384, Sha384Config, Sha512, Sha512_224,
    Sha512_224Config, Sha512_256, Sha512_256Config, Sha512Config, Sha512tConfig, sha224,
    sha256, sha384, sha512, sha512_224, sha512_256, sha512t_initial_values,
};
