//! SHA-384 and SHA-512.

use crate::consts::{H384_INIT, H512_INIT};
use crate::digest::Digest;
use crate::hasher::Hasher64;
use crate::variant::Variant64;

/// SHA-384 configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha384Config;

impl Variant64<48> for Sha384Config {
    const NAME: &'static str = "SHA-384";
    const INITIAL_VALUES: [u64; 8] = H384_INIT;
}

/// SHA-512 configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha512Config;

impl Variant64<64> for Sha512Config {
    const NAME: &'static str = "SHA-512";
    const INITIAL_VALUES: [u64; 8] = H512_INIT;
}

/// SHA-384 hasher.
pub type Sha384 = Hasher64<Sha384Config, 48>;

/// SHA-512 hasher.
pub type Sha512 = Hasher64<Sha512Config, 64>;

/// Computes the SHA-384 digest of `input`.
pub const fn sha384(input: &[u8]) -> Digest<48> {
    Sha384::hash(input)
}

/// Computes the SHA-512 digest of `input`.
pub const fn sha512(input: &[u8]) -> Digest<64> {
    Sha512::hash(input)
}
