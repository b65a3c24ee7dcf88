//! SHA-224 and SHA-256.
//!
//! Both use the 32-bit family defaults; SHA-224 differs only by its initial
//! values and by dropping the last state word from the digest.

use crate::consts::{H224_INIT, H256_INIT};
use crate::digest::Digest;
use crate::hasher::Hasher32;
use crate::variant::Variant32;

/// SHA-224 configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha224Config;

impl Variant32<28> for Sha224Config {
    const NAME: &'static str = "SHA-224";
    const INITIAL_VALUES: [u32; 8] = H224_INIT;
}

/// SHA-256 configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha256Config;

impl Variant32<32> for Sha256Config {
    const NAME: &'static str = "SHA-256";
    const INITIAL_VALUES: [u32; 8] = H256_INIT;
}

/// SHA-224 hasher.
pub type Sha224 = Hasher32<Sha224Config, 28>;

/// SHA-256 hasher.
pub type Sha256 = Hasher32<Sha256Config, 32>;

/// Computes the SHA-224 digest of `input`.
pub const fn sha224(input: &[u8]) -> Digest<28> {
    Sha224::hash(input)
}

/// Computes the SHA-256 digest of `input`.
///
/// ```
/// const EMPTY: cryptal_sha2::Digest<32> = cryptal_sha2::sha256(b"");
///
/// assert_eq!(
///     EMPTY.to_string(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub const fn sha256(input: &[u8]) -> Digest<32> {
    Sha256::hash(input)
}
