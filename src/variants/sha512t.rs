//! SHA-512/t (FIPS 180-4, section 5.3.6)
//!
//! The truncated SHA-512 variants keep the SHA-512 compression function but
//! start from their own initial values. Those are derived by hashing the
//! ASCII text `"SHA-512/t"` with SHA-512 whose initial words were xored with
//! `0xa5a5a5a5a5a5a5a5`. [`Sha512tConfig`] runs that derivation at compile
//! time for whichever digest length it is instantiated with.

use crate::consts::H512_INIT;
use crate::digest::Digest;
use crate::engine::Engine64;
use crate::hasher::Hasher64;
use crate::variant::Variant64;

const IV_MASK: u64 = 0xa5a5_a5a5_a5a5_a5a5;

struct IvGenerator;

impl Variant64<64> for IvGenerator {
    const NAME: &'static str = "SHA-512/t IV generator";

    const INITIAL_VALUES: [u64; 8] = {
        let mut iv = H512_INIT;
        let mut i = 0;
        while i < 8 {
            iv[i] ^= IV_MASK;
            i += 1;
        }
        iv
    };
}

/// Derives the initial hash value of SHA-512/`t`.
///
/// # Panics
/// If `t` is outside `1..512` or equals 384.
pub const fn sha512t_initial_values(t: usize) -> [u64; 8] {
    assert!(t > 0 && t < 512, "SHA-512/t requires 0 < t < 512");
    assert!(t != 384, "SHA-512/384 is not a permitted truncation");

    let mut digits = [0u8; 3];
    let mut count = 0;
    let mut rest = t;

    while rest > 0 {
        digits[2 - count] = b'0' + (rest % 10) as u8;
        rest /= 10;
        count += 1;
    }

    let (_, digits) = digits.split_at(3 - count);

    let mut engine = Engine64::<IvGenerator, 64>::new();
    engine.absorb(b"SHA-512/");
    engine.absorb(digits);
    engine.finalize();

    *engine.state()
}

/// SHA-512/t configuration for any byte length, with `t = 8 * N`.
///
/// The two lengths listed in FIPS 180-4 have their own named
/// configurations, [`Sha512_224Config`] and [`Sha512_256Config`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha512tConfig;

impl<const N: usize> Variant64<N> for Sha512tConfig {
    const NAME: &'static str = "SHA-512/t";
    const INITIAL_VALUES: [u64; 8] = sha512t_initial_values(8 * N);
}

/// SHA-512/224 configuration.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha512_224Config;

impl Variant64<28> for Sha512_224Config {
    const NAME: &'static str = "SHA-512/224";
    const INITIAL_VALUES: [u64; 8] = sha512t_initial_values(224);
}

/// SHA-512/256 configuration.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha512_256Config;

impl Variant64<32> for Sha512_256Config {
    const NAME: &'static str = "SHA-512/256";
    const INITIAL_VALUES: [u64; 8] = sha512t_initial_values(256);
}

/// SHA-512/224 hasher.
#[allow(non_camel_case_types)]
pub type Sha512_224 = Hasher64<Sha512_224Config, 28>;

/// SHA-512/256 hasher.
#[allow(non_camel_case_types)]
pub type Sha512_256 = Hasher64<Sha512_256Config, 32>;

/// Computes the SHA-512/224 digest of `input`.
pub const fn sha512_224(input: &[u8]) -> Digest<28> {
    Sha512_224::hash(input)
}

/// Computes the SHA-512/256 digest of `input`.
pub const fn sha512_256(input: &[u8]) -> Digest<32> {
    Sha512_256::hash(input)
}
