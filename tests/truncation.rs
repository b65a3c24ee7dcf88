use cryptal_sha2::consts::{H224_INIT, H384_INIT, H512_INIT};
use cryptal_sha2::{
    Digest, Engine64, Hasher32, Hasher64, Sha2, Sha224, Sha384, Sha512_224, Sha512_256,
    Sha512tConfig, Variant32, Variant64, sha512t_initial_values,
};
use hex_literal::hex;

/// SHA-256 layout and output length, started from the SHA-224 initial
/// values.
struct Sha256WithSha224Iv;

impl Variant32<32> for Sha256WithSha224Iv {
    const NAME: &'static str = "SHA-256 with SHA-224 IV";
    const INITIAL_VALUES: [u32; 8] = H224_INIT;
}

/// SHA-512 layout and output length, started from the SHA-384 initial
/// values.
struct Sha512WithSha384Iv;

impl Variant64<64> for Sha512WithSha384Iv {
    const NAME: &'static str = "SHA-512 with SHA-384 IV";
    const INITIAL_VALUES: [u64; 8] = H384_INIT;
}

/// SHA-512 layout and output length, started from the SHA-512/224
/// initial values.
struct Sha512WithSha512_224Iv;

impl Variant64<64> for Sha512WithSha512_224Iv {
    const NAME: &'static str = "SHA-512 with SHA-512/224 IV";
    const INITIAL_VALUES: [u64; 8] = sha512t_initial_values(224);
}

fn inputs() -> Vec<Vec<u8>> {
    [0usize, 3, 55, 56, 64, 111, 112, 128, 300]
        .iter()
        .map(|&len| (0..len).map(|i| (i * 13) as u8).collect())
        .collect()
}

// -------------------------------------------------------
// 1. TRUNCATED DIGESTS ARE PREFIXES OF THE FULL STATE
// -------------------------------------------------------

#[test]
fn sha224_is_prefix_of_full_packing() {
    for input in inputs() {
        let truncated = Sha224::hash(&input);
        let full = Hasher32::<Sha256WithSha224Iv, 32>::hash(&input);

        assert_eq!(truncated.as_bytes()[..], full.as_bytes()[..28]);
    }
}

#[test]
fn sha384_is_prefix_of_full_packing() {
    for input in inputs() {
        let truncated = Sha384::hash(&input);
        let full = Hasher64::<Sha512WithSha384Iv, 64>::hash(&input);

        assert_eq!(truncated.as_bytes()[..], full.as_bytes()[..48]);
    }
}

#[test]
fn sha512_224_cuts_inside_a_word() {
    // 28 bytes = three whole 64-bit words and half of the fourth.
    for input in inputs() {
        let truncated = Sha512_224::hash(&input);
        let full = Hasher64::<Sha512WithSha512_224Iv, 64>::hash(&input);

        assert_eq!(truncated.as_bytes()[..], full.as_bytes()[..28]);
    }
}

// -------------------------------------------------------
// 2. SHA-512/t INITIAL VALUES
// -------------------------------------------------------

#[test]
fn sha512_224_initial_values_match_fips() {
    const IV: [u64; 8] = sha512t_initial_values(224);

    assert_eq!(
        IV,
        [
            0x8c3d37c819544da2,
            0x73e1996689dcd4d6,
            0x1dfab7ae32ff9c82,
            0x679dd514582f9fcf,
            0x0f6d2b697bd44da8,
            0x77e36f7304c48942,
            0x3f9d85a86a1d36c8,
            0x1112e6ad91d692a1,
        ]
    );
}

#[test]
fn sha512_256_initial_values_match_fips() {
    let engine = Engine64::<Sha512tConfig, 32>::new();

    assert_eq!(
        *engine.state(),
        [
            0x22312194fc2bf72c,
            0x9f555fa3c84c64c2,
            0x2393b86b6f53b151,
            0x963877195940eabd,
            0x96283ee2a88effe3,
            0xbe5e1e2553863992,
            0x2b0199fc2c85b8aa,
            0x0eb72ddc81c52ca2,
        ]
    );
}

#[test]
fn sha512t_initial_values_differ_from_sha512() {
    assert_ne!(sha512t_initial_values(224), H512_INIT);
    assert_ne!(sha512t_initial_values(8), sha512t_initial_values(16));
}

#[test]
#[should_panic(expected = "SHA-512/384 is not a permitted truncation")]
fn sha512t_rejects_384() {
    let _ = sha512t_initial_values(std::hint::black_box(384));
}

#[test]
#[should_panic(expected = "SHA-512/t requires 0 < t < 512")]
fn sha512t_rejects_full_width() {
    let _ = sha512t_initial_values(std::hint::black_box(512));
}

#[test]
fn custom_sha512t_length() {
    // SHA-512/160 is not in FIPS 180-4's list but follows the same rule.
    let digest: Digest<20> = Hasher64::<Sha512tConfig, 20>::hash(b"abc");
    let sha512_256 = Sha512_256::hash(b"abc");

    assert_eq!(digest.as_bytes().len(), 20);
    assert_ne!(digest.as_bytes()[..], sha512_256.as_bytes()[..20]);
}

#[test]
fn sha512_256_published_vector_independent_of_sha512() {
    assert_eq!(
        Sha512_256::hash(b"abc"),
        hex!("53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23")
    );
}

// -------------------------------------------------------
// 3. NAMED SHA-512/t VARIANTS
// -------------------------------------------------------

#[test]
fn standard_truncations_report_their_own_names() {
    assert_eq!(<Sha512_224 as Sha2>::NAME, "SHA-512/224");
    assert_eq!(<Sha512_256 as Sha2>::NAME, "SHA-512/256");
    assert_eq!(<Hasher64<Sha512tConfig, 20> as Sha2>::NAME, "SHA-512/t");
}

#[test]
fn named_configs_agree_with_generic_sha512t() {
    for input in inputs() {
        assert_eq!(
            Sha512_224::hash(&input),
            Hasher64::<Sha512tConfig, 28>::hash(&input)
        );
        assert_eq!(
            Sha512_256::hash(&input),
            Hasher64::<Sha512tConfig, 32>::hash(&input)
        );
    }
}
