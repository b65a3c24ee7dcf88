use std::collections::HashSet;

use cryptal_sha2::{Digest, ParseDigestError, Sha224, Sha256};

const ABC_256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn display_is_lowercase_hex() {
    let digest = Sha256::hash(b"abc");

    assert_eq!(digest.to_string(), ABC_256);
    assert_eq!(format!("{digest:x}"), ABC_256);
    assert_eq!(format!("{digest:X}"), ABC_256.to_uppercase());
    assert_eq!(format!("{digest:?}"), format!("Digest({ABC_256})"));
}

#[test]
fn parse_round_trips_in_either_case() {
    let digest = Sha256::hash(b"abc");

    assert_eq!(ABC_256.parse::<Digest<32>>(), Ok(digest));
    assert_eq!(ABC_256.to_uppercase().parse::<Digest<32>>(), Ok(digest));
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(
        ABC_256.parse::<Digest<28>>(),
        Err(ParseDigestError::InvalidLength {
            expected: 56,
            actual: 64
        })
    );
    assert_eq!(
        "".parse::<Digest<1>>(),
        Err(ParseDigestError::InvalidLength {
            expected: 2,
            actual: 0
        })
    );
}

#[test]
fn parse_rejects_non_hex() {
    let mut text = ABC_256.to_string();
    text.replace_range(10..11, "g");

    assert_eq!(
        text.parse::<Digest<32>>(),
        Err(ParseDigestError::InvalidCharacter {
            index: 10,
            byte: b'g'
        })
    );
}

#[test]
fn error_messages() {
    let err = Digest::<2>::parse_hex("abc").unwrap_err();
    assert_eq!(err.to_string(), "expected 4 hex characters, got 3");

    let err = Digest::<2>::parse_hex("ab z").unwrap_err();
    assert_eq!(err.to_string(), "invalid hex character 0x20 at index 2");
}

#[test]
fn byte_conversions() {
    let digest = Sha224::hash(b"abc");
    let bytes: [u8; 28] = digest.into();

    assert_eq!(Digest::from(bytes), digest);
    assert_eq!(digest, bytes);
    assert_eq!(digest.as_ref(), &bytes[..]);
    assert_eq!(Digest::<28>::LEN, 28);
}

#[test]
fn same_as_matches_eq() {
    let a = Sha256::hash(b"a");
    let b = Sha256::hash(b"b");

    assert!(a.same_as(&a));
    assert!(!a.same_as(&b));
}

#[test]
fn digests_are_hashable_and_ordered() {
    let set: HashSet<_> = [Sha256::hash(b"a"), Sha256::hash(b"b"), Sha256::hash(b"a")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);

    let low = Digest::from_bytes([0u8; 4]);
    let high = Digest::from_bytes([0u8, 0, 0, 1]);
    assert!(low < high);
}
