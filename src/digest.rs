//! Digest value type
//!
//! A [`Digest`] is the fixed-length output of a hasher: `N` bytes, the
//! variant's state words in big-endian order, truncated for the variants
//! that report fewer bits than they keep. It has no version or framing.
//!
//! Digests print as lowercase hexadecimal and can be parsed back from
//! either case, including in `const` context through [`Digest::parse_hex`].

use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::str::FromStr;

use crate::error::ParseDigestError;

/// Fixed-length digest of `N` bytes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest<const N: usize>([u8; N]);

impl<const N: usize> Digest<N> {
    /// Length of the digest in bytes.
    pub const LEN: usize = N;

    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; N] {
        self.0
    }

    /// Byte-wise equality usable in `const` context.
    pub const fn same_as(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }

        true
    }

    /// Parses exactly `2 * N` hexadecimal characters, in either case.
    pub const fn parse_hex(hex: &str) -> Result<Self, ParseDigestError> {
        let bytes = hex.as_bytes();

        if bytes.len() != 2 * N {
            return Err(ParseDigestError::InvalidLength {
                expected: 2 * N,
                actual: bytes.len(),
            });
        }

        let mut out = [0u8; N];
        let mut i = 0;

        while i < 2 * N {
            let nibble = match hex_value(bytes[i]) {
                Some(v) => v,
                None => {
                    return Err(ParseDigestError::InvalidCharacter {
                        index: i,
                        byte: bytes[i],
                    });
                }
            };

            out[i / 2] = (out[i / 2] << 4) | nibble;
            i += 1;
        }

        Ok(Self(out))
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl<const N: usize> LowerHex for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl<const N: usize> UpperHex for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}

impl<const N: usize> Display for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl<const N: usize> Debug for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl<const N: usize> FromStr for Digest<N> {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.0
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest<N> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == *other
    }
}
