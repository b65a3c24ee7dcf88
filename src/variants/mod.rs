//! SHA-2 family members
//!
//! Each variant is a zero-sized configuration type implementing
//! [`Variant32`](crate::variant::Variant32) or
//! [`Variant64`](crate::variant::Variant64), plus a hasher alias and a
//! `const` one-shot function.

mod sha256;
mod sha512;
mod sha512t;

pub use sha256::{Sha224, Sha224Config, Sha256, Sha256Config, sha224, sha256};
pub use sha512::{Sha384, Sha384Config, Sha512, Sha512Config, sha384, sha512};
pub use sha512t::{
    Sha512_224, Sha512_224Config, Sha512_256, Sha512_256Config, Sha512tConfig, sha512_224,
    sha512_256, sha512t_initial_values,
};
