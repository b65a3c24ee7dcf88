//! Input normalization
//!
//! [`Input`] turns the byte-like representations accepted by the hashers
//! into a plain byte view, so the engine only ever sees `&[u8]`. No input is
//! copied.

use core::ffi::CStr;

/// A value whose bytes can be hashed.
///
/// Implemented for byte slices and arrays, text, signed byte slices and
/// NUL-terminated C strings. For C strings the terminator is not part of
/// the hashed bytes.
pub trait Input {
    /// The bytes fed to the hasher.
    fn as_input_bytes(&self) -> &[u8];
}

impl Input for [u8] {
    fn as_input_bytes(&self) -> &[u8] {
        self
    }
}

impl<const L: usize> Input for [u8; L] {
    fn as_input_bytes(&self) -> &[u8] {
        self
    }
}

impl Input for str {
    fn as_input_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Input for [i8] {
    fn as_input_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self)
    }
}

impl<const L: usize> Input for [i8; L] {
    fn as_input_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl Input for CStr {
    fn as_input_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl<T: Input + ?Sized> Input for &T {
    fn as_input_bytes(&self) -> &[u8] {
        (**self).as_input_bytes()
    }
}

impl<T: Input + ?Sized> Input for &mut T {
    fn as_input_bytes(&self) -> &[u8] {
        (**self).as_input_bytes()
    }
}

#[cfg(feature = "alloc")]
mod owned {
    use super::Input;

    use alloc::boxed::Box;
    use alloc::ffi::CString;
    use alloc::string::String;
    use alloc::vec::Vec;

    impl Input for Vec<u8> {
        fn as_input_bytes(&self) -> &[u8] {
            self
        }
    }

    impl Input for String {
        fn as_input_bytes(&self) -> &[u8] {
            self.as_bytes()
        }
    }

    impl Input for CString {
        fn as_input_bytes(&self) -> &[u8] {
            self.as_bytes()
        }
    }

    impl<T: Input + ?Sized> Input for Box<T> {
        fn as_input_bytes(&self) -> &[u8] {
            (**self).as_input_bytes()
        }
    }
}
