//! Build-time configuration.
//!
//! The address of the image to chain-load is fixed when the loader is built, typically with
//!
//! ```ignore
//! const STARTUP_ADDRESS: Address = startup_address(env!("CHAINBOOT_STARTUP_ADDRESS"));
//! ```
//!
//! so that a missing variable fails at `env!` and a malformed one fails const evaluation.

use crate::{Address, Error};

/// VTOR ignores the low seven address bits, so a vector table sits on at least 128 bytes.
pub const VECTOR_TABLE_ALIGN: u32 = 128;

/// Parse a `0x`-prefixed hexadecimal or a decimal address. `_` may separate digits.
pub const fn parse_address(text: &str) -> Result<Address, Error> {
    let bytes = text.as_bytes().trim_ascii();

    let (radix, mut i) = if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x' {
        (16, 2)
    } else {
        (10, 0)
    };

    let mut value: u32 = 0;
    let mut digits = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;

        if byte == b'_' {
            continue;
        }

        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as u32,
            b'a'..=b'f' => (byte - b'a' + 10) as u32,
            b'A'..=b'F' => (byte - b'A' + 10) as u32,
            _ => return Err(Error::InvalidAddress),
        };
        if digit >= radix {
            return Err(Error::InvalidAddress);
        }

        value = match value.checked_mul(radix) {
            Some(value) => value,
            None => return Err(Error::InvalidAddress),
        };
        value = match value.checked_add(digit) {
            Some(value) => value,
            None => return Err(Error::InvalidAddress),
        };
        digits += 1;
    }

    if digits == 0 {
        return Err(Error::InvalidAddress);
    }

    let address = Address(value);
    if !address.is_word_aligned() {
        return Err(Error::Misaligned);
    }
    Ok(address)
}

/// Address of the image's vector table, for use in a `const`.
///
/// Panics, and so fails the build when evaluated at compile time, on text that does not parse
/// or on an address VTOR cannot hold.
pub const fn startup_address(text: &str) -> Address {
    match parse_address(text) {
        Ok(address) if address.0 % VECTOR_TABLE_ALIGN == 0 => address,
        Ok(_) => panic!("startup address must be aligned to 128 bytes"),
        Err(Error::Misaligned) => panic!("startup address must be word-aligned"),
        Err(_) => panic!("startup address is not a valid 32-bit number"),
    }
}
