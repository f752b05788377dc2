//! Field-element encoding and decoding utilities
//!
//! Salts and commitments cross the API boundary as strings. This module
//! parses them into Pallas field elements and formats them back out:
//! - Decimal strings: "12345" (arbitrary precision using BigUint)
//! - Hexadecimal: "0x1a2b" or "1a2b" (any size)
//!
//! Values larger than the field are reduced modulo the Pallas modulus, so a
//! 32-byte salt pasted from another tool always parses.

use ff::PrimeField;
use num_bigint::BigUint;
use num_traits::Num;
use pasta_curves::Fp;

use crate::error::Error;

/// Parse a decimal or 0x-prefixed hexadecimal string into a field element.
///
/// Auto-detects the format: a `0x`/`0X` prefix selects hex, otherwise the
/// string must be all decimal digits.
pub fn parse_field_element(value: &str) -> Result<Fp, Error> {
    if let Some(hex_digits) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        let num = BigUint::from_str_radix(hex_digits, 16)
            .map_err(|_| Error::Encoding(format!("invalid hexadecimal value: {}", value)))?;
        return biguint_to_field(&num);
    }

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Encoding(format!(
            "expected decimal or 0x-hex value, got: {}",
            value
        )));
    }

    let num = BigUint::from_str_radix(value, 10)
        .map_err(|_| Error::Encoding(format!("invalid decimal value: {}", value)))?;
    biguint_to_field(&num)
}

/// Format a field element as a 0x-prefixed big-endian hex string.
pub fn field_to_hex(value: &Fp) -> String {
    // Fp's repr is little-endian; flip for conventional display.
    let mut bytes = value.to_repr().as_ref().to_vec();
    bytes.reverse();
    format!("0x{}", hex::encode(bytes))
}

/// Reduce an arbitrary-precision integer into the Pallas base field.
fn biguint_to_field(num: &BigUint) -> Result<Fp, Error> {
    // Pallas field modulus:
    // p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001
    let modulus = BigUint::parse_bytes(
        b"40000000000000000000000000000000224698fc094cf91b992d30ed00000001",
        16,
    )
    .ok_or_else(|| Error::Encoding("invalid field modulus".to_string()))?;

    let reduced = num % modulus;

    // Fp's internal representation is 32 little-endian bytes.
    let mut le_bytes = reduced.to_bytes_le();
    le_bytes.resize(32, 0);

    let mut repr = [0u8; 32];
    repr.copy_from_slice(&le_bytes);

    // The value was reduced modulo the field, so this cannot fail.
    Option::from(Fp::from_repr(repr))
        .ok_or_else(|| Error::Encoding("value does not fit the field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        assert_eq!(parse_field_element("42").unwrap(), Fp::from(42));
        assert_eq!(parse_field_element("0").unwrap(), Fp::from(0));
    }

    #[test]
    fn parses_hex() {
        assert_eq!(parse_field_element("0x2a").unwrap(), Fp::from(42));
        assert_eq!(parse_field_element("0X2A").unwrap(), Fp::from(42));
    }

    #[test]
    fn oversized_values_are_reduced() {
        // p + 1 parses to 1.
        let p_plus_one = "0x40000000000000000000000000000000224698fc094cf91b992d30ed00000002";
        assert_eq!(parse_field_element(p_plus_one).unwrap(), Fp::from(1));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_field_element("").is_err());
        assert!(parse_field_element("12a").is_err());
        assert!(parse_field_element("0xzz").is_err());
    }

    #[test]
    fn hex_round_trip() {
        let value = Fp::from(123456789);
        let encoded = field_to_hex(&value);
        assert!(encoded.starts_with("0x"));
        assert_eq!(parse_field_element(&encoded).unwrap(), value);
    }
}
