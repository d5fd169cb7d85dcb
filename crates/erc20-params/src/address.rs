//! Thin wrappers around the address-format primitive.
//!
//! Everything else in this crate goes through these helpers so that the
//! string-sortedness check (raw string order) and the uniqueness/membership
//! checks (canonical EIP-55 form) stay visibly separate concerns.

use crate::error::ParamsError;
use alloy_primitives::Address;
use std::str::FromStr;

/// Parses a hex string (with or without a `0x` prefix) into its canonical
/// 20-byte address form.
///
/// Fails with [`ParamsError::InvalidAddress`] naming the offending string.
pub fn parse_address(value: &str) -> Result<Address, ParamsError> {
    Address::from_str(value).map_err(|_| ParamsError::InvalidAddress(value.to_string()))
}

/// Returns the EIP-55 checksummed rendering of an address.
///
/// Case-variant renderings of the same address collapse to the same string,
/// so this form is what uniqueness checks compare.
pub fn checksum(addr: Address) -> String {
    addr.to_checksum(None)
}
