//! Dynamically-typed parameter values and per-key validator dispatch.
//!
//! The parameter store updates fields generically by key, so candidate
//! values cross this boundary as a [`ParamValue`] variant rather than a
//! concrete field type. Each validator defends against receiving the wrong
//! variant for its key.

use crate::{address::parse_address, error::ParamsError};
use alloy_primitives::Address;

/// Store key addressing the [`enable_erc20`](crate::Params::enable_erc20) field.
pub const PARAM_STORE_KEY_ENABLE_ERC20: &[u8] = b"EnableErc20";
/// Store key addressing the [`dynamic_precompiles`](crate::Params::dynamic_precompiles) field.
pub const PARAM_STORE_KEY_DYNAMIC_PRECOMPILES: &[u8] = b"DynamicPrecompiles";
/// Store key addressing the [`native_precompiles`](crate::Params::native_precompiles) field.
pub const PARAM_STORE_KEY_NATIVE_PRECOMPILES: &[u8] = b"NativePrecompiles";
/// Store key addressing the
/// [`permissionless_registration`](crate::Params::permissionless_registration) field.
pub const PARAM_STORE_KEY_PERMISSIONLESS_REGISTRATION: &[u8] = b"PermissionlessRegistration";

/// A candidate value for a single parameter field, as handed over by a
/// generic parameter-store update hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Value for one of the boolean fields.
    Bool(bool),
    /// Value for one of the precompile address lists.
    StringList(Vec<String>),
}

impl ParamValue {
    /// Human-readable kind of the carried variant, used in rejection
    /// messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::StringList(_) => "string list",
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

/// Validates that a candidate value is a boolean.
pub fn validate_bool(value: &ParamValue) -> Result<bool, ParamsError> {
    match value {
        ParamValue::Bool(b) => Ok(*b),
        other => Err(ParamsError::TypeMismatch {
            expected: "bool",
            received: other.kind(),
        }),
    }
}

/// Validates a candidate precompile list and converts it to canonical
/// addresses.
///
/// Returns the canonical 20-byte form of every entry, in input order. Fails
/// on the first entry that is not a well-formed address, or if the raw
/// string sequence is not in strict ascending lexicographic order.
pub fn validate_precompiles(value: &ParamValue) -> Result<Vec<Address>, ParamsError> {
    match value {
        ParamValue::StringList(precompiles) => validate_precompile_list(precompiles),
        other => Err(ParamsError::TypeMismatch {
            expected: "string list",
            received: other.kind(),
        }),
    }
}

pub(crate) fn validate_precompile_list(precompiles: &[String]) -> Result<Vec<Address>, ParamsError> {
    let mut addrs = Vec::with_capacity(precompiles.len());
    for precompile in precompiles {
        addrs.push(parse_address(precompile)?);
    }

    // Sortedness is checked on the raw string form, not the canonical
    // rendering. Two nodes receiving the list in different insertion order
    // must still iterate it identically.
    if !precompiles.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(ParamsError::UnsortedPrecompiles(precompiles.join(", ")));
    }

    Ok(addrs)
}

/// Routes a candidate value for a single store key to that field's
/// validator.
pub fn validate_param(key: &[u8], value: &ParamValue) -> Result<(), ParamsError> {
    match key {
        PARAM_STORE_KEY_ENABLE_ERC20 | PARAM_STORE_KEY_PERMISSIONLESS_REGISTRATION => {
            validate_bool(value).map(|_| ())
        }
        PARAM_STORE_KEY_NATIVE_PRECOMPILES | PARAM_STORE_KEY_DYNAMIC_PRECOMPILES => {
            validate_precompiles(value).map(|_| ())
        }
        other => Err(ParamsError::UnknownParamKey(
            String::from_utf8_lossy(other).into_owned(),
        )),
    }
}
