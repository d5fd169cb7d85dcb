//! The ERC-20 module parameter set and its aggregate validator.

use crate::{
    address::checksum,
    error::ParamsError,
    value::{validate_bool, validate_precompile_list, ParamValue},
};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, str::FromStr, sync::OnceLock};
use tracing::debug;

/// Process-wide default precompile lists used by [`Params::default`].
///
/// Chains that ship precompiles at genesis install their lists once at
/// startup via [`init_default_precompiles`]; the value is immutable
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultPrecompiles {
    /// Default native precompile addresses.
    ///
    /// For the ERC-20 representation of the chain's native denomination the
    /// canonical [ERC-7528](https://eips.ethereum.org/EIPS/eip-7528) address
    /// `0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE` is recommended.
    pub native: Vec<String>,
    /// Default dynamic precompile addresses.
    pub dynamic: Vec<String>,
}

static DEFAULT_PRECOMPILES: OnceLock<DefaultPrecompiles> = OnceLock::new();

/// Installs the process-wide default precompile lists.
///
/// May be called at most once, before any [`Params::default`] call; returns
/// the rejected value if defaults were already set (or already read).
pub fn init_default_precompiles(defaults: DefaultPrecompiles) -> Result<(), DefaultPrecompiles> {
    DEFAULT_PRECOMPILES.set(defaults)
}

/// Returns the installed default precompile lists, or empty lists if
/// [`init_default_precompiles`] was never called.
pub fn default_precompiles() -> &'static DefaultPrecompiles {
    DEFAULT_PRECOMPILES.get_or_init(DefaultPrecompiles::default)
}

/// Configuration governing ERC-20 conversion and the precompile registry.
///
/// A `Params` value is constructed once, validated via [`Params::validate`]
/// before the parameter store accepts it, and read-only afterwards. The
/// serialized field names are the exact identifiers the store uses to
/// address each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Global feature flag for ERC-20 conversion.
    #[serde(rename = "EnableErc20")]
    pub enable_erc20: bool,
    /// Addresses treated as built-in token precompiles, sorted ascending by
    /// raw string form.
    #[serde(rename = "NativePrecompiles")]
    pub native_precompiles: Vec<String>,
    /// Addresses of precompiles registered after genesis, sorted ascending
    /// by raw string form.
    #[serde(rename = "DynamicPrecompiles")]
    pub dynamic_precompiles: Vec<String>,
    /// Whether any account may register new token pairs.
    #[serde(rename = "PermissionlessRegistration")]
    pub permissionless_registration: bool,
}

impl Default for Params {
    fn default() -> Self {
        let defaults = default_precompiles();
        Self {
            enable_erc20: true,
            native_precompiles: defaults.native.clone(),
            dynamic_precompiles: defaults.dynamic.clone(),
            permissionless_registration: true,
        }
    }
}

impl Params {
    /// Creates a new parameter set.
    ///
    /// Takes ownership of both precompile lists and sorts them ascending by
    /// raw string form, so iteration order is canonical regardless of the
    /// order entries were supplied in. The returned value is NOT checked
    /// for validity; establish that separately via [`Self::validate`].
    pub fn new(
        enable_erc20: bool,
        mut native_precompiles: Vec<String>,
        mut dynamic_precompiles: Vec<String>,
        permissionless_registration: bool,
    ) -> Self {
        native_precompiles.sort();
        dynamic_precompiles.sort();
        Self {
            enable_erc20,
            native_precompiles,
            dynamic_precompiles,
            permissionless_registration,
        }
    }

    /// Validates every invariant of the parameter set.
    ///
    /// Runs the field validators in a fixed order and stops at the first
    /// violation, so every node reports the same rejection for the same
    /// serialized candidate:
    ///
    /// 1. `EnableErc20` is a boolean;
    /// 2. `NativePrecompiles` are well-formed, string-sorted addresses;
    /// 3. `DynamicPrecompiles` are well-formed, string-sorted addresses;
    /// 4. `PermissionlessRegistration` is a boolean;
    /// 5. no address appears twice across the combined dynamic + native
    ///    set, compared by EIP-55 checksummed form.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let result = self.run_validators();
        if let Err(err) = &result {
            debug!(%err, "rejected candidate erc20 params");
        }
        result
    }

    fn run_validators(&self) -> Result<(), ParamsError> {
        validate_bool(&ParamValue::Bool(self.enable_erc20))?;

        let np_addrs = validate_precompile_list(&self.native_precompiles)?;
        let dp_addrs = validate_precompile_list(&self.dynamic_precompiles)?;

        validate_bool(&ParamValue::Bool(self.permissionless_registration))?;

        let mut combined = dp_addrs;
        combined.extend(np_addrs);
        validate_precompiles_uniqueness(&combined)
    }

    /// Whether the address is one of the native precompiles.
    pub fn is_native_precompile(&self, addr: Address) -> bool {
        is_addr_included(addr, &self.native_precompiles)
    }

    /// Whether the address is one of the dynamically registered precompiles.
    pub fn is_dynamic_precompile(&self, addr: Address) -> bool {
        is_addr_included(addr, &self.dynamic_precompiles)
    }
}

/// Rejects the first address appearing more than once in the combined set.
///
/// Seen entries are tracked by EIP-55 checksummed rendering so case-variant
/// inputs of the same address count as duplicates.
fn validate_precompiles_uniqueness(precompiles: &[Address]) -> Result<(), ParamsError> {
    let mut seen = HashSet::with_capacity(precompiles.len());
    for precompile in precompiles {
        let rendered = checksum(*precompile);
        if seen.contains(&rendered) {
            return Err(ParamsError::DuplicatePrecompile(rendered));
        }
        seen.insert(rendered);
    }
    Ok(())
}

/// Checks address bytes rather than strings, so checksum-casing differences
/// between the stored rendering and the query cannot cause a false
/// negative. Entries that fail to parse never match.
fn is_addr_included(addr: Address, str_addrs: &[String]) -> bool {
    str_addrs
        .iter()
        .any(|sa| Address::from_str(sa).is_ok_and(|stored| stored == addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WERC20: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
    const P801: &str = "0x0000000000000000000000000000000000000801";
    const P802: &str = "0x0000000000000000000000000000000000000802";

    fn strs(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_sorts_both_lists() {
        let params = Params::new(true, strs(&[P802, P801]), strs(&[WERC20]), true);
        assert_eq!(params.native_precompiles, strs(&[P801, P802]));
        assert_eq!(params.dynamic_precompiles, strs(&[WERC20]));
        params.validate().unwrap();
    }

    #[test]
    fn sorting_is_idempotent_over_input_order() {
        let a = Params::new(true, strs(&[P801, P802]), strs(&[]), true);
        let b = Params::new(true, strs(&[P802, P801]), strs(&[]), true);
        assert_eq!(a, b);
    }

    #[test]
    fn validate_rejects_duplicate_within_list() {
        // The duplicate also breaks strict ordering, which is checked first.
        let params = Params {
            native_precompiles: strs(&[P801, P801]),
            ..Params::new(true, vec![], vec![], true)
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ParamsError::UnsortedPrecompiles(_)));
    }

    #[test]
    fn validate_rejects_address_in_both_lists() {
        let params = Params::new(true, strs(&[WERC20]), strs(&[WERC20]), true);
        let err = params.validate().unwrap_err();
        assert_eq!(
            err,
            ParamsError::DuplicatePrecompile(WERC20.to_string())
        );
    }

    #[test]
    fn validate_rejects_case_variant_duplicate_across_lists() {
        // Same address bytes, different casing: string-sorted fine within
        // each list, but the checksummed forms collide.
        let params = Params::new(
            true,
            strs(&[WERC20]),
            strs(&[&WERC20.to_lowercase()]),
            true,
        );
        let err = params.validate().unwrap_err();
        assert_eq!(
            err,
            ParamsError::DuplicatePrecompile(WERC20.to_string())
        );
    }

    #[test]
    fn validate_rejects_unsorted_native_list() {
        let params = Params {
            native_precompiles: strs(&[P802, P801]),
            ..Params::new(true, vec![], vec![], true)
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ParamsError::UnsortedPrecompiles(_)));
    }

    #[test]
    fn validate_names_malformed_address() {
        let params = Params {
            dynamic_precompiles: strs(&["not-an-address"]),
            ..Params::new(true, vec![], vec![], true)
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err, ParamsError::InvalidAddress("not-an-address".to_string()));
    }

    #[test]
    fn membership_compares_bytes_not_strings() {
        let params = Params::new(true, strs(&[&WERC20.to_lowercase()]), strs(&[P801]), true);

        // query with the checksummed rendering against a lowercase entry
        let werc20 = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");
        assert!(params.is_native_precompile(werc20));
        assert!(!params.is_dynamic_precompile(werc20));

        let p801 = address!("0x0000000000000000000000000000000000000801");
        assert!(params.is_dynamic_precompile(p801));
        assert!(!params.is_native_precompile(p801));

        let absent = address!("0x0000000000000000000000000000000000000803");
        assert!(!params.is_native_precompile(absent));
        assert!(!params.is_dynamic_precompile(absent));
    }

    #[test]
    fn membership_ignores_unparseable_entries() {
        let params = Params {
            native_precompiles: strs(&["not-an-address"]),
            ..Params::new(true, vec![], vec![], true)
        };
        assert!(!params.is_native_precompile(Address::ZERO));
    }
}
