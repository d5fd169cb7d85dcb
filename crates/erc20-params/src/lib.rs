//! # ERC-20 Module Parameters
//!
//! Parameter set validation and precompile registry membership checks for
//! the ERC-20 token-representation module.
//!
//! The module's configuration is a single [`Params`] record: a feature flag
//! for ERC-20 conversion, the lists of native and dynamically registered
//! token precompile addresses, and a flag allowing permissionless token-pair
//! registration. Because every consensus node validates candidate
//! configurations independently, validation here must be fully
//! deterministic: lists are pinned to one canonical order, validators run
//! in a fixed sequence, and the first violation rejects the candidate.
//!
//! The parameter store owning the accepted configuration lives outside this
//! crate; it addresses fields by the `PARAM_STORE_KEY_*` byte keys and is
//! expected to call [`Params::validate`] before committing any change.

pub mod address;
pub mod error;
pub mod params;
pub mod value;

pub use error::ParamsError;
pub use params::{default_precompiles, init_default_precompiles, DefaultPrecompiles, Params};
pub use value::{
    validate_bool, validate_param, validate_precompiles, ParamValue, PARAM_STORE_KEY_DYNAMIC_PRECOMPILES,
    PARAM_STORE_KEY_ENABLE_ERC20, PARAM_STORE_KEY_NATIVE_PRECOMPILES,
    PARAM_STORE_KEY_PERMISSIONLESS_REGISTRATION,
};
