use thiserror::Error;

/// Reasons a candidate parameter set (or a single parameter value) is
/// rejected.
///
/// Validation always stops at the first violation. A rejected candidate
/// never replaces the previously accepted configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// A parameter value arrived with the wrong variant for its key.
    ///
    /// This signals a bug in the caller wiring, not a bad configuration.
    #[error("invalid parameter type: expected {expected}, got {received}")]
    TypeMismatch {
        /// Variant kind the validator requires.
        expected: &'static str,
        /// Variant kind that was actually supplied.
        received: &'static str,
    },
    /// A precompile entry is not a well-formed 20-byte hex address.
    #[error("invalid precompile {0}")]
    InvalidAddress(String),
    /// A precompile list is not in strict ascending lexicographic order.
    #[error("precompiles need to be sorted: [{0}]")]
    UnsortedPrecompiles(String),
    /// An address appears more than once across the native and dynamic sets.
    #[error("duplicate precompile {0}")]
    DuplicatePrecompile(String),
    /// A parameter key is not part of the module's key table.
    #[error("unknown parameter key: {0}")]
    UnknownParamKey(String),
}
