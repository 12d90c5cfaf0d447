//! Error types for attribute resolution.
//!
//! None of these reach callers of the public probing functions: each is
//! converted to a sentinel string or a fallback value at its origin. The
//! `try_*` variants expose them for diagnostics and tests.

use std::fmt;
use std::path::PathBuf;

/// Sentinel returned when the property facility itself is missing.
pub const FACILITY_NOT_FOUND: &str = "SystemProperties-not-found";
/// Sentinel returned when the facility lacks the two-argument `get`.
pub const FUNCTION_NOT_FOUND: &str = "SystemProperties.get-not-found";
pub const ILLEGAL_ACCESS: &str = "illegal-access";
pub const ILLEGAL_ARGUMENT: &str = "illegal-argument";
pub const INVOCATION_TARGET_ERROR: &str = "invocation-target-error";

/// Which step of capability resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// The property facility does not exist on this host.
    Facility,
    /// The facility exists but has no `get(key, default)` function.
    Function,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::Facility => write!(f, "property facility"),
            Unresolved::Function => write!(f, "property get function"),
        }
    }
}

/// Failures while invoking a resolved property lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("illegal access: {0}")]
    IllegalAccess(String),

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("invocation target error: {0}")]
    Target(String),
}

/// Errors produced while probing the runtime property.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("{0} not found")]
    Unresolved(Unresolved),

    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl ProbeError {
    /// Returns the fixed diagnostic string standing in for this error.
    pub fn sentinel(&self) -> &'static str {
        match self {
            ProbeError::Unresolved(Unresolved::Facility) => FACILITY_NOT_FOUND,
            ProbeError::Unresolved(Unresolved::Function) => FUNCTION_NOT_FOUND,
            ProbeError::Invocation(InvocationError::IllegalAccess(_)) => ILLEGAL_ACCESS,
            ProbeError::Invocation(InvocationError::IllegalArgument(_)) => ILLEGAL_ARGUMENT,
            ProbeError::Invocation(InvocationError::Target(_)) => INVOCATION_TARGET_ERROR,
        }
    }
}

/// Errors produced while enumerating CPU entries.
#[derive(Debug, thiserror::Error)]
pub enum CoreCountError {
    #[error("I/O error: {0}")]
    Enumeration(#[from] std::io::Error),

    #[error("no cpu entries under {}", .0.display())]
    NoMatches(PathBuf),
}
