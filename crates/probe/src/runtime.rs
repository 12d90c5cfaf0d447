//! Managed runtime classification.
//!
//! The runtime library name lives in a system property that may not be
//! readable on every host. Each step of the lookup can fail on its own;
//! every failure collapses to a distinct sentinel string and then to
//! [`RuntimeKind::Unknown`].

use std::fmt;

use deviceprobe_protocol::RuntimeKind;

use crate::error::ProbeError;
use crate::host::PropertyCapability;

/// Property naming the runtime shared library.
pub const RUNTIME_LIB_KEY: &str = "persist.sys.dalvik.vm.lib";

/// Value assumed when the property is unset.
pub const RUNTIME_LIB_DEFAULT: &str = "Dalvik";

/// Raw runtime property value, or the diagnostic sentinel of the step that
/// failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProbeResult(Result<String, ProbeError>);

impl RuntimeProbeResult {
    /// Returns the mapped property value or the sentinel string.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Ok(value) => value,
            Err(e) => e.sentinel(),
        }
    }

    /// Returns the failure behind a sentinel, if any.
    pub fn error(&self) -> Option<&ProbeError> {
        self.0.as_ref().err()
    }

    pub fn kind(&self) -> RuntimeKind {
        classify_value(self.as_str())
    }
}

impl fmt::Display for RuntimeProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the runtime property, mapping known library names to runtime
/// names and passing anything else through verbatim.
pub fn try_probe_runtime_property(
    capability: PropertyCapability<'_>,
) -> Result<String, ProbeError> {
    let lookup = match capability {
        PropertyCapability::Available(lookup) => lookup,
        PropertyCapability::Unavailable(reason) => return Err(ProbeError::Unresolved(reason)),
    };

    let raw = lookup.get(RUNTIME_LIB_KEY, RUNTIME_LIB_DEFAULT)?;
    Ok(match runtime_name(&raw) {
        Some(name) => name.to_string(),
        None => raw,
    })
}

/// Probes the runtime property. Never fails; see [`RuntimeProbeResult`].
pub fn probe_runtime_property(capability: PropertyCapability<'_>) -> RuntimeProbeResult {
    let result = try_probe_runtime_property(capability);
    match &result {
        Ok(value) => tracing::debug!(value = %value, "runtime property resolved"),
        Err(e) => tracing::debug!(
            error = %e,
            sentinel = e.sentinel(),
            "runtime property probe failed"
        ),
    }
    RuntimeProbeResult(result)
}

/// Classifies the active managed runtime.
pub fn classify(capability: PropertyCapability<'_>) -> RuntimeKind {
    probe_runtime_property(capability).kind()
}

/// Maps a probe value to a runtime kind.
///
/// Matching is on `contains("ART")` so debug builds classify as ART.
pub fn classify_value(value: &str) -> RuntimeKind {
    if value == "Dalvik" {
        RuntimeKind::Dalvik
    } else if value.contains("ART") {
        RuntimeKind::Art
    } else {
        RuntimeKind::Unknown
    }
}

fn runtime_name(lib: &str) -> Option<&'static str> {
    match lib {
        "libdvm.so" => Some("Dalvik"),
        "libart.so" => Some("ART"),
        "libartd.so" => Some("ART debug build"),
        _ => None,
    }
}
