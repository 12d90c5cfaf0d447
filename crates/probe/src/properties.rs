//! System property facilities.
//!
//! On Android the facility is the `getprop` tool. Elsewhere, or when the
//! caller supplies overrides, an in-memory table stands in for it.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{InvocationError, Unresolved};
use crate::host::{PropertyCapability, PropertyLookup};

/// Rejects keys `getprop` cannot take as a single argument.
fn validate_key(key: &str) -> Result<(), InvocationError> {
    if key.is_empty() {
        return Err(InvocationError::IllegalArgument("empty property key".into()));
    }
    if key.chars().any(|c| c.is_whitespace() || c == '\0') {
        return Err(InvocationError::IllegalArgument(format!(
            "invalid property key: {key:?}"
        )));
    }
    Ok(())
}

/// Property table held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProperties {
    values: HashMap<String, String>,
}

impl StaticProperties {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl PropertyLookup for StaticProperties {
    fn get(&self, key: &str, default: &str) -> Result<String, InvocationError> {
        validate_key(key)?;
        Ok(self
            .values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }
}

/// Reads properties by running `getprop <key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetpropLookup {
    path: PathBuf,
}

impl GetpropLookup {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertyLookup for GetpropLookup {
    fn get(&self, key: &str, default: &str) -> Result<String, InvocationError> {
        validate_key(key)?;

        let output = Command::new(&self.path).arg(key).output().map_err(|e| {
            if e.kind() == io::ErrorKind::PermissionDenied {
                InvocationError::IllegalAccess(e.to_string())
            } else {
                InvocationError::Target(e.to_string())
            }
        })?;

        if !output.status.success() {
            return Err(InvocationError::Target(format!(
                "{} exited with {}",
                self.path.display(),
                output.status
            )));
        }

        // getprop prints an empty line for unset keys.
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(value)
        }
    }
}

/// A property facility as resolved on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySource {
    Static(StaticProperties),
    Getprop(GetpropLookup),
    Missing(Unresolved),
}

impl PropertySource {
    /// Resolves the `getprop` tool at `path`.
    ///
    /// A missing path means the facility is absent; a path that is not an
    /// executable file means its `get` function is unusable.
    pub fn resolve_getprop(path: &Path) -> Self {
        let meta = match std::fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "getprop not found");
                return PropertySource::Missing(Unresolved::Facility);
            }
        };

        if !meta.is_file() || !is_executable(&meta) {
            tracing::debug!(path = %path.display(), "getprop is not an executable file");
            return PropertySource::Missing(Unresolved::Function);
        }

        PropertySource::Getprop(GetpropLookup {
            path: path.to_path_buf(),
        })
    }

    /// Static table when overrides are given, otherwise `getprop`.
    pub fn from_config(overrides: &HashMap<String, String>, getprop_path: &Path) -> Self {
        if overrides.is_empty() {
            Self::resolve_getprop(getprop_path)
        } else {
            PropertySource::Static(StaticProperties::new(overrides.clone()))
        }
    }

    pub fn capability(&self) -> PropertyCapability<'_> {
        match self {
            PropertySource::Static(props) => PropertyCapability::Available(props),
            PropertySource::Getprop(getprop) => PropertyCapability::Available(getprop),
            PropertySource::Missing(reason) => PropertyCapability::Unavailable(*reason),
        }
    }
}

#[cfg(unix)]
fn is_executable(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &std::fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::probe_runtime_property;

    #[test]
    fn static_returns_value_or_default() {
        let mut props = StaticProperties::default();
        props.insert("persist.sys.dalvik.vm.lib", "libart.so");

        assert_eq!(
            props.get("persist.sys.dalvik.vm.lib", "Dalvik").unwrap(),
            "libart.so"
        );
        assert_eq!(props.get("ro.unset", "fallback").unwrap(), "fallback");
    }

    #[test]
    fn static_rejects_bad_keys() {
        let props = StaticProperties::default();
        assert!(matches!(
            props.get("", "x"),
            Err(InvocationError::IllegalArgument(_))
        ));
        assert!(matches!(
            props.get("ro.build id", "x"),
            Err(InvocationError::IllegalArgument(_))
        ));
    }

    #[test]
    fn overrides_win_over_getprop() {
        let overrides = HashMap::from([("ro.product.model".to_string(), "Pixel".to_string())]);
        let source = PropertySource::from_config(&overrides, Path::new("/nonexistent/getprop"));
        assert!(matches!(source, PropertySource::Static(_)));
    }

    #[test]
    fn missing_getprop_is_unresolved_facility() {
        let dir = tempfile::tempdir().unwrap();
        let source = PropertySource::resolve_getprop(&dir.path().join("getprop"));
        assert_eq!(source, PropertySource::Missing(Unresolved::Facility));
        assert_eq!(
            probe_runtime_property(source.capability()).as_str(),
            "SystemProperties-not-found"
        );
    }

    #[test]
    fn directory_getprop_is_unresolved_function() {
        let dir = tempfile::tempdir().unwrap();
        let source = PropertySource::resolve_getprop(dir.path());
        assert_eq!(source, PropertySource::Missing(Unresolved::Function));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_getprop_is_unresolved_function() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("getprop");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        let source = PropertySource::resolve_getprop(&path);
        assert_eq!(source, PropertySource::Missing(Unresolved::Function));
    }

    /// Serializes script tests: a fork in one test while another still
    /// holds its script open for writing makes exec fail with ETXTBSY.
    #[cfg(unix)]
    static SCRIPT_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[cfg(unix)]
    fn script(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("getprop");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn getprop_script_value() {
        let _guard = SCRIPT_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = script(dir.path(), "echo libart.so");
        let source = PropertySource::resolve_getprop(&path);
        let result = probe_runtime_property(source.capability());
        assert_eq!(result.as_str(), "ART");
    }

    #[cfg(unix)]
    #[test]
    fn getprop_empty_output_uses_default() {
        let _guard = SCRIPT_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = script(dir.path(), "echo");
        let source = PropertySource::resolve_getprop(&path);
        let result = probe_runtime_property(source.capability());
        assert_eq!(result.as_str(), "Dalvik");
    }

    #[cfg(unix)]
    #[test]
    fn getprop_failure_is_target_error() {
        let _guard = SCRIPT_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = script(dir.path(), "exit 3");
        let source = PropertySource::resolve_getprop(&path);
        let result = probe_runtime_property(source.capability());
        assert_eq!(result.as_str(), "invocation-target-error");
    }
}
