//! Host capability interfaces.
//!
//! The probing logic never touches the platform directly. A host adapter
//! hands it a property capability, a directory lister and raw identifier
//! strings; the adapter decides how each is obtained.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use deviceprobe_protocol::ScreenSize;

use crate::cores::CPU_DIR;
use crate::error::{InvocationError, Unresolved};
use crate::identity::RawIdentifiers;

/// Default location of the Android property tool.
pub const DEFAULT_GETPROP_PATH: &str = "/system/bin/getprop";

/// A resolved two-argument `get(key, default)` property function.
pub trait PropertyLookup: Send + Sync {
    fn get(&self, key: &str, default: &str) -> Result<String, InvocationError>;
}

/// Outcome of resolving the property facility on a host.
#[derive(Clone, Copy)]
pub enum PropertyCapability<'a> {
    Available(&'a dyn PropertyLookup),
    Unavailable(Unresolved),
}

impl std::fmt::Debug for PropertyCapability<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyCapability::Available(_) => write!(f, "Available"),
            PropertyCapability::Unavailable(reason) => write!(f, "Unavailable({reason:?})"),
        }
    }
}

/// Lists entry names of a directory.
pub trait DirLister: Send + Sync {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Lists directories on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }
}

/// Everything the attribute collector needs from a platform.
pub trait Host: Send + Sync {
    /// Resolves the system property facility.
    fn properties(&self) -> PropertyCapability<'_>;

    /// Lister used for CPU enumeration.
    fn lister(&self) -> &dyn DirLister;

    /// Directory holding per-core control nodes.
    fn cpu_dir(&self) -> &Path {
        Path::new(CPU_DIR)
    }

    /// Raw identifier strings, unvalidated.
    fn identifiers(&self) -> RawIdentifiers;

    fn screen_size(&self) -> Option<ScreenSize>;

    /// Maximum memory available to the process, in KiB.
    fn max_memory_kb(&self) -> Option<u64>;
}

/// Settings for building a [`PlatformHost`](crate::PlatformHost).
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub cpu_dir: PathBuf,
    pub getprop_path: PathBuf,
    /// When non-empty, replaces the system property facility.
    pub properties: HashMap<String, String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            cpu_dir: PathBuf::from(CPU_DIR),
            getprop_path: PathBuf::from(DEFAULT_GETPROP_PATH),
            properties: HashMap::new(),
        }
    }
}
