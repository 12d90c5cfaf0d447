//! Device attribute resolution.
//!
//! Classifies the managed runtime from a system property, synthesizes a
//! composite device identifier from weak host identifiers, and counts CPU
//! cores from a pseudo-filesystem listing. Every operation degrades to a
//! defined fallback value instead of failing.

pub mod collector;
pub mod cores;
pub mod error;
pub mod host;
pub mod identity;
pub mod properties;
pub mod runtime;

#[cfg(any(target_os = "linux", target_os = "android"))]
#[path = "sysfs_linux.rs"]
mod platform;

#[cfg(not(any(target_os = "linux", target_os = "android")))]
#[path = "sysfs_other.rs"]
mod platform;

pub use collector::collect;
pub use cores::{CPU_DIR, count_cores, count_cores_in};
pub use error::{CoreCountError, InvocationError, ProbeError, Unresolved};
pub use host::{DirLister, FsLister, Host, HostConfig, PropertyCapability, PropertyLookup};
pub use identity::{RawIdentifiers, java_string_hash, synthesize, synthesize_str};
pub use platform::PlatformHost;
pub use properties::{GetpropLookup, PropertySource, StaticProperties};
pub use runtime::{RuntimeProbeResult, classify, probe_runtime_property};

pub use deviceprobe_protocol::{DeviceAttributes, RuntimeKind, ScreenSize};
