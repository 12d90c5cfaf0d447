//! Linux/Android host backed by sysfs and procfs.

use std::io;
use std::path::{Path, PathBuf};

use deviceprobe_protocol::ScreenSize;

use crate::host::{DirLister, FsLister, Host, HostConfig, PropertyCapability};
use crate::identity::RawIdentifiers;
use crate::properties::PropertySource;

const MACHINE_ID: &str = "/etc/machine-id";
const PRODUCT_UUID: &str = "/sys/class/dmi/id/product_uuid";
const NET_DIR: &str = "/sys/class/net";
const DRM_DIR: &str = "/sys/class/drm";
const MEMINFO: &str = "/proc/meminfo";

/// Host reading attributes from the local kernel interfaces.
#[derive(Debug)]
pub struct PlatformHost {
    cpu_dir: PathBuf,
    properties: PropertySource,
}

impl PlatformHost {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            cpu_dir: config.cpu_dir.clone(),
            properties: PropertySource::from_config(&config.properties, &config.getprop_path),
        }
    }
}

impl DirLister for PlatformHost {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        FsLister.list(dir)
    }
}

impl Host for PlatformHost {
    fn properties(&self) -> PropertyCapability<'_> {
        self.properties.capability()
    }

    fn lister(&self) -> &dyn DirLister {
        self
    }

    fn cpu_dir(&self) -> &Path {
        &self.cpu_dir
    }

    fn identifiers(&self) -> RawIdentifiers {
        RawIdentifiers {
            // Readable by root only on most distributions.
            device_id: read_trimmed(Path::new(PRODUCT_UUID)),
            // No telephony stack.
            sim_serial: None,
            secure_id: read_trimmed(Path::new(MACHINE_ID)),
            mac: find_mac(Path::new(NET_DIR)),
        }
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        find_screen_size(Path::new(DRM_DIR))
    }

    fn max_memory_kb(&self) -> Option<u64> {
        let content = std::fs::read_to_string(MEMINFO).ok()?;
        content
            .lines()
            .find_map(|line| parse_meminfo_kb(line, "MemTotal:"))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reads a file and trims whitespace. Empty files read as `None`.
fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Sorted entry names of `dir`, or empty if it cannot be read.
fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names = FsLister.list(dir).unwrap_or_default();
    names.sort();
    names
}

/// Picks the hardware address of the first wireless interface, else the
/// first non-loopback interface with a non-zero address.
fn find_mac(net_dir: &Path) -> Option<String> {
    let mut fallback = None;

    for name in sorted_names(net_dir) {
        if name == "lo" {
            continue;
        }
        let Some(addr) = read_trimmed(&net_dir.join(&name).join("address")) else {
            continue;
        };
        if addr == "00:00:00:00:00:00" {
            continue;
        }
        if name.starts_with("wl") {
            return Some(addr);
        }
        fallback.get_or_insert(addr);
    }

    fallback
}

/// Returns the preferred mode of the first connected DRM connector.
///
/// Connectors appear as `card0-eDP-1`, `card0-HDMI-A-1`, ...; the first
/// line of `modes` is the preferred mode.
fn find_screen_size(drm_dir: &Path) -> Option<ScreenSize> {
    sorted_names(drm_dir)
        .into_iter()
        .filter(|n| n.starts_with("card") && n.contains('-'))
        .map(|n| drm_dir.join(n))
        .filter(|p| read_trimmed(&p.join("status")).as_deref() == Some("connected"))
        .find_map(|p| {
            let modes = std::fs::read_to_string(p.join("modes")).ok()?;
            modes.lines().next().and_then(ScreenSize::parse_mode)
        })
}

/// Parses a line from `/proc/meminfo` matching a prefix, returns value in kB.
fn parse_meminfo_kb(line: &str, prefix: &str) -> Option<u64> {
    line.strip_prefix(prefix)?
        .split_whitespace()
        .next()
        .and_then(|v| v.parse().ok())
}
