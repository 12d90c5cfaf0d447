//! Stub host for platforms without sysfs.

use std::io;
use std::path::{Path, PathBuf};

use deviceprobe_protocol::ScreenSize;

use crate::error::Unresolved;
use crate::host::{DirLister, Host, HostConfig, PropertyCapability};
use crate::identity::RawIdentifiers;
use crate::properties::{PropertySource, StaticProperties};

#[derive(Debug)]
pub struct PlatformHost {
    cpu_dir: PathBuf,
    properties: PropertySource,
}

impl PlatformHost {
    pub fn new(config: &HostConfig) -> Self {
        let properties = if config.properties.is_empty() {
            PropertySource::Missing(Unresolved::Facility)
        } else {
            PropertySource::Static(StaticProperties::new(config.properties.clone()))
        };
        Self {
            cpu_dir: config.cpu_dir.clone(),
            properties,
        }
    }
}

impl DirLister for PlatformHost {
    fn list(&self, _dir: &Path) -> io::Result<Vec<String>> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
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
        RawIdentifiers::default()
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        None
    }

    fn max_memory_kb(&self) -> Option<u64> {
        None
    }
}
