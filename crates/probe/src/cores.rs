//! CPU core counting from per-core sysfs nodes.

use std::path::Path;

use crate::error::CoreCountError;
use crate::host::DirLister;

/// Directory holding one `cpuN` node per processing unit.
pub const CPU_DIR: &str = "/sys/devices/system/cpu/";

/// Count reported when enumeration fails.
pub const FALLBACK_CORES: usize = 1;

/// Matches `cpu` followed by exactly one decimal digit.
///
/// Hosts with ten or more cores are undercounted: `cpu10` does not match.
pub fn is_cpu_entry(name: &str) -> bool {
    name.len() == 4 && name.starts_with("cpu") && name.as_bytes()[3].is_ascii_digit()
}

/// Counts `cpu[0-9]` entries under `dir`.
pub fn try_count_cores(lister: &dyn DirLister, dir: &Path) -> Result<usize, CoreCountError> {
    let count = lister
        .list(dir)?
        .iter()
        .filter(|name| is_cpu_entry(name))
        .count();

    if count == 0 {
        return Err(CoreCountError::NoMatches(dir.to_path_buf()));
    }
    Ok(count)
}

/// Counts cores under `dir`, falling back to [`FALLBACK_CORES`].
pub fn count_cores_in(lister: &dyn DirLister, dir: &Path) -> usize {
    match try_count_cores(lister, dir) {
        Ok(count) => count,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "core enumeration failed");
            FALLBACK_CORES
        }
    }
}

/// Counts cores under [`CPU_DIR`].
pub fn count_cores(lister: &dyn DirLister) -> usize {
    count_cores_in(lister, Path::new(CPU_DIR))
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::host::FsLister;

    struct Listing(Vec<&'static str>);

    impl DirLister for Listing {
        fn list(&self, _dir: &Path) -> io::Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Failing(io::ErrorKind);

    impl DirLister for Failing {
        fn list(&self, _dir: &Path) -> io::Result<Vec<String>> {
            Err(io::Error::from(self.0))
        }
    }

    #[test]
    fn cpu_entry_pattern() {
        assert!(is_cpu_entry("cpu0"));
        assert!(is_cpu_entry("cpu9"));
        assert!(!is_cpu_entry("cpu"));
        assert!(!is_cpu_entry("cpu10"));
        assert!(!is_cpu_entry("cpufreq"));
        assert!(!is_cpu_entry("cpuidle"));
        assert!(!is_cpu_entry("xcpu1"));
        assert!(!is_cpu_entry("CPU1"));
        assert!(!is_cpu_entry("cpu٣"));
    }

    #[test]
    fn counts_single_digit_entries_only() {
        let listing = Listing(vec!["cpu0", "cpu1", "cpu2", "other", "cpu10"]);
        assert_eq!(count_cores(&listing), 3);
    }

    #[test]
    fn listing_failure_falls_back_to_one() {
        for kind in [
            io::ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::Other,
        ] {
            assert_eq!(count_cores(&Failing(kind)), 1);
        }
        assert!(matches!(
            try_count_cores(&Failing(io::ErrorKind::NotFound), Path::new(CPU_DIR)),
            Err(CoreCountError::Enumeration(_))
        ));
    }

    #[test]
    fn no_matches_falls_back_to_one() {
        let listing = Listing(vec!["online", "possible", "cpu10"]);
        assert!(matches!(
            try_count_cores(&listing, Path::new(CPU_DIR)),
            Err(CoreCountError::NoMatches(_))
        ));
        assert_eq!(count_cores(&listing), 1);
    }

    #[test]
    fn counts_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["cpu0", "cpu1", "cpu2", "cpu3", "cpufreq", "cpuidle"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        std::fs::write(dir.path().join("online"), "0-3\n").unwrap();

        assert_eq!(count_cores_in(&FsLister, dir.path()), 4);
    }

    #[test]
    fn missing_directory_falls_back_to_one() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_cores_in(&FsLister, &dir.path().join("cpu")), 1);
    }
}
