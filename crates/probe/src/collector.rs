//! Assembles a full attribute snapshot from a host.

use deviceprobe_protocol::DeviceAttributes;

use crate::cores::count_cores_in;
use crate::host::Host;
use crate::identity::RawIdentifiers;
use crate::runtime::probe_runtime_property;

/// Collects every attribute. Never fails; unavailable values fall back to
/// empty strings, `None`, zero, or the documented defaults.
pub fn collect(host: &dyn Host) -> DeviceAttributes {
    let ids = host.identifiers();
    let probe = probe_runtime_property(host.properties());
    let unique_id = ids.composite().to_string();

    let attrs = DeviceAttributes {
        device_name: String::new(),
        imei: imei(&ids),
        mac: mac(&ids),
        screen: host.screen_size(),
        cpu_cores: count_cores_in(host.lister(), host.cpu_dir()),
        runtime: probe.kind(),
        runtime_detail: probe.as_str().to_string(),
        unique_id,
        max_memory_kb: host.max_memory_kb().unwrap_or(0),
    };

    tracing::debug!(
        cpu_cores = attrs.cpu_cores,
        runtime = %attrs.runtime,
        unique_id = %attrs.unique_id,
        "device attributes collected"
    );
    attrs
}

/// Device id, or `""` when absent or empty.
pub fn imei(ids: &RawIdentifiers) -> String {
    non_empty(ids.device_id.as_deref())
}

/// MAC address, or `""` when absent or empty.
pub fn mac(ids: &RawIdentifiers) -> String {
    non_empty(ids.mac.as_deref())
}

fn non_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
