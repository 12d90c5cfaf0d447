fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use deviceprobe_protocol::{DeviceAttributes, RuntimeKind};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values.
    fn roundtrip_test<T>(name: &str) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  rust:    {reserialized}"
        );
        parsed
    }

    #[test]
    fn fixture_device_attributes() {
        let attrs = roundtrip_test::<DeviceAttributes>("device_attributes.json");
        assert_eq!(attrs.runtime, RuntimeKind::Art);
        assert_eq!(attrs.screen.map(|s| s.to_string()).as_deref(), Some("1080x2400"));
    }

    #[test]
    fn fixture_device_attributes_bare() {
        let attrs = roundtrip_test::<DeviceAttributes>("device_attributes_bare.json");
        assert_eq!(attrs.device_name, "");
        assert!(attrs.screen.is_none());
        assert_eq!(attrs.cpu_cores, 1);
    }

    #[test]
    fn unique_id_matches_synthesizer() {
        // Identifiers stored by earlier releases must still be reproduced.
        let attrs: DeviceAttributes =
            serde_json::from_value(load_fixture("device_attributes.json")).unwrap();
        let id = deviceprobe::synthesize_str(&attrs.imei, "null", "abc-def");
        assert_eq!(id.to_string(), attrs.unique_id);
    }

    #[test]
    fn runtime_detail_classifies_to_runtime() {
        for name in ["device_attributes.json", "device_attributes_bare.json"] {
            let attrs: DeviceAttributes = serde_json::from_value(load_fixture(name)).unwrap();
            assert_eq!(
                deviceprobe::runtime::classify_value(&attrs.runtime_detail),
                attrs.runtime,
                "{name}"
            );
        }
    }
}
