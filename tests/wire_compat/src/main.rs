fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use coldvault_protocol::{
        CompleteUploadRequest, CompleteUploadResponse, InitiateUploadRequest,
        InitiateUploadResponse, UploadPartRequest, UploadPartResponse,
    };

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

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values. The fixtures pin the exact shapes the
    /// vault service accepts; a mismatch here means the wire changed.
    fn roundtrip_test<T>(name: &str)
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
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  Rust:    {reserialized}"
        );
    }

    #[test]
    fn fixture_initiate_upload_request() {
        roundtrip_test::<InitiateUploadRequest>("initiate_upload_request.json");
    }

    #[test]
    fn fixture_initiate_upload_response() {
        roundtrip_test::<InitiateUploadResponse>("initiate_upload_response.json");
    }

    #[test]
    fn fixture_upload_part_request() {
        roundtrip_test::<UploadPartRequest>("upload_part_request.json");
    }

    #[test]
    fn fixture_upload_part_response() {
        roundtrip_test::<UploadPartResponse>("upload_part_response.json");
    }

    #[test]
    fn fixture_complete_upload_request() {
        roundtrip_test::<CompleteUploadRequest>("complete_upload_request.json");
    }

    #[test]
    fn fixture_complete_upload_response() {
        roundtrip_test::<CompleteUploadResponse>("complete_upload_response.json");
    }

    #[test]
    fn upload_part_fixture_carries_base64_body() {
        let fixture = load_fixture("upload_part_request.json");
        let parsed: UploadPartRequest = serde_json::from_value(fixture).unwrap();
        // base64("part body") in the fixture.
        assert_eq!(parsed.data, b"part body");
    }
}
