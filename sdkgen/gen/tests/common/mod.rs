//! Fixture loading shared by the integration tests.

use std::fs;
use std::path::PathBuf;

use sdkgen_define::ServiceDefinition;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Loads `<name>.json`, merging `<name>.examples.json` when present.
pub fn load_service(name: &str) -> ServiceDefinition {
    let json = fs::read_to_string(fixture_path(&format!("{name}.json")))
        .expect("Failed to read fixture");
    let service = ServiceDefinition::from_json_str(&json).expect("Failed to parse fixture");

    match fs::read_to_string(fixture_path(&format!("{name}.examples.json"))) {
        Ok(examples) => service
            .with_examples_json(&examples)
            .expect("Failed to parse examples fixture"),
        Err(_) => service,
    }
}
