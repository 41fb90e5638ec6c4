//! Build script for generating the Codebreaker API client from its `OpenAPI` document
//!
//! The document lives at the workspace root (`openapi.yaml`). `progenitor`
//! turns it into model types and a builder-style client; the result is
//! formatted and written to `$OUT_DIR/codebreaker_client.rs`, where
//! `src/api_client.rs` includes it.

use std::env;
use std::fs;
use std::path::Path;

const SPEC_PATH: &str = "../../openapi.yaml";

fn main() {
    println!("cargo:rerun-if-changed={SPEC_PATH}");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR environment variable not set");
    let dest_path = Path::new(&out_dir).join("codebreaker_client.rs");

    let spec_content = fs::read_to_string(SPEC_PATH).unwrap_or_else(|e| {
        panic!("Failed to read OpenAPI document from '{SPEC_PATH}': {e}\n\nEnsure openapi.yaml exists in the workspace root.")
    });

    let spec: openapiv3::OpenAPI = serde_yaml::from_str(&spec_content).unwrap_or_else(|e| {
        panic!("Failed to parse OpenAPI document from '{SPEC_PATH}': {e}\n\nEnsure the file is valid YAML and follows the OpenAPI 3.0 specification.")
    });

    // Builder interface: fluent operation calls plus `types::builder` model builders.
    // Models compare by value.
    let mut settings = progenitor::GenerationSettings::default();
    settings
        .with_interface(progenitor::InterfaceStyle::Builder)
        .with_tag(progenitor::TagStyle::Merged)
        .with_derive("PartialEq");

    let mut generator = progenitor::Generator::new(&settings);

    let tokens = generator.generate_tokens(&spec).unwrap_or_else(|e| {
        panic!("Failed to generate client code from '{SPEC_PATH}': {e}")
    });

    let ast = syn::parse2(tokens).unwrap_or_else(|e| {
        panic!("Failed to parse generated Rust tokens: {e}")
    });

    let content = prettyplease::unparse(&ast);

    fs::write(&dest_path, content).unwrap_or_else(|e| {
        panic!("Failed to write generated client to '{}': {e}", dest_path.display())
    });
}
