//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::path::PathBuf;
use tempfile::TempDir;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times; subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Two nav items and two sections, `home` initially active.
#[allow(dead_code)]
pub const HOME_ABOUT_TOML: &str = r#"
[[elements]]
tag = "button"
classes = ["nav-item", "active"]
attributes = { data-section = "home" }

[[elements]]
tag = "button"
classes = ["nav-item"]
attributes = { data-section = "about" }

[[elements]]
tag = "section"
id = "home"
classes = ["section", "active"]

[[elements]]
tag = "section"
id = "about"
classes = ["section"]
"#;

/// Writes `content` to `<temp_dir>/<name>` and returns the path.
#[allow(dead_code)]
pub fn write_fixture(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
