#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn fixture_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("test_island_config.json")
}

pub fn ensure_test_config() {
    INIT.call_once(|| {
        let config_path = fixture_config_path();

        debug_assert!(
            config_path.exists(),
            "missing test island config at {}",
            config_path.display()
        );

        std::env::set_var("ISLAND_CONFIG_PATH", &config_path);
    });
}
