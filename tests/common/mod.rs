use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn hiersel() -> Command {
    let mut cmd = cargo_bin_cmd!("hiersel");
    // Keep the per-user config out of the picture.
    cmd.env("HIERSEL_CONFIG_DIR", std::env::temp_dir().join("hiersel-tests-no-config"));
    cmd.env_remove("HIERSEL_CONFIG");
    cmd
}

#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
