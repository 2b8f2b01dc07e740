//! Settings store round-trip and fallback behavior

use lexiband::config::Config;
use lexiband::providers::Provider;
use std::fs;
use tempfile::TempDir;

fn temp_config_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_config_path(&dir);

    let mut config = Config::default();
    config.set_active_provider(Provider::DeepSeek);
    config.provider_config_mut(Provider::DeepSeek).api_key = "sk-test".to_string();
    config.provider_config_mut(Provider::DeepSeek).model = "deepseek-reasoner".to_string();
    config.save_to(&path).expect("Failed to save config");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_empty_api_key_survives_round_trip() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_config_path(&dir);

    // An unconfigured provider keeps its empty key through persistence
    let config = Config::default();
    assert!(!config.provider_config(Provider::Moonshot).has_api_key());
    config.save_to(&path).expect("Failed to save config");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.provider_config(Provider::Moonshot).api_key, "");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let loaded = Config::load_from(&dir.path().join("does-not-exist.toml"));
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_config_path(&dir);
    fs::write(&path, "default_provider = [this is not toml").expect("Failed to write file");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_provider_only_file_keeps_the_choice() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_config_path(&dir);
    fs::write(&path, "default_provider = \"openai\"\n").expect("Failed to write file");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.active_provider(), Provider::OpenAI);
}

#[test]
fn test_partial_file_is_merged_over_defaults() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_config_path(&dir);
    fs::write(
        &path,
        "default_provider = \"moonshot\"\n\n[providers.moonshot]\napi_key = \"mk-1\"\n",
    )
    .expect("Failed to write file");

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.active_provider(), Provider::Moonshot);
    assert_eq!(loaded.provider_config(Provider::Moonshot).api_key, "mk-1");
    // Entries for the other providers are filled in with defaults
    assert_eq!(
        loaded.provider_config(Provider::Google).model,
        "gemini-2.5-flash"
    );
}
