// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| vars.get(key).cloned()
}

fn platform() -> Option<PathBuf> {
    Some(PathBuf::from("/platform/data"))
}

#[test]
fn defaults_without_any_input() {
    let settings = resolve_with(&Overrides::default(), env(&[]), platform).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from("/platform/data/cellar"));
    assert_eq!(settings.owner, OwnerId::new(DEFAULT_OWNER));
    assert_eq!(settings.store, StoreConfig::default());
    assert_eq!(settings.source, None);
    assert_eq!(settings.log_filter(env(&[])), "warn");
}

#[test]
fn missing_platform_dir_needs_an_explicit_one() {
    let err = resolve_with(&Overrides::default(), env(&[]), || None).unwrap_err();
    assert!(matches!(err, ConfigError::NoDataDir));
}

#[test]
fn reads_cellar_toml_from_the_data_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
owner = "distillery-7"

[store]
lock_timeout = "250ms"

[log]
level = "debug"
"#,
    )
    .unwrap();

    let overrides = Overrides {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let settings = resolve_with(&overrides, env(&[]), platform).unwrap();

    assert_eq!(settings.data_dir, dir.path());
    assert_eq!(settings.owner, OwnerId::new("distillery-7"));
    assert_eq!(settings.store.lock_timeout, Duration::from_millis(250));
    assert_eq!(settings.log_filter(env(&[])), "debug");
    assert_eq!(settings.log_filter(env(&[(ENV_LOG, "trace")])), "trace");
    assert_eq!(settings.source, Some(dir.path().join(CONFIG_FILE)));
}

#[test]
fn flags_beat_environment_beats_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "owner = \"from-file\"\ndata_dir = \"/from/file\"\n").unwrap();

    let overrides = Overrides {
        config: Some(config.clone()),
        ..Default::default()
    };
    let settings = resolve_with(&overrides, env(&[]), platform).unwrap();
    assert_eq!(settings.owner, OwnerId::new("from-file"));
    assert_eq!(settings.data_dir, PathBuf::from("/from/file"));

    let vars = env(&[(ENV_OWNER, "from-env"), (ENV_DATA_DIR, "/from/env")]);
    let settings = resolve_with(&overrides, vars, platform).unwrap();
    assert_eq!(settings.owner, OwnerId::new("from-env"));
    assert_eq!(settings.data_dir, PathBuf::from("/from/env"));

    let overrides = Overrides {
        config: Some(config),
        data_dir: Some(PathBuf::from("/from/flag")),
        owner: Some("from-flag".to_string()),
    };
    let vars = env(&[(ENV_OWNER, "from-env"), (ENV_DATA_DIR, "/from/env")]);
    let settings = resolve_with(&overrides, vars, platform).unwrap();
    assert_eq!(settings.owner, OwnerId::new("from-flag"));
    assert_eq!(settings.data_dir, PathBuf::from("/from/flag"));
}

#[test]
fn config_env_var_names_the_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("elsewhere.toml");
    std::fs::write(&config, "owner = \"env-file\"\n").unwrap();

    let config_str = config.to_string_lossy().to_string();
    let settings =
        resolve_with(&Overrides::default(), env(&[(ENV_CONFIG, &config_str)]), platform).unwrap();
    assert_eq!(settings.owner, OwnerId::new("env-file"));
}

#[test]
fn explicit_config_must_exist() {
    let overrides = Overrides {
        config: Some(PathBuf::from("/nonexistent/cellar.toml")),
        ..Default::default()
    };
    let err = resolve_with(&overrides, env(&[]), platform).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join(CONFIG_FILE);
    std::fs::write(&config, "ownr = \"typo\"\n").unwrap();

    let err = load(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
    assert!(err.to_string().contains("ownr"));
}

#[test]
fn lock_file_lives_in_the_data_dir() {
    let overrides = Overrides {
        data_dir: Some(PathBuf::from("/var/cellar")),
        ..Default::default()
    };
    let settings = resolve_with(&overrides, env(&[]), platform).unwrap();
    assert_eq!(settings.lock_path(), PathBuf::from("/var/cellar/cellar.lock"));
}
