//! Tests for the environment layer of configuration loading.

use blogsmith::AppConfig;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

const VARS: [&str; 5] = [
    "BLOGSMITH_BIND",
    "BLOGSMITH_MODEL_PATH",
    "INFERENCE_SERVER_BASE_URL",
    "INFERENCE_SERVER_MODEL",
    "INFERENCE_SERVER_API_KEY",
];

// Tests in this file share the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Lock the environment and set exactly `vars` among the config variables.
fn with_env(vars: &[(&str, &str)]) -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for name in VARS {
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe { std::env::remove_var(name) };
    }
    for (name, value) in vars {
        // SAFETY: as above.
        unsafe { std::env::set_var(name, value) };
    }
    guard
}

fn config_file() -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"
bind = "127.0.0.1:3000"

[model]
path = "file.bin"

[inference]
base_url = "http://127.0.0.1:7000"
model = "from-file"
"#
    )?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_file_values_survive_without_env() -> Result<(), Box<dyn std::error::Error>> {
    let file = config_file()?;
    let _env = with_env(&[]);
    let config = AppConfig::load(Some(file.path()))?;
    assert_eq!(config.bind(), "127.0.0.1:3000");
    assert_eq!(config.model().spec().path(), &PathBuf::from("file.bin"));
    assert_eq!(config.inference().base_url(), "http://127.0.0.1:7000");
    assert_eq!(config.inference().model().as_deref(), Some("from-file"));
    Ok(())
}

#[test]
fn test_env_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = config_file()?;
    let _env = with_env(&[
        ("BLOGSMITH_BIND", "127.0.0.1:4000"),
        ("BLOGSMITH_MODEL_PATH", "env.bin"),
        ("INFERENCE_SERVER_BASE_URL", "http://127.0.0.1:9999"),
        ("INFERENCE_SERVER_API_KEY", "secret"),
    ]);
    let config = AppConfig::load(Some(file.path()))?;
    assert_eq!(config.bind(), "127.0.0.1:4000");
    assert_eq!(config.model().spec().path(), &PathBuf::from("env.bin"));
    assert_eq!(config.inference().base_url(), "http://127.0.0.1:9999");
    assert_eq!(config.inference().model().as_deref(), Some("from-file"));
    assert_eq!(config.inference().api_key().as_deref(), Some("secret"));
    Ok(())
}

#[test]
fn test_cli_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    let file = config_file()?;
    let _env = with_env(&[
        ("BLOGSMITH_BIND", "127.0.0.1:4000"),
        ("BLOGSMITH_MODEL_PATH", "env.bin"),
    ]);
    let config = AppConfig::load(Some(file.path()))?
        .with_overrides(Some("127.0.0.1:5000".to_string()), Some(PathBuf::from("cli.bin")))?;
    assert_eq!(config.bind_addr()?.port(), 5000);
    assert_eq!(config.model().spec().path(), &PathBuf::from("cli.bin"));
    Ok(())
}

#[test]
fn test_env_applies_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let _env = with_env(&[("BLOGSMITH_MODEL_PATH", "env.bin")]);
    let config = AppConfig::load(None)?;
    assert_eq!(config.bind(), "127.0.0.1:8501");
    assert_eq!(config.model().spec().path(), &PathBuf::from("env.bin"));
    assert_eq!(config.model().spec().model_type(), "llama");
    Ok(())
}

#[test]
fn test_invalid_env_bind_rejected() {
    let _env = with_env(&[("BLOGSMITH_BIND", "not-an-address")]);
    assert!(AppConfig::load(None).is_err());
}
