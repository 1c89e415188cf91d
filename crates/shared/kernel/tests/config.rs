use rorg_domain::config::SdkConfig;
use rorg_kernel::config::{ConfigError, ConfigLoader, load_config};
use std::fs;
use tempfile::tempdir;

const TOML: &str = r#"
locale = "uk"

[client]
timeout_seconds = 10

[wire]
fraction_digits = 6
variable_fraction = false
"#;

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("rorg.toml");
    fs::write(&path, TOML)?;

    let cfg: SdkConfig =
        ConfigLoader::new().path(&path).env_vars(Vec::<(String, String)>::new()).load()?;

    assert_eq!(cfg.locale, "uk");
    assert_eq!(cfg.client.timeout_seconds, 10);
    assert_eq!(cfg.client.endpoint, "https://api.random.org/json-rpc/4/invoke");
    assert!(!cfg.wire.variable_fraction);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("rorg.toml");
    fs::write(&path, TOML)?;

    let cfg: SdkConfig = ConfigLoader::new()
        .path(&path)
        .env_vars([
            ("RORG__WIRE__FRACTION_DIGITS", "3"),
            ("RORG__LOCALE", "de"),
            ("OTHER__LOCALE", "fr"),
        ])
        .load()?;

    assert_eq!(cfg.wire.fraction_digits, 3);
    assert_eq!(cfg.locale, "de");
    assert_eq!(cfg.client.timeout_seconds, 10);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_config::<SdkConfig>(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn mismatched_types_are_reported_with_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("rorg.toml");
    fs::write(&path, "[wire]\nfraction_digits = \"many\"\n")?;

    let err = ConfigLoader::new()
        .path(&path)
        .env_vars(Vec::<(String, String)>::new())
        .load::<SdkConfig>()
        .unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
    Ok(())
}
