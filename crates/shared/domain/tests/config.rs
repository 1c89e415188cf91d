use rorg_domain::config::{ClientConfig, SdkConfig, WireConfig};
use rorg_domain::constants::DEFAULT_ENDPOINT;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let client = ClientConfig::default();
    assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(client.timeout_seconds, 30);
    assert!(client.api_key.is_none());

    let wire = WireConfig::default();
    assert_eq!(wire.fraction_digits, 6);
    assert!(wire.variable_fraction);

    let cfg = SdkConfig::default();
    assert_eq!(cfg.locale, "en");
}

#[test]
fn sdk_config_deserializes_partial_input() {
    let raw = json!({
        "client": { "api_key": "00000000-0000-0000-0000-000000000000" },
        "wire": { "fraction_digits": 3, "variable_fraction": false },
        "locale": "uk-UA"
    });

    let cfg: SdkConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.client.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.client.api_key.as_deref(), Some("00000000-0000-0000-0000-000000000000"));
    assert_eq!(cfg.wire.fraction_digits, 3);
    assert!(!cfg.wire.variable_fraction);
    assert_eq!(cfg.locale, "uk-UA");
}

#[test]
fn deref_mut_detaches_clones() {
    let original = SdkConfig::default();
    let mut edited = original.clone();
    edited.locale = "de".to_owned();

    assert_eq!(original.locale, "en");
    assert_eq!(edited.locale, "de");
}
