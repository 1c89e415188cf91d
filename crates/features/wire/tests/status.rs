use rorg_domain::ApiKeyStatus;
use rorg_wire::{API_KEY_STATUS, WireError, WireValue, parse_api_key_status};

#[test]
fn exact_literals_map_to_variants() {
    assert_eq!(parse_api_key_status("stopped").unwrap(), ApiKeyStatus::Stopped);
    assert_eq!(parse_api_key_status("running").unwrap(), ApiKeyStatus::Running);
}

#[test]
fn anything_else_is_an_unsupported_value() {
    for token in ["Running", "", "paused", "STOPPED", " running", "running\n"] {
        match parse_api_key_status(token) {
            Err(WireError::UnsupportedValue { kind, value, .. }) => {
                assert_eq!(kind, API_KEY_STATUS);
                assert_eq!(value, token);
            },
            other => panic!("expected an unsupported value error for {token:?}, got {other:?}"),
        }
    }
}

#[test]
fn unsupported_value_is_not_a_format_error() {
    let err = parse_api_key_status("paused").unwrap_err();
    assert!(!matches!(err, WireError::Format { .. }));
}

#[test]
fn wire_value_trait_round_trips_status() {
    for status in [ApiKeyStatus::Stopped, ApiKeyStatus::Running] {
        assert_eq!(ApiKeyStatus::from_wire(&status.to_wire()).unwrap(), status);
    }
}

#[derive(Debug, serde::Deserialize)]
struct KeyRow {
    #[serde(with = "rorg_wire::with::api_key_status")]
    status: ApiKeyStatus,
}

#[test]
fn embedded_status_decodes_through_the_wire_parser() {
    let row: KeyRow = serde_json::from_str(r#"{"status":"stopped"}"#).unwrap();
    assert_eq!(row.status, ApiKeyStatus::Stopped);

    let err = serde_json::from_str::<KeyRow>(r#"{"status":"Running"}"#).unwrap_err();
    assert!(err.to_string().contains("Unsupported api key status value: 'Running'"), "{err}");
}
