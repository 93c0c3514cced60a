//! Integration tests for the envelope codec.

use passkeep::crypto::{open, seal, Envelope};
use passkeep::errors::PassKeepError;
use serde_json::json;

// Low iteration count keeps the suite fast; the default 310k setting is
// covered by the CLI tests.
const TEST_ITERATIONS: u32 = 1_000;

fn sample_payload() -> serde_json::Value {
    json!({
        "entries": [],
        "meta": {
            "created_at": "2026-01-05T10:00:00+04:00",
            "updated_at": "2026-01-05T10:00:00+04:00",
            "default_password_length": 24
        }
    })
}

// ---------------------------------------------------------------------------
// The example scenario from the design: seal an empty vault, open it
// with the right and the wrong password.
// ---------------------------------------------------------------------------

#[test]
fn empty_vault_scenario() {
    let payload = sample_payload();
    let envelope = seal("StrongMaster!123", &payload, TEST_ITERATIONS).expect("seal");

    assert_eq!(envelope.version, 1);

    let restored: serde_json::Value = open("StrongMaster!123", &envelope).expect("open");
    assert_eq!(restored, payload);

    let wrong: Result<serde_json::Value, _> = open("WrongPassword", &envelope);
    assert!(matches!(wrong, Err(PassKeepError::Authentication)));
}

// ---------------------------------------------------------------------------
// Tamper detection: flipping any bit of the ciphertext or checksum must
// never return corrupted plaintext.
// ---------------------------------------------------------------------------

#[test]
fn bit_flips_in_ciphertext_are_always_detected() {
    let envelope = seal("StrongMaster!123", &sample_payload(), TEST_ITERATIONS).unwrap();

    for index in 0..envelope.cipher.payload.len() {
        let mut tampered = envelope.clone();
        tampered.cipher.payload[index] ^= 0x01;

        let result: Result<serde_json::Value, _> = open("StrongMaster!123", &tampered);
        assert!(
            matches!(
                result,
                Err(PassKeepError::Integrity(_)) | Err(PassKeepError::Authentication)
            ),
            "bit flip at byte {index} went undetected"
        );
    }
}

#[test]
fn checksum_tampering_is_detected() {
    let envelope = seal("StrongMaster!123", &sample_payload(), TEST_ITERATIONS).unwrap();

    let mut tampered = envelope.clone();
    // Replace the checksum with a valid-hex but wrong value.
    tampered.checksum = "00".repeat(32);

    let result: Result<serde_json::Value, _> = open("StrongMaster!123", &tampered);
    assert!(matches!(result, Err(PassKeepError::Integrity(_))));
}

// ---------------------------------------------------------------------------
// Round-trips over varied payloads and passwords
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_over_varied_payloads() {
    let payloads = vec![
        json!({}),
        json!({"entries": [{"service": "github", "username": "octocat"}]}),
        json!({"unicode": "pässwörd — ünïcode ✓", "n": 42}),
        json!({"nested": {"deeply": {"nested": [1, 2, 3]}}}),
    ];

    for payload in payloads {
        for password in ["a!b@c#d$", "correct horse battery staple", "日本語パスワード"] {
            let envelope = seal(password, &payload, TEST_ITERATIONS).expect("seal");
            let restored: serde_json::Value = open(password, &envelope).expect("open");
            assert_eq!(restored, payload);
        }
    }
}

#[test]
fn wrong_password_fails_for_every_payload() {
    let payloads = vec![json!({}), json!({"k": "v"})];

    for payload in payloads {
        let envelope = seal("the-real-password", &payload, TEST_ITERATIONS).unwrap();
        let result: Result<serde_json::Value, _> = open("not-the-password", &envelope);
        assert!(matches!(result, Err(PassKeepError::Authentication)));
    }
}

// ---------------------------------------------------------------------------
// The envelope survives its own JSON round-trip (what the store does)
// ---------------------------------------------------------------------------

#[test]
fn envelope_survives_json_roundtrip() {
    let envelope = seal("StrongMaster!123", &sample_payload(), TEST_ITERATIONS).unwrap();

    let serialized = serde_json::to_string_pretty(&envelope).unwrap();
    let parsed: Envelope = serde_json::from_str(&serialized).unwrap();

    let restored: serde_json::Value = open("StrongMaster!123", &parsed).expect("open");
    assert_eq!(restored, sample_payload());
}

#[test]
fn envelope_with_missing_field_does_not_parse() {
    let envelope = seal("StrongMaster!123", &sample_payload(), TEST_ITERATIONS).unwrap();

    let mut value = serde_json::to_value(&envelope).unwrap();
    value.as_object_mut().unwrap().remove("checksum");

    let result: Result<Envelope, _> = serde_json::from_value(value);
    assert!(result.is_err(), "envelope without checksum must not parse");
}

#[test]
fn envelope_with_bad_base64_does_not_parse() {
    let envelope = seal("StrongMaster!123", &sample_payload(), TEST_ITERATIONS).unwrap();

    let mut value = serde_json::to_value(&envelope).unwrap();
    value["kdf"]["salt"] = serde_json::Value::String("!!! not base64 !!!".into());

    let result: Result<Envelope, _> = serde_json::from_value(value);
    assert!(result.is_err(), "bad base64 salt must not parse");
}
