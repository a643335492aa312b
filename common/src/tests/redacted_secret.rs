use crate::RedactedSecret;

/// **VALUE**: Verifies passwords never appear in Debug or Display output.
///
/// **WHY THIS MATTERS**: Form structs are logged with `{:?}` on failure paths. A leaked
/// password in `news.log` is a security incident.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_secret_when_formatted_then_value_is_hidden() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("hunter22");

    // WHEN: Formatting both ways
    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    // THEN: Neither contains the value
    assert!(!debug.contains("hunter22"));
    assert!(!display.contains("hunter22"));
    assert_eq!(secret.expose(), "hunter22");
    assert_eq!(secret.len(), 8);
}

/// **VALUE**: Verifies serde serialization is refused.
///
/// **WHY THIS MATTERS**: A struct holding a password must not be dumped to JSON by accident.
///
/// **BUG THIS CATCHES**: Would catch a derived Serialize replacing the refusing impl.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    let secret = RedactedSecret::new("hunter22");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err(), "Serialization should be refused");
    assert!(!result.unwrap_err().to_string().contains("hunter22"));
}
