use guardrail::{
    coerce_int, coerce_int_checked, read_text, GuardrailError, LocalResource, ResourceReader,
};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_coercion_scenarios() {
    // Coercion("123") → success(123)
    assert_eq!(coerce_int(&json!("123")).unwrap(), 123);
    assert_eq!(coerce_int(&json!(45)).unwrap(), 45);

    // Coercion("abc") → failure(ConversionFailure)
    let err = coerce_int(&json!("abc")).unwrap_err();
    assert!(matches!(err, GuardrailError::ConversionFailure { .. }));
    assert!(err.to_string().contains("abc"));

    // None-like input is a failure too, never a placeholder zero
    assert!(coerce_int(&Value::Null).is_err());
}

#[test]
fn test_read_back_what_was_written() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("hello.txt");
    std::fs::write(&file_path, "hello").unwrap();

    let contents = read_text(file_path.to_str().unwrap()).unwrap();
    assert_eq!(contents, "hello");

    // Multi-line content round-trips byte for byte
    let long_path = temp_dir.path().join("long.txt");
    let text = "line one\nline two\n\nline four\n";
    std::fs::write(&long_path, text).unwrap();
    assert_eq!(read_text(long_path.to_str().unwrap()).unwrap(), text);
}

#[test]
fn test_missing_file_fails_with_the_path_in_the_message() {
    let err = read_text("nonexistent_file.txt").unwrap_err();
    match &err {
        GuardrailError::ResourceNotFound { path } => assert_eq!(path, "nonexistent_file.txt"),
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains("nonexistent_file.txt"));
    assert!(err.recovery_suggestion().contains("nonexistent_file.txt"));
}

#[test]
fn test_operations_are_idempotent_under_unchanged_state() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("stable.txt");
    std::fs::write(&file_path, "same contents").unwrap();
    let path = file_path.to_str().unwrap();

    assert_eq!(read_text(path).unwrap(), read_text(path).unwrap());

    let input = json!("77");
    assert_eq!(coerce_int(&input).unwrap(), coerce_int(&input).unwrap());

    let missing = read_text("still_missing.txt");
    let missing_again = read_text("still_missing.txt");
    assert!(missing.is_err());
    assert!(missing_again.is_err());
}

#[test]
fn test_reader_port_matches_free_function() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "via port").unwrap();

    let reader = LocalResource::with_base_path(temp_dir.path());
    assert_eq!(reader.read_text("input.txt").unwrap(), "via port");

    let err = reader.read_text("absent.txt").unwrap_err();
    assert!(matches!(err, GuardrailError::ResourceNotFound { .. }));
}

#[test]
fn test_both_coercion_strategies_share_one_contract() {
    let inputs = vec![
        json!("123"),
        json!("abc"),
        json!(45),
        Value::Null,
        json!(1.5),
        // one past i64::MAX; both strategies must reject it
        json!(9.223372036854776e18),
    ];

    for input in inputs {
        let attempt = coerce_int(&input);
        let checked = coerce_int_checked(&input);
        match (attempt, checked) {
            (Ok(a), Ok(c)) => assert_eq!(a, c),
            (Err(a), Err(c)) => {
                assert!(matches!(a, GuardrailError::ConversionFailure { .. }));
                assert!(matches!(c, GuardrailError::ConversionFailure { .. }));
            }
            (a, c) => panic!("strategies disagree on {:?}: {:?} vs {:?}", input, a, c),
        }
    }
}
