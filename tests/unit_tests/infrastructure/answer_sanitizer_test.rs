use interviewer::infrastructure::observability::sanitize_answer;

#[test]
fn given_blank_answer_when_sanitized_then_placeholder() {
    assert_eq!(sanitize_answer("   "), "[EMPTY]");
}

#[test]
fn given_plain_answer_when_sanitized_then_unchanged() {
    assert_eq!(
        sanitize_answer("  I led the migration to Rust  "),
        "I led the migration to Rust"
    );
}

#[test]
fn given_contact_details_when_sanitized_then_masked() {
    let sanitized = sanitize_answer("Reach me at jane.doe@example.com or +1 5551234567 anytime");

    assert_eq!(sanitized, "Reach me at [EMAIL] or +1 [NUMBER] anytime");
}

#[test]
fn given_short_numbers_when_sanitized_then_kept() {
    assert_eq!(sanitize_answer("I spent 3 years on 2 teams"), "I spent 3 years on 2 teams");
}

#[test]
fn given_long_answer_when_sanitized_then_truncated_with_total() {
    let answer = "a".repeat(150);

    let sanitized = sanitize_answer(&answer);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}
