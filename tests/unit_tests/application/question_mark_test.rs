use interviewer::application::ports::QuestionGenerationError;
use interviewer::application::services::ensure_question_mark;

#[test]
fn given_question_without_mark_when_normalized_then_mark_is_appended() {
    assert_eq!(
        ensure_question_mark("What did you learn").unwrap(),
        "What did you learn?"
    );
}

#[test]
fn given_question_with_mark_when_normalized_then_unchanged() {
    assert_eq!(
        ensure_question_mark("  Why Rust?  ").unwrap(),
        "Why Rust?"
    );
}

#[test]
fn given_blank_question_when_normalized_then_empty_question_error() {
    let err = ensure_question_mark(" \n ").unwrap_err();

    assert!(matches!(err, QuestionGenerationError::EmptyQuestion));
}
