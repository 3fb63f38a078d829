use interviewer::presentation::handlers::{InterviewRequest, parse_request};

#[test]
fn given_mistyped_image_when_parsed_then_other_fields_are_kept() {
    let request = parse_request(
        br#"{"session_id":"0b6c0f8e-1d7a-4c1e-9f3a-6a2d9b1e5c01","answer":"I led the migration","image":42}"#,
    );

    assert_eq!(
        request.session_id.as_deref(),
        Some("0b6c0f8e-1d7a-4c1e-9f3a-6a2d9b1e5c01")
    );
    assert_eq!(request.answer.as_deref(), Some("I led the migration"));
    assert_eq!(request.image, None);
    assert!(!request.reset);
}

#[test]
fn given_string_or_numeric_reset_when_parsed_then_read_as_flag() {
    assert!(parse_request(br#"{"reset":"true"}"#).reset);
    assert!(parse_request(br#"{"reset":1}"#).reset);
    assert!(!parse_request(br#"{"reset":"false"}"#).reset);
    assert!(!parse_request(br#"{"reset":0}"#).reset);
    assert!(!parse_request(br#"{"reset":null}"#).reset);
}

#[test]
fn given_non_string_answer_when_parsed_then_answer_is_missing() {
    let request = parse_request(br#"{"answer":["a","b"],"reset":true}"#);

    assert_eq!(request.answer, None);
    assert!(request.reset);
}

#[test]
fn given_non_object_body_when_parsed_then_empty_request() {
    assert_eq!(parse_request(b"[1, 2, 3]"), InterviewRequest::default());
    assert_eq!(parse_request(b"\"reset\""), InterviewRequest::default());
}

#[test]
fn given_invalid_json_or_blank_body_when_parsed_then_empty_request() {
    assert_eq!(parse_request(b"{ not json"), InterviewRequest::default());
    assert_eq!(parse_request(b"  \n "), InterviewRequest::default());
}
