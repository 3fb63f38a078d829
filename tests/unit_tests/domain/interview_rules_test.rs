use interviewer::domain::{DEFAULT_MAX_TURNS, InterviewRules, OPENING_QUESTION, Performance};

#[test]
fn given_default_rules_when_reading_then_five_turns_are_allowed() {
    let rules = InterviewRules::default();

    assert_eq!(rules.max_turns, DEFAULT_MAX_TURNS);
    assert_eq!(rules.max_turns, 5);
    assert_eq!(rules.opening_question, OPENING_QUESTION);
}

#[test]
fn given_default_rules_when_announcing_opening_then_greeting_precedes_question() {
    let rules = InterviewRules::default();

    assert_eq!(
        rules.opening_announcement(),
        "Hello interviewee. I am your AI interviewer. Let us begin. Tell me about yourself."
    );
}

#[test]
fn given_summary_when_announcing_completion_then_score_and_band_are_spoken() {
    let rules = InterviewRules::default();

    assert_eq!(
        rules.completion_announcement(0.31, Performance::Good),
        "Your interview is complete. Your average score is 0.31. Overall performance is Good."
    );
}
