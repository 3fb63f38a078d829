const MAX_VISIBLE_CHARS: usize = 100;
const MIN_DIGITS_FOR_NUMBER: usize = 7;

/// Candidate answers can contain contact details; logs get a truncated copy
/// with email addresses and long digit runs (phone numbers, IDs) masked.
pub fn sanitize_answer(answer: &str) -> String {
    let trimmed = answer.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = trimmed
        .split_whitespace()
        .map(redact_word)
        .collect::<Vec<_>>()
        .join(" ");

    let total_chars = redacted.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        redacted
    }
}

fn redact_word(word: &str) -> &str {
    if word.contains('@') && word.contains('.') {
        return "[EMAIL]";
    }

    let digits = word.chars().filter(char::is_ascii_digit).count();
    if digits >= MIN_DIGITS_FOR_NUMBER {
        return "[NUMBER]";
    }

    word
}
