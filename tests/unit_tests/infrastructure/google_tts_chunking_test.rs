use interviewer::infrastructure::audio::{MAX_CHUNK_CHARS, split_into_chunks};

#[test]
fn given_empty_text_when_chunking_then_no_chunks() {
    assert!(split_into_chunks("", MAX_CHUNK_CHARS).is_empty());
    assert!(split_into_chunks("   ", MAX_CHUNK_CHARS).is_empty());
}

#[test]
fn given_short_text_when_chunking_then_single_chunk() {
    assert_eq!(
        split_into_chunks("Tell me about yourself.", MAX_CHUNK_CHARS),
        vec!["Tell me about yourself."]
    );
}

#[test]
fn given_text_over_limit_when_chunking_then_split_on_word_boundaries() {
    let chunks = split_into_chunks("one two three four", 9);

    assert_eq!(chunks, vec!["one two", "three", "four"]);
}

#[test]
fn given_word_longer_than_limit_when_chunking_then_word_is_cut() {
    let chunks = split_into_chunks("hi abcdefghij ok", 4);

    assert_eq!(chunks, vec!["hi", "abcd", "efgh", "ij", "ok"]);
}

#[test]
fn given_greeting_when_chunking_then_every_chunk_fits_and_text_survives() {
    let text = "Hello interviewee. I am your AI interviewer. Let us begin. Tell me about yourself. \
                We will go through five questions together today.";

    let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);

    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_CHARS));
    assert_eq!(
        chunks.join(" "),
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    );
}
