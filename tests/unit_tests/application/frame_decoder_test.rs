use interviewer::application::services::decode_frame;

use crate::support::png_base64;

#[test]
fn given_plain_base64_png_when_decoding_then_pixels_are_returned() {
    let frame = decode_frame(&png_base64(4, 3)).expect("frame should decode");

    assert_eq!(frame.dimensions(), (4, 3));
}

#[test]
fn given_data_uri_when_decoding_then_prefix_is_stripped() {
    let encoded = format!("data:image/png;base64,{}", png_base64(2, 2));

    let frame = decode_frame(&encoded).expect("frame should decode");

    assert_eq!(frame.dimensions(), (2, 2));
}

#[test]
fn given_empty_or_blank_input_when_decoding_then_none() {
    assert!(decode_frame("").is_none());
    assert!(decode_frame("   ").is_none());
}

#[test]
fn given_invalid_base64_when_decoding_then_none() {
    assert!(decode_frame("%%% not base64 %%%").is_none());
}

#[test]
fn given_base64_of_non_image_when_decoding_then_none() {
    // "hello world"
    assert!(decode_frame("aGVsbG8gd29ybGQ=").is_none());
}

#[test]
fn given_data_uri_without_payload_when_decoding_then_none() {
    assert!(decode_frame("data:image/jpeg;base64").is_none());
}
