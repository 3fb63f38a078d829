use base64::{Engine as _, engine::general_purpose};
use image::RgbImage;

/// Decodes a base64 frame, optionally wrapped in a `data:<mime>;base64,` URI,
/// into RGB pixels. Any failure yields `None`; callers treat it as "no frame".
pub fn decode_frame(encoded: &str) -> Option<RgbImage> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return None;
    }

    let payload = if trimmed.starts_with("data:") {
        match trimmed.split_once(',') {
            Some((_, payload)) => payload,
            None => {
                tracing::debug!("Frame data URI has no payload");
                return None;
            }
        }
    } else {
        trimmed
    };

    let bytes = match general_purpose::STANDARD.decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Frame is not valid base64");
            return None;
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(frame) => Some(frame.to_rgb8()),
        Err(e) => {
            tracing::debug!(error = %e, bytes = bytes.len(), "Frame could not be decoded");
            None
        }
    }
}
