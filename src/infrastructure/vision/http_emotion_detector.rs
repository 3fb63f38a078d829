use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use image::{ImageFormat, RgbImage};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{EmotionDetectionError, EmotionDetector};
use crate::domain::{EmotionDistribution, EmotionLabel};

/// Client for a remote facial-emotion service.
///
/// Request: `POST {base_url}/detect` with `{"image": "<base64 png>"}`.
/// Response: `{"faces": [{"box": [x, y, w, h], "emotions": {"happy": 0.9, ...}}]}`,
/// faces ordered by detection confidence.
pub struct HttpEmotionDetector {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct DetectRequest {
    image: String,
}

#[derive(Deserialize)]
struct DetectResponse {
    #[serde(default)]
    faces: Vec<DetectedFace>,
}

#[derive(Deserialize)]
struct DetectedFace {
    #[serde(rename = "box", default)]
    _bounding_box: Option<[i64; 4]>,
    emotions: HashMap<String, f64>,
}

impl HttpEmotionDetector {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, EmotionDetectionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmotionDetectionError::Misconfigured(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn encode_png(frame: &RgbImage) -> Result<String, EmotionDetectionError> {
        let mut png = Vec::new();
        frame
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| EmotionDetectionError::EncodingFailed(e.to_string()))?;
        Ok(general_purpose::STANDARD.encode(png))
    }

    fn to_distribution(face: DetectedFace) -> EmotionDistribution {
        face.emotions
            .into_iter()
            .filter_map(|(label, probability)| match label.parse::<EmotionLabel>() {
                Ok(label) => Some((label, probability)),
                Err(_) => {
                    tracing::debug!(label = %label, "Ignoring unknown emotion label");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl EmotionDetector for HttpEmotionDetector {
    async fn detect_emotions(
        &self,
        frame: &RgbImage,
    ) -> Result<Vec<EmotionDistribution>, EmotionDetectionError> {
        let url = format!("{}/detect", self.base_url);
        let request_body = DetectRequest {
            image: Self::encode_png(frame)?,
        };

        tracing::debug!(
            width = frame.width(),
            height = frame.height(),
            "Sending frame to emotion service"
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmotionDetectionError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmotionDetectionError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let detect_response: DetectResponse = response
            .json()
            .await
            .map_err(|e| EmotionDetectionError::InvalidResponse(e.to_string()))?;

        Ok(detect_response
            .faces
            .into_iter()
            .map(Self::to_distribution)
            .collect())
    }
}
