use std::collections::HashMap;

use async_trait::async_trait;
use candle_core::{D, DType, Device, IndexOp, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::application::ports::{SentimentClassifier, SentimentError};
use crate::domain::{SentimentLabel, SentimentPrediction};

/// Sequence-classification fields of a DistilBERT `config.json` that the
/// base model config does not carry.
#[derive(Deserialize)]
struct ClassifierHeadConfig {
    dim: usize,
    max_position_embeddings: usize,
    id2label: HashMap<String, String>,
}

/// DistilBERT fine-tuned for binary sentiment (SST-2), run locally on Candle.
pub struct LocalCandleSentimentClassifier {
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    labels: Vec<SentimentLabel>,
    device: Device,
}

impl LocalCandleSentimentClassifier {
    pub fn new(model_id: &str) -> Result<Self, SentimentError> {
        let device = Self::select_device();

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing local Candle sentiment model"
        );

        let api = Api::new().map_err(|e| SentimentError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| SentimentError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| SentimentError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| SentimentError::ModelLoadFailed(format!("model.safetensors: {}", e)))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SentimentError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: DistilBertConfig = serde_json::from_str(&config_contents)
            .map_err(|e| SentimentError::ModelLoadFailed(format!("parse config: {}", e)))?;
        let head: ClassifierHeadConfig = serde_json::from_str(&config_contents)
            .map_err(|e| SentimentError::ModelLoadFailed(format!("parse head config: {}", e)))?;
        let labels = Self::ordered_labels(&head.id2label)?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| SentimentError::ModelLoadFailed(format!("tokenizer: {}", e)))?;
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: head.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| SentimentError::ModelLoadFailed(format!("truncation config: {}", e)))?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| SentimentError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = DistilBertModel::load(vb.pp("distilbert"), &config)
            .map_err(|e| SentimentError::ModelLoadFailed(format!("model: {}", e)))?;
        let pre_classifier = candle_nn::linear(head.dim, head.dim, vb.pp("pre_classifier"))
            .map_err(|e| SentimentError::ModelLoadFailed(format!("pre_classifier: {}", e)))?;
        let classifier = candle_nn::linear(head.dim, labels.len(), vb.pp("classifier"))
            .map_err(|e| SentimentError::ModelLoadFailed(format!("classifier: {}", e)))?;

        tracing::info!(labels = labels.len(), "Local Candle sentiment model loaded");

        Ok(Self {
            model,
            pre_classifier,
            classifier,
            tokenizer,
            labels,
            device,
        })
    }

    fn select_device() -> Device {
        Device::new_metal(0).unwrap_or(Device::Cpu)
    }

    /// Orders labels by class index so they line up with the logits.
    fn ordered_labels(
        id2label: &HashMap<String, String>,
    ) -> Result<Vec<SentimentLabel>, SentimentError> {
        let mut indexed = id2label
            .iter()
            .map(|(id, label)| {
                let index = id.parse::<usize>().map_err(|_| {
                    SentimentError::ModelLoadFailed(format!("non-numeric label id: {}", id))
                })?;
                let label = label
                    .parse::<SentimentLabel>()
                    .map_err(SentimentError::ModelLoadFailed)?;
                Ok((index, label))
            })
            .collect::<Result<Vec<_>, SentimentError>>()?;

        if indexed.is_empty() {
            return Err(SentimentError::ModelLoadFailed(
                "model config has no id2label mapping".to_string(),
            ));
        }

        indexed.sort_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, label)| label).collect())
    }

    fn predict(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| SentimentError::InferenceFailed(format!("tokenization: {}", e)))?;

        let ids = encoding.get_ids();
        let seq_len = ids.len();

        let input_ids = Tensor::new(ids, &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| SentimentError::InferenceFailed(e.to_string()))?;
        // Single unpadded sequence: nothing is masked out.
        let attention_mask = Tensor::zeros((seq_len, seq_len), DType::U8, &self.device)
            .map_err(|e| SentimentError::InferenceFailed(e.to_string()))?;

        let hidden = self
            .model
            .forward(&input_ids, &attention_mask)
            .map_err(|e| SentimentError::InferenceFailed(e.to_string()))?;

        let probabilities = hidden
            .i((.., 0))
            .and_then(|cls| self.pre_classifier.forward(&cls))
            .and_then(|t| t.relu())
            .and_then(|t| self.classifier.forward(&t))
            .and_then(|logits| candle_nn::ops::softmax(&logits, D::Minus1))
            .and_then(|p| p.squeeze(0))
            .and_then(|p| p.to_vec1::<f32>())
            .map_err(|e| SentimentError::InferenceFailed(e.to_string()))?;

        let (best, confidence) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| SentimentError::InvalidPrediction("empty logits".to_string()))?;

        let label = self.labels.get(best).copied().ok_or_else(|| {
            SentimentError::InvalidPrediction(format!("class index {} has no label", best))
        })?;

        Ok(SentimentPrediction::new(label, f64::from(*confidence)))
    }
}

#[async_trait]
impl SentimentClassifier for LocalCandleSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        self.predict(text)
    }
}
