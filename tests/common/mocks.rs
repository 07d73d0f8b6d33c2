use async_trait::async_trait;
use playground_rust::{
    Error, Result,
    inference::{ChatPayload, ImagePayload, InferenceClient},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded invocation of the mock capability: the model identifier and
/// the serialized wire payload (`{"messages": ...}` or `{"prompt": ...}`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub inputs: Value,
}

/// Mock inference capability for testing. Records every call and drains
/// queued results in order.
#[derive(Debug)]
pub struct MockInferenceClient {
    pub chat_results: Arc<Mutex<Vec<Value>>>,
    pub image_results: Arc<Mutex<Vec<Vec<u8>>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            chat_results: Arc::new(Mutex::new(Vec::new())),
            image_results: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_chat_result(self, result: Value) -> Self {
        self.chat_results.lock().unwrap().push(result);
        self
    }

    pub fn with_image_result(self, image: Vec<u8>) -> Self {
        self.image_results.lock().unwrap().push(image);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, model: &str, inputs: Value) {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            inputs,
        });
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn run_chat(&self, model: &str, payload: ChatPayload) -> Result<Value> {
        self.record(model, serde_json::to_value(&payload).unwrap());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut results = self.chat_results.lock().unwrap();
        if results.is_empty() {
            return Err(Error::inference("No more mock results available"));
        }

        Ok(results.remove(0))
    }

    async fn run_image(&self, model: &str, payload: ImagePayload) -> Result<Vec<u8>> {
        self.record(model, serde_json::to_value(&payload).unwrap());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut results = self.image_results.lock().unwrap();
        if results.is_empty() {
            return Err(Error::inference("No more mock results available"));
        }

        Ok(results.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
