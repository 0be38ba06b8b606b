use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{0} map has no container element")]
    MissingContainer(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid compare options: {0}")]
    Options(#[from] serde_json::Error),
}

impl From<JsValue> for CompareError {
    fn from(value: JsValue) -> Self {
        CompareError::Dom(format!("{:?}", value))
    }
}
