use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,
    #[error("copy command was rejected")]
    CopyRejected,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
