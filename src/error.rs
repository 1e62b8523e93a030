#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The render sink has no element for this thing; the stage was set up wrong.
    #[error("no element for thing {id}")]
    MissingElement { id: usize },
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for StageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
