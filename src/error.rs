//! Error type for the browser host.

use wasm_bindgen::JsValue;

/// Failures surfaced while touching the DOM or reading page configuration.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A browser API threw. The payload is the debug rendering of the thrown value.
    #[error("browser call failed: {0}")]
    Js(String),
    /// `window`, `document`, or `document.body` is not available.
    #[error("missing browser global: {0}")]
    MissingGlobal(&'static str),
    /// A created or queried node was not of the expected DOM type.
    #[error("unexpected node type, wanted {0}")]
    UnexpectedNode(&'static str),
    /// [`mount`](crate::mount) was called after the page was already claimed.
    #[error("page already mounted")]
    AlreadyMounted,
    /// The `#site-config` block is not valid configuration JSON.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
