//! Setup errors raised while binding behaviors to the page.
//!
//! Only construction can fail: once every behavior is attached, failures inside
//! event callbacks are logged and dropped because there is no caller left to
//! report them to.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// Not running inside a browser window.
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    /// A collaborator the page markup must provide is absent.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    /// The element exists but is not the expected DOM interface.
    #[error("element {selector} is not a {expected}")]
    WrongElement { selector: String, expected: &'static str },

    /// A web API call rejected during setup.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl BindError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
