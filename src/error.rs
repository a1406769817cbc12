//! Errors for the few fallible edges of the crate.
//!
//! Rendering never fails. Only reading a submitted form back out of the
//! DOM, parsing a JSON form declaration, and compiling a `pattern` for the
//! offline validity check can go wrong.

use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FormError {
    /// A DOM call threw or returned an unexpected value.
    #[error("DOM error: {message}")]
    Js { message: String },

    /// A JSON form declaration could not be parsed.
    #[error("invalid form declaration: {0}")]
    Config(#[from] serde_json::Error),

    /// A `pattern` attribute is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Strict parse of an input `type` that no native element supports.
    #[error("unsupported input type `{0}`")]
    UnknownKind(String),
}

/// Shape of a thrown `DOMException` / `Error` once it crosses into Rust.
#[derive(Deserialize)]
struct JsErrorShape {
    message: String,
}

/// Convert any caught `JsValue` into a `FormError` with best effort.
pub(crate) fn js_to_form_error(value: JsValue) -> FormError {
    let message = from_value::<JsErrorShape>(value.clone())
        .map(|shape| shape.message)
        .unwrap_or_else(|_| value.as_string().unwrap_or_else(|| format!("{:?}", value)));
    FormError::Js { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_the_serde_message() {
        let err: FormError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid form declaration"));
    }

    #[test]
    fn unknown_kind_names_the_value() {
        let err = FormError::UnknownKind("slider".into());
        assert_eq!(err.to_string(), "unsupported input type `slider`");
    }
}
