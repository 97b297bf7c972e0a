use serde::{Deserialize, Serialize};
use std::{error::Error, fmt::Display};

/// TODO: there is a wasm_bindgen::JsError coming up. Once it lands, this class should no longer be required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsError {
    pub description: String,
}

impl Error for JsError {}

impl Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.description))
    }
}

impl From<wasm_bindgen::JsValue> for JsError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        Self {
            description: val
                .as_string()
                .unwrap_or_else(|| String::from("unknown JS error")),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for JsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for JsError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<std::num::ParseFloatError> for JsError {
    fn from(err: std::num::ParseFloatError) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<&str> for JsError {
    fn from(str: &str) -> Self {
        Self {
            description: String::from(str),
        }
    }
}
