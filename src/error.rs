use std::{fmt, io};

use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[cfg(feature = "wasm")]
use serde_wasm_bindgen::Error as WasmError;

#[cfg(feature = "wasm")]
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum NavError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Document host error: {0}")]
    Dom(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
    #[error("Service error: {0}")]
    Service(String),
}

impl NavError {
    pub fn selector(selector: &str, reason: impl Into<String>) -> Self {
        NavError::Selector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for NavError {
    fn from(src: toml::de::Error) -> NavError {
        NavError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for NavError {
    fn from(src: toml::ser::Error) -> NavError {
        NavError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for NavError {
    fn from(src: JsonError) -> NavError {
        NavError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<io::Error> for NavError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => NavError::NotFound(format!("{x}")),
            _ => NavError::Io(format!("IOError: {}: {x}", x.kind())),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<tempfile::PersistError> for NavError {
    fn from(src: tempfile::PersistError) -> NavError {
        NavError::from(src.error)
    }
}

impl From<fmt::Error> for NavError {
    fn from(x: fmt::Error) -> Self {
        NavError::Serialization(format!("{x}"))
    }
}

#[cfg(feature = "wasm")]
impl From<WasmError> for NavError {
    fn from(wasm_error: WasmError) -> Self {
        NavError::Serialization(format!("Serde-wasm-bindgen error: {wasm_error}"))
    }
}

#[cfg(feature = "wasm")]
impl From<JsValue> for NavError {
    fn from(value: JsValue) -> Self {
        NavError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "wasm")]
impl From<NavError> for JsValue {
    fn from(err: NavError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
