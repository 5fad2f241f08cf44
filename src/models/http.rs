use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::error::BouquetError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";

/// Gateway event as delivered by the hosting platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(
        rename = "httpMethod",
        default = "default_method",
        deserialize_with = "method_or_default"
    )]
    pub method: String,
    #[serde(default)]
    pub body: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

/// Gateways may send `"httpMethod": null`; it is treated like a missing method.
fn method_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_method))
}

impl Request {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self::new("POST", Some(body.into()))
    }

    /// The body to parse, with absent or blank bodies read as an empty object.
    pub fn body_or_empty_object(&self) -> &str {
        match self.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body,
            _ => "{}",
        }
    }
}

/// Response envelope understood by HTTP gateways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl Response {
    /// CORS preflight answer. Carries no content type.
    pub fn preflight() -> Self {
        let headers = HashMap::from([
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
            (ALLOW_METHODS.to_string(), "POST, OPTIONS".to_string()),
            (ALLOW_HEADERS.to_string(), "Content-Type".to_string()),
            (MAX_AGE.to_string(), "86400".to_string()),
        ]);

        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json(status_code: u16, body: &Value) -> Self {
        let headers = HashMap::from([
            (CONTENT_TYPE.to_string(), "application/json".to_string()),
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
        ]);

        Self {
            status_code,
            headers,
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    pub fn image(url: &str) -> Self {
        Self::json(200, &json!({ "imageUrl": url }))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

impl From<&BouquetError> for Response {
    fn from(error: &BouquetError) -> Self {
        let body = match error.details() {
            Some(details) => json!({ "error": error.to_string(), "details": details }),
            None => json!({ "error": error.to_string() }),
        };
        Response::json(error.status_code(), &body)
    }
}

impl From<BouquetError> for Response {
    fn from(error: BouquetError) -> Self {
        Response::from(&error)
    }
}
