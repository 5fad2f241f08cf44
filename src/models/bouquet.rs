use serde_json::Value;

use crate::error::{BouquetError, Result};

/// Body of a POST to the handler: `{"prompt": "...", "scheme": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BouquetRequest {
    pub prompt: String,
    /// Flower composition chosen in the constructor UI. Accepted, never read.
    pub scheme: Option<Value>,
}

impl BouquetRequest {
    /// Parses a request body. Non-object JSON and non-string prompts count as a missing prompt.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(BouquetError::InvalidJson)?;

        let object = match value {
            Value::Object(object) => object,
            _ => return Err(BouquetError::MissingPrompt),
        };

        let prompt = match object.get("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => prompt.clone(),
            _ => return Err(BouquetError::MissingPrompt),
        };

        Ok(Self {
            prompt,
            scheme: object.get("scheme").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prompt_and_scheme() {
        let request = BouquetRequest::parse(
            r#"{"prompt":"round bouquet of red roses","scheme":{"id":0,"pattern":"Scheme 1"}}"#,
        )
        .unwrap();
        assert_eq!(request.prompt, "round bouquet of red roses");
        assert_eq!(request.scheme, Some(json!({"id": 0, "pattern": "Scheme 1"})));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            BouquetRequest::parse("{invalid"),
            Err(BouquetError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_missing_or_empty_prompt() {
        for body in ["{}", r#"{"prompt":""}"#, r#"{"prompt":null}"#, r#"{"prompt":7}"#, "[1,2]", r#""roses""#] {
            assert!(
                matches!(BouquetRequest::parse(body), Err(BouquetError::MissingPrompt)),
                "body {} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_whitespace_prompt_is_kept() {
        let request = BouquetRequest::parse(r#"{"prompt":"  "}"#).unwrap();
        assert_eq!(request.prompt, "  ");
        assert!(request.scheme.is_none());
    }
}
