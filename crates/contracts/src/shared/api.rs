//! Response envelopes returned by the backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First validation message per field, ready for inline display.
pub type FieldErrors = BTreeMap<String, String>;

/// Collection envelope: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Error body of a failed request. A 422 carries `errors`, everything else
/// at most a `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    pub fn field_errors(&self) -> FieldErrors {
        first_messages(&self.errors)
    }
}

/// Plain `{ "message": "..." }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub fn first_messages(errors: &BTreeMap<String, Vec<String>>) -> FieldErrors {
    errors
        .iter()
        .filter_map(|(field, messages)| {
            messages
                .first()
                .map(|message| (field.clone(), message.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let list: ApiList<u32> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(list.data, vec![1, 2, 3]);

        let empty: ApiList<u32> = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn test_first_message_per_field() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"message":"The given data was invalid.","errors":{"code":["Taken.","Too long."],"name":[],"email":["Required."]}}"#,
        )
        .unwrap();
        let errors = body.field_errors();
        assert_eq!(errors.get("code").map(String::as_str), Some("Taken."));
        assert_eq!(errors.get("email").map(String::as_str), Some("Required."));
        assert!(!errors.contains_key("name"));
    }
}
