//! REST client shared by every resource page.
//!
//! All requests go through [`send`]: it attaches the standard headers and the
//! bearer token, and turns non-2xx responses into an [`ApiError`].

use std::fmt::Display;

use contracts::domain::common::RecordId;
use contracts::shared::api::{ApiList, ErrorBody, FieldErrors, MessageResponse};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Unauthenticated.")]
    Unauthorized,
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Classify a non-2xx response by status and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        match status {
            401 => ApiError::Unauthorized,
            422 => ApiError::Validation {
                message: parsed.message.clone().unwrap_or_default(),
                errors: parsed.field_errors(),
            },
            _ => ApiError::Status {
                status,
                message: parsed.message.filter(|m| !m.is_empty()),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Validation { .. } => Some(422),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server message when the response carried one, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// First message per field, empty for anything but a 422.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Validation { errors, .. } => errors.clone(),
            _ => FieldErrors::new(),
        }
    }
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutations may answer with an empty body.
pub fn decode_or_default<T: DeserializeOwned + Default>(text: &str) -> Result<T, ApiError> {
    if text.trim().is_empty() {
        Ok(T::default())
    } else {
        decode(text)
    }
}

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("X-Requested-With", "XMLHttpRequest")
        .header("Accept", "application/json")
        .header("Content-Type", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn to_body<P: Serialize>(payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialize(e.to_string()))
}

/// Send a request and return the body of a 2xx response.
async fn send(builder: RequestBuilder, body: Option<String>, label: &str) -> Result<String, ApiError> {
    let builder = with_headers(builder);
    let sent = match body {
        Some(json) => {
            let request = builder
                .body(json)
                .map_err(|e| ApiError::Serialize(e.to_string()))?;
            request.send().await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| {
        log::error!("{}: {}", label, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if (200..300).contains(&status) {
        return Ok(text);
    }

    log::warn!("{} -> {}", label, status);
    let error = ApiError::from_response(status, &text);
    if error == ApiError::Unauthorized {
        storage::clear_token();
    }
    Err(error)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send(Request::get(&api_url(path)), None, &format!("GET {}", path)).await?;
    decode(&text).map_err(|e| {
        log::error!("GET {}: {}", path, e);
        e
    })
}

pub async fn post_json<P, T>(path: &str, payload: &P) -> Result<T, ApiError>
where
    P: Serialize,
    T: DeserializeOwned + Default,
{
    let body = to_body(payload)?;
    let text = send(
        Request::post(&api_url(path)),
        Some(body),
        &format!("POST {}", path),
    )
    .await?;
    decode_or_default(&text)
}

pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    send(Request::post(&api_url(path)), None, &format!("POST {}", path)).await?;
    Ok(())
}

pub async fn put_json<P, T>(path: &str, payload: &P) -> Result<T, ApiError>
where
    P: Serialize,
    T: DeserializeOwned + Default,
{
    let body = to_body(payload)?;
    let text = send(
        Request::put(&api_url(path)),
        Some(body),
        &format!("PUT {}", path),
    )
    .await?;
    decode_or_default(&text)
}

pub async fn patch_json<T: DeserializeOwned + Default>(
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let text = send(Request::patch(&api_url(path)), body, &format!("PATCH {}", path)).await?;
    decode_or_default(&text)
}

pub async fn delete_json<T: DeserializeOwned + Default>(path: &str) -> Result<T, ApiError> {
    let text = send(Request::delete(&api_url(path)), None, &format!("DELETE {}", path)).await?;
    decode_or_default(&text)
}

/// A REST collection such as `/api/items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    route: &'static str,
}

impl Resource {
    pub const fn new(route: &'static str) -> Self {
        Self { route }
    }

    pub fn route(&self) -> &'static str {
        self.route
    }

    /// `route/a/b/...`
    pub fn path(&self, segments: &[&dyn Display]) -> String {
        let mut path = self.route.to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&segment.to_string());
        }
        path
    }

    /// `route/id`, used by `show`, `update`, `patch`, `patch_no_payload` and `destroy`.
    pub fn member(&self, id: impl Display) -> String {
        self.path(&[&id])
    }

    /// `route/a/b`, used by `show2`, `destroy2` and `action`.
    pub fn nested(&self, a: impl Display, b: impl Display) -> String {
        self.path(&[&a, &b])
    }

    /// `route/a/b/c`, used by `show3`.
    pub fn nested3(&self, a: impl Display, b: impl Display, c: impl Display) -> String {
        self.path(&[&a, &b, &c])
    }

    pub async fn index<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        let list: ApiList<T> = get_json(self.route).await?;
        Ok(list.data)
    }

    /// GET `route/id`. Single-record endpoints answer with the bare object.
    pub async fn show<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        get_json(&self.member(id)).await
    }

    /// GET `route/a/b` for nested resources.
    pub async fn show2<T: DeserializeOwned>(
        &self,
        a: impl Display,
        b: impl Display,
    ) -> Result<T, ApiError> {
        get_json(&self.nested(a, b)).await
    }

    pub async fn show3<T: DeserializeOwned>(
        &self,
        a: impl Display,
        b: impl Display,
        c: impl Display,
    ) -> Result<T, ApiError> {
        get_json(&self.nested3(a, b, c)).await
    }

    pub async fn store<P: Serialize>(&self, payload: &P) -> Result<MessageResponse, ApiError> {
        post_json(self.route, payload).await
    }

    pub async fn update<P: Serialize>(
        &self,
        id: impl Display,
        payload: &P,
    ) -> Result<MessageResponse, ApiError> {
        put_json(&self.member(id), payload).await
    }

    /// `store` without an id, `update` with one.
    pub async fn save<P: Serialize>(
        &self,
        id: Option<RecordId>,
        payload: &P,
    ) -> Result<MessageResponse, ApiError> {
        match id {
            Some(id) => self.update(id, payload).await,
            None => self.store(payload).await,
        }
    }

    pub async fn patch<P: Serialize>(
        &self,
        id: impl Display,
        payload: &P,
    ) -> Result<MessageResponse, ApiError> {
        let body = to_body(payload)?;
        patch_json(&self.member(id), Some(body)).await
    }

    /// PATCH `route/id` for toggles that carry no body.
    pub async fn patch_no_payload(&self, id: impl Display) -> Result<MessageResponse, ApiError> {
        patch_json(&self.member(id), None).await
    }

    pub async fn destroy(&self, id: impl Display) -> Result<MessageResponse, ApiError> {
        delete_json(&self.member(id)).await
    }

    /// DELETE `route/a/b`, e.g. detaching one record from another.
    pub async fn destroy2(
        &self,
        a: impl Display,
        b: impl Display,
    ) -> Result<MessageResponse, ApiError> {
        delete_json(&self.nested(a, b)).await
    }

    /// POST `route/id/name`, e.g. `/api/item-assets/4/assign`.
    pub async fn action<P: Serialize>(
        &self,
        id: impl Display,
        name: &str,
        payload: &P,
    ) -> Result<MessageResponse, ApiError> {
        post_json(&self.nested(id, name), payload).await
    }

    /// POST `route/path`, e.g. `/api/inventory-stocks/adjust`.
    pub async fn post<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<MessageResponse, ApiError> {
        post_json(&self.member(path), payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let body = r#"{"message":"The name field is required.","errors":{"name":["The name field is required."],"code":["Taken.","Too long."]}}"#;
        let error = ApiError::from_response(422, body);
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.message_or("An error occurred."), "The name field is required.");
        let fields = error.field_errors();
        assert_eq!(fields.get("code").map(String::as_str), Some("Taken."));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_status_error_message() {
        let error = ApiError::from_response(409, r#"{"message":"Cannot delete own account."}"#);
        assert_eq!(error.message_or("Cannot delete this user."), "Cannot delete own account.");
        assert!(error.field_errors().is_empty());

        let bare = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(bare, ApiError::Status { status: 500, message: None });
        assert_eq!(bare.message_or("An error occurred."), "An error occurred.");
    }

    #[test]
    fn test_unauthorized() {
        let error = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        assert_eq!(error, ApiError::Unauthorized);
        assert_eq!(error.message_or("fallback"), "fallback");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let error = ApiError::Network("offline".into());
        assert_eq!(error.status(), None);
        assert_eq!(error.message_or("Failed to update profile."), "Failed to update profile.");
    }

    #[test]
    fn test_decode_or_default_accepts_empty_body() {
        let empty: MessageResponse = decode_or_default("").unwrap();
        assert!(empty.message.is_none());
        let sent: MessageResponse = decode_or_default(r#"{"message":"Code sent."}"#).unwrap();
        assert_eq!(sent.message.as_deref(), Some("Code sent."));
        assert!(decode::<MessageResponse>("not json").is_err());
    }

    #[test]
    fn test_resource_paths() {
        let assets = Resource::new("/api/item-assets");
        assert_eq!(assets.path(&[&4, &"assign"]), "/api/item-assets/4/assign");
        assert_eq!(assets.path(&[]), "/api/item-assets");
        assert_eq!(assets.route(), "/api/item-assets");
    }

    #[test]
    fn test_member_and_nested_paths() {
        let stocks = Resource::new("/api/inventory-stocks");
        // show / update / patch / patch_no_payload / destroy
        assert_eq!(stocks.member(7), "/api/inventory-stocks/7");
        // post
        assert_eq!(stocks.member("adjust"), "/api/inventory-stocks/adjust");
        // show2 / destroy2
        assert_eq!(stocks.nested(1, 2), "/api/inventory-stocks/1/2");
        // action
        assert_eq!(stocks.nested(4, "return"), "/api/inventory-stocks/4/return");
        // show3
        assert_eq!(stocks.nested3(1, "items", 9), "/api/inventory-stocks/1/items/9");
    }
}
