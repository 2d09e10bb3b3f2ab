use contracts::shared::api::{ApiErrorBody, ErrorMessage, MutationAck};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{ServiceError, ServiceResult};
use super::resource::Resource;
use super::transport::{HttpRequest, HttpTransport, Method};
use crate::system::auth::storage::SessionStore;

/// Fallback success text when a mutation response carries no message
pub const DEFAULT_SAVED_MESSAGE: &str = "Data berhasil disimpan";
pub const DEFAULT_DELETED_MESSAGE: &str = "Data berhasil dihapus";

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/x-www-form-urlencoded`, the way a browser submits a form
    Form(String),
    Json(Value),
}

impl Payload {
    /// Form-encode a flat struct
    pub fn form<T: Serialize>(value: &T) -> ServiceResult<Self> {
        serde_qs::to_string(value)
            .map(Payload::Form)
            .map_err(|e| ServiceError::Encode(e.to_string()))
    }

    pub fn json<T: Serialize>(value: &T) -> ServiceResult<Self> {
        serde_json::to_value(value)
            .map(Payload::Json)
            .map_err(|e| ServiceError::Encode(e.to_string()))
    }

    fn into_body(self) -> (&'static str, String) {
        match self {
            Payload::Form(body) => ("application/x-www-form-urlencoded", body),
            Payload::Json(value) => ("application/json", value.to_string()),
        }
    }
}

/// REST client for the catalog collections.
///
/// Every call resolves to `data` of the success envelope or to a
/// classified [`ServiceError`]. No retries, no caching.
#[derive(Debug, Clone)]
pub struct ServiceClient<T, S> {
    transport: T,
    session: S,
    base_url: String,
}

impl<T: HttpTransport, S: SessionStore> ServiceClient<T, S> {
    pub fn new(transport: T, session: S, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            session,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn resource_path(resource: Resource, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}", resource.path(), urlencoding::encode(id)),
            None => resource.path().to_string(),
        }
    }

    /// Issue a request against `{base}/{path}` and normalize the outcome
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> ServiceResult<Value> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let body = payload.map(|p| {
            let (content_type, body) = p.into_body();
            headers.push(("Content-Type".to_string(), content_type.to_string()));
            body
        });

        log::debug!("{} {}", method, url);
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body,
            })
            .await
            .map_err(|e| {
                log::error!("{} {} failed: {}", method, url, e);
                ServiceError::Network(e)
            })?;

        let result = normalize_response(response.status, &response.body);
        if let Err(e) = &result {
            log::warn!("{} {} -> {}: {:?}", method, url, response.status, e);
        }
        result
    }

    /// GET the collection; `data` must be an array
    pub async fn list(&self, resource: Resource) -> ServiceResult<Vec<Value>> {
        match self
            .request(Method::Get, &Self::resource_path(resource, None), None)
            .await?
        {
            Value::Array(items) => Ok(items),
            other => Err(ServiceError::Decode(format!(
                "expected a list of {}, got {}",
                resource.path(),
                json_kind(&other)
            ))),
        }
    }

    pub async fn show(&self, resource: Resource, id: &str) -> ServiceResult<Value> {
        self.request(Method::Get, &Self::resource_path(resource, Some(id)), None)
            .await
    }

    pub async fn create(&self, resource: Resource, payload: Payload) -> ServiceResult<Value> {
        self.request(
            Method::Post,
            &Self::resource_path(resource, None),
            Some(payload),
        )
        .await
    }

    pub async fn update(
        &self,
        resource: Resource,
        id: &str,
        payload: Payload,
    ) -> ServiceResult<Value> {
        self.request(
            Method::Put,
            &Self::resource_path(resource, Some(id)),
            Some(payload),
        )
        .await
    }

    pub async fn delete(&self, resource: Resource, id: &str) -> ServiceResult<Value> {
        self.request(Method::Delete, &Self::resource_path(resource, Some(id)), None)
            .await
    }

    pub async fn list_as<R: DeserializeOwned>(&self, resource: Resource) -> ServiceResult<Vec<R>> {
        self.list(resource)
            .await?
            .into_iter()
            .map(decode::<R>)
            .collect()
    }

    pub async fn show_as<R: DeserializeOwned>(&self, resource: Resource, id: &str) -> ServiceResult<R> {
        decode(self.show(resource, id).await?)
    }
}

pub fn decode<R: DeserializeOwned>(value: Value) -> ServiceResult<R> {
    serde_json::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Human readable message of a mutation response, with a fallback
pub fn mutation_message(data: &Value, fallback: &str) -> String {
    serde_json::from_value::<MutationAck>(data.clone())
        .ok()
        .map(|ack| ack.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Classify a raw HTTP response.
///
/// 2xx yields `data` of the envelope (or the whole body when there is no
/// envelope). A 2xx body flagged `"error": true` is treated like a failure.
/// HTTP 401 and the token-expiry message both become
/// [`ServiceError::TokenExpired`], ahead of any other classification.
pub fn normalize_response(status: u16, body: &str) -> ServiceResult<Value> {
    let parsed = if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };

    if (200..300).contains(&status) {
        let value = parsed.map_err(|e| ServiceError::Decode(e.to_string()))?;
        let flagged = value.get("error").and_then(Value::as_bool).unwrap_or(false);
        if !flagged {
            return Ok(match value {
                Value::Object(mut map) => match map.remove("data") {
                    Some(data) => data,
                    None => Value::Object(map),
                },
                other => other,
            });
        }
        return Err(classify_error(status, Some(value)));
    }

    Err(classify_error(status, parsed.ok()))
}

fn classify_error(status: u16, body: Option<Value>) -> ServiceError {
    let message = body
        .and_then(|v| serde_json::from_value::<ApiErrorBody>(v).ok())
        .and_then(|b| b.message);

    if status == 401 || message.as_ref().is_some_and(ErrorMessage::is_token_expired) {
        return ServiceError::TokenExpired;
    }

    match message {
        Some(ErrorMessage::Fields(fields)) if !fields.is_empty() => ServiceError::Validation(fields),
        Some(ErrorMessage::Text(text)) if !text.trim().is_empty() => ServiceError::Api(text),
        _ => ServiceError::Api(format!("HTTP {}", status)),
    }
}
