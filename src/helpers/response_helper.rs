use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::errors::{DashError, DashResult};

pub struct ResponseHelper;

impl ResponseHelper {

    /// Maps a non-2xx backend response onto a `DashError`, reading the
    /// `detail` field the backend puts in its error bodies.
    pub async fn check(response: Response, operation: &str, resource: Option<(&str, String)>) -> DashResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = Self::extract_detail(&body).unwrap_or_else(|| {
            status.canonical_reason().unwrap_or("unexpected response").to_string()
        });
        log::debug!("{} failed with {}: {}", operation, status, body);

        Err(match (status, resource) {
            (StatusCode::UNAUTHORIZED, _) => DashError::auth_error(&detail),
            (StatusCode::NOT_FOUND, Some((kind, id))) => DashError::not_found(kind, &id),
            _ => DashError::api_error(operation, status.as_u16(), &detail),
        })
    }

    pub async fn json<T: DeserializeOwned>(response: Response, operation: &str, resource: Option<(&str, String)>) -> DashResult<T> {
        let response = Self::check(response, operation, resource).await?;
        Ok(response.json::<T>().await?)
    }

    pub fn extract_detail(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        match value.get("detail")? {
            Value::String(detail) => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .map(|item| {
                        item.get("msg")
                            .and_then(Value::as_str)
                            .map_or_else(|| item.to_string(), str::to_string)
                    })
                    .collect();
                Some(messages.join("; "))
            }
            other => Some(other.to_string()),
        }
    }
}
