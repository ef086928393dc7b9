use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated, please login again")]
    Unauthorized,
    #[error("{}", message.clone().unwrap_or_else(|| format!("Request failed with status {code}")))]
    Status {
        code: StatusCode,
        message: Option<String>,
    },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Pull a human-readable message out of an error body.
///
/// The backend is inconsistent: `message`, `error`, or a `errors` map of
/// field -> list of messages (first one wins).
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    if let Some(error) = value.get("error").and_then(|m| m.as_str()) {
        return Some(error.to_string());
    }
    if let Some(errors) = value.get("errors").and_then(|e| e.as_object()) {
        let first = errors.values().next()?;
        let message = match first {
            serde_json::Value::Array(list) => list.first()?.as_str()?,
            serde_json::Value::String(s) => s.as_str(),
            _ => return None,
        };
        return Some(message.to_string());
    }
    None
}

/// HTTP client for the Scribe REST API, with bearer-token authentication.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<Arc<str>>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self {
            client,
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {token}"))
        } else {
            builder
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Stale or revoked token, stop sending it
            self.set_token(None).await;
            return Err(ApiError::Unauthorized);
        }
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code: status,
            message: extract_error_message(&body),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path))).await;
        self.execute(request).await
    }

    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(self.client.get(self.url(path)).query(query))
            .await;
        self.execute(request).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(self.client.post(self.url(path)).json(body))
            .await;
        self.execute(request).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(self.url(path))).await;
        self.execute(request).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(self.client.put(self.url(path)).json(body))
            .await;
        self.execute(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.delete(self.url(path))).await;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_field() {
        let body = r#"{"message": "The given data was invalid."}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("The given data was invalid.")
        );
    }

    #[test]
    fn test_extract_error_field() {
        let body = r#"{"error": "OTP expired"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("OTP expired"));
    }

    #[test]
    fn test_extract_first_of_errors_map() {
        let body = r#"{"errors": {"email": ["Email is already taken", "Email is invalid"]}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Email is already taken")
        );
    }

    #[test]
    fn test_extract_nothing_from_plain_text() {
        assert_eq!(extract_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(r#"{"status": 500}"#), None);
    }
}
