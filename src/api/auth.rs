use serde_json::json;

use super::types::{AuthData, Envelope, RegisterRequest};
use super::{ApiClient, ApiError};

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = client.post("/api/register", request).await?;
    Ok(())
}

pub async fn request_otp(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .post("/api/auth/request-otp", &json!({ "email": email }))
        .await?;
    Ok(())
}

/// Exchange a one-time password for an access token and the user record.
pub async fn verify_otp(
    client: &ApiClient,
    email: &str,
    otp_code: &str,
) -> Result<AuthData, ApiError> {
    let response: Envelope<AuthData> = client
        .post(
            "/api/auth/verify-otp",
            &json!({
                "email": email,
                "otp_code": otp_code,
                "purpose": "login",
            }),
        )
        .await?;
    Ok(response.data)
}

/// Server-side token revocation. Local state is cleared regardless of the
/// outcome, so callers treat failures as non-fatal.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let _: serde_json::Value = client.post_empty("/api/auth/logout").await?;
    Ok(())
}
