use serde_json::Value;

use super::types::{Envelope, Tag, TagPayload};
use super::{ApiClient, ApiError};

pub async fn list_tags(client: &ApiClient) -> Result<Vec<Tag>, ApiError> {
    let response: Envelope<Vec<Tag>> = client.get("/api/tags").await?;
    Ok(response.data)
}

pub async fn create_tag(client: &ApiClient, payload: &TagPayload) -> Result<Tag, ApiError> {
    let response: Envelope<Tag> = client.post("/api/tags", payload).await?;
    Ok(response.data)
}

pub async fn update_tag(client: &ApiClient, id: u64, payload: &TagPayload) -> Result<Tag, ApiError> {
    let response: Envelope<Tag> = client.put(&format!("/api/tags/{id}"), payload).await?;
    Ok(response.data)
}

pub async fn delete_tag(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    let _: Value = client.delete(&format!("/api/tags/{id}")).await?;
    Ok(())
}
