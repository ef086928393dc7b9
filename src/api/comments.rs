use serde::Serialize;
use serde_json::{json, Value};

use super::types::{Comment, CommentPayload, Envelope, PageResponse};
use super::{ApiClient, ApiError};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentListQuery {
    pub page: u32,
    pub per_page: u32,
}

pub async fn comments_by_blog(
    client: &ApiClient,
    blog_id: u64,
    query: &CommentListQuery,
) -> Result<PageResponse, ApiError> {
    client
        .get_query(&format!("/api/blogs/{blog_id}/comments"), query)
        .await
}

pub async fn create_comment(
    client: &ApiClient,
    payload: &CommentPayload,
) -> Result<Comment, ApiError> {
    let response: Envelope<Comment> = client.post("/api/comments", payload).await?;
    Ok(response.data)
}

pub async fn update_comment(
    client: &ApiClient,
    id: u64,
    content: &str,
) -> Result<Comment, ApiError> {
    let response: Envelope<Comment> = client
        .put(&format!("/api/comments/{id}"), &json!({ "content": content }))
        .await?;
    Ok(response.data)
}

pub async fn delete_comment(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    let _: Value = client.delete(&format!("/api/comments/{id}")).await?;
    Ok(())
}

/// Comments awaiting moderation, visible to authors only.
pub async fn pending_comments(client: &ApiClient) -> Result<Vec<Comment>, ApiError> {
    let response: Envelope<Vec<Comment>> = client.get("/api/comments/pending").await?;
    Ok(response.data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
}

pub async fn moderate_comment(
    client: &ApiClient,
    id: u64,
    action: ModerationAction,
    reason: Option<&str>,
) -> Result<(), ApiError> {
    let _: Value = client
        .post(
            &format!("/api/comments/{id}/moderate"),
            &json!({ "action": action, "reason": reason }),
        )
        .await?;
    Ok(())
}
