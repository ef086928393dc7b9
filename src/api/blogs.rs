use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::types::{Blog, BlogPayload, Envelope, PageMeta, PageResponse};
use super::{ApiClient, ApiError};

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Laravel-style paginator, nested under the response `data` key.
#[derive(Debug, Clone, Deserialize)]
struct Paginator {
    #[serde(default)]
    data: Vec<Value>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    per_page: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    last_page: Option<u32>,
    #[serde(default)]
    next_page_url: Option<String>,
}

impl Paginator {
    /// Flatten into the page shape the list loader consumes.
    fn into_page_response(self) -> PageResponse {
        let last_page = self.last_page.or(match (self.total, self.per_page) {
            (Some(total), Some(per_page)) if per_page > 0 => {
                Some(total.div_ceil(per_page as u64) as u32)
            }
            _ => None,
        });
        let meta = PageMeta {
            current_page: self.current_page,
            last_page,
            per_page: self.per_page,
            total: self.total,
            has_more_pages: Some(self.next_page_url.is_some()),
        };
        PageResponse::from_parts(self.data, meta, None)
    }
}

pub async fn list_blogs(
    client: &ApiClient,
    query: &BlogListQuery,
) -> Result<PageResponse, ApiError> {
    let response: Envelope<Paginator> = client.get_query("/api/blogs", query).await?;
    Ok(response.data.into_page_response())
}

pub async fn search_blogs(
    client: &ApiClient,
    query: &BlogListQuery,
) -> Result<PageResponse, ApiError> {
    let response: Envelope<Paginator> = client.get_query("/api/blogs/search", query).await?;
    Ok(response.data.into_page_response())
}

pub async fn blogs_by_tag(
    client: &ApiClient,
    tag: &str,
    query: &BlogListQuery,
) -> Result<PageResponse, ApiError> {
    let response: Envelope<Paginator> = client
        .get_query(&format!("/api/blogs/tag/{tag}"), query)
        .await?;
    Ok(response.data.into_page_response())
}

pub async fn blogs_by_author(
    client: &ApiClient,
    author_id: u64,
    query: &BlogListQuery,
) -> Result<PageResponse, ApiError> {
    let response: Envelope<Paginator> = client
        .get_query(&format!("/api/blogs/author/{author_id}"), query)
        .await?;
    Ok(response.data.into_page_response())
}

pub async fn get_blog(client: &ApiClient, id: u64) -> Result<Blog, ApiError> {
    let response: Envelope<Blog> = client.get(&format!("/api/blogs/{id}")).await?;
    Ok(response.data)
}

pub async fn create_blog(client: &ApiClient, payload: &BlogPayload) -> Result<Blog, ApiError> {
    let response: Envelope<Blog> = client.post("/api/blogs", payload).await?;
    Ok(response.data)
}

pub async fn update_blog(
    client: &ApiClient,
    id: u64,
    payload: &BlogPayload,
) -> Result<Blog, ApiError> {
    let response: Envelope<Blog> = client.put(&format!("/api/blogs/{id}"), payload).await?;
    Ok(response.data)
}

pub async fn delete_blog(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    let _: Value = client.delete(&format!("/api/blogs/{id}")).await?;
    Ok(())
}

pub async fn publish_blog(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    let _: Value = client.post_empty(&format!("/api/blogs/{id}/publish")).await?;
    Ok(())
}

pub async fn draft_blog(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    let _: Value = client.post_empty(&format!("/api/blogs/{id}/draft")).await?;
    Ok(())
}

pub async fn schedule_blog(client: &ApiClient, id: u64, scheduled_at: &str) -> Result<(), ApiError> {
    let _: Value = client
        .post(
            &format!("/api/blogs/{id}/schedule"),
            &json!({ "scheduled_at": scheduled_at }),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginator_derives_last_page_from_total() {
        let paginator: Paginator = serde_json::from_value(json!({
            "data": [],
            "current_page": 2,
            "per_page": 12,
            "total": 25,
            "next_page_url": "https://scribe.press/api/blogs?page=3"
        }))
        .unwrap();
        let PageResponse::Keyed { meta, .. } = paginator.into_page_response() else {
            panic!("expected keyed page");
        };
        assert_eq!(meta.last_page, Some(3));
        assert_eq!(meta.has_more_pages, Some(true));
    }

    #[test]
    fn test_paginator_last_page_on_null_next_url() {
        let paginator: Paginator = serde_json::from_value(json!({
            "data": [],
            "current_page": 3,
            "per_page": 12,
            "total": 25,
            "next_page_url": null
        }))
        .unwrap();
        let PageResponse::Keyed { meta, .. } = paginator.into_page_response() else {
            panic!("expected keyed page");
        };
        assert_eq!(meta.has_more_pages, Some(false));
    }
}
