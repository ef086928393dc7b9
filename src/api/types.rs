use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Reader,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}
impl User {
    pub fn is_author(&self) -> bool {
        matches!(self.role, Role::Author)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
}
impl core::fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Scheduled => "scheduled",
        })
    }
}

/// A blog post as the Scribe API serves it.
///
/// `id` is optional on purpose: list endpoints are allowed to emit partial
/// records and the list loader drops anything without an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub comments_count: Option<u64>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub blog_id: u64,
    pub content: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub blogs_count: Option<u64>,
}

/// Items that can flow through the incremental list loader.
///
/// `page_key` returning `None` marks the item as unusable and the loader
/// silently drops it.
pub trait PagedItem {
    type Key: Eq + std::hash::Hash + Clone + 'static;
    fn page_key(&self) -> Option<Self::Key>;
}
impl PagedItem for Blog {
    type Key = u64;
    fn page_key(&self) -> Option<u64> {
        self.id
    }
}
impl PagedItem for Comment {
    type Key = u64;
    fn page_key(&self) -> Option<u64> {
        Some(self.id)
    }
}
impl PagedItem for Tag {
    type Key = u64;
    fn page_key(&self) -> Option<u64> {
        Some(self.id)
    }
}

/// Pagination metadata, every field optional. Endpoints disagree on which
/// subset they send; consumers apply ordered fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub has_more_pages: Option<bool>,
}

/// One page of a paged endpoint, in any of the shapes the backends produce:
/// `{data, meta}`, `{items, pagination}` or a bare item array.
///
/// Items stay raw JSON here so a malformed entry only costs that entry, not
/// the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageResponse {
    Keyed {
        #[serde(alias = "items")]
        data: Vec<Value>,
        #[serde(default, alias = "pagination")]
        meta: PageMeta,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<Value>),
}

impl PageResponse {
    pub fn from_parts(data: Vec<Value>, meta: PageMeta, total: Option<u64>) -> Self {
        Self::Keyed { data, meta, total }
    }

    /// Decode the raw items, dropping entries that do not parse.
    pub fn into_page<T: serde::de::DeserializeOwned>(self) -> FetchedPage<T> {
        let (raw, meta, total) = match self {
            Self::Keyed { data, meta, total } => (data, meta, total),
            Self::Bare(raw) => (raw, PageMeta::default(), None),
        };
        let items = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<T>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::debug!("Dropping malformed page item: {e}");
                    None
                }
            })
            .collect();
        FetchedPage { items, meta, total }
    }
}

/// A decoded page: typed items plus whatever pagination info survived.
#[derive(Debug, Clone)]
pub struct FetchedPage<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
    /// Response-level total, distinct from `meta.total`.
    pub total: Option<u64>,
}

/// The `{ "data": ... }` wrapper most Scribe endpoints use.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogPayload {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub blog_id: u64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_response_data_meta_shape() {
        let page: PageResponse = serde_json::from_value(json!({
            "data": [{"id": 1, "name": "rust"}, {"id": 2, "name": "gui"}],
            "meta": {"current_page": 1, "last_page": 3, "total": 30}
        }))
        .unwrap();
        let page = page.into_page::<Tag>();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.current_page, Some(1));
        assert_eq!(page.meta.last_page, Some(3));
        assert_eq!(page.meta.total, Some(30));
    }

    #[test]
    fn test_page_response_items_pagination_shape() {
        let page: PageResponse = serde_json::from_value(json!({
            "items": [{"id": 7, "name": "news"}],
            "pagination": {"has_more_pages": true}
        }))
        .unwrap();
        let page = page.into_page::<Tag>();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.meta.has_more_pages, Some(true));
    }

    #[test]
    fn test_page_response_bare_array_shape() {
        let page: PageResponse =
            serde_json::from_value(json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]))
                .unwrap();
        let page = page.into_page::<Tag>();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta, PageMeta::default());
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_page_response_missing_meta_defaults_empty() {
        let page: PageResponse = serde_json::from_value(json!({"data": []})).unwrap();
        let page = page.into_page::<Tag>();
        assert!(page.items.is_empty());
        assert_eq!(page.meta, PageMeta::default());
    }

    #[test]
    fn test_malformed_items_are_dropped_not_fatal() {
        let page: PageResponse = serde_json::from_value(json!({
            "data": [{"id": 1, "name": "ok"}, null, "garbage", {"name": "no id"}]
        }))
        .unwrap();
        let page = page.into_page::<Tag>();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn test_blog_without_id_has_no_page_key() {
        let blog: Blog = serde_json::from_value(json!({"title": "untitled"})).unwrap();
        assert_eq!(blog.page_key(), None);
        let blog: Blog = serde_json::from_value(json!({"id": 4, "title": "t"})).unwrap();
        assert_eq!(blog.page_key(), Some(4));
    }
}
