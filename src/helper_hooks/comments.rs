use crate::prelude::*;

use crate::api::{
    self,
    comments::CommentListQuery,
    types::Comment,
};

use super::utils::FResource;

pub fn use_resource_blog_comments(blog_id: u64) -> FResource<Vec<Comment>> {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    use_resource(move || async move {
        log::debug!("use_resource_blog_comments - start");
        let client = state_management::api_client(session_service).await;
        let query = CommentListQuery {
            page: 1,
            per_page: 50,
        };
        let comments = api::comments::comments_by_blog(&client, blog_id, &query)
            .await
            .map(|response| response.into_page::<Comment>().items)
            .map_err(|e| state_management::handle_api_error(event_bus, e));
        log::debug!("use_resource_blog_comments - loaded");
        comments
    })
}

/// Comments awaiting moderation. Empty for non-authors, and refreshed when
/// the session changes.
pub fn use_resource_pending_comments() -> FResource<Vec<Comment>> {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    use_resource(move || async move {
        log::debug!("use_resource_pending_comments - start");

        // Read the SESSION so that we refresh when it changes
        if !state_management::is_author() {
            return Ok(Vec::new());
        }

        let client = state_management::api_client(session_service).await;
        let comments = api::comments::pending_comments(&client)
            .await
            .map_err(|e| state_management::handle_api_error(event_bus, e));
        log::debug!("use_resource_pending_comments - loaded");
        comments
    })
}
