use crate::prelude::*;

use crate::{
    api::{self, types::Blog},
    utils::CheapClone,
};

use super::utils::FResource;

pub fn use_resource_blog(blog_id: u64) -> FResource<CheapClone<Blog>> {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    use_resource(move || async move {
        log::debug!("use_resource_blog - start");
        let client = state_management::api_client(session_service).await;
        let blog = api::blogs::get_blog(&client, blog_id)
            .await
            .map(CheapClone::new)
            .map_err(|e| state_management::handle_api_error(event_bus, e));
        log::debug!("use_resource_blog - loaded");
        blog
    })
}
