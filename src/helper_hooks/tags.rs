use crate::prelude::*;

use crate::api::{self, types::Tag};

use super::utils::FResource;

pub fn use_resource_tags() -> FResource<Vec<Tag>> {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    use_resource(move || async move {
        log::debug!("use_resource_tags - start");
        let client = state_management::api_client(session_service).await;
        let tags = api::tags::list_tags(&client)
            .await
            .map_err(|e| state_management::handle_api_error(event_bus, e));
        log::debug!("use_resource_tags - loaded");
        tags
    })
}
