use crate::prelude::*;

use crate::{
    api::{
        self,
        types::{Tag, TagPayload},
    },
    components::{
        inputs::InputField,
        svg::{Delete, DrawSvg, Pencil, PlusCircle, SvgSize::Size5, TagMultiple},
    },
    utils::CCStr,
};

#[component]
pub fn TagManagementView() -> Element {
    let allowed = helper_hooks::use_author_guard();
    if !allowed() {
        return rsx! {};
    }
    rsx! {
        super::TitledView {
            title: CCStr::from("Tags"),
            subtitle: CCStr::from("Create, rename and remove the tags blogs are filed under."),
            TagManager {}
        }
    }
}

#[component]
fn TagManager() -> Element {
    log::debug!("TagManager Rendered");

    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    let mut tags = helper_hooks::use_resource_tags();

    let mut new_name = use_signal(String::new);
    let mut new_description = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let create = move |_| {
        spawn(async move {
            busy.set(true);
            let client = state_management::api_client(session_service).await;
            let payload = TagPayload {
                name: new_name.peek().trim().to_owned(),
                description: {
                    let description = new_description.peek().trim().to_owned();
                    (!description.is_empty()).then_some(description)
                },
            };
            match api::tags::create_tag(&client, &payload).await {
                Ok(tag) => {
                    alert_success(format!("Tag \"{}\" created.", tag.name));
                    new_name.set(String::new());
                    new_description.set(String::new());
                    tags.restart();
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
            busy.set(false);
        });
    };

    use_drop(|| log::debug!("TagManager Dropped"));

    rsx! {
        div { class: "container mx-auto max-w-3xl flex flex-col gap-4",
            div { class: "flex flex-row items-end gap-2",
                InputField::<String> {
                    title: "Name",
                    value: new_name,
                    placeholder: "rustlang",
                    value_error: None::<CCStr>,
                }
                InputField::<String> {
                    title: "Description",
                    value: new_description,
                    value_error: None::<CCStr>,
                }
                button {
                    class: "btn btn-primary mb-5",
                    disabled: busy() || new_name.read().trim().is_empty(),
                    onclick: create,
                    DrawSvg::<PlusCircle> { size: Size5 }
                    "Add tag"
                }
            }

            match &*tags.read() {
                Some(Ok(tag_list)) => rsx! {
                    if tag_list.is_empty() {
                        div { class: "text-center text-base-content/60 py-8",
                            DrawSvg::<TagMultiple> {}
                            "No tags yet."
                        }
                    }
                    for tag in tag_list.iter() {
                        TagRow {
                            key: "{tag.id}",
                            tag: tag.clone(),
                            onchanged: move |_| tags.restart(),
                        }
                    }
                },
                Some(Err(error)) => rsx! {
                    div { class: "alert alert-error", "{error}" }
                },
                None => rsx! {
                    div { class: "skeleton h-32 w-full" }
                },
            }
        }
    }
}

#[component]
fn TagRow(tag: Tag, onchanged: Callback<()>) -> Element {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();

    let mut editing = use_signal(|| false);
    let mut name = use_signal({
        let name = tag.name.clone();
        move || name.clone()
    });
    let mut description = use_signal({
        let description = tag.description.clone().unwrap_or_default();
        move || description.clone()
    });

    let tag_id = tag.id;
    let save = move |_| {
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            let payload = TagPayload {
                name: name.peek().trim().to_owned(),
                description: {
                    let description = description.peek().trim().to_owned();
                    (!description.is_empty()).then_some(description)
                },
            };
            match api::tags::update_tag(&client, tag_id, &payload).await {
                Ok(_) => {
                    alert_success("Tag updated.");
                    editing.set(false);
                    onchanged.call(());
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };

    let delete = move |_| {
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            match api::tags::delete_tag(&client, tag_id).await {
                Ok(()) => {
                    alert_success("Tag deleted.");
                    onchanged.call(());
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };

    rsx! {
        div { class: "card border bg-base-100",
            div { class: "card-body p-4 flex-row items-center justify-between gap-4",
                if editing() {
                    input {
                        class: "input input-sm",
                        value: "{name.read()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        class: "input input-sm grow",
                        value: "{description.read()}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        disabled: name.read().trim().is_empty(),
                        onclick: save,
                        "Save"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                } else {
                    div {
                        span { class: "font-semibold", "{tag.name}" }
                        if let Some(description) = tag.description.as_ref() {
                            span { class: "text-base-content/60 ml-2", "{description}" }
                        }
                    }
                    div { class: "flex flex-row items-center gap-2",
                        if let Some(count) = tag.blogs_count {
                            span { class: "badge badge-ghost", "{count} blogs" }
                        }
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| editing.set(true),
                            DrawSvg::<Pencil> { size: Size5 }
                        }
                        button {
                            class: "btn btn-ghost btn-xs text-error",
                            onclick: delete,
                            DrawSvg::<Delete> { size: Size5 }
                        }
                    }
                }
            }
        }
    }
}
