use crate::prelude::*;

use std::collections::HashSet;

use crate::{
    api::{
        self,
        types::{Blog, BlogPayload},
    },
    components::{
        inputs::{InputField, TextAreaField},
        misc::{BackButton, Divider},
        svg::{ClockOutline, DrawSvg, Pencil, Publish, SvgSize::Size5},
    },
    utils::{CCStr, CheapClone},
    Route,
};

#[component]
pub fn BlogCreateView() -> Element {
    let allowed = helper_hooks::use_author_guard();
    if !allowed() {
        return rsx! {};
    }
    rsx! {
        super::TitledView {
            title: CCStr::from("New Blog"),
            subtitle: CCStr::from("Draft a new story for the Scribe community."),
            left: rsx! {
                BackButton { route: Route::DashboardView {} }
            },
            BlogForm { existing: None }
        }
    }
}

#[component]
pub fn BlogEditView(blog_id: u64) -> Element {
    let allowed = helper_hooks::use_author_guard();
    let blog = helper_hooks::use_resource_blog(blog_id);
    if !allowed() {
        return rsx! {};
    }
    rsx! {
        super::TitledView {
            title: CCStr::from("Edit Blog"),
            subtitle: CCStr::from("Rework your story, then save or re-publish it."),
            left: rsx! {
                BackButton { route: Route::BlogDetailView { blog_id } }
            },
            match &*blog.read() {
                Some(Ok(blog)) => rsx! {
                    BlogForm { existing: Some(blog.clone()) }
                },
                Some(Err(error)) => rsx! {
                    div { class: "alert alert-error", "{error}" }
                },
                None => rsx! {
                    div { class: "skeleton h-96 w-full" }
                },
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AfterSave {
    KeepDraft,
    Publish,
    Schedule,
}

fn parse_schedule(raw: &str) -> Result<String, CCStr> {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.and_utc().to_rfc3339())
        .map_err(|_| CCStr::from("Please provide a valid schedule date and time"))
}

#[component]
fn BlogForm(existing: Option<CheapClone<Blog>>) -> Element {
    log::debug!("BlogForm Rendered");

    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    let tags = helper_hooks::use_resource_tags();

    let existing_id = existing.as_ref().and_then(|blog| blog.id);

    let title = use_signal({
        let existing = existing.clone();
        move || {
            existing
                .as_ref()
                .map(|blog| blog.title.clone())
                .unwrap_or_default()
        }
    });
    let content = use_signal({
        let existing = existing.clone();
        move || {
            existing
                .as_ref()
                .map(|blog| blog.content.clone())
                .unwrap_or_default()
        }
    });
    let excerpt = use_signal({
        let existing = existing.clone();
        move || {
            existing
                .as_ref()
                .and_then(|blog| blog.excerpt.clone())
                .unwrap_or_default()
        }
    });
    let image_url = use_signal({
        let existing = existing.clone();
        move || {
            existing
                .as_ref()
                .and_then(|blog| blog.image_url.clone())
                .unwrap_or_default()
        }
    });
    let selected_tags = use_signal({
        let existing = existing.clone();
        move || {
            existing
                .as_ref()
                .map(|blog| blog.tags.iter().map(|tag| tag.id).collect::<HashSet<u64>>())
                .unwrap_or_default()
        }
    });
    let schedule_at = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let title_error = use_memo(move || {
        title
            .read()
            .trim()
            .is_empty()
            .then(|| CCStr::from("Title is required"))
    });
    let content_error = use_memo(move || {
        content
            .read()
            .trim()
            .is_empty()
            .then(|| CCStr::from("Content is required"))
    });
    let form_ready =
        use_memo(move || title_error().is_none() && content_error().is_none() && !busy());

    let save = move |after: AfterSave| {
        spawn(async move {
            busy.set(true);
            let client = state_management::api_client(session_service).await;

            let none_if_empty = |s: String| (!s.trim().is_empty()).then_some(s);
            let payload = BlogPayload {
                title: title.peek().trim().to_owned(),
                content: content.peek().clone(),
                excerpt: none_if_empty(excerpt.peek().clone()),
                image_url: none_if_empty(image_url.peek().clone()),
                tags: selected_tags.peek().iter().copied().collect(),
            };

            let saved = match existing_id {
                Some(id) => api::blogs::update_blog(&client, id, &payload).await,
                None => api::blogs::create_blog(&client, &payload).await,
            };

            match saved {
                Ok(blog) => {
                    let followup = match (after, blog.id) {
                        (AfterSave::Publish, Some(id)) => {
                            api::blogs::publish_blog(&client, id).await
                        }
                        (AfterSave::Schedule, Some(id)) => {
                            match parse_schedule(&schedule_at.peek()) {
                                Ok(at) => api::blogs::schedule_blog(&client, id, &at).await,
                                Err(message) => {
                                    alert_error(message);
                                    busy.set(false);
                                    return;
                                }
                            }
                        }
                        _ => Ok(()),
                    };
                    match followup {
                        Ok(()) => {
                            alert_success(match after {
                                AfterSave::KeepDraft => "Draft saved.",
                                AfterSave::Publish => "Blog published.",
                                AfterSave::Schedule => "Blog scheduled.",
                            });
                            navigator().push(Route::DashboardView {});
                        }
                        Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
                    }
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
            busy.set(false);
        });
    };

    use_drop(|| log::debug!("BlogForm Dropped"));

    rsx! {
        div { class: "container mx-auto max-w-4xl flex flex-col gap-2",
            InputField::<String> {
                title: "Title",
                value: title,
                placeholder: "A story worth telling",
                value_error: title_error,
            }
            TextAreaField {
                title: "Content",
                value: content,
                rows: 14,
                placeholder: "Once upon a time...",
                value_error: content_error,
            }
            InputField::<String> {
                title: "Excerpt",
                description: "Optional short summary shown on the blog cards.",
                value: excerpt,
                value_error: None::<CCStr>,
            }
            InputField::<String> {
                title: "Cover image URL",
                value: image_url,
                r#type: "url",
                placeholder: "https://...",
                value_error: None::<CCStr>,
            }

            Divider { "Tags" }
            match &*tags.read() {
                Some(Ok(tags)) => rsx! {
                    div { class: "flex flex-wrap gap-3",
                        for tag in tags.iter() {
                            TagCheckbox {
                                key: "{tag.id}",
                                tag_id: tag.id,
                                name: CCStr::from(tag.name.as_str()),
                                selected_tags,
                            }
                        }
                    }
                },
                Some(Err(error)) => rsx! {
                    div { class: "alert alert-warning", "Could not load tags: {error}" }
                },
                None => rsx! {
                    div { class: "skeleton h-8 w-full" }
                },
            }

            Divider { "Actions" }
            div { class: "flex flex-row flex-wrap items-end gap-2",
                button {
                    class: "btn btn-outline btn-primary",
                    disabled: !form_ready(),
                    onclick: move |_| save(AfterSave::KeepDraft),
                    DrawSvg::<Pencil> { size: Size5 }
                    "Save draft"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !form_ready(),
                    onclick: move |_| save(AfterSave::Publish),
                    DrawSvg::<Publish> { size: Size5 }
                    "Save & publish"
                }
                div { class: "grow" }
                InputField::<String> {
                    title: "Schedule for",
                    value: schedule_at,
                    r#type: "datetime-local",
                    value_error: None::<CCStr>,
                }
                button {
                    class: "btn btn-secondary",
                    disabled: !form_ready() || schedule_at.read().is_empty(),
                    onclick: move |_| save(AfterSave::Schedule),
                    DrawSvg::<ClockOutline> { size: Size5 }
                    "Schedule"
                }
            }
        }
    }
}

#[component]
fn TagCheckbox(tag_id: u64, name: CCStr, selected_tags: Signal<HashSet<u64>>) -> Element {
    rsx! {
        label { class: "label cursor-pointer gap-2",
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-primary checkbox-sm",
                checked: selected_tags.read().contains(&tag_id),
                onchange: move |_| {
                    let mut selected = selected_tags.write();
                    if !selected.insert(tag_id) {
                        selected.remove(&tag_id);
                    }
                },
            }
            span { class: "label-text", {name} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule_accepts_datetime_local_format() {
        let parsed = parse_schedule("2025-12-24T18:30").unwrap();
        assert!(parsed.starts_with("2025-12-24T18:30:00"));
    }

    #[test]
    fn test_parse_schedule_rejects_garbage() {
        assert!(parse_schedule("tomorrow").is_err());
        assert!(parse_schedule("").is_err());
    }
}
