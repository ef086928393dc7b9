use crate::prelude::*;

use crate::{
    api::{
        self,
        types::{Blog, Comment, CommentPayload},
    },
    components::{
        blog::{StatusBadge, TagChip},
        copy::CopyToClipboardButtonIcon,
        misc::{BackButton, TextTooltip},
        svg::{Delete, DrawSvg, Pencil, Send, SvgSize::Size5},
    },
    utils::{display_datetime, CCStr, CheapClone},
    Route,
};

#[component]
pub fn BlogDetailView(blog_id: u64) -> Element {
    log::debug!("BlogDetailView Rendered");

    let blog = helper_hooks::use_resource_blog(blog_id);

    use_drop(|| log::debug!("BlogDetailView Dropped"));

    rsx! {
        div { class: "container mx-auto max-w-4xl flex flex-col gap-6",
            div { class: "self-start",
                BackButton { route: Route::HomeView {} }
            }
            match &*blog.read() {
                Some(Ok(blog)) => rsx! {
                    BlogArticle { blog: blog.clone() }
                    CommentsSection { blog_id }
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

#[component]
fn BlogArticle(blog: CheapClone<Blog>) -> Element {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();

    let is_owner = use_memo({
        let author_id = blog.author.as_ref().map(|author| author.id);
        move || {
            state_management::current_user()
                .is_some_and(|user| user.is_author() && Some(user.id) == author_id)
        }
    });

    let permalink = {
        let config = state_management::APPLICATION_CONFIG.read();
        let id = blog.id.unwrap_or_default();
        CCStr::from(format!("{}/blog/{id}", config.api_base_url.trim_end_matches('/')))
    };

    let author_name = blog
        .author
        .as_ref()
        .map(|author| CCStr::from(author.name.as_str()))
        .unwrap_or_else(|| CCStr::from("Unknown author"));
    let date = blog
        .published_at
        .as_deref()
        .or(blog.created_at.as_deref())
        .map(display_datetime);

    let blog_id = blog.id;
    let delete = move |_| {
        let Some(blog_id) = blog_id else { return };
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            match api::blogs::delete_blog(&client, blog_id).await {
                Ok(()) => {
                    alert_success("Blog deleted.");
                    navigator().push(Route::HomeView {});
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };
    let edit = move |_| {
        if let Some(blog_id) = blog_id {
            navigator().push(Route::BlogEditView { blog_id });
        }
    };

    rsx! {
        article { class: "flex flex-col gap-4",
            div { class: "flex flex-row items-center justify-between gap-4",
                h1 { class: "text-4xl font-black", "{blog.title}" }
                div { class: "flex items-center gap-2",
                    if is_owner() {
                        StatusBadge { status: blog.status }
                    }
                    TextTooltip { tooltip_text: CCStr::from("Copy link"),
                        CopyToClipboardButtonIcon { value: permalink }
                    }
                }
            }
            div { class: "text-sm font-light",
                "by "
                span { class: "font-semibold", {author_name} }
                if let Some(date) = date {
                    " — {date}"
                }
            }
            div { class: "flex flex-wrap gap-1",
                for tag in blog.tags.iter() {
                    TagChip { key: "{tag.id}", tag: tag.clone() }
                }
            }
            if let Some(image_url) = blog.image_url.as_ref() {
                img { class: "rounded-xl max-h-96 object-cover", src: "{image_url}" }
            }
            div { class: "prose max-w-none whitespace-pre-wrap text-base", "{blog.content}" }

            if is_owner() {
                div { class: "flex flex-row gap-2 mt-2",
                    button {
                        class: "btn btn-outline btn-primary",
                        onclick: edit,
                        DrawSvg::<Pencil> { size: Size5 }
                        "Edit"
                    }
                    button {
                        class: "btn btn-outline btn-error",
                        onclick: delete,
                        DrawSvg::<Delete> { size: Size5 }
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn CommentsSection(blog_id: u64) -> Element {
    log::debug!("CommentsSection Rendered");

    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    let mut comments = helper_hooks::use_resource_blog_comments(blog_id);

    let mut comment_text = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        spawn(async move {
            busy.set(true);
            let client = state_management::api_client(session_service).await;
            let payload = CommentPayload {
                blog_id,
                content: comment_text.peek().trim().to_owned(),
            };
            match api::comments::create_comment(&client, &payload).await {
                Ok(_) => {
                    alert_success("Comment posted.");
                    comment_text.set(String::new());
                    comments.restart();
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
            busy.set(false);
        });
    };

    let comments_state: LResult<Vec<Comment>> = comments.read().clone();

    use_drop(|| log::debug!("CommentsSection Dropped"));

    rsx! {
        section { class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-bold", "Comments" }

            match comments_state {
                Some(Ok(comment_list)) => rsx! {
                    if comment_list.is_empty() {
                        div { class: "text-base-content/60", "No comments yet. Be the first!" }
                    }
                    for comment in comment_list.iter() {
                        CommentCard {
                            key: "{comment.id}",
                            comment: comment.clone(),
                            onchanged: move |_| comments.restart(),
                        }
                    }
                },
                Some(Err(error)) => rsx! {
                    div { class: "alert alert-error", "{error}" }
                },
                None => rsx! {
                    div { class: "skeleton h-24 w-full" }
                },
            }

            if state_management::is_authenticated() {
                div { class: "flex flex-col gap-2",
                    textarea {
                        class: "textarea w-full",
                        rows: 3,
                        placeholder: "Write a comment...",
                        value: "{comment_text.read()}",
                        oninput: move |evt| comment_text.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary self-end",
                        disabled: busy() || comment_text.read().trim().is_empty(),
                        onclick: submit,
                        DrawSvg::<Send> { size: Size5 }
                        "Post comment"
                    }
                }
            } else {
                div { class: "text-base-content/60", "Login to join the conversation." }
            }
        }
    }
}

#[component]
fn CommentCard(comment: Comment, onchanged: Callback<()>) -> Element {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();

    let mut editing = use_signal(|| false);
    let mut draft = use_signal({
        let content = comment.content.clone();
        move || content.clone()
    });

    let author_id = comment.author.as_ref().map(|author| author.id);
    let is_own = use_memo(move || {
        state_management::current_user().is_some_and(|user| Some(user.id) == author_id)
    });

    let comment_id = comment.id;
    let save = move |_| {
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            let content = draft.peek().trim().to_owned();
            match api::comments::update_comment(&client, comment_id, &content).await {
                Ok(_) => {
                    alert_success("Comment updated.");
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
            match api::comments::delete_comment(&client, comment_id).await {
                Ok(()) => {
                    alert_success("Comment deleted.");
                    onchanged.call(());
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };

    let author_name = comment
        .author
        .as_ref()
        .map(|author| CCStr::from(author.name.as_str()))
        .unwrap_or_else(|| CCStr::from("Anonymous"));
    let date = comment.created_at.as_deref().map(display_datetime);

    rsx! {
        div { class: "card border bg-base-100",
            div { class: "card-body p-4",
                div { class: "flex flex-row items-center justify-between",
                    div { class: "text-sm font-light",
                        span { class: "font-semibold", {author_name} }
                        if let Some(date) = date {
                            " — {date}"
                        }
                    }
                    if is_own() && !editing() {
                        div { class: "flex flex-row gap-1",
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
                if editing() {
                    textarea {
                        class: "textarea w-full",
                        rows: 3,
                        value: "{draft.read()}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    div { class: "flex flex-row justify-end gap-2",
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: draft.read().trim().is_empty(),
                            onclick: save,
                            "Save"
                        }
                    }
                } else {
                    p { class: "whitespace-pre-wrap", "{comment.content}" }
                }
            }
        }
    }
}
