use crate::prelude::*;

use crate::{
    api::{
        self,
        blogs::BlogListQuery,
        comments::ModerationAction,
        types::{Blog, BlogStatus, Comment},
        ApiError,
    },
    components::{
        blog::StatusBadge,
        misc::Divider,
        svg::{Delete, DrawSvg, Pencil, Publish, SvgSize::Size5},
    },
    utils::{display_date, CCStr},
    Route,
};

#[component]
pub fn DashboardView() -> Element {
    let allowed = helper_hooks::use_author_guard();
    if !allowed() {
        return rsx! {};
    }
    rsx! {
        super::TitledView {
            title: CCStr::from("Dashboard"),
            subtitle: CCStr::from("Your blogs, drafts and comments awaiting moderation."),
            right: rsx! {
                button {
                    class: "btn btn-primary self-center",
                    onclick: move |_| {
                        navigator().push(Route::BlogCreateView {});
                    },
                    DrawSvg::<Pencil> { size: Size5 }
                    "New blog"
                }
            },
            AuthorBlogList {}
            Divider { "Pending comments" }
            PendingComments {}
        }
    }
}

#[component]
fn AuthorBlogList() -> Element {
    log::debug!("AuthorBlogList Rendered");

    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();

    let loader: UseInfiniteScroll<Blog> = helper_hooks::use_infinite_scroll(
        InfiniteScrollOptions {
            items_per_page: 10,
            ..Default::default()
        },
        move |request: PageRequest| async move {
            let client = state_management::api_client(session_service).await;
            let Some(user) = state_management::current_user() else {
                return Err(ApiError::Unauthorized);
            };
            let query = BlogListQuery {
                page: request.page,
                per_page: request.per_page,
                search: None,
            };
            api::blogs::blogs_by_author(&client, user.id, &query)
                .await
                .inspect_err(|e| {
                    if matches!(e, ApiError::Unauthorized) {
                        state_management::publish_event(
                            event_bus,
                            state_management::SessionExpiredEvent,
                        );
                    }
                })
        },
    );

    use_effect(move || loader.load_initial());

    use_drop(|| log::debug!("AuthorBlogList Dropped"));

    rsx! {
        div { class: "flex flex-col gap-2",
            if let Some(error) = loader.error() {
                div { class: "alert alert-error justify-center",
                    span { {error} }
                    button { class: "btn btn-sm", onclick: move |_| loader.refresh(), "Retry" }
                }
            }

            if loader.is_first_load() {
                div { class: "skeleton h-48 w-full" }
            } else if loader.is_empty() {
                div { class: "flex flex-col items-center gap-4 py-8",
                    div { class: "text-base-content/60", "You have not written anything yet." }
                    super::CreateLinkButton {
                        route: Route::BlogCreateView {},
                        label: CCStr::from("Write your first blog"),
                        size_classes: Some(CCStr::from("w-xs aspect-square")),
                    }
                }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Status" }
                            th { "Date" }
                            th { "Comments" }
                            th { "" }
                        }
                    }
                    tbody {
                        for blog in loader.items() {
                            AuthorBlogRow {
                                key: "{blog.id.unwrap_or_default()}",
                                blog,
                                loader,
                            }
                        }
                    }
                }
                div { class: "flex justify-center py-2",
                    // Button-driven counterpart of the scroll-triggered loading
                    if loader.has_more() {
                        button {
                            class: "btn btn-outline btn-primary",
                            disabled: loader.is_loading(),
                            onclick: move |_| loader.load_more(),
                            if loader.is_loading() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Load more"
                        }
                    } else {
                        div { class: "text-sm text-base-content/60",
                            "Showing {loader.items().len()} of {loader.total_items()} blogs"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AuthorBlogRow(blog: Blog, loader: UseInfiniteScroll<Blog>) -> Element {
    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();

    let blog_id = blog.id;
    let date = blog
        .published_at
        .as_deref()
        .or(blog.created_at.as_deref())
        .map(display_date);

    // One closure for the three row actions, all refresh the list once the
    // server agreed
    let run_action = move |action: BlogAction| {
        let Some(blog_id) = blog_id else { return };
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            let outcome = match action {
                BlogAction::Publish => api::blogs::publish_blog(&client, blog_id).await,
                BlogAction::Draft => api::blogs::draft_blog(&client, blog_id).await,
                BlogAction::Delete => api::blogs::delete_blog(&client, blog_id).await,
            };
            match outcome {
                Ok(()) => {
                    alert_success("Done.");
                    loader.refresh();
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };

    rsx! {
        tr {
            td {
                if let Some(blog_id) = blog_id {
                    Link { class: "link font-semibold", to: Route::BlogDetailView { blog_id }, "{blog.title}" }
                } else {
                    span { class: "font-semibold", "{blog.title}" }
                }
            }
            td {
                StatusBadge { status: blog.status }
            }
            td {
                if let Some(date) = date {
                    {date}
                } else {
                    "-"
                }
            }
            td { "{blog.comments_count.unwrap_or_default()}" }
            td {
                div { class: "flex flex-row gap-1 justify-end",
                    if let Some(blog_id) = blog_id {
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| {
                                navigator().push(Route::BlogEditView { blog_id });
                            },
                            DrawSvg::<Pencil> { size: Size5 }
                        }
                    }
                    if matches!(blog.status, BlogStatus::Draft | BlogStatus::Scheduled) {
                        button {
                            class: "btn btn-ghost btn-xs",
                            title: "Publish",
                            onclick: move |_| run_action(BlogAction::Publish),
                            DrawSvg::<Publish> { size: Size5 }
                        }
                    } else {
                        button {
                            class: "btn btn-ghost btn-xs",
                            title: "Back to draft",
                            onclick: move |_| run_action(BlogAction::Draft),
                            "Unpublish"
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-xs text-error",
                        title: "Delete",
                        onclick: move |_| run_action(BlogAction::Delete),
                        DrawSvg::<Delete> { size: Size5 }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlogAction {
    Publish,
    Draft,
    Delete,
}

#[component]
fn PendingComments() -> Element {
    log::debug!("PendingComments Rendered");

    let session_service = state_management::use_session_service();
    let event_bus = state_management::use_event_bus();
    let mut pending = helper_hooks::use_resource_pending_comments();

    let moderate = move |(comment_id, action): (u64, ModerationAction)| {
        spawn(async move {
            let client = state_management::api_client(session_service).await;
            match api::comments::moderate_comment(&client, comment_id, action, None).await {
                Ok(()) => {
                    alert_success(match action {
                        ModerationAction::Approve => "Comment approved.",
                        ModerationAction::Reject => "Comment rejected.",
                    });
                    pending.restart();
                }
                Err(e) => alert_error(state_management::handle_api_error(event_bus, e)),
            }
        });
    };

    use_drop(|| log::debug!("PendingComments Dropped"));

    rsx! {
        match &*pending.read() {
            Some(Ok(comments)) => rsx! {
                if comments.is_empty() {
                    div { class: "text-base-content/60", "Nothing to moderate." }
                }
                for comment in comments.iter() {
                    PendingCommentRow {
                        key: "{comment.id}",
                        comment: comment.clone(),
                        onmoderate: moderate,
                    }
                }
            },
            Some(Err(error)) => rsx! {
                div { class: "alert alert-error", "{error}" }
            },
            None => rsx! {
                div { class: "skeleton h-16 w-full" }
            },
        }
    }
}

#[component]
fn PendingCommentRow(
    comment: Comment,
    onmoderate: Callback<(u64, ModerationAction), ()>,
) -> Element {
    let author_name = comment
        .author
        .as_ref()
        .map(|author| CCStr::from(author.name.as_str()))
        .unwrap_or_else(|| CCStr::from("Anonymous"));
    let comment_id = comment.id;

    rsx! {
        div { class: "card border bg-base-100",
            div { class: "card-body p-4 flex-row items-center justify-between gap-4",
                div {
                    div { class: "text-sm font-light",
                        span { class: "font-semibold", {author_name} }
                        " on blog #{comment.blog_id}"
                    }
                    p { class: "whitespace-pre-wrap", "{comment.content}" }
                }
                div { class: "flex flex-row gap-2",
                    button {
                        class: "btn btn-success btn-sm",
                        onclick: move |_| onmoderate.call((comment_id, ModerationAction::Approve)),
                        "Approve"
                    }
                    button {
                        class: "btn btn-error btn-sm",
                        onclick: move |_| onmoderate.call((comment_id, ModerationAction::Reject)),
                        "Reject"
                    }
                }
            }
        }
    }
}
