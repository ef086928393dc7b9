use crate::prelude::*;

use crate::{
    api::types::{Blog, BlogStatus, Tag},
    components::svg::{CommentText, DrawSvg, SvgSize::Size4},
    utils::{display_date, CCStr},
    Route,
};

#[component]
pub fn StatusBadge(status: BlogStatus) -> Element {
    let badge_class = match status {
        BlogStatus::Draft => "badge-ghost",
        BlogStatus::Published => "badge-success",
        BlogStatus::Scheduled => "badge-info",
    };
    rsx! {
        span { class: "badge {badge_class} uppercase text-xs", "{status}" }
    }
}

#[component]
pub fn TagChip(tag: Tag) -> Element {
    rsx! {
        span { class: "badge badge-outline badge-primary text-xs", "{tag.name}" }
    }
}

#[component]
pub fn BlogCard(blog: Blog) -> Element {
    log::debug!("BlogCard Rendered");

    let blog_id = blog.id;
    let click = move |_| {
        if let Some(blog_id) = blog_id {
            navigator().push(Route::BlogDetailView { blog_id });
        }
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
        .map(display_date);
    let excerpt = blog
        .excerpt
        .clone()
        .unwrap_or_else(|| blog.content.chars().take(180).collect());

    use_drop(|| log::debug!("BlogCard Dropped"));

    rsx! {
        div {
            class: "card card-lg border shadow-xl cursor-pointer transition-transform hover:scale-105",
            onclick: click,
            div { class: "card-body",
                div { class: "card-title text-2xl font-black", "{blog.title}" }
                div { class: "text-sm font-light",
                    "by "
                    span { class: "font-semibold", {author_name} }
                    if let Some(date) = date {
                        " — {date}"
                    }
                }
                p { class: "text-base text-base-content/80", {excerpt} }

                div { class: "grow" }

                div { class: "card-actions justify-between items-center",
                    div { class: "flex flex-wrap gap-1",
                        for tag in blog.tags.iter() {
                            TagChip { key: "{tag.id}", tag: tag.clone() }
                        }
                    }
                    if let Some(count) = blog.comments_count {
                        div { class: "flex items-center gap-1 text-sm text-base-content/60",
                            DrawSvg::<CommentText> { size: Size4 }
                            "{count}"
                        }
                    }
                }
            }
        }
    }
}
