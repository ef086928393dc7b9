use crate::prelude::*;

use crate::{
    api::{self, blogs::BlogListQuery, types::Blog},
    components::{
        blog::BlogCard,
        svg::{Close, DrawSvg, Magnify, SvgSize::Size5},
    },
    utils::CCStr,
};

const SCROLL_SENTINEL_ID: &str = "blog-list-sentinel";

#[component]
pub fn HomeView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Scribe"),
            subtitle: CCStr::from("Stories from the Scribe community."),
            BlogList {}
        }
    }
}

#[component]
fn BlogList() -> Element {
    log::debug!("BlogList Rendered");

    let session_service = state_management::use_session_service();
    let tags = helper_hooks::use_resource_tags();

    // `search` follows the input field, `query` is what was actually
    // submitted and what the fetcher reads
    let mut search = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut tag_filter = use_signal(String::new);

    let loader: UseInfiniteScroll<Blog> = helper_hooks::use_infinite_scroll(
        InfiniteScrollOptions::default(),
        move |request: PageRequest| async move {
            let client = state_management::api_client(session_service).await;
            let submitted = query.peek().trim().to_owned();
            let tag = tag_filter.peek().clone();
            let list_query = BlogListQuery {
                page: request.page,
                per_page: request.per_page,
                search: (!submitted.is_empty()).then(|| submitted.clone()),
            };
            if !tag.is_empty() {
                api::blogs::blogs_by_tag(&client, &tag, &list_query).await
            } else if submitted.is_empty() {
                api::blogs::list_blogs(&client, &list_query).await
            } else {
                api::blogs::search_blogs(&client, &list_query).await
            }
        },
    );

    use_effect(move || {
        loader.load_initial();
        loader.observe(SCROLL_SENTINEL_ID);
    });

    let submit_search = move |_| {
        query.set(search.peek().clone());
        loader.reset();
    };
    let clear_search = move |_| {
        search.set(String::new());
        query.set(String::new());
        loader.reset();
    };

    use_drop(|| log::debug!("BlogList Dropped"));

    rsx! {
        div { class: "container mx-auto flex flex-col gap-6",
            div { class: "flex flex-row justify-center gap-2",
                input {
                    r#type: "search",
                    class: "input w-full max-w-md",
                    placeholder: "Search blogs...",
                    value: "{search.read()}",
                    oninput: move |evt| search.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            query.set(search.peek().clone());
                            loader.reset();
                        }
                    },
                }
                button { class: "btn btn-primary", onclick: submit_search,
                    DrawSvg::<Magnify> { size: Size5 }
                    "Search"
                }
                select {
                    class: "select w-44",
                    value: "{tag_filter.read()}",
                    onchange: move |evt| {
                        tag_filter.set(evt.value());
                        loader.reset();
                    },
                    option { value: "", "All tags" }
                    if let Some(Ok(tag_list)) = &*tags.read() {
                        for tag in tag_list.iter() {
                            option { key: "{tag.id}", value: "{tag.name}", "{tag.name}" }
                        }
                    }
                }
                if !query.read().is_empty() {
                    button { class: "btn btn-ghost", onclick: clear_search,
                        DrawSvg::<Close> { size: Size5 }
                        "Clear"
                    }
                }
            }

            if let Some(error) = loader.error() {
                div { class: "alert alert-error justify-center",
                    span { {error} }
                    button { class: "btn btn-sm", onclick: move |_| loader.refresh(), "Retry" }
                }
            }

            if loader.is_first_load() {
                div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                    for i in 0..6 {
                        div { key: "{i}", class: "skeleton h-56 w-full" }
                    }
                }
            } else if loader.is_empty() {
                div { class: "text-center text-base-content/60 py-16",
                    if query.read().is_empty() {
                        "No blogs published yet."
                    } else {
                        "No blogs match your search."
                    }
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                    for blog in loader.items() {
                        BlogCard { key: "{blog.id.unwrap_or_default()}", blog }
                    }
                }
                if loader.is_loading() {
                    div { class: "flex justify-center py-4",
                        span { class: "loading loading-dots loading-lg" }
                    }
                } else if !loader.has_more() {
                    div { class: "text-center text-sm text-base-content/60 py-4",
                        "Showing {loader.items().len()} of {loader.total_items()} blogs"
                    }
                }
            }

            // Viewport sentinel driving the scroll-triggered loads
            div { id: SCROLL_SENTINEL_ID, class: "h-px" }
        }
    }
}
