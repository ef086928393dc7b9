#![windows_subsystem = "windows"]
mod api;
mod components;
mod helper_hooks;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::components::alerts::{alert_error, alert_info, alert_success, alert_warn};
    pub use super::helper_hooks::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use components::alerts::AlertsContainer;
use prelude::*;

use views::{
    blog_detail::BlogDetailView,
    blog_form::{BlogCreateView, BlogEditView},
    dashboard::DashboardView,
    home::HomeView,
    main_layout::MainLayout,
    profile::ProfileView,
    tag_management::TagManagementView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        HomeView {},
        #[nest("/blog")]
            #[route("/create")]
            BlogCreateView {},
            #[route("/edit/:blog_id")]
            BlogEditView { blog_id: u64 },
            #[route("/:blog_id")]
            BlogDetailView { blog_id: u64 },
        #[end_nest]
        #[route("/manage/tags")]
        TagManagementView {},
        #[route("/dashboard")]
        DashboardView {},
        #[route("/profile")]
        ProfileView {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &'static str = "Scribe";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    _ = crate::state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        div {
            id: "app",
            class: "text-base",
            class: if matches!(prelude::state_management::THEME(), Theme::Dark) { "dark" },
            AlertsContainer {}
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1440, 960))
                    .with_maximized(false)
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
