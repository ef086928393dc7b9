use crate::prelude::*;

use crate::{
    components::{
        login::LoginModal,
        svg::{AccountCircle, DrawSvg, Login, Logout, Moon, Sun, SvgSize::Size10, SvgSize::Size5},
    },
    Route,
};

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    let session_service = state_management::use_session_service();

    let router = try_consume_context::<RouterContext>().expect("Router is present");
    let current_route = use_memo(move || router.current::<crate::Route>());

    // Every navigation by an authenticated user refreshes the activity timestamp
    use_effect(move || {
        let _ = current_route();
        if state_management::is_authenticated() {
            state_management::touch_activity(session_service);
        }
    });

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "relative min-h-dvh",
            header { class: "bg-base-100 fixed top-0 w-full z-20 shadow-lg shadow-base-content/10",
                NavBar {}
            }
            main { class: "pt-12 pb-16 mx-8 text-justify", Outlet::<Route> {} }
            footer { class: "absolute bottom-px w-full h-12 px-8 z-0",
                div { class: "h-px border-t border-solid border-gray-500" }
                Footer {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    log::debug!("NavBar reload");

    let session_service = state_management::use_session_service();
    let login_open = use_signal(|| false);

    use_drop(|| log::debug!("NavBar Dropped"));

    rsx! {
        nav { class: "h-12 px-2 flex flex-row gap-2",
            div { class: "h-full flex flex-none gap-2 items-center",
                div {
                    div { class: "text-lg font-black text-nowrap", "Scribe" }
                    div { class: "text-xs text-primary italic", "stories worth reading" }
                }
            }
            div { class: "basis-10" }
            NavLink { route: Route::HomeView {}, "Blogs" }
            if state_management::is_author() {
                NavLink { route: Route::DashboardView {}, "Dashboard" }
                NavLink { route: Route::TagManagementView {}, "Tags" }
            }
            div { class: "grow" }
            DarkModeToggle {}
            if state_management::is_authenticated() {
                div { class: "dropdown dropdown-end content-center",
                    div {
                        role: "button",
                        tabindex: "0",
                        class: "btn btn-ghost",
                        DrawSvg::<AccountCircle> {}
                        {state_management::user_name()}
                    }
                    ul { class: "dropdown-content menu bg-base-100 rounded-box z-30 w-44 p-2 shadow-sm",
                        li {
                            Link { to: Route::ProfileView {}, "Profile" }
                        }
                        li {
                            a {
                                onclick: move |_| {
                                    state_management::session_logout(session_service);
                                    navigator().push(Route::HomeView {});
                                },
                                DrawSvg::<Logout> { size: Size5 }
                                "Logout"
                            }
                        }
                    }
                }
            } else {
                button {
                    class: "btn btn-primary btn-sm self-center",
                    onclick: move |_| {
                        let mut login_open = login_open;
                        login_open.set(true);
                    },
                    DrawSvg::<Login> { size: Size5 }
                    "Login"
                }
            }
            LoginModal { is_open: login_open }
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        div { class: "basis-10 content-center flex",
            Link {
                class: "h-full px-4 content-center text-lg text-nowrap font-bold uppercase hover:bg-primary/10",
                active_class: "bg-primary/10 text-primary",
                to: route,
                {children}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "h-full text-primary text-right content-center", "2025 — Scribe Press" }
    }
}

#[component]
fn DarkModeToggle() -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            name: "theme",
            class: "theme-controller hidden",
            value: match state_management::THEME() {
                Theme::Light => "light",
                Theme::Dark => "dark",
            },
            tabindex: "-1",
            checked: true,
        }
        label { class: "swap swap-rotate",
            input {
                r#type: "checkbox",
                name: "theme",
                tabindex: "-1",
                oninput: move |event| {
                    *state_management::THEME.write() = match event.checked() {
                        true => Theme::Dark,
                        false => Theme::Light,
                    };
                },
                checked: matches!(state_management::THEME(), Theme::Dark),
            }
            DrawSvg::<Sun> { base_class: "swap-off fill-current", size: Size10 }
            DrawSvg::<Moon> { base_class: "swap-on fill-current", size: Size10 }
        }
    }
}
