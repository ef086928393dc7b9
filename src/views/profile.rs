use crate::prelude::*;

use crate::{
    components::svg::{AccountCircle, DrawSvg, Logout, SvgSize::Size10, SvgSize::Size5},
    utils::CCStr,
    Route,
};

#[component]
pub fn ProfileView() -> Element {
    let allowed = helper_hooks::use_auth_guard();

    let session_service = state_management::use_session_service();

    if !allowed() {
        return rsx! {};
    }

    let session = state_management::SESSION.read();
    let Some(Session::Authenticated(ref auth)) = *session else {
        return rsx! {};
    };

    let role = if auth.user.is_author() {
        "Author"
    } else {
        "Reader"
    };
    let authenticated_at = CCStr::from(auth.authenticated_at.format("%b %e, %Y %H:%M").to_string());
    let last_activity = CCStr::from(auth.last_activity.format("%b %e, %Y %H:%M").to_string());

    rsx! {
        super::TitledView {
            title: CCStr::from("Profile"),
            subtitle: CCStr::from("Your Scribe account."),
            div { class: "container mx-auto max-w-xl",
                div { class: "card border shadow-xl",
                    div { class: "card-body gap-4",
                        div { class: "flex flex-row items-center gap-4",
                            DrawSvg::<AccountCircle> { size: Size10 }
                            div {
                                div { class: "text-2xl font-black", "{auth.user.name}" }
                                div { class: "text-sm font-light", "{auth.user.email}" }
                            }
                            div { class: "grow" }
                            span { class: "badge badge-primary uppercase", {role} }
                        }
                        div { class: "text-sm font-light",
                            "Logged in: "
                            span { class: "font-semibold", {authenticated_at} }
                        }
                        div { class: "text-sm font-light",
                            "Last activity: "
                            span { class: "font-semibold", {last_activity} }
                        }
                        div { class: "card-actions justify-end",
                            button {
                                class: "btn btn-outline btn-error",
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
            }
        }
    }
}
