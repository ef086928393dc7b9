use crate::prelude::*;

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    api::types::RegisterRequest,
    components::{
        inputs::InputField,
        modal::{CloseModalButton, ConfigModal},
        svg::{DrawSvg, Login, Send},
    },
    utils::CCStr,
};

fn email_is_valid(email: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"))
        .is_match(email)
}

/// Two-step OTP login (request a code, then verify it), with a registration
/// variant behind a toggle.
#[component]
pub fn LoginModal(mut is_open: Signal<bool>) -> Element {
    log::debug!("LoginModal Rendered");

    let session_service = state_management::use_session_service();

    let mut email = use_signal(String::new);
    let mut otp_code = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut registering = use_signal(|| false);
    let mut otp_sent = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let email_error = use_memo(move || {
        let email = email.read();
        (!email.is_empty() && !email_is_valid(&email))
            .then(|| CCStr::from("Please enter a valid email address"))
    });
    let email_ready = use_memo(move || email_is_valid(&email.read()));

    let mut reset_flow = move || {
        otp_code.set(String::new());
        otp_sent.set(false);
        busy.set(false);
    };

    let request_otp = move |_| {
        spawn(async move {
            busy.set(true);
            match state_management::session_request_otp(session_service, email.peek().clone())
                .await
            {
                Ok(()) => {
                    otp_sent.set(true);
                    alert_info("We sent a login code to your email.");
                }
                Err(message) => alert_error(message),
            }
            busy.set(false);
        });
    };

    let verify_otp = move |_| {
        spawn(async move {
            busy.set(true);
            match state_management::session_verify_otp(
                session_service,
                email.peek().clone(),
                otp_code.peek().trim().to_owned(),
            )
            .await
            {
                Ok(()) => {
                    alert_success("Welcome back!");
                    reset_flow();
                    is_open.set(false);
                }
                Err(message) => {
                    alert_error(message);
                    busy.set(false);
                }
            }
        });
    };

    let register = move |_| {
        spawn(async move {
            busy.set(true);
            let request = RegisterRequest {
                name: name.peek().trim().to_owned(),
                email: email.peek().clone(),
            };
            match state_management::session_register(session_service, request).await {
                Ok(()) => {
                    alert_success("Account created, you can now request a login code.");
                    registering.set(false);
                }
                Err(message) => alert_error(message),
            }
            busy.set(false);
        });
    };

    use_drop(|| log::debug!("LoginModal Dropped"));

    let title = if registering() {
        "Create an account"
    } else {
        "Login to Scribe"
    };

    rsx! {
        ConfigModal {
            is_open,
            title,
            div { class: "flex flex-col gap-2 w-sm",
                if registering() {
                    InputField::<String> {
                        title: "Name",
                        value: name,
                        placeholder: "Jane Writer",
                        value_error: None::<CCStr>,
                    }
                }
                InputField::<String> {
                    title: "Email",
                    value: email,
                    r#type: "email",
                    placeholder: "you@example.com",
                    value_error: email_error,
                }
                if otp_sent() && !registering() {
                    InputField::<String> {
                        title: "Login code",
                        description: "The 6-digit code we emailed you.",
                        value: otp_code,
                        placeholder: "123456",
                        value_error: None::<CCStr>,
                    }
                }

                div { class: "flex flex-row justify-end gap-2 mt-4",
                    CloseModalButton { signal: is_open }
                    if registering() {
                        button {
                            class: "btn btn-primary",
                            disabled: busy() || !email_ready() || name.read().trim().is_empty(),
                            onclick: register,
                            DrawSvg::<Send> {}
                            "Register"
                        }
                    } else if otp_sent() {
                        button {
                            class: "btn btn-primary",
                            disabled: busy() || otp_code.read().trim().is_empty(),
                            onclick: verify_otp,
                            DrawSvg::<Login> {}
                            "Verify code"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: busy() || !email_ready(),
                            onclick: request_otp,
                            DrawSvg::<Send> {}
                            "Send login code"
                        }
                    }
                }

                div { class: "text-sm text-center mt-2",
                    if registering() {
                        "Already registered? "
                        a {
                            class: "link link-primary",
                            onclick: move |_| registering.set(false),
                            "Login instead"
                        }
                    } else {
                        "No account yet? "
                        a {
                            class: "link link-primary",
                            onclick: move |_| {
                                reset_flow();
                                registering.set(true);
                            },
                            "Create one"
                        }
                    }
                }
            }
        }
    }
}
