use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::{
    api::{
        types::{RegisterRequest, User},
        ApiClient, ApiError,
    },
    utils::{log_error_ccstr, CCStr, CheapClone},
};

use super::{
    clipboard::ClipboardCommand,
    event_bus::{publish_event, EventBus},
    session::{Session, SessionCommand, SessionExpiredEvent, SESSION},
};

pub fn use_event_bus() -> EventBus {
    use_coroutine_handle()
}

pub fn use_session_service() -> Coroutine<SessionCommand> {
    use_coroutine_handle()
}

pub fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine_handle()
}

pub async fn api_client(session_service: Coroutine<SessionCommand>) -> ApiClient {
    let (result, rx) = oneshot::channel();
    session_service.send(SessionCommand::GetApiClient { result });
    rx.await.expect("session_service error")
}

pub fn copy_to_clipboard(clipboard_service: Coroutine<ClipboardCommand>, text: &str) {
    clipboard_service.send(ClipboardCommand::Set(text.to_owned()));
}

/// Convert an API error into a displayable message, routing 401s into the
/// session-expired flow.
pub fn handle_api_error(event_bus: EventBus, error: ApiError) -> CCStr {
    if matches!(error, ApiError::Unauthorized) {
        publish_event(event_bus, SessionExpiredEvent);
    }
    log_error_ccstr(error)
}

pub async fn session_register(
    session_service: Coroutine<SessionCommand>,
    request: RegisterRequest,
) -> Result<(), String> {
    let (result, rx) = oneshot::channel();
    session_service.send(SessionCommand::Register { request, result });
    rx.await.expect("session_service error")
}

pub async fn session_request_otp(
    session_service: Coroutine<SessionCommand>,
    email: String,
) -> Result<(), String> {
    let (result, rx) = oneshot::channel();
    session_service.send(SessionCommand::RequestOtp { email, result });
    rx.await.expect("session_service error")
}

pub async fn session_verify_otp(
    session_service: Coroutine<SessionCommand>,
    email: String,
    otp_code: String,
) -> Result<(), String> {
    let (result, rx) = oneshot::channel();
    session_service.send(SessionCommand::VerifyOtp {
        email,
        otp_code,
        result,
    });
    rx.await.expect("session_service error")
}

pub fn session_logout(session_service: Coroutine<SessionCommand>) {
    session_service.send(SessionCommand::Logout);
}

pub fn touch_activity(session_service: Coroutine<SessionCommand>) {
    session_service.send(SessionCommand::TouchActivity);
}

pub fn current_user() -> Option<CheapClone<User>> {
    match *SESSION.read() {
        Some(Session::Authenticated(ref auth)) => Some(auth.user.clone()),
        _ => None,
    }
}

pub fn is_authenticated() -> bool {
    current_user().is_some()
}

pub fn is_author() -> bool {
    current_user().is_some_and(|user| user.is_author())
}

pub fn user_name() -> CCStr {
    current_user()
        .map(|user| CCStr::from(user.name.as_str()))
        .unwrap_or_else(|| CCStr::from("User"))
}
