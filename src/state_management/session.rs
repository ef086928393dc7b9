use dioxus::prelude::*;

use chrono::{DateTime, Utc};
use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::{
    api::{
        self,
        types::{RegisterRequest, User},
        ApiClient,
    },
    prelude::alert_warn,
    utils::{log_error, CheapClone},
};

use super::{
    event_bus::{subscribe_event, EventBus},
    storage::{StorageCommand, StoredSession, APPLICATION_CONFIG},
};

/// Sessions die 24h after authentication, and 24h after the last activity.
const SESSION_MAX_AGE_SECS: i64 = 24 * 60 * 60;
const SESSION_MAX_IDLE_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub user: CheapClone<User>,
    pub authenticated_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated(AuthenticatedSession),
}

/// `None` until the persisted session restore has run.
pub static SESSION: GlobalSignal<Option<Session>> = Signal::global(|| None);

/// Fired (through the event bus) when any API call comes back 401.
///
/// The session service subscribes and clears the local state, the desktop
/// analog of the browser `auth:logout` custom event.
#[derive(Debug, Clone, Copy)]
pub struct SessionExpiredEvent;
impl super::event_bus::EventId for SessionExpiredEvent {
    fn event_id() -> &'static str {
        "session_expired"
    }
}

#[derive(Debug)]
pub enum SessionCommand {
    Register {
        request: RegisterRequest,
        result: oneshot::Sender<Result<(), String>>,
    },
    RequestOtp {
        email: String,
        result: oneshot::Sender<Result<(), String>>,
    },
    VerifyOtp {
        email: String,
        otp_code: String,
        result: oneshot::Sender<Result<(), String>>,
    },
    Logout,
    /// Refresh the last-activity timestamp, in memory and on disk.
    TouchActivity,
    /// Drop the authenticated state without calling the server.
    Expire,
    GetApiClient {
        result: oneshot::Sender<ApiClient>,
    },
}

pub(super) fn use_session_service(
    event_bus: EventBus,
    storage_service: Coroutine<StorageCommand>,
) -> Coroutine<SessionCommand> {
    let service_handle = use_coroutine(
        move |mut rx: UnboundedReceiver<SessionCommand>| async move {
            log::info!("session_service (coroutine) - start");

            let api_client = ApiClient::new(APPLICATION_CONFIG.peek().api_base_url.as_ref());

            *SESSION.write() = Some(restore_session(&api_client, storage_service).await);

            while let Some(cmd) = rx.next().await {
                log::debug!("session_service (coroutine) - Processing commmand {cmd:?}...");
                match cmd {
                    SessionCommand::Register { request, result } => {
                        let outcome = api::auth::register(&api_client, &request)
                            .await
                            .map_err(log_error);
                        result.send(outcome).expect("chanel failure");
                    }
                    SessionCommand::RequestOtp { email, result } => {
                        let outcome = api::auth::request_otp(&api_client, &email)
                            .await
                            .map_err(log_error);
                        result.send(outcome).expect("chanel failure");
                    }
                    SessionCommand::VerifyOtp {
                        email,
                        otp_code,
                        result,
                    } => {
                        let outcome =
                            match api::auth::verify_otp(&api_client, &email, &otp_code).await {
                                Ok(auth_data) => {
                                    api_client.set_token(Some(auth_data.token.clone())).await;
                                    let now = Utc::now().timestamp();
                                    let stored = StoredSession {
                                        access_token: auth_data.token,
                                        user: auth_data.user,
                                        authenticated_at: now,
                                        last_activity: now,
                                    };
                                    if let Err(e) =
                                        save_stored_session(storage_service, stored.clone()).await
                                    {
                                        log::error!("Could not persist the session: {e}");
                                    }
                                    *SESSION.write() =
                                        Some(Session::Authenticated(stored.into()));
                                    Ok(())
                                }
                                Err(e) => Err(log_error(e)),
                            };
                        result.send(outcome).expect("chanel failure");
                    }
                    SessionCommand::Logout => {
                        if api_client.has_token().await {
                            if let Err(e) = api::auth::logout(&api_client).await {
                                log::error!("Logout API error: {e}");
                            }
                        }
                        api_client.set_token(None).await;
                        clear_stored_session(storage_service).await;
                        *SESSION.write() = Some(Session::Anonymous);
                    }
                    SessionCommand::TouchActivity => {
                        let now = Utc::now();
                        let mut session = SESSION.write();
                        if let Some(Session::Authenticated(ref mut auth)) = *session {
                            auth.last_activity = now;
                            storage_service.send(StorageCommand::TouchActivity {
                                last_activity: now.timestamp(),
                            });
                        }
                    }
                    SessionCommand::Expire => {
                        if matches!(*SESSION.peek(), Some(Session::Authenticated(_))) {
                            api_client.set_token(None).await;
                            clear_stored_session(storage_service).await;
                            *SESSION.write() = Some(Session::Anonymous);
                            alert_warn("Your session expired, please login again.");
                        }
                    }
                    SessionCommand::GetApiClient { result } => {
                        result.send(api_client.clone()).expect("chanel failure");
                    }
                }
                log::debug!("session_service (coroutine) - Command processed");
            }
        },
    );
    subscribe_event(event_bus, move |_event: SessionExpiredEvent| {
        service_handle.send(SessionCommand::Expire);
    });
    service_handle
}

impl From<StoredSession> for AuthenticatedSession {
    fn from(stored: StoredSession) -> Self {
        Self {
            user: CheapClone::new(stored.user),
            authenticated_at: DateTime::from_timestamp(stored.authenticated_at, 0)
                .unwrap_or_else(Utc::now),
            last_activity: DateTime::from_timestamp(stored.last_activity, 0)
                .unwrap_or_else(Utc::now),
        }
    }
}

async fn restore_session(
    api_client: &ApiClient,
    storage_service: Coroutine<StorageCommand>,
) -> Session {
    let (result, rx) = oneshot::channel();
    storage_service.send(StorageCommand::LoadSession { result });
    let stored = rx.await.expect("storage_service error");

    match stored {
        Some(stored) if !stored_session_is_stale(&stored, Utc::now().timestamp()) => {
            log::info!("Restoring persisted session for {}", stored.user.email);
            api_client.set_token(Some(stored.access_token.clone())).await;
            Session::Authenticated(stored.into())
        }
        Some(_) => {
            log::info!("Discarding stale persisted session");
            clear_stored_session(storage_service).await;
            Session::Anonymous
        }
        None => Session::Anonymous,
    }
}

fn stored_session_is_stale(stored: &StoredSession, now: i64) -> bool {
    now - stored.authenticated_at > SESSION_MAX_AGE_SECS
        || now - stored.last_activity > SESSION_MAX_IDLE_SECS
}

async fn save_stored_session(
    storage_service: Coroutine<StorageCommand>,
    session: StoredSession,
) -> Result<(), String> {
    let (result, rx) = oneshot::channel();
    storage_service.send(StorageCommand::SaveSession { session, result });
    rx.await.expect("storage_service error")
}

async fn clear_stored_session(storage_service: Coroutine<StorageCommand>) {
    let (result, rx) = oneshot::channel();
    storage_service.send(StorageCommand::ClearSession { result });
    if let Err(e) = rx.await.expect("storage_service error") {
        log::error!("Could not clear the persisted session: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn stored(authenticated_at: i64, last_activity: i64) -> StoredSession {
        StoredSession {
            access_token: String::from("token"),
            user: User {
                id: 1,
                name: String::from("Ada"),
                email: String::from("ada@scribe.press"),
                role: Role::Author,
            },
            authenticated_at,
            last_activity,
        }
    }

    #[test]
    fn test_fresh_session_is_not_stale() {
        let now = 1_000_000;
        assert!(!stored_session_is_stale(&stored(now - 60, now - 60), now));
    }

    #[test]
    fn test_session_older_than_a_day_is_stale() {
        let now = 1_000_000;
        let auth = now - SESSION_MAX_AGE_SECS - 1;
        assert!(stored_session_is_stale(&stored(auth, now - 60), now));
    }

    #[test]
    fn test_idle_session_is_stale_even_when_recently_authenticated() {
        let now = 1_000_000;
        let idle = now - SESSION_MAX_IDLE_SECS - 1;
        assert!(stored_session_is_stale(&stored(now - 60, idle), now));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let now = 1_000_000;
        let auth = now - SESSION_MAX_AGE_SECS;
        assert!(!stored_session_is_stale(&stored(auth, auth), now));
    }
}
