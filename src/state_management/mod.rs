mod clipboard;
mod event_bus;
mod helpers;
mod session;
mod storage;
mod theme;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let event_bus_service = event_bus::use_event_bus_service();
    let storage_service = storage::use_storage_service();
    let _ = session::use_session_service(event_bus_service, storage_service);
    let _ = theme::use_theme_service(storage_service);
    let _ = clipboard::use_clipboard_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::session::{AuthenticatedSession, Session};
    pub use super::storage::{ApplicationConfig, StoredSession};
    pub use super::theme::Theme;

    pub mod state_management {
        pub use super::super::event_bus::{publish_event, subscribe_event};
        pub use super::super::helpers::*;
        pub use super::super::session::{SessionExpiredEvent, SESSION};
        pub use super::super::storage::APPLICATION_CONFIG;
        pub use super::super::theme::THEME;
    }
}
