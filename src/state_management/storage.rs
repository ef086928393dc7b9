use std::path::{Path, PathBuf};

use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::{api::types::User, utils::CCStr};

use super::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfig {
    pub api_base_url: CCStr,
    pub datadir: PathBuf,
}
impl Default for ApplicationConfig {
    fn default() -> Self {
        let mut datadir: PathBuf = dirs_next::home_dir().unwrap_or_default();
        datadir.push(".scribe-gui");
        let api_base_url = std::env::var("SCRIBE_API_URL")
            .unwrap_or_else(|_| String::from("http://localhost:8000"));
        Self {
            api_base_url: CCStr::from(api_base_url),
            datadir,
        }
    }
}
pub static APPLICATION_CONFIG: GlobalSignal<ApplicationConfig> =
    Signal::global(|| ApplicationConfig::default());

/// The persisted authentication state, the desktop analog of the browser
/// `access_token`/`user`/`auth_timestamp`/`last_activity` storage keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: User,
    /// Unix timestamp of the OTP verification that produced the token.
    pub authenticated_at: i64,
    /// Unix timestamp of the last user navigation.
    pub last_activity: i64,
}

/// On-disk layout of `<datadir>/session.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    session: Option<StoredSession>,
    #[serde(default)]
    theme: Option<Theme>,
}

#[derive(Debug)]
pub enum StorageCommand {
    LoadSession {
        result: oneshot::Sender<Option<StoredSession>>,
    },
    SaveSession {
        session: StoredSession,
        result: oneshot::Sender<Result<(), String>>,
    },
    ClearSession {
        result: oneshot::Sender<Result<(), String>>,
    },
    /// Write-behind activity bump, no reply expected.
    TouchActivity { last_activity: i64 },
    LoadTheme {
        result: oneshot::Sender<Option<Theme>>,
    },
    SaveTheme {
        theme: Theme,
        result: oneshot::Sender<Result<(), String>>,
    },
}

pub(super) fn use_storage_service() -> Coroutine<StorageCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<StorageCommand>| async move {
            log::info!("storage_service (coroutine) - start");

            let current_config = create_config();
            let store_path = current_config.datadir.join("session.json");
            *APPLICATION_CONFIG.write() = current_config;

            let mut store = {
                let path = store_path.clone();
                tokio::task::spawn_blocking(move || read_store(&path))
                    .await
                    .unwrap()
            };

            while let Some(cmd) = rx.next().await {
                log::debug!("storage_service (coroutine) - Processing commmand {cmd:?}...");
                match cmd {
                    StorageCommand::LoadSession { result } => result
                        .send(store.session.clone())
                        .expect("chanel failure"),
                    StorageCommand::SaveSession { session, result } => {
                        store.session = Some(session);
                        result
                            .send(write_store(&store_path, &store).await)
                            .expect("chanel failure");
                    }
                    StorageCommand::ClearSession { result } => {
                        store.session = None;
                        result
                            .send(write_store(&store_path, &store).await)
                            .expect("chanel failure");
                    }
                    StorageCommand::TouchActivity { last_activity } => {
                        if let Some(session) = store.session.as_mut() {
                            session.last_activity = last_activity;
                            if let Err(e) = write_store(&store_path, &store).await {
                                log::error!("Could not persist the session activity: {e}");
                            }
                        }
                    }
                    StorageCommand::LoadTheme { result } => {
                        result.send(store.theme).expect("chanel failure")
                    }
                    StorageCommand::SaveTheme { theme, result } => {
                        store.theme = Some(theme);
                        result
                            .send(write_store(&store_path, &store).await)
                            .expect("chanel failure");
                    }
                }
                log::debug!("storage_service (coroutine) - Command processed");
            }
        },
    )
}

fn read_store(path: &Path) -> StoreFile {
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(store) => store,
            Err(e) => {
                log::error!("Could not parse {}, starting clean: {e}", path.display());
                StoreFile::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
        Err(e) => {
            log::error!("Could not read {}, starting clean: {e}", path.display());
            StoreFile::default()
        }
    }
}

async fn write_store(path: &Path, store: &StoreFile) -> Result<(), String> {
    let path = path.to_path_buf();
    let store = store.clone();
    tokio::task::spawn_blocking(move || {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let raw = serde_json::to_string_pretty(&store).map_err(|e| e.to_string())?;
        std::fs::write(&path, raw).map_err(|e| e.to_string())
    })
    .await
    .unwrap()
}

fn create_config() -> ApplicationConfig {
    let mut default_config = ApplicationConfig::default();

    // Env var overrides the default datadir, the API URL is already env-first
    if let Some(datadir) = std::env::var("SCRIBE_GUI_HOME")
        .ok()
        .map(|s| s.parse().expect("valid path string"))
    {
        default_config.datadir = datadir;
    }
    default_config
}
