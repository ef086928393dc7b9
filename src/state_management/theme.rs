use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use super::storage::StorageCommand;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

pub static THEME: GlobalSignal<Theme> = Signal::global(|| Theme::Dark);

#[derive(Debug)]
pub(super) enum ThemeCommand {
    /// Internal trigger a save into the store
    Persist { theme: Theme },
}

/// Theme service coroutine
pub(super) fn use_theme_service(
    storage_service: Coroutine<StorageCommand>,
) -> Coroutine<ThemeCommand> {
    let service_handle = use_coroutine(
        move |mut rx: UnboundedReceiver<ThemeCommand>| async move {
            log::info!("theme_service (coroutine) - start");

            let mut cached_value = load_theme(storage_service).await;
            *THEME.write() = cached_value;

            // Flag to trash the first persist command that will come from the initial run of the "use_effect"
            let mut discard_next_persist = true;

            while let Some(cmd) = rx.next().await {
                log::debug!("theme_service (coroutine) - Processing command {cmd:?}...");

                match cmd {
                    ThemeCommand::Persist { theme } => {
                        if discard_next_persist {
                            log::debug!("theme_service (coroutine) - Ignoring first Persist cmd.");
                            discard_next_persist = false;
                        }
                        if theme != cached_value {
                            log::debug!("theme_service (coroutine) - Theme changed, persisting...");
                            cached_value = theme;

                            let (result, rx) = oneshot::channel();
                            storage_service.send(StorageCommand::SaveTheme { theme, result });
                            match rx.await.expect("storage_service error") {
                                Ok(_) => (),
                                Err(msg) => log::error!("Could not persist the theme: {msg}"),
                            };
                        } else {
                            log::debug!(
                                "theme_service (coroutine) - Ignoring Persist cmd: already stored."
                            );
                        }
                    }
                }

                log::debug!("theme_service (coroutine) - Command processed");
            }
        },
    );
    use_effect(move || {
        service_handle.send(ThemeCommand::Persist { theme: THEME() });
    });
    service_handle
}

async fn load_theme(storage_service: Coroutine<StorageCommand>) -> Theme {
    let (result, rx) = oneshot::channel();
    storage_service.send(StorageCommand::LoadTheme { result });
    rx.await
        .expect("storage_service error")
        .unwrap_or_default()
}
