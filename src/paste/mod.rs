//! QueueClip - Paste delivery
//!
//! Moves the next queue item into the focused application

pub mod injector;

pub use injector::InjectError;

use std::time::Duration;

use tauri::AppHandle;

use crate::clipboard::{self, ClipboardError};
use crate::config::{self, PasteMode};

/// Settle time between writing the clipboard and sending the chord.
const CLIPBOARD_SETTLE: Duration = Duration::from_millis(85);

/// Paste error type
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Inject(#[from] InjectError),
}

/// Deliver the next queue item to the focused window.
///
/// Runs the whole sequence on the async runtime so the hotkey callback never
/// blocks. An exhausted queue is a silent no-op; delivery failures are logged
/// and surfaced as a status message.
pub fn deliver_next(app: &AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = deliver_next_inner(&app).await {
            log::error!("Paste delivery failed: {}", e);
            crate::notify_status(&app, &format!("Paste failed: {}", e));
        }
    });
}

async fn deliver_next_inner(app: &AppHandle) -> Result<(), PasteError> {
    let settings = config::get_settings();

    let Some(item) = crate::queue().lock().peek().map(str::to_owned) else {
        log::debug!("Hotkey fired with an exhausted queue");
        return Ok(());
    };

    match settings.paste_mode {
        PasteMode::Type => {
            injector::type_text(&item)?;
            advance_and_refresh(app);
        }
        PasteMode::Clipboard => {
            // Keep whatever the user had in the clipboard so it can be put
            // back after the paste lands.
            let original = clipboard::read_text().unwrap_or_default();

            crate::with_monitor(|m| m.pause());

            let injected = inject_via_clipboard(&item).await;
            if let Err(e) = injected {
                crate::with_monitor(|m| m.resume());
                return Err(e);
            }

            advance_and_refresh(app);

            tokio::time::sleep(Duration::from_millis(settings.paste_delay_ms)).await;
            restore_clipboard(&item, &original);
            crate::with_monitor(|m| m.resume());
        }
    }

    Ok(())
}

async fn inject_via_clipboard(item: &str) -> Result<(), PasteError> {
    clipboard::write_text(item)?;
    tokio::time::sleep(CLIPBOARD_SETTLE).await;
    injector::send_paste_chord()?;
    Ok(())
}

/// Cursor advancement happens only after the input actually went out.
fn advance_and_refresh(app: &AppHandle) {
    if let Some(item) = crate::queue().lock().next() {
        log::info!("Pasted queue item ({} chars)", item.chars().count());
    }
    crate::emit_queue_update(app);
}

/// Put the user's clipboard back, unless they copied something new during
/// the paste delay; in that case keep their content and re-arm the monitor
/// so it is not re-captured.
fn restore_clipboard(injected: &str, original: &str) {
    match clipboard::read_text() {
        Ok(current) if current == injected => {
            if let Err(e) = clipboard::write_text(original) {
                log::warn!("Failed to restore clipboard: {}", e);
                return;
            }
            crate::with_monitor(|m| m.update_last_text(original));
        }
        Ok(current) => {
            log::debug!("Clipboard changed during paste delay, skipping restore");
            crate::with_monitor(|m| m.update_last_text(&current));
        }
        Err(e) => {
            log::warn!("Could not inspect clipboard before restore: {}", e);
        }
    }
}
