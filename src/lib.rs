//! QueueClip - A sequential clipboard paster
//!
//! Splits a multi-line clipboard payload into a queue of items and delivers
//! one item per global hotkey press into the focused application.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod hotkey;
pub mod paste;
pub mod queue;
pub mod tray;

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tauri::{AppHandle, Emitter, Manager, PhysicalPosition};

use clipboard::ClipboardMonitor;
use config::IndicatorPosition;
use queue::{Delimiter, QueueEngine};

/// Label of the floating indicator window (see tauri.conf.json).
pub const INDICATOR_WINDOW: &str = "indicator";

/// Process-wide queue engine. The hotkey callback, the clipboard capture
/// handler, and the UI commands all serialize on this lock.
static QUEUE: Lazy<Mutex<QueueEngine>> = Lazy::new(|| Mutex::new(QueueEngine::new()));

/// Global clipboard monitor instance
static CLIPBOARD_MONITOR: Lazy<Arc<Mutex<Option<ClipboardMonitor>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

pub(crate) fn queue() -> &'static Mutex<QueueEngine> {
    &QUEUE
}

pub(crate) fn with_monitor(f: impl FnOnce(&ClipboardMonitor)) {
    if let Some(monitor) = CLIPBOARD_MONITOR.lock().as_ref() {
        f(monitor);
    }
}

/// Get the application data directory
fn get_data_dir(app: &AppHandle) -> PathBuf {
    app.path()
        .app_data_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Push the current queue state to the tray and the indicator.
pub(crate) fn emit_queue_update(app: &AppHandle) {
    let status = QUEUE.lock().status();
    tray::update_status(app, &status);
    if let Err(e) = app.emit("queue-updated", &status) {
        log::warn!("Failed to emit queue-updated event: {}", e);
    }
    if status.next_preview.is_none() {
        let _ = app.emit("queue-empty", ());
    }
}

/// Surface a non-fatal problem in the indicator.
pub(crate) fn notify_status(app: &AppHandle, message: &str) {
    log::warn!("{}", message);
    let _ = app.emit("status-message", message);
}

/// Handle a new clipboard payload reported by the monitor.
///
/// The payload is only captured when splitting it with the active delimiter
/// yields at least `min_items` fragments; single-item copies must not hijack
/// the paste key.
fn handle_clipboard_capture(app: &AppHandle, text: String) {
    let settings = config::get_settings();

    let mut engine = QUEUE.lock();
    let fragments = engine.delimiter().split(&text);
    if fragments.len() < settings.min_items {
        log::debug!(
            "Clipboard change has {} item(s), below threshold {}; ignoring",
            fragments.len(),
            settings.min_items
        );
        return;
    }
    let count = engine.load_items(fragments);
    drop(engine);

    log::info!("Captured {} items from clipboard", count);
    emit_queue_update(app);

    if settings.show_indicator {
        show_indicator(app);
    }
}

/// Toggle loop mode on the engine and persist it.
pub(crate) fn apply_loop_enabled(
    app: &AppHandle,
    enabled: bool,
) -> Result<(), config::SettingsError> {
    QUEUE.lock().set_loop(enabled);

    let mut settings = config::get_settings();
    settings.loop_enabled = enabled;
    config::update_settings(settings.clone())?;

    tray::sync_settings(app, &settings);
    let _ = app.emit("settings-changed", &settings);
    emit_queue_update(app);
    Ok(())
}

/// Change the delimiter and persist it. Takes effect on the next capture;
/// the current queue is left as it was split.
pub(crate) fn apply_delimiter(
    app: &AppHandle,
    delimiter: Delimiter,
) -> Result<(), config::SettingsError> {
    QUEUE.lock().set_delimiter(delimiter.clone());

    let mut settings = config::get_settings();
    settings.delimiter = delimiter;
    config::update_settings(settings.clone())?;

    log::info!("Delimiter changed to {}", settings.delimiter.label());
    tray::sync_settings(app, &settings);
    let _ = app.emit("settings-changed", &settings);
    Ok(())
}

/// Toggle the floating indicator and persist the choice.
pub(crate) fn apply_show_indicator(
    app: &AppHandle,
    visible: bool,
) -> Result<(), config::SettingsError> {
    let mut settings = config::get_settings();
    settings.show_indicator = visible;
    config::update_settings(settings.clone())?;

    if visible {
        show_indicator(app);
    } else {
        hide_indicator(app);
    }
    tray::sync_settings(app, &settings);
    let _ = app.emit("settings-changed", &settings);
    Ok(())
}

/// Empty the queue and refresh the UI.
pub(crate) fn clear_queue(app: &AppHandle) {
    QUEUE.lock().clear();
    log::info!("Queue cleared");
    emit_queue_update(app);
}

/// Show the indicator in its configured corner, without focusing it.
pub(crate) fn show_indicator(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(INDICATOR_WINDOW) {
        position_indicator(app);
        let _ = window.show();
    }
}

pub(crate) fn hide_indicator(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(INDICATOR_WINDOW) {
        let _ = window.hide();
    }
}

/// Pin the indicator window to the corner chosen in settings.
pub(crate) fn position_indicator(app: &AppHandle) {
    let Some(window) = app.get_webview_window(INDICATOR_WINDOW) else {
        return;
    };
    let Ok(Some(monitor)) = window.current_monitor() else {
        return;
    };
    let Ok(size) = window.outer_size() else {
        return;
    };

    let margin = (20.0 * monitor.scale_factor()) as i32;
    let screen_pos = monitor.position();
    let screen = monitor.size();
    let win_w = size.width as i32;
    let win_h = size.height as i32;

    let (x, y) = match config::get_settings().indicator_position {
        IndicatorPosition::TopRight => (
            screen_pos.x + screen.width as i32 - win_w - margin,
            screen_pos.y + margin,
        ),
        IndicatorPosition::TopLeft => (screen_pos.x + margin, screen_pos.y + margin),
        IndicatorPosition::BottomRight => (
            screen_pos.x + screen.width as i32 - win_w - margin,
            screen_pos.y + screen.height as i32 - win_h - margin,
        ),
        IndicatorPosition::BottomLeft => (
            screen_pos.x + margin,
            screen_pos.y + screen.height as i32 - win_h - margin,
        ),
    };

    let _ = window.set_position(PhysicalPosition::new(x, y));
}

/// Tear down background listeners before exit.
pub(crate) fn shutdown(app: &AppHandle) {
    with_monitor(|m| m.stop());
    hotkey::unregister(app);
}

/// Start clipboard monitoring
fn start_clipboard_monitor(app: AppHandle) {
    let monitor = ClipboardMonitor::default();

    let app_clone = app.clone();
    monitor.start(move |text| {
        handle_clipboard_capture(&app_clone, text);
    });

    *CLIPBOARD_MONITOR.lock() = Some(monitor);
    log::info!("Clipboard monitor started");
}

/// Application main entry point
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("QueueClip starting...");

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // A second launch just brings up the existing indicator
            log::info!("Second instance detected, showing indicator");
            show_indicator(app);
        }))
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_autostart::init(
            tauri_plugin_autostart::MacosLauncher::LaunchAgent,
            None,
        ))
        .invoke_handler(tauri::generate_handler![
            commands::get_queue_status,
            commands::paste_next,
            commands::clear_queue,
            commands::set_loop_enabled,
            commands::set_delimiter,
            commands::get_settings,
            commands::update_settings,
            commands::show_indicator,
            commands::hide_indicator,
        ])
        .setup(|app| {
            let app_handle = app.handle().clone();

            let data_dir = get_data_dir(&app_handle);
            log::info!("Data directory: {:?}", data_dir);

            config::init_settings(&data_dir);
            let settings = config::get_settings();

            {
                let mut engine = QUEUE.lock();
                engine.set_loop(settings.loop_enabled);
                engine.set_delimiter(settings.delimiter.clone());
            }

            if let Err(e) = tray::create_tray(&app_handle) {
                log::error!("Failed to create tray: {}", e);
            }

            match hotkey::register(&app_handle, &settings.hotkey) {
                Ok(binding) => {
                    if binding != settings.hotkey {
                        notify_status(
                            &app_handle,
                            &format!("Hotkey {} unavailable, using {}", settings.hotkey, binding),
                        );
                    }
                }
                Err(e) => {
                    log::error!("Failed to register any paste hotkey: {}", e);
                    notify_status(&app_handle, "No usable paste hotkey; check your bindings");
                }
            }

            start_clipboard_monitor(app_handle.clone());

            position_indicator(&app_handle);
            if settings.show_indicator {
                show_indicator(&app_handle);
            }

            log::info!("QueueClip initialized successfully");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
