//! QueueClip - Tauri command handlers
//!
//! Defines Rust commands callable from the indicator frontend

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter};

use crate::config::{self, IndicatorPosition, PasteMode, Settings};
use crate::queue::{Delimiter, QueueStatus};
use crate::{hotkey, paste};

/// Command execution result
#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Current queue snapshot
#[tauri::command]
pub fn get_queue_status() -> CommandResult<QueueStatus> {
    CommandResult::ok(crate::queue().lock().status())
}

/// Deliver the next item, same as a hotkey press
#[tauri::command]
pub fn paste_next(app: AppHandle) -> CommandResult<bool> {
    paste::deliver_next(&app);
    CommandResult::ok(true)
}

/// Drop all pending items
#[tauri::command]
pub fn clear_queue(app: AppHandle) -> CommandResult<bool> {
    crate::clear_queue(&app);
    CommandResult::ok(true)
}

/// Toggle loop mode
#[tauri::command]
pub fn set_loop_enabled(app: AppHandle, enabled: bool) -> CommandResult<bool> {
    match crate::apply_loop_enabled(&app, enabled) {
        Ok(()) => CommandResult::ok(enabled),
        Err(e) => CommandResult::err(format!("Failed to save settings: {}", e)),
    }
}

/// Change the delimiter; takes effect on the next clipboard capture
#[tauri::command]
pub fn set_delimiter(app: AppHandle, delimiter: Delimiter) -> CommandResult<bool> {
    match crate::apply_delimiter(&app, delimiter) {
        Ok(()) => CommandResult::ok(true),
        Err(e) => CommandResult::err(format!("Failed to save settings: {}", e)),
    }
}

/// Get current settings
#[tauri::command]
pub fn get_settings(app: AppHandle) -> CommandResult<Settings> {
    let mut settings = config::get_settings();

    // Reflect the actual auto-start state from the autostart plugin
    use tauri_plugin_autostart::ManagerExt;
    if let Ok(is_enabled) = app.autolaunch().is_enabled() {
        settings.auto_start = is_enabled;
    }

    CommandResult::ok(settings)
}

/// Settings update request from the frontend
#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    pub delimiter: Option<Delimiter>,
    pub loop_enabled: Option<bool>,
    pub hotkey: Option<String>,
    pub paste_mode: Option<PasteMode>,
    pub paste_delay_ms: Option<u64>,
    pub min_items: Option<usize>,
    pub show_indicator: Option<bool>,
    pub indicator_position: Option<IndicatorPosition>,
    pub auto_start: Option<bool>,
}

/// Update settings
#[tauri::command]
pub fn update_settings(app: AppHandle, updates: SettingsUpdate) -> CommandResult<Settings> {
    let mut settings = config::get_settings();

    if let Some(delimiter) = updates.delimiter {
        settings.delimiter = delimiter.clone();
        crate::queue().lock().set_delimiter(delimiter);
    }

    if let Some(enabled) = updates.loop_enabled {
        settings.loop_enabled = enabled;
        crate::queue().lock().set_loop(enabled);
    }

    if let Some(ref binding) = updates.hotkey {
        if let Err(e) = hotkey::rebind(&app, binding) {
            log::error!("Failed to rebind hotkey '{}': {}", binding, e);
            return CommandResult::err(format!("Failed to register hotkey: {}", e));
        }
        settings.hotkey = binding.clone();
    }

    if let Some(mode) = updates.paste_mode {
        settings.paste_mode = mode;
    }

    if let Some(delay) = updates.paste_delay_ms {
        settings.paste_delay_ms = delay;
    }

    if let Some(min_items) = updates.min_items {
        settings.min_items = min_items.max(1);
    }

    if let Some(auto_start) = updates.auto_start {
        settings.auto_start = auto_start;

        use tauri_plugin_autostart::ManagerExt;
        let autostart_manager = app.autolaunch();
        let result = if auto_start {
            autostart_manager.enable()
        } else {
            autostart_manager.disable()
        };

        if let Err(e) = result {
            log::error!("Failed to update autostart: {}", e);
            return CommandResult::err(format!("Failed to update autostart: {}", e));
        }
    }

    if let Some(position) = updates.indicator_position {
        settings.indicator_position = position;
    }

    if let Some(visible) = updates.show_indicator {
        settings.show_indicator = visible;
    }

    if let Err(e) = config::update_settings(settings.clone()) {
        return CommandResult::err(format!("Failed to save settings: {}", e));
    }

    // Apply UI-facing changes after the save went through
    if settings.show_indicator {
        crate::show_indicator(&app);
    } else {
        crate::hide_indicator(&app);
    }
    crate::tray::sync_settings(&app, &settings);
    let _ = app.emit("settings-changed", &settings);
    crate::emit_queue_update(&app);

    CommandResult::ok(settings)
}

/// Show the floating indicator
#[tauri::command]
pub fn show_indicator(app: AppHandle) -> CommandResult<bool> {
    crate::show_indicator(&app);
    CommandResult::ok(true)
}

/// Hide the floating indicator
#[tauri::command]
pub fn hide_indicator(app: AppHandle) -> CommandResult<bool> {
    crate::hide_indicator(&app);
    CommandResult::ok(true)
}
