//! QueueClip - System tray module
//!
//! Tray icon with queue status rows and the configuration menu

use tauri::{
    menu::{CheckMenuItem, CheckMenuItemBuilder, MenuBuilder, MenuItem, MenuItemBuilder, SubmenuBuilder},
    tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent},
    AppHandle, Emitter, Manager, Wry,
};

use crate::config::Settings;
use crate::queue::{Delimiter, QueueStatus};

/// Handles to the tray entries that change after the menu is built.
pub struct TrayHandles {
    tray: TrayIcon<Wry>,
    status: MenuItem<Wry>,
    preview: MenuItem<Wry>,
    loop_item: CheckMenuItem<Wry>,
    indicator_item: CheckMenuItem<Wry>,
    delimiters: Vec<(Delimiter, CheckMenuItem<Wry>)>,
}

const DELIMITER_CHOICES: [(&str, &str, Delimiter); 4] = [
    ("delim-newline", "Newline (\\n)", Delimiter::Newline),
    ("delim-comma", "Comma (,)", Delimiter::Comma),
    ("delim-tab", "Tab (\\t)", Delimiter::Tab),
    ("delim-semicolon", "Semicolon (;)", Delimiter::Semicolon),
];

/// Create the system tray.
pub fn create_tray(app: &AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    let settings = crate::config::get_settings();

    let status = MenuItemBuilder::with_id("status", "Queue: empty")
        .enabled(false)
        .build(app)?;
    let preview = MenuItemBuilder::with_id("preview", "Next: (none)")
        .enabled(false)
        .build(app)?;

    let loop_item = CheckMenuItemBuilder::with_id("loop", "Loop Mode")
        .checked(settings.loop_enabled)
        .build(app)?;
    let indicator_item = CheckMenuItemBuilder::with_id("indicator", "Show Indicator")
        .checked(settings.show_indicator)
        .build(app)?;

    let mut delimiters = Vec::new();
    for (id, label, value) in DELIMITER_CHOICES {
        let item = CheckMenuItemBuilder::with_id(id, label)
            .checked(value == settings.delimiter)
            .build(app)?;
        delimiters.push((value, item));
    }

    let mut delimiter_menu = SubmenuBuilder::new(app, "Delimiter");
    for (_, item) in &delimiters {
        delimiter_menu = delimiter_menu.item(item);
    }
    let delimiter_menu = delimiter_menu.build()?;

    let clear_item = MenuItemBuilder::with_id("clear", "Clear Queue").build(app)?;
    let settings_item = MenuItemBuilder::with_id("settings", "Settings...").build(app)?;
    let quit_item = MenuItemBuilder::with_id("quit", "Quit").build(app)?;

    let menu = MenuBuilder::new(app)
        .item(&status)
        .item(&preview)
        .separator()
        .item(&loop_item)
        .item(&indicator_item)
        .separator()
        .item(&delimiter_menu)
        .separator()
        .item(&clear_item)
        .item(&settings_item)
        .separator()
        .item(&quit_item)
        .build()?;

    // Use the app-level icon when one is bundled, otherwise a placeholder
    let tray = TrayIconBuilder::new()
        .menu(&menu)
        .tooltip("QueueClip - Ready")
        .icon(app.default_window_icon().cloned().unwrap_or_else(|| {
            tauri::image::Image::new_owned(vec![0u8; 16 * 16 * 4], 16, 16)
        }))
        .on_menu_event(|app, event| handle_menu_event(app, event.id().as_ref()))
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                crate::show_indicator(tray.app_handle());
            }
        })
        .build(app)?;

    app.manage(TrayHandles {
        tray,
        status,
        preview,
        loop_item,
        indicator_item,
        delimiters,
    });

    log::info!("Tray icon created");
    Ok(())
}

fn handle_menu_event(app: &AppHandle, id: &str) {
    match id {
        "loop" => {
            let enabled = app
                .state::<TrayHandles>()
                .loop_item
                .is_checked()
                .unwrap_or(false);
            if let Err(e) = crate::apply_loop_enabled(app, enabled) {
                log::error!("Failed to toggle loop mode: {}", e);
            }
        }
        "indicator" => {
            let visible = app
                .state::<TrayHandles>()
                .indicator_item
                .is_checked()
                .unwrap_or(true);
            if let Err(e) = crate::apply_show_indicator(app, visible) {
                log::error!("Failed to toggle indicator: {}", e);
            }
        }
        "clear" => {
            crate::clear_queue(app);
        }
        "settings" => {
            crate::show_indicator(app);
            let _ = app.emit("open-settings", ());
        }
        "quit" => {
            crate::shutdown(app);
            app.exit(0);
        }
        delim_id => {
            let choice = DELIMITER_CHOICES
                .iter()
                .find(|(id, _, _)| *id == delim_id)
                .map(|(_, _, value)| value.clone());
            if let Some(delimiter) = choice {
                if let Err(e) = crate::apply_delimiter(app, delimiter) {
                    log::error!("Failed to change delimiter: {}", e);
                }
            }
        }
    }
}

/// Refresh the status rows and tooltip from a queue snapshot.
pub fn update_status(app: &AppHandle, status: &QueueStatus) {
    let Some(handles) = app.try_state::<TrayHandles>() else {
        return;
    };

    match &status.next_preview {
        Some(preview) => {
            let _ = handles
                .status
                .set_text(format!("Queue: {} remaining", status.remaining));
            let _ = handles.preview.set_text(format!("Next: {}", preview));
            let _ = handles.tray.set_tooltip(Some(format!(
                "QueueClip - {}/{}: {}",
                status.position, status.total, preview
            )));
        }
        None => {
            let _ = handles.status.set_text("Queue: empty");
            let _ = handles.preview.set_text("Next: (none)");
            let _ = handles.tray.set_tooltip(Some("QueueClip - Ready"));
        }
    }
}

/// Align checkmarks with the current settings.
pub fn sync_settings(app: &AppHandle, settings: &Settings) {
    let Some(handles) = app.try_state::<TrayHandles>() else {
        return;
    };

    let _ = handles.loop_item.set_checked(settings.loop_enabled);
    let _ = handles.indicator_item.set_checked(settings.show_indicator);
    for (value, item) in &handles.delimiters {
        let _ = item.set_checked(*value == settings.delimiter);
    }
}
