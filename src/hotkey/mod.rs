//! QueueClip - Global hotkey module
//!
//! One paste binding at a time, replaced atomically on reconfiguration

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

/// Default paste binding.
pub const DEFAULT_BINDING: &str = "F9";

/// Last-resort binding when both the configured and the default one are taken.
const FALLBACK_BINDING: &str = "Ctrl+Shift+F9";

/// Normalize a user binding into plugin syntax ("Win" is accepted as an
/// alias for the super key).
fn normalize(binding: &str) -> String {
    binding.to_lowercase().replace("win", "super")
}

fn register_binding(app: &AppHandle, binding: &str) -> Result<(), String> {
    let shortcut: Shortcut = normalize(binding)
        .parse()
        .map_err(|e| format!("invalid binding '{}': {}", binding, e))?;

    app.global_shortcut()
        .on_shortcut(shortcut, |app, _shortcut, event| {
            if event.state == ShortcutState::Pressed {
                log::debug!("Paste hotkey pressed");
                crate::paste::deliver_next(app);
            }
        })
        .map_err(|e| e.to_string())
}

/// Register the paste hotkey, falling back to `F9` and then `Ctrl+Shift+F9`
/// when the configured binding cannot be claimed. Returns the binding that
/// was actually registered.
///
/// All previous registrations are dropped first, so this never leaves a
/// stale binding active.
pub fn register(app: &AppHandle, binding: &str) -> Result<String, String> {
    let _ = app.global_shortcut().unregister_all();

    let mut candidates = vec![binding.to_string()];
    for fallback in [DEFAULT_BINDING, FALLBACK_BINDING] {
        if !candidates.iter().any(|c| normalize(c) == normalize(fallback)) {
            candidates.push(fallback.to_string());
        }
    }

    for candidate in candidates {
        match register_binding(app, &candidate) {
            Ok(()) => {
                log::info!("Global hotkey '{}' registered", candidate);
                return Ok(candidate);
            }
            Err(e) => log::warn!("Could not register hotkey '{}': {}", candidate, e),
        }
    }

    Err("no usable hotkey binding".to_string())
}

/// Replace the active binding with `binding`.
///
/// An unparseable binding is rejected without touching the current
/// registration. If the new binding is valid but taken by another
/// application, the defaults are re-registered so the hotkey stays usable,
/// and the conflict is reported.
pub fn rebind(app: &AppHandle, binding: &str) -> Result<(), String> {
    if let Err(e) = normalize(binding).parse::<Shortcut>() {
        return Err(format!("invalid binding '{}': {}", binding, e));
    }

    let _ = app.global_shortcut().unregister_all();

    match register_binding(app, binding) {
        Ok(()) => {
            log::info!("Global hotkey rebound to '{}'", binding);
            Ok(())
        }
        Err(e) => {
            let _ = register(app, DEFAULT_BINDING);
            Err(format!("could not claim '{}': {}", binding, e))
        }
    }
}

/// Drop every registration. Used at shutdown.
pub fn unregister(app: &AppHandle) {
    let _ = app.global_shortcut().unregister_all();
}
