//! QueueClip - Synthetic input
//!
//! Emits the paste chord or types text into the focused window

use std::thread;
use std::time::Duration;

/// Injection error type
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("input synthesis unavailable: {0}")]
    Backend(String),
    #[error("failed to send input: {0}")]
    Send(String),
}

/// Press Ctrl+V in the focused window.
#[cfg(target_os = "windows")]
pub fn send_paste_chord() -> Result<(), InjectError> {
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        SendInput, INPUT, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_KEYUP, VK_CONTROL, VK_V,
    };

    unsafe {
        let mut inputs: [INPUT; 4] = std::mem::zeroed();

        // Ctrl press
        inputs[0].r#type = INPUT_KEYBOARD;
        inputs[0].Anonymous.ki = KEYBDINPUT {
            wVk: VK_CONTROL,
            wScan: 0,
            dwFlags: Default::default(),
            time: 0,
            dwExtraInfo: 0,
        };

        // V press
        inputs[1].r#type = INPUT_KEYBOARD;
        inputs[1].Anonymous.ki = KEYBDINPUT {
            wVk: VK_V,
            wScan: 0,
            dwFlags: Default::default(),
            time: 0,
            dwExtraInfo: 0,
        };

        // V release
        inputs[2].r#type = INPUT_KEYBOARD;
        inputs[2].Anonymous.ki = KEYBDINPUT {
            wVk: VK_V,
            wScan: 0,
            dwFlags: KEYEVENTF_KEYUP,
            time: 0,
            dwExtraInfo: 0,
        };

        // Ctrl release
        inputs[3].r#type = INPUT_KEYBOARD;
        inputs[3].Anonymous.ki = KEYBDINPUT {
            wVk: VK_CONTROL,
            wScan: 0,
            dwFlags: KEYEVENTF_KEYUP,
            time: 0,
            dwExtraInfo: 0,
        };

        let sent = SendInput(&inputs, std::mem::size_of::<INPUT>() as i32);
        if sent == 0 {
            return Err(InjectError::Send("SendInput rejected the batch".to_string()));
        }
    }

    log::debug!("Simulated Ctrl+V paste");
    Ok(())
}

/// Press Ctrl+V in the focused window.
#[cfg(not(target_os = "windows"))]
pub fn send_paste_chord() -> Result<(), InjectError> {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};

    let mut enigo =
        Enigo::new(&Settings::default()).map_err(|e| InjectError::Backend(e.to_string()))?;
    enigo
        .key(Key::Control, Direction::Press)
        .map_err(|e| InjectError::Send(e.to_string()))?;
    enigo
        .key(Key::Unicode('v'), Direction::Click)
        .map_err(|e| InjectError::Send(e.to_string()))?;
    enigo
        .key(Key::Control, Direction::Release)
        .map_err(|e| InjectError::Send(e.to_string()))?;

    log::debug!("Simulated Ctrl+V paste");
    Ok(())
}

/// Type `text` into the focused window as keystrokes.
pub fn type_text(text: &str) -> Result<(), InjectError> {
    use enigo::{Enigo, Keyboard, Settings};

    // Let the hotkey keys settle before typing starts
    thread::sleep(Duration::from_millis(50));

    let mut enigo =
        Enigo::new(&Settings::default()).map_err(|e| InjectError::Backend(e.to_string()))?;
    enigo.text(text).map_err(|e| InjectError::Send(e.to_string()))?;

    log::debug!("Typed {} chars into focused window", text.chars().count());
    Ok(())
}
