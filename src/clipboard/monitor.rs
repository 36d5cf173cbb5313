//! QueueClip - Clipboard monitoring
//!
//! Polls the system clipboard and reports new text content

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use parking_lot::Mutex;

/// Watches the system clipboard for text changes.
pub struct ClipboardMonitor {
    /// Whether the polling thread should keep running
    running: Arc<AtomicBool>,
    /// Polling interval (milliseconds)
    poll_interval_ms: u64,
    /// Last text seen, so unchanged content is not re-reported
    last_text: Arc<Mutex<String>>,
    /// Set while the paste sequence owns the clipboard
    paused: Arc<AtomicBool>,
}

impl ClipboardMonitor {
    pub fn new(poll_interval_ms: u64) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            poll_interval_ms,
            last_text: Arc::new(Mutex::new(String::new())),
            paused: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start polling on a background thread.
    ///
    /// `callback` is invoked with each new non-empty text payload.
    pub fn start<F>(&self, callback: F)
    where
        F: Fn(String) + Send + 'static,
    {
        if self.running.load(Ordering::SeqCst) {
            log::warn!("Clipboard monitor is already running");
            return;
        }

        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);
        let last_text = Arc::clone(&self.last_text);
        let paused = Arc::clone(&self.paused);
        let interval = self.poll_interval_ms;

        thread::spawn(move || {
            log::info!("Clipboard monitor started with {}ms interval", interval);

            while running.load(Ordering::SeqCst) {
                if paused.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(interval));
                    continue;
                }

                // Fresh handle each poll so a restarted clipboard service is
                // picked up
                let mut clipboard = match Clipboard::new() {
                    Ok(cb) => cb,
                    Err(e) => {
                        log::error!("Failed to create clipboard instance: {}", e);
                        thread::sleep(Duration::from_millis(interval));
                        continue;
                    }
                };

                if let Ok(text) = clipboard.get_text() {
                    if !text.is_empty() {
                        let mut last = last_text.lock();
                        if *last != text {
                            log::debug!("[Monitor] New clipboard text ({} chars)", text.len());
                            *last = text.clone();
                            drop(last);
                            callback(text);
                        }
                    }
                }

                thread::sleep(Duration::from_millis(interval));
            }

            log::info!("Clipboard monitor stopped");
        });
    }

    /// Stop the polling thread.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Pause change detection.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Resume change detection.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Re-arm change detection after a programmatic clipboard write, so the
    /// write is not reported as a user copy.
    pub fn update_last_text(&self, text: &str) {
        *self.last_text.lock() = text.to_string();
    }
}

impl Default for ClipboardMonitor {
    fn default() -> Self {
        Self::new(150)
    }
}
