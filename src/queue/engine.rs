//! QueueClip - Queue engine
//!
//! Owns the ordered items, the cursor, and the loop flag

use serde::Serialize;

use super::Delimiter;

/// Preview length used by the tray and the indicator.
const PREVIEW_MAX_CHARS: usize = 30;

/// Snapshot of the engine state for the UI.
#[derive(Debug, Clone, Serialize)]
pub struct QueueStatus {
    /// Truncated preview of the next item, `None` when exhausted
    pub next_preview: Option<String>,
    /// 1-indexed position of the next item, 0 when the queue is empty
    pub position: usize,
    /// Total items in the current load
    pub total: usize,
    /// Items left before exhaustion (total under loop mode after a wrap)
    pub remaining: usize,
    pub loop_enabled: bool,
    pub delimiter: Delimiter,
}

/// Ordered queue of text items consumed front-to-back by the paste hotkey.
///
/// The cursor never exceeds the item count. Under loop mode it wraps to the
/// front as soon as the last item has been delivered, so a looping queue is
/// never exhausted.
#[derive(Debug, Default)]
pub struct QueueEngine {
    items: Vec<String>,
    cursor: usize,
    loop_enabled: bool,
    delimiter: Delimiter,
}

impl QueueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with `text` split on the current delimiter and
    /// reset the cursor. Returns the number of items loaded; empty input
    /// loads an empty queue, not an error.
    pub fn load(&mut self, text: &str) -> usize {
        let items = self.delimiter.split(text);
        self.load_items(items)
    }

    /// Replace the queue with pre-split items and reset the cursor.
    pub fn load_items(&mut self, items: Vec<String>) -> usize {
        self.items = items;
        self.cursor = 0;
        self.items.len()
    }

    /// The item `next` would deliver, without advancing.
    pub fn peek(&self) -> Option<&str> {
        if self.cursor >= self.items.len() {
            if self.loop_enabled {
                self.items.first().map(String::as_str)
            } else {
                None
            }
        } else {
            Some(&self.items[self.cursor])
        }
    }

    /// Deliver the item at the cursor and advance.
    ///
    /// An exhausted non-looping queue returns `None` with no side effect.
    /// Under loop mode the cursor wraps to the front when it reaches the end.
    pub fn next(&mut self) -> Option<String> {
        if self.cursor >= self.items.len() {
            if !self.loop_enabled {
                return None;
            }
            // Loop mode was switched on after the queue ran out
            self.cursor = 0;
            self.items.first()?;
        }

        let item = self.items[self.cursor].clone();
        self.cursor += 1;
        if self.loop_enabled && self.cursor == self.items.len() {
            self.cursor = 0;
        }
        Some(item)
    }

    /// Empty the queue and reset the cursor.
    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    /// Takes effect immediately on `next`/`peek`.
    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    /// Takes effect on the next `load` only; the current queue keeps the
    /// items it was split into.
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }

    /// 1-indexed position of the next item, 0 for an empty queue.
    pub fn position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else if self.cursor >= self.items.len() {
            self.items.len()
        } else {
            self.cursor + 1
        }
    }

    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            next_preview: self.peek().map(|item| truncate_preview(item, PREVIEW_MAX_CHARS)),
            position: self.position(),
            total: self.total(),
            remaining: self.remaining(),
            loop_enabled: self.loop_enabled,
            delimiter: self.delimiter.clone(),
        }
    }
}

/// Truncate to `max_chars` characters, appending an ellipsis when cut.
fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded_engine() -> QueueEngine {
        let mut engine = QueueEngine::new();
        engine.load("a\nb\nc");
        engine
    }

    #[test]
    fn load_splits_and_resets_cursor() {
        let mut engine = QueueEngine::new();
        assert_eq!(engine.load("a\nb\nc"), 3);
        assert_eq!(engine.total(), 3);
        assert_eq!(engine.remaining(), 3);
        assert_eq!(engine.peek(), Some("a"));
    }

    #[test]
    fn next_consumes_front_to_back_then_exhausts() {
        let mut engine = loaded_engine();
        assert_eq!(engine.next().as_deref(), Some("a"));
        assert_eq!(engine.next().as_deref(), Some("b"));
        assert_eq!(engine.next().as_deref(), Some("c"));
        assert_eq!(engine.next(), None);
        // exhausted queue stays exhausted, no side effect
        assert_eq!(engine.next(), None);
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    fn loop_mode_wraps_to_front() {
        let mut engine = loaded_engine();
        engine.set_loop(true);
        assert_eq!(engine.next().as_deref(), Some("a"));
        assert_eq!(engine.next().as_deref(), Some("b"));
        assert_eq!(engine.next().as_deref(), Some("c"));
        assert_eq!(engine.next().as_deref(), Some("a"));
        assert_eq!(engine.peek(), Some("b"));
    }

    #[test]
    fn enabling_loop_after_exhaustion_restarts() {
        let mut engine = loaded_engine();
        while engine.next().is_some() {}
        engine.set_loop(true);
        assert_eq!(engine.next().as_deref(), Some("a"));
    }

    #[test]
    fn clear_empties_regardless_of_loop() {
        let mut engine = loaded_engine();
        engine.set_loop(true);
        engine.clear();
        assert_eq!(engine.next(), None);
        assert_eq!(engine.peek(), None);
        assert_eq!(engine.total(), 0);
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn delimiter_change_is_not_retroactive() {
        let mut engine = QueueEngine::new();
        engine.load("a,b,c");
        assert_eq!(engine.total(), 1);

        engine.set_delimiter(Delimiter::Comma);
        // current queue untouched
        assert_eq!(engine.total(), 1);
        assert_eq!(engine.peek(), Some("a,b,c"));

        // takes effect on the next load
        engine.load("a,b,c");
        assert_eq!(engine.total(), 3);
    }

    #[test]
    fn empty_input_loads_empty_queue() {
        let mut engine = QueueEngine::new();
        assert_eq!(engine.load(""), 0);
        assert_eq!(engine.remaining(), 0);
        assert_eq!(engine.next(), None);
        assert!(engine.is_exhausted());
    }

    #[test]
    fn cursor_never_exceeds_length() {
        let mut engine = loaded_engine();
        for _ in 0..10 {
            engine.next();
            assert!(engine.remaining() <= engine.total());
        }
    }

    #[test]
    fn status_reports_position_and_preview() {
        let mut engine = loaded_engine();
        let status = engine.status();
        assert_eq!(status.next_preview.as_deref(), Some("a"));
        assert_eq!(status.position, 1);
        assert_eq!(status.total, 3);
        assert_eq!(status.remaining, 3);

        engine.next();
        let status = engine.status();
        assert_eq!(status.next_preview.as_deref(), Some("b"));
        assert_eq!(status.position, 2);
        assert_eq!(status.remaining, 2);
    }

    #[test]
    fn status_truncates_long_previews() {
        let mut engine = QueueEngine::new();
        let long = "x".repeat(80);
        engine.load_items(vec![long]);
        let preview = engine.status().next_preview.unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 3);
        assert!(preview.ends_with("..."));
    }
}
