//! QueueClip - Delimiter selection and splitting policy
//!
//! Defines how a clipboard payload is cut into queue items

use serde::{Deserialize, Serialize};

/// Separator used to split clipboard text into queue items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Line breaks, with `\r\n` treated as `\n`
    Newline,
    /// Comma
    Comma,
    /// Tab character
    Tab,
    /// Semicolon
    Semicolon,
    /// User-supplied literal separator
    Custom(String),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Newline
    }
}

impl Delimiter {
    /// The literal separator string. An empty custom literal falls back to
    /// newline so a load can never produce a single unsplittable blob.
    pub fn as_separator(&self) -> &str {
        match self {
            Delimiter::Newline => "\n",
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Semicolon => ";",
            Delimiter::Custom(sep) if sep.is_empty() => "\n",
            Delimiter::Custom(sep) => sep,
        }
    }

    /// Human-readable label for menus and tooltips.
    pub fn label(&self) -> String {
        match self {
            Delimiter::Newline => "Newline".to_string(),
            Delimiter::Comma => "Comma".to_string(),
            Delimiter::Tab => "Tab".to_string(),
            Delimiter::Semicolon => "Semicolon".to_string(),
            Delimiter::Custom(sep) => format!("Custom ({})", sep),
        }
    }

    /// Split `text` into queue items.
    ///
    /// Policy: every fragment is trimmed of surrounding whitespace, and
    /// fragments that are empty after trimming are dropped wherever they
    /// occur (interior as well as trailing). Newline splitting normalizes
    /// `\r\n` to `\n` first.
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized;
        let text = if matches!(self, Delimiter::Newline) {
            normalized = text.replace("\r\n", "\n");
            normalized.as_str()
        } else {
            text
        };

        text.split(self.as_separator())
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_newline() {
        assert_eq!(Delimiter::Newline.split("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn normalizes_crlf() {
        assert_eq!(Delimiter::Newline.split("a\r\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trims_fragments_and_drops_empties() {
        assert_eq!(
            Delimiter::Newline.split("  a  \n\n b\n\n\n"),
            vec!["a", "b"]
        );
        assert_eq!(Delimiter::Comma.split("x, ,y,,"), vec!["x", "y"]);
    }

    #[test]
    fn splits_on_tab_and_semicolon() {
        assert_eq!(Delimiter::Tab.split("a\tb\tc"), vec!["a", "b", "c"]);
        assert_eq!(Delimiter::Semicolon.split("a;b;c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn custom_literal() {
        let delim = Delimiter::Custom("::".to_string());
        assert_eq!(delim.split("a::b::c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_custom_falls_back_to_newline() {
        let delim = Delimiter::Custom(String::new());
        assert_eq!(delim.split("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_no_items() {
        assert_eq!(Delimiter::Newline.split(""), Vec::<String>::new());
        assert_eq!(Delimiter::Newline.split("   \n  \n"), Vec::<String>::new());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Delimiter::Newline).unwrap(),
            "\"newline\""
        );
        assert_eq!(
            serde_json::to_string(&Delimiter::Custom("|".to_string())).unwrap(),
            "{\"custom\":\"|\"}"
        );
    }
}
