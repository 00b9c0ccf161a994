//! The `--output` flag and what it means for rendered text.

use clap::ValueEnum;
use console::Style;

/// How a command prints its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Colour when stdout is a terminal, plain text otherwise
    #[default]
    Auto,
    /// Colour, with search matches highlighted
    Term,
    /// Plain text
    Text,
    /// Plain text with styles kept as `[name]...[/name]` tags
    TermDebug,
    /// The view as pretty-printed JSON
    Json,
}

impl OutputMode {
    /// JSON output skips the templates entirely.
    pub fn is_json(self) -> bool {
        self == OutputMode::Json
    }

    /// The text mode the templates render in, or `None` for JSON.
    ///
    /// `Auto` becomes `Term` for an attended terminal and `Text` otherwise.
    pub fn text_mode(self) -> Option<TextMode> {
        match self {
            OutputMode::Auto if console::user_attended() => Some(TextMode::Styled),
            OutputMode::Auto | OutputMode::Text => Some(TextMode::Plain),
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::TermDebug => Some(TextMode::Debug),
            OutputMode::Json => None,
        }
    }
}

/// How template filters decorate a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Styled,
    Plain,
    Debug,
}

impl TextMode {
    /// Decorates `text` with the style registered as `name`.
    ///
    /// Styled output is forced on even when stdout is not a terminal, since
    /// the caller already chose it.
    pub fn decorate(self, name: &str, style: Option<&Style>, text: &str) -> String {
        match (self, style) {
            (TextMode::Styled, Some(style)) => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            (TextMode::Debug, _) => format!("[{}]{}[/{}]", name, text, name),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_has_no_text_mode() {
        assert!(OutputMode::Json.is_json());
        assert_eq!(OutputMode::Json.text_mode(), None);
        assert!(!OutputMode::TermDebug.is_json());
    }

    #[test]
    fn each_text_flag_maps_to_one_mode() {
        assert_eq!(OutputMode::Term.text_mode(), Some(TextMode::Styled));
        assert_eq!(OutputMode::Text.text_mode(), Some(TextMode::Plain));
        assert_eq!(OutputMode::TermDebug.text_mode(), Some(TextMode::Debug));
        assert!(OutputMode::Auto.text_mode().is_some());
    }

    #[test]
    fn decorate_per_mode() {
        let red = Style::new().red();
        assert_eq!(TextMode::Plain.decorate("error", Some(&red), "boom"), "boom");
        assert_eq!(
            TextMode::Debug.decorate("error", Some(&red), "boom"),
            "[error]boom[/error]"
        );
        assert_eq!(
            TextMode::Styled.decorate("error", Some(&red), "boom"),
            "\u{1b}[31mboom\u{1b}[0m"
        );
        assert_eq!(TextMode::Styled.decorate("unknown", None, "boom"), "boom");
    }
}
