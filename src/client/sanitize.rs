//! Input Sanitization
//!
//! Strips unsafe markup from titles and content before anything is sent to
//! the backend. Both functions are pure and total: they never fail and they
//! perform no I/O.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Maximum stored title length, in characters
const MAX_TITLE_LEN: usize = 100;

static SCRIPT_TAG: OnceLock<Regex> = OnceLock::new();
static EVENT_HANDLER: OnceLock<Regex> = OnceLock::new();

fn script_tag() -> &'static Regex {
    SCRIPT_TAG.get_or_init(|| {
        // The body may span lines and contain stray '<' characters.
        RegexBuilder::new(r"<script\b[^>]*>.*?</script\s*>")
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .expect("script tag pattern is valid")
    })
}

fn event_handler() -> &'static Regex {
    EVENT_HANDLER.get_or_init(|| {
        RegexBuilder::new(r#"on\w+\s*=\s*["'][^"']*["']"#)
            .case_insensitive(true)
            .build()
            .expect("event handler pattern is valid")
    })
}

/// Sanitize document content
///
/// Removes `<script>` elements (attributes and body, case-insensitive, the
/// element may span content) and inline `on*="..."` event-handler
/// attributes, then trims surrounding whitespace.
pub fn sanitize_content(content: &str) -> String {
    let without_scripts = script_tag().replace_all(content, "");
    let without_handlers = event_handler().replace_all(&without_scripts, "");
    without_handlers.trim().to_string()
}

/// Sanitize a document title
///
/// Strips the `<` and `>` characters themselves (the text between them is
/// kept), trims, and truncates to 100 characters.
pub fn sanitize_title(title: &str) -> String {
    let stripped: String = title.chars().filter(|c| *c != '<' && *c != '>').collect();
    stripped.trim().chars().take(MAX_TITLE_LEN).collect()
}
