// src/application/ports/renderer.rs

/// Converts stored Markdown into HTML that is safe to hand to a browser.
/// Implementations must sanitize; callers never post-process the output.
pub trait ContentRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
