// src/infrastructure/rendering.rs
use std::borrow::Cow;

use ammonia::Builder;
use pulldown_cmark::{Options, Parser, html};

use crate::application::ports::renderer::ContentRenderer;

/// Media types that a browser can execute when handed a `data:` URL.
const SCRIPTABLE_DATA_TYPES: &[&str] = &[
    "text/html",
    "application/xhtml+xml",
    "image/svg+xml",
    "text/xml",
    "application/xml",
    "text/javascript",
    "application/javascript",
];

/// GitHub-flavoured Markdown to HTML, then through an ammonia allow-list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SanitizingMarkdownRenderer;

impl SanitizingMarkdownRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }

    fn sanitizer() -> Builder<'static> {
        let mut builder = Builder::default();
        builder
            .add_tags(&["input"])
            .add_tag_attributes("input", &["type", "checked", "disabled"])
            .add_tag_attributes("a", &["download"])
            .add_url_schemes(&["data"])
            .link_rel(Some("noopener noreferrer"))
            .attribute_filter(|element, attribute, value| match (element, attribute) {
                (_, "href" | "src") if is_scriptable_data_url(value) => None,
                ("input", "type") if !value.eq_ignore_ascii_case("checkbox") => None,
                _ => Some(Cow::Borrowed(value)),
            });
        builder
    }
}

fn is_scriptable_data_url(value: &str) -> bool {
    let trimmed = value.trim_start();
    let Some(rest) = trimmed
        .get(..5)
        .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
        .map(|_| &trimmed[5..])
    else {
        return false;
    };
    let media_type = rest
        .split([';', ','])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    // `data:,payload` defaults to text/plain.
    SCRIPTABLE_DATA_TYPES.contains(&media_type.as_str())
}

impl ContentRenderer for SanitizingMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut unsafe_html, parser);
        Self::sanitizer().clean(&unsafe_html).to_string()
    }
}
