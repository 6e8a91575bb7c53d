use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarAction {
    Bold,
    Italic,
    Heading1,
    Heading2,
    Link,
    Quote,
    InlineCode,
    CodeBlock,
    List,
}

/// Editor text after a toolbar action, with the selection that should be
/// restored (byte offsets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub content: String,
    pub selection: Range<usize>,
}

impl ToolbarAction {
    /// Markup inserted before and after the selection.
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Heading1 => ("\n# ", ""),
            Self::Heading2 => ("\n## ", ""),
            Self::Link => ("[", "](https://)"),
            Self::Quote => ("\n> ", ""),
            Self::InlineCode => ("`", "`"),
            Self::CodeBlock => ("\n```\n", "\n```\n"),
            Self::List => ("\n- ", ""),
        }
    }

    /// Wrap `selection` of `content` in this action's markup. Out-of-range
    /// or mid-character offsets are clamped, reversed ranges normalised.
    pub fn apply(self, content: &str, selection: Range<usize>) -> FormattedText {
        let (before, after) = self.markers();
        let mut start = floor_char_boundary(content, selection.start);
        let mut end = floor_char_boundary(content, selection.end);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let mut out = String::with_capacity(content.len() + before.len() + after.len());
        out.push_str(&content[..start]);
        out.push_str(before);
        out.push_str(&content[start..end]);
        out.push_str(after);
        out.push_str(&content[end..]);

        FormattedText {
            content: out,
            selection: start + before.len()..end + before.len(),
        }
    }
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
