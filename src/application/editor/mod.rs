//! Helpers behind the admin article editor. Everything here is a pure
//! text transformation except [`EditorService::preview`], which renders.
mod attachment;
mod replace;
mod toolbar;

use std::sync::Arc;

use crate::application::ports::renderer::ContentRenderer;

pub use attachment::{Attachment, AttachmentKind, READ_FAILED_MESSAGE};
pub use replace::{FIND_TEXT_REQUIRED, replace_all};
pub use toolbar::{FormattedText, ToolbarAction};

pub struct EditorService {
    renderer: Arc<dyn ContentRenderer>,
}

impl EditorService {
    pub fn new(renderer: Arc<dyn ContentRenderer>) -> Self {
        Self { renderer }
    }

    /// Live preview of unsaved content. Sanitized like every other render.
    pub fn preview(&self, content: &str) -> String {
        self.renderer.render(content)
    }
}
