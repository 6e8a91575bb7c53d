use crate::application::error::{ApplicationError, ApplicationResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

pub const READ_FAILED_MESSAGE: &str = "Failed to read file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Inline image: `![name](data:...)`.
    Image,
    /// Download link: `<a href="data:..." download="name">`.
    File,
}

/// An uploaded file that gets embedded into the article as a data URL.
#[derive(Debug, Clone)]
pub struct Attachment {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> ApplicationResult<Self> {
        let file_name = file_name.into();
        let mime_type = mime_type.into();
        if bytes.is_empty() || file_name.trim().is_empty() {
            return Err(ApplicationError::validation(READ_FAILED_MESSAGE));
        }
        let mime_type = if mime_type.trim().is_empty() {
            "application/octet-stream".to_string()
        } else {
            mime_type
        };
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Decode a base64 payload as sent by the browser's file reader.
    pub fn from_base64(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: &str,
    ) -> ApplicationResult<Self> {
        let bytes = STANDARD
            .decode(data.trim())
            .map_err(|_| ApplicationError::validation(READ_FAILED_MESSAGE))?;
        Self::new(file_name, mime_type, bytes)
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn markup(&self, kind: AttachmentKind) -> String {
        match kind {
            AttachmentKind::Image => {
                let alt = self.file_name.replace(['[', ']'], "");
                format!("\n![{alt}]({})\n", self.data_url())
            }
            AttachmentKind::File => {
                let name = ammonia::clean_text(&self.file_name);
                format!(
                    "\n<a href=\"{}\" download=\"{name}\">Download {name}</a>\n",
                    self.data_url()
                )
            }
        }
    }

    /// Append the attachment's markup to the end of `content`.
    pub fn append_to(&self, content: &str, kind: AttachmentKind) -> String {
        let mut out = String::from(content);
        out.push_str(&self.markup(kind));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_becomes_inline_data_url() {
        let attachment = Attachment::new("dot.png", "image/png", vec![1, 2, 3]).unwrap();
        let out = attachment.append_to("Intro", AttachmentKind::Image);
        assert_eq!(out, "Intro\n![dot.png](data:image/png;base64,AQID)\n");
    }

    #[test]
    fn file_link_escapes_name() {
        let attachment = Attachment::new("a\"b.txt", "text/plain", b"hi".to_vec()).unwrap();
        let markup = attachment.markup(AttachmentKind::File);
        assert!(markup.contains("href=\"data:text/plain;base64,aGk=\""));
        assert!(!markup.contains("a\"b"));
        assert!(markup.contains("Download a&quot;b.txt"));
    }

    #[test]
    fn empty_or_undecodable_payloads_are_rejected() {
        assert!(Attachment::new("x.bin", "", Vec::new()).is_err());
        let err = Attachment::from_base64("x.bin", "", "not base64!").unwrap_err();
        assert_eq!(err.user_message(), READ_FAILED_MESSAGE);
    }
}
