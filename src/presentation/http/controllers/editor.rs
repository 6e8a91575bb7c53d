// src/presentation/http/controllers/editor.rs
use crate::application::editor::{Attachment, AttachmentKind, ToolbarAction, replace_all};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceRequest {
    pub content: String,
    pub find: String,
    #[serde(default)]
    pub replacement: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequest {
    pub content: String,
    pub action: ToolbarAction,
    pub selection_start: usize,
    pub selection_end: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRequest {
    pub content: String,
    pub file_name: String,
    #[serde(default)]
    pub mime_type: String,
    /// Base64 file body.
    pub data: String,
    pub kind: AttachmentKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditedContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_end: Option<usize>,
}

impl EditedContent {
    fn plain(content: String) -> Self {
        Self {
            content,
            selection_start: None,
            selection_end: None,
        }
    }
}

pub async fn preview(
    Extension(state): Extension<HttpState>,
    _admin: AdminSession,
    Json(payload): Json<PreviewRequest>,
) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        html: state.services.editor.preview(&payload.content),
    })
}

pub async fn replace(
    _admin: AdminSession,
    Json(payload): Json<ReplaceRequest>,
) -> HttpResult<Json<EditedContent>> {
    replace_all(&payload.content, &payload.find, &payload.replacement)
        .into_http()
        .map(|content| Json(EditedContent::plain(content)))
}

pub async fn format(_admin: AdminSession, Json(payload): Json<FormatRequest>) -> Json<EditedContent> {
    let formatted = payload
        .action
        .apply(&payload.content, payload.selection_start..payload.selection_end);
    Json(EditedContent {
        content: formatted.content,
        selection_start: Some(formatted.selection.start),
        selection_end: Some(formatted.selection.end),
    })
}

pub async fn attach(
    _admin: AdminSession,
    Json(payload): Json<AttachmentRequest>,
) -> HttpResult<Json<EditedContent>> {
    let attachment = Attachment::from_base64(payload.file_name, payload.mime_type, &payload.data)
        .into_http()?;
    Ok(Json(EditedContent::plain(
        attachment.append_to(&payload.content, payload.kind),
    )))
}
