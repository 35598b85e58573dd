//! Multipart decoding for `POST /add-games`.
//!
//! Reads the form into a [`GameUpload`] and turns it into a [`CreateGame`]
//! with the image bytes base64-encoded.

use axum::body::Bytes;
use axum::extract::Multipart;
use gamevault_core::error::CoreError;
use gamevault_core::image::{encode_image_data, DEFAULT_CONTENT_TYPE};
use gamevault_db::models::game::{CreateGame, GameImage};

/// Form field carrying the title.
pub const FIELD_TITLE: &str = "title";
/// Form field carrying the description.
pub const FIELD_CONTENT: &str = "content";
/// Form field carrying the download URL.
pub const FIELD_DOWNLOAD_LINK: &str = "downloadLink";
/// File field carrying the optional image.
pub const FIELD_IMAGE: &str = "image";

/// A decoded file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub bytes: Bytes,
    pub content_type: String,
}

/// The raw contents of an add-game form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameUpload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub download_link: Option<String>,
    pub image: Option<UploadedFile>,
}

impl GameUpload {
    /// Drain a multipart stream.
    ///
    /// Any stream or decoding failure is an [`CoreError::Upload`]. Unknown
    /// fields are skipped. A file part that has neither a filename nor any
    /// bytes is what browsers send for an empty file input and counts as no
    /// image.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, CoreError> {
        let mut upload = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| CoreError::Upload(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                FIELD_IMAGE => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_CONTENT_TYPE)
                        .to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| CoreError::Upload(e.body_text()))?;

                    if bytes.is_empty() && file_name.is_empty() {
                        continue;
                    }
                    upload.image = Some(UploadedFile {
                        bytes,
                        content_type,
                    });
                }
                FIELD_TITLE | FIELD_CONTENT | FIELD_DOWNLOAD_LINK => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| CoreError::Upload(e.body_text()))?;
                    match name.as_str() {
                        FIELD_TITLE => upload.title = Some(value),
                        FIELD_CONTENT => upload.content = Some(value),
                        _ => upload.download_link = Some(value),
                    }
                }
                other => {
                    tracing::debug!(field = other, "Ignoring unknown form field");
                }
            }
        }

        Ok(upload)
    }

    /// Check required fields are present and build the insert DTO.
    ///
    /// Present-but-blank values are accepted.
    pub fn into_create_game(self) -> Result<CreateGame, CoreError> {
        let missing: Vec<&str> = [
            (FIELD_TITLE, self.title.is_none()),
            (FIELD_CONTENT, self.content.is_none()),
            (FIELD_DOWNLOAD_LINK, self.download_link.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        Ok(CreateGame {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            download_link: self.download_link.unwrap_or_default(),
            image: self.image.map(|file| GameImage {
                data: encode_image_data(&file.bytes),
                content_type: file.content_type,
            }),
        })
    }
}
