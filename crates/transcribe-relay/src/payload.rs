use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;

use crate::error::Error;

pub const AUDIO_FIELD: &str = "audio";
pub const DEFAULT_FILE_NAME: &str = "audio.mp3";
pub const DEFAULT_MIME_TYPE: &str = "audio/mpeg";

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Audio extracted from a single inbound request.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Bytes,
    pub file_name: String,
    pub content_type: String,
}

impl AudioPayload {
    pub fn new(bytes: impl Into<Bytes>, file_name: Option<&str>, content_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_FILE_NAME)
                .to_string(),
            content_type: content_type
                .filter(|mime| !mime.is_empty())
                .unwrap_or(DEFAULT_MIME_TYPE)
                .to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Multipart bodies must carry an `audio` field; any other content type is
    /// taken as the raw audio stream.
    pub async fn from_request(request: Request) -> Result<Self, Error> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(MULTIPART_FORM_DATA));

        if is_multipart {
            let multipart = Multipart::from_request(request, &()).await?;
            Self::from_multipart(multipart).await
        } else {
            let bytes = Bytes::from_request(request, &()).await?;
            Ok(Self::new(bytes, None, None))
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Error> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(AUDIO_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(ToOwned::to_owned);
            let content_type = field.content_type().map(ToOwned::to_owned);
            let bytes = field.bytes().await?;

            return Ok(Self::new(
                bytes,
                file_name.as_deref(),
                content_type.as_deref(),
            ));
        }

        Err(Error::MissingField(AUDIO_FIELD))
    }
}
