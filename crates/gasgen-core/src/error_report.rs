//! Pending error report used to build the next error-fix request.

use crate::error::{GasgenError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

/// Largest screenshot accepted as error evidence.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A screenshot of the error, held in memory until the next fix attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Accepts `image/*` payloads up to [`MAX_IMAGE_BYTES`].
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self> {
        let mime_type = mime_type.into();
        ensure_image_mime(&mime_type)?;
        ensure_image_size(bytes.len() as u64)?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:<mime>;base64,<payload>` for inline inclusion in a prompt.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}

pub fn ensure_image_mime(mime_type: &str) -> Result<()> {
    if mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(GasgenError::validation(format!(
            "Only image files can be attached (got {}).",
            mime_type
        )))
    }
}

pub fn ensure_image_size(len: u64) -> Result<()> {
    if len > MAX_IMAGE_BYTES {
        Err(GasgenError::validation("Images must be 5MB or smaller."))
    } else {
        Ok(())
    }
}

/// Free-text error description plus optional screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingErrorReport {
    pub description: String,
    pub image: Option<ImageAttachment>,
}

impl PendingErrorReport {
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.image = None;
    }
}
