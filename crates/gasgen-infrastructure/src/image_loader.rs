//! Loads an error screenshot from disk.

use gasgen_core::error::{GasgenError, Result};
use gasgen_core::error_report::{ImageAttachment, ensure_image_mime, ensure_image_size};
use std::path::Path;

/// Reads `path` into an [`ImageAttachment`].
///
/// The MIME type is guessed from the extension and the size is checked from
/// file metadata, so non-images and oversized files are refused without
/// reading their content.
pub async fn load_image(path: &Path) -> Result<ImageAttachment> {
    let mime_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .ok_or_else(|| {
            GasgenError::validation(format!(
                "Cannot tell the file type of {}. Attach a PNG, JPEG, GIF or WebP image.",
                path.display()
            ))
        })?;
    ensure_image_mime(&mime_type)?;

    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        GasgenError::validation(format!("Cannot open {}: {}", path.display(), e))
    })?;
    if !metadata.is_file() {
        return Err(GasgenError::validation(format!(
            "{} is not a file.",
            path.display()
        )));
    }
    ensure_image_size(metadata.len())?;

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!("Loaded image {} ({} bytes)", file_name, bytes.len());
    ImageAttachment::new(file_name, mime_type, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gasgen_core::error_report::MAX_IMAGE_BYTES;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_loads_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("error.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = load_image(&path).await.unwrap();

        assert_eq!(image.file_name(), "error.png");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.len(), 4);
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_rejects_non_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_image(&path).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_rejects_oversized_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("huge.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES + 1).unwrap();

        let err = load_image(&path).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("5MB"));
    }

    #[tokio::test]
    async fn test_missing_file_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_image(&temp_dir.path().join("gone.png"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
