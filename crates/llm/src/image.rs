//! Изображение для классификации: MIME тип и base64 данные.

use base64::{engine::general_purpose, Engine as _};
use common::{WardrobeError, WardrobeResult};
use std::path::Path;

const DEFAULT_MIME: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// base64 без префикса `data:...;base64,`
    pub data: String,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Разобрать data URL. Строка без префикса считается чистым base64 JPEG.
    pub fn from_data_url(url: &str) -> WardrobeResult<Self> {
        let Some(rest) = url.strip_prefix("data:") else {
            return Self::from_base64(DEFAULT_MIME, url);
        };

        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| WardrobeError::Image("data URL without payload".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| WardrobeError::Image("data URL is not base64".to_string()))?;

        if !mime_type.starts_with("image/") {
            return Err(WardrobeError::Image(format!(
                "unsupported media type: {mime_type}"
            )));
        }

        Self::from_base64(mime_type, data)
    }

    fn from_base64(mime_type: &str, data: &str) -> WardrobeResult<Self> {
        let data = data.trim();
        if data.is_empty() {
            return Err(WardrobeError::Image("empty image data".to_string()));
        }
        general_purpose::STANDARD
            .decode(data)
            .map_err(|e| WardrobeError::Image(format!("invalid base64: {e}")))?;
        Ok(Self::new(mime_type, data))
    }

    /// Прочитать фото с диска. MIME тип определяется по расширению.
    pub async fn from_file(path: &Path) -> WardrobeResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| WardrobeError::Image(format!("{}: {e}", path.display())))?;
        if bytes.is_empty() {
            return Err(WardrobeError::Image(format!("{} is empty", path.display())));
        }
        Ok(Self::from_bytes(mime_for_path(path), &bytes))
    }

    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self::new(mime_type, general_purpose::STANDARD.encode(bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => DEFAULT_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix_is_stripped() {
        let payload = ImagePayload::from_data_url("data:image/webp;base64,AAAA").unwrap();
        assert_eq!(payload.mime_type, "image/webp");
        assert_eq!(payload.data, "AAAA");
        assert_eq!(payload.to_data_url(), "data:image/webp;base64,AAAA");
    }

    #[test]
    fn test_bare_base64_defaults_to_jpeg() {
        let payload = ImagePayload::from_data_url("AAAA").unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
    }

    #[test]
    fn test_rejects_non_image_and_garbage() {
        assert!(ImagePayload::from_data_url("data:text/plain;base64,AAAA").is_err());
        assert!(ImagePayload::from_data_url("data:image/png;base64,%%%").is_err());
        assert!(ImagePayload::from_data_url("data:image/png;base64,").is_err());
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("a/shirt.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("jeans.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("photo.heic")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("noext")), "image/jpeg");
    }

    #[tokio::test]
    async fn test_from_file_encodes_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shirt.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let payload = ImagePayload::from_file(&path).await.unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, general_purpose::STANDARD.encode([0x89, b'P', b'N', b'G']));
    }
}
