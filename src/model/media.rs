use iced::widget::image::Handle;
use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Raw image bytes ready for analysis, plus a preview handle for the UI.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub preview: Handle,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        let preview = Handle::from_bytes(bytes.clone());
        Self {
            bytes,
            mime_type: mime_type.into(),
            preview,
        }
    }
}

/// What the orchestrator receives for one user action.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub image: Vec<u8>,
    pub mime_type: String,
    pub symptoms: Option<String>,
}

impl AnalysisRequest {
    pub fn new(image: Vec<u8>, mime_type: impl Into<String>, symptoms: &str) -> Self {
        let symptoms = Some(symptoms.to_string()).filter(|text| !text.trim().is_empty());
        Self {
            image,
            mime_type: mime_type.into(),
            symptoms,
        }
    }
}

pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub fn load_image(path: PathBuf) -> Result<ImagePayload, String> {
    log::info!("Loading image file: {}", path.display());

    let mime_type = mime_type_for(&path).ok_or_else(|| {
        let message = format!(
            "{}: formato de imagen no soportado. Use PNG, JPEG o WEBP.",
            path.display()
        );
        log::warn!("{message}");
        message
    })?;

    let bytes = fs::read(&path).map_err(|err| {
        let message = format!("{}: no se pudo leer el archivo ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    if bytes.is_empty() {
        let message = format!("{}: el archivo está vacío", path.display());
        log::warn!("{message}");
        return Err(message);
    }

    Ok(ImagePayload::new(bytes, mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(mime_type_for(Path::new("a.png")), Some("image/png"));
        assert_eq!(mime_type_for(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("dir/a.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(mime_type_for(Path::new("a.gif")), None);
        assert_eq!(mime_type_for(Path::new("no_extension")), None);
    }

    #[test]
    fn load_image_reads_bytes_and_mime() {
        let path = std::env::temp_dir().join(format!("dermaia-load-{}.png", std::process::id()));
        let mut file = fs::File::create(&path).expect("temp file");
        file.write_all(&[0x89, b'P', b'N', b'G']).expect("write");
        drop(file);

        let payload = load_image(path.clone()).expect("image should load");
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.bytes, vec![0x89, b'P', b'N', b'G']);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_image_rejects_empty_and_unsupported_files() {
        let empty = std::env::temp_dir().join(format!("dermaia-empty-{}.jpg", std::process::id()));
        fs::File::create(&empty).expect("temp file");
        assert!(load_image(empty.clone()).is_err());
        let _ = fs::remove_file(empty);

        let unsupported = PathBuf::from("photo.bmp");
        let err = load_image(unsupported).expect_err("bmp is not accepted");
        assert!(err.contains("no soportado"));
    }

    #[test]
    fn request_drops_blank_symptoms() {
        assert_eq!(AnalysisRequest::new(vec![1], "image/jpeg", "  \n").symptoms, None);
        assert_eq!(
            AnalysisRequest::new(vec![1], "image/jpeg", "picor").symptoms,
            Some("picor".to_string())
        );
    }
}
