//! Profile image acquisition.
//!
//! A portfolio shows at most one profile image. It can come from three places,
//! resolved in this order (first available wins):
//!
//! 1. **Uploaded file**: a local image read and embedded as a `data:` URI, so
//!    the exported document has no external reference to it.
//! 2. **Typed URL**: the `image_url` profile field.
//! 3. **Placeholder**: `placeholders.profile_image` from config.
//!
//! An upload always beats a typed URL, even one typed after the upload. The
//! only thing that replaces an uploaded image is another upload.
//!
//! ## Accepted files
//!
//! The declared type of a file is derived from its extension, the same way a
//! browser fills in `File.type`. Anything that does not declare an `image/*`
//! type is ignored: no error, no state change. Contents are not inspected, so
//! a mislabelled file is embedded as-is.

use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A `data:<mime>;base64,<payload>` URI holding an embedded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    uri: String,
}

impl DataUri {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self {
            mime: mime.to_string(),
            uri: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Size of the encoded URI in bytes.
    pub fn len(&self) -> usize {
        self.uri.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uri.is_empty()
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// The current profile image state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileImage {
    uploaded: Option<DataUri>,
}

impl ProfileImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the uploaded image. Last write wins.
    pub fn set_uploaded(&mut self, uri: DataUri) {
        self.uploaded = Some(uri);
    }

    pub fn uploaded(&self) -> Option<&DataUri> {
        self.uploaded.as_ref()
    }

    /// Resolve the `src` to render: upload, then typed URL, then placeholder.
    pub fn src<'a>(&'a self, typed_url: &'a str, placeholder: &'a str) -> &'a str {
        match &self.uploaded {
            Some(uri) => uri.as_str(),
            None if !typed_url.is_empty() => typed_url,
            None => placeholder,
        }
    }
}

/// Declared MIME type of a file, from its extension.
pub fn declared_type(path: &Path) -> Option<mime_guess::Mime> {
    mime_guess::from_path(path).first()
}

/// Whether a file declares an image type.
pub fn is_image(path: &Path) -> bool {
    declared_type(path).is_some_and(|mime| mime.type_() == mime_guess::mime::IMAGE)
}

/// Read an image file into a data URI.
///
/// Returns `Ok(None)` for files that do not declare an image type; those are
/// ignored rather than reported. I/O errors on an accepted file are returned.
pub fn acquire(path: &Path) -> Result<Option<DataUri>, AcquireError> {
    let mime = match declared_type(path) {
        Some(mime) if mime.type_() == mime_guess::mime::IMAGE => mime,
        _ => {
            tracing::debug!(path = %path.display(), "ignoring file without an image type");
            return Ok(None);
        }
    };
    let bytes = std::fs::read(path).map_err(|source| AcquireError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %mime, bytes = bytes.len(), "decoded image");
    Ok(Some(DataUri::encode(mime.essence_str(), &bytes)))
}
