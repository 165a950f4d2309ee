//! Load image files for artwork uploads.

use std::io::{self, Read};
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::FilePart;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Read `path` into a multipart file part, guessing its MIME type.
pub(crate) fn read_image(path: &Path) -> io::Result<FilePart> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "image path must be a file"))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    let mut file = directory.open(Path::new(file_name))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(FilePart {
        file_name: file_name.to_string_lossy().into_owned(),
        content_type: content_type_for(path).to_owned(),
        bytes,
    })
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
