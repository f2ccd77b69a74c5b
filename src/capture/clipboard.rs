use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::color::flatten_to_rgb;
use crate::error::{ClipboardReadError, IngestError};
use crate::state::collection::Collection;
use crate::state::data::RecordId;

/// What the clipboard currently holds, as far as the gallery cares
#[derive(Debug, Clone)]
pub enum ClipboardContent {
    /// Raw pixel data (screenshot, "Copy Image" in a browser, ...)
    Image(DynamicImage),
    /// References to files, e.g. a file copied in a file manager
    FilePaths(Vec<PathBuf>),
    /// Nothing usable
    Empty,
}

/// Anything the gallery can paste from
pub trait ClipboardSource {
    fn read(&mut self) -> Result<ClipboardContent, ClipboardReadError>;
}

/// The OS clipboard, via arboard
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardReadError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardReadError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardReadError::Unavailable("clipboard not initialized".into()))
    }
}

impl ClipboardSource for SystemClipboard {
    fn read(&mut self) -> Result<ClipboardContent, ClipboardReadError> {
        let clipboard = self.handle()?;

        match clipboard.get_image() {
            Ok(data) => {
                let (width, height) = (data.width as u32, data.height as u32);
                // arboard always hands back RGBA8
                let rgba = RgbaImage::from_raw(width, height, data.bytes.into_owned())
                    .ok_or_else(|| {
                        ClipboardReadError::Malformed(format!(
                            "buffer does not match {}x{} RGBA",
                            width, height
                        ))
                    })?;
                return Ok(ClipboardContent::Image(DynamicImage::ImageRgba8(rgba)));
            }
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(e) => return Err(ClipboardReadError::Unavailable(e.to_string())),
        }

        // No bitmap: a file copied in a file manager arrives as a file list
        let files = clipboard.get().file_list();
        classify_non_image(files, || clipboard.get_text())
    }
}

/// Decide what a clipboard without a bitmap holds.
///
/// A native file list (CF_HDROP, `text/uri-list`, NSFilenamesPboardType) wins;
/// clipboard text that reads as a list of paths is the fallback.
fn classify_non_image(
    files: Result<Vec<PathBuf>, arboard::Error>,
    text: impl FnOnce() -> Result<String, arboard::Error>,
) -> Result<ClipboardContent, ClipboardReadError> {
    match files {
        Ok(paths) if !paths.is_empty() => return Ok(ClipboardContent::FilePaths(paths)),
        Ok(_) | Err(arboard::Error::ContentNotAvailable) => {}
        Err(e) => debug!("file list unavailable: {}", e),
    }

    match text() {
        Ok(text) => Ok(match parse_file_list(&text) {
            Some(paths) => ClipboardContent::FilePaths(paths),
            None => ClipboardContent::Empty,
        }),
        Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardContent::Empty),
        Err(e) => Err(ClipboardReadError::Unavailable(e.to_string())),
    }
}

/// Interpret clipboard text as a file list (`text/uri-list` or plain paths).
///
/// Returns `None` unless every non-comment line is a `file://` URI or an
/// absolute path that exists.
pub fn parse_file_list(text: &str) -> Option<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("file://") {
            paths.push(PathBuf::from(rest));
        } else if Path::new(line).is_absolute() && Path::new(line).exists() {
            paths.push(PathBuf::from(line));
        } else {
            return None;
        }
    }

    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}

/// Pull the current clipboard image into the collection.
///
/// The image is flattened to opaque RGB before it is stored. Clipboard
/// backend failures come back as `IngestError::IngestFailed`; nothing here
/// panics.
pub fn ingest<S: ClipboardSource + ?Sized>(
    source: &mut S,
    collection: &mut Collection,
) -> Result<RecordId, IngestError> {
    let image = match source.read() {
        Ok(ClipboardContent::Image(image)) => image,
        Ok(ClipboardContent::FilePaths(paths)) => {
            debug!(count = paths.len(), "clipboard holds file references");
            return Err(IngestError::NotAnImage);
        }
        Ok(ClipboardContent::Empty) => return Err(IngestError::NoImage),
        Err(e) => {
            warn!("⚠️  Clipboard read failed: {}", e);
            return Err(e.into());
        }
    };

    if image.width() == 0 || image.height() == 0 {
        return Err(IngestError::IngestFailed("clipboard image is empty".into()));
    }

    let rgb = flatten_to_rgb(image);
    let (width, height) = rgb.dimensions();
    let id = collection.push(rgb);
    info!("📋 Pasted {}x{} image as {} ({} total)", width, height, id, collection.len());

    Ok(id)
}
