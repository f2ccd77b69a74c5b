/// Batch JPEG export
///
/// Every record is written as `<sanitized name>.jpg` into the target folder.
/// Existing files are never overwritten: a numeric suffix is appended until
/// a free name is found. A failing item is recorded and the batch moves on.

use image::codecs::jpeg::JpegEncoder;
use image::{ImageResult, RgbImage};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ExportError, ExportItemError};
use crate::state::data::{default_name, ImageRecord};

/// Image codec seam for the export engine
pub trait JpegEncode {
    fn encode(&self, image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>>;
}

/// JPEG encoding via the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegEncoder;

impl JpegEncode for ImageJpegEncoder {
    fn encode(&self, image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
        image.write_with_encoder(encoder)?;
        Ok(bytes)
    }
}

/// Result of a finished batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub success_count: usize,
    /// Files created, in collection order
    pub written: Vec<PathBuf>,
    /// One entry per failed record
    pub errors: Vec<ExportItemError>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Text for the end-of-batch dialog
    pub fn summary(&self, target_dir: &Path) -> String {
        if self.is_complete() {
            format!(
                "Successfully saved {} images to:\n{}",
                self.success_count,
                target_dir.display()
            )
        } else {
            let errors: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            format!(
                "Saved {} images.\n\nErrors:\n{}",
                self.success_count,
                errors.join("\n")
            )
        }
    }
}

/// Make a record name safe to use as a file stem.
///
/// Letters, digits, spaces, `-` and `_` are kept; anything else becomes `_`.
/// Falls back to `image_{position:03}` (1-based) if nothing is left.
pub fn sanitize_file_stem(name: &str, position: usize) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = safe.trim();
    if trimmed.is_empty() {
        default_name(position)
    } else {
        trimmed.to_string()
    }
}

fn candidate_name(stem: &str, counter: u32) -> String {
    if counter == 0 {
        format!("{}.jpg", stem)
    } else {
        format!("{}_{}.jpg", stem, counter)
    }
}

/// First candidate at or after `counter` that doesn't exist in `dir`
fn next_free_name(dir: &Path, stem: &str, mut counter: u32) -> (String, u32) {
    loop {
        let name = candidate_name(stem, counter);
        if !dir.join(&name).exists() {
            return (name, counter);
        }
        counter += 1;
    }
}

/// Export all records with the default JPEG encoder
pub fn export_all(
    records: &[ImageRecord],
    target_dir: &Path,
    quality: u8,
) -> Result<ExportReport, ExportError> {
    export_all_with(records, target_dir, quality, &ImageJpegEncoder)
}

/// Export all records, encoding with `encoder`.
///
/// Returns `NothingToExport` for an empty slice and `MissingDirectory` when
/// the target is not an existing folder; neither writes anything.
pub fn export_all_with<E: JpegEncode + ?Sized>(
    records: &[ImageRecord],
    target_dir: &Path,
    quality: u8,
    encoder: &E,
) -> Result<ExportReport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    if !target_dir.is_dir() {
        return Err(ExportError::MissingDirectory(target_dir.to_path_buf()));
    }

    let quality = quality.clamp(1, 100);
    let mut report = ExportReport::default();

    for (index, record) in records.iter().enumerate() {
        let stem = sanitize_file_stem(&record.name, index + 1);
        match export_one(record, target_dir, &stem, quality, encoder) {
            Ok(path) => {
                report.success_count += 1;
                report.written.push(path);
            }
            Err(err) => {
                warn!("⚠️  Export of {} failed: {}", record.id, err);
                report.errors.push(err);
            }
        }
    }

    info!(
        "💾 Export to {}: {} saved, {} failed",
        target_dir.display(),
        report.success_count,
        report.errors.len()
    );
    Ok(report)
}

fn export_one<E: JpegEncode + ?Sized>(
    record: &ImageRecord,
    dir: &Path,
    stem: &str,
    quality: u8,
    encoder: &E,
) -> Result<PathBuf, ExportItemError> {
    let (mut file_name, mut counter) = next_free_name(dir, stem, 0);

    let bytes = encoder
        .encode(&record.image, quality)
        .map_err(|e| ExportItemError::EncodeFailed {
            file_name: file_name.clone(),
            message: e.to_string(),
        })?;

    loop {
        let path = dir.join(&file_name);
        // create_new: a file that appeared since the probe is never clobbered
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(&bytes)
                    .map_err(|e| write_failed(&file_name, e))?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                (file_name, counter) = next_free_name(dir, stem, counter + 1);
            }
            Err(e) => return Err(write_failed(&file_name, e)),
        }
    }
}

fn write_failed(file_name: &str, err: io::Error) -> ExportItemError {
    ExportItemError::WriteFailed {
        file_name: file_name.to_string(),
        message: err.to_string(),
    }
}
