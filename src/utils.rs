use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Annotation;

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Whether the bytes start with the JPEG SOI marker
pub fn is_jpeg(image_bytes: &[u8]) -> bool {
    image_bytes.starts_with(&JPEG_MAGIC)
}

/// Lowercase hex SHA-256 digest of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Read and parse a single VOC XML file into an Annotation.
///
/// Fails when the document is not valid XML, lacks a required element, or
/// declares a non-positive image size.
pub fn read_annotation(path: &Path) -> Result<Annotation> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let annotation: Annotation =
        serde_xml_rs::from_str(&content).map_err(|e| Error::Annotation {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let size = annotation.size;
    if !(size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0)
    {
        return Err(Error::InvalidSize {
            path: path.to_path_buf(),
            width: size.width,
            height: size.height,
        });
    }
    Ok(annotation)
}

/// Read an image file and make sure it is a JPEG.
pub fn read_jpeg(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::MissingImage {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    if is_jpeg(&bytes) {
        Ok(bytes)
    } else {
        Err(Error::BadImageFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Create an output directory and its parents. Existing directories and
/// their contents are left untouched.
pub fn ensure_output_directory(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

/// Move a file, falling back to copy-then-delete when a rename is not
/// possible (e.g. across file systems).
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    debug!(
        "rename {} -> {} failed, copying instead",
        src.display(),
        dst.display()
    );
    copy_then_remove(src, dst, |path| fs::remove_file(path))
}

/// Copy `src` to `dst`, then delete `src` with `remove`. If the delete
/// fails the copy is removed again, so exactly one of the two files exists.
fn copy_then_remove<F>(src: &Path, dst: &Path, remove: F) -> Result<()>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    fs::copy(src, dst).map_err(|e| Error::io(src, e))?;
    if let Err(e) = remove(src) {
        let _ = fs::remove_file(dst);
        return Err(Error::io(src, e));
    }
    Ok(())
}
