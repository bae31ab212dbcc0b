use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::ensure_output_directory;

// Destination directories of the splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub annotations_dir: PathBuf,
    pub images_dir: PathBuf,
}

/// Set up `<output_root>/annotations` and `<output_root>/images`
pub fn setup_output_directories(output_root: &Path) -> Result<OutputDirs> {
    Ok(OutputDirs {
        annotations_dir: ensure_output_directory(&output_root.join("annotations"))?,
        images_dir: ensure_output_directory(&output_root.join("images"))?,
    })
}

/// List every regular file directly inside `dir`, sorted by file name.
///
/// Sorting only fixes the order a seeded shuffle starts from.
pub fn list_annotation_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_annotation_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.xml"), "").unwrap();
        fs::write(dir.path().join("a.xml"), "").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let files = list_annotation_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.xml"), dir.path().join("b.xml")]
        );
    }

    #[test]
    fn test_list_annotation_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            list_annotation_files(&dir.path().join("nope")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_setup_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = setup_output_directories(dir.path()).unwrap();
        assert!(dirs.annotations_dir.is_dir());
        assert!(dirs.images_dir.is_dir());
        assert_eq!(dirs.images_dir, dir.path().join("images"));

        // second call keeps working
        setup_output_directories(dir.path()).unwrap();
    }
}
