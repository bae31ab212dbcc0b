//! Dataset splitter: move a random share of annotation/image pairs into a
//! held-out directory tree.

use log::info;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::{list_annotation_files, setup_output_directories};
use crate::split::{make_rng, split_files};
use crate::types::{MovedPair, ProcessingStats};
use crate::utils::{move_file, read_annotation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOptions {
    pub test_size: f64,
    pub seed: Option<u64>,
}

/// Move `floor(test_size * N)` randomly chosen annotations, together with
/// the images they reference, into `<output_root>/annotations` and
/// `<output_root>/images`. The source path of each moved image is printed
/// to stdout.
///
/// The first error aborts the run; pairs moved before it stay moved.
pub fn split_dataset(
    annotations_dir: &Path,
    images_dir: &Path,
    output_root: &Path,
    options: &SplitOptions,
) -> Result<Vec<MovedPair>> {
    let files = list_annotation_files(annotations_dir)?;
    let mut stats = ProcessingStats::new();
    stats.total_annotations = files.len();

    let split = split_files(files, options.test_size, &mut make_rng(options.seed));
    info!(
        "Moving {} of {} annotations to {}",
        split.test.len(),
        stats.total_annotations,
        output_root.display()
    );

    let output_dirs = setup_output_directories(output_root)?;

    let mut moved = Vec::with_capacity(split.test.len());
    for annotation_path in &split.test {
        let annotation = read_annotation(annotation_path)?;
        let image_path = images_dir.join(&annotation.filename);
        if !image_path.is_file() {
            return Err(Error::MissingImage { path: image_path });
        }

        // annotation_path comes from read_dir, so it always has a file name
        let annotation_name = annotation_path.file_name().unwrap_or_default();
        let annotation_dst = output_dirs.annotations_dir.join(annotation_name);
        let image_dst = output_dirs.images_dir.join(&annotation.filename);

        move_file(annotation_path, &annotation_dst)?;
        move_file(&image_path, &image_dst)?;
        println!("{}", image_path.display());

        stats.files_moved += 2;
        moved.push(MovedPair {
            annotation: annotation_dst,
            image: image_dst,
        });
    }

    stats.print_summary();
    Ok(moved)
}
