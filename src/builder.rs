//! Record builder: VOC annotations and JPEG images to `train.record` and
//! `test.record`.

use log::{debug, info, warn};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::label_map::LabelMap;
use crate::record::Record;
use crate::split::{make_rng, split_files, SplitData};
use crate::tfrecord::RecordWriter;
use crate::types::ProcessingStats;
use crate::utils::{create_progress_bar, read_annotation, read_jpeg};

pub const TRAIN_RECORD_FILE: &str = "train.record";
pub const TEST_RECORD_FILE: &str = "test.record";

/// Destination of serialized records.
pub trait RecordSink {
    fn append(&mut self, record: &Record) -> Result<()>;

    /// Flush everything written so far to durable storage.
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// A TFRecord file on disk.
pub struct TfRecordFile {
    path: PathBuf,
    writer: RecordWriter<BufWriter<File>>,
}

impl TfRecordFile {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let writer = RecordWriter::create(&path)?;
        Ok(Self { path, writer })
    }
}

impl RecordSink for TfRecordFile {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.writer
            .write_example(&record.to_example())
            .map_err(|e| Error::io(&self.path, e))
    }

    fn finish(self) -> Result<()> {
        let count = self.writer.count();
        self.writer.finish().map_err(|e| Error::io(&self.path, e))?;
        info!("Wrote {} records to {}", count, self.path.display());
        Ok(())
    }
}

// In-memory sink
impl RecordSink for &mut Vec<Record> {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    pub test_size: f64,
    pub seed: Option<u64>,
}

/// Read one annotation and its image and build the record.
pub fn process_annotation(
    annotation_path: &Path,
    images_dir: &Path,
    label_map: &LabelMap,
) -> Result<Record> {
    let annotation = read_annotation(annotation_path)?;
    let image_path = images_dir.join(&annotation.filename);
    let encoded = read_jpeg(&image_path)?;
    Record::from_annotation(annotation_path, &annotation, encoded, label_map)
}

/// Create `train.record` and `test.record` inside `output_dir`
pub fn create_record_files(output_dir: &Path) -> Result<(TfRecordFile, TfRecordFile)> {
    Ok((
        TfRecordFile::create(output_dir.join(TRAIN_RECORD_FILE))?,
        TfRecordFile::create(output_dir.join(TEST_RECORD_FILE))?,
    ))
}

/// Write one record per annotation file, in shuffled order, to either the
/// test or the train sink. Stops at the first error; records already
/// appended stay in their sinks.
pub fn build_records<T, S>(
    split: &SplitData,
    images_dir: &Path,
    label_map: &LabelMap,
    mut train: T,
    mut test: S,
) -> Result<ProcessingStats>
where
    T: RecordSink,
    S: RecordSink,
{
    let mut stats = ProcessingStats::new();
    stats.total_annotations = split.len();
    if split.is_empty() {
        warn!("No annotation files to convert; writing empty record files.");
    }
    let pb = create_progress_bar(split.len() as u64, "Records");

    for path in &split.test {
        let record = process_annotation(path, images_dir, label_map)?;
        test.append(&record)?;
        stats.increment_test(record.num_objects());
        debug!("test <- {}", path.display());
        pb.inc(1);
    }
    for path in &split.train {
        let record = process_annotation(path, images_dir, label_map)?;
        train.append(&record)?;
        stats.increment_train(record.num_objects());
        debug!("train <- {}", path.display());
        pb.inc(1);
    }
    pb.finish_with_message("Record conversion complete");

    train.finish()?;
    test.finish()?;
    Ok(stats)
}

/// Main conversion pipeline: list, split and convert every annotation in
/// `annotations_dir`.
pub fn convert_dataset(
    annotations_dir: &Path,
    images_dir: &Path,
    output_dir: &Path,
    label_map: &LabelMap,
    options: &BuildOptions,
) -> Result<ProcessingStats> {
    let files = crate::io::list_annotation_files(annotations_dir)?;
    info!("Found {} annotation files.", files.len());

    let split = split_files(files, options.test_size, &mut make_rng(options.seed));
    info!(
        "Assigned {} annotations to test and {} to train.",
        split.test.len(),
        split.train.len()
    );

    let (train, test) = create_record_files(output_dir)?;
    build_records(&split, images_dir, label_map, train, test)
}
