//! PASCAL-VOC dataset tools
//!
//! This library provides the two steps used to prepare a VOC dataset for
//! TensorFlow object detection training: moving a random held-out share of
//! annotation/image pairs aside, and converting annotations plus JPEG images
//! into `train.record` / `test.record` TFRecord files.

pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod label_map;
pub mod record;
pub mod split;
pub mod splitter;
pub mod tfrecord;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use builder::{build_records, convert_dataset, BuildOptions, RecordSink, TfRecordFile};
pub use config::{RecordArgs, SplitArgs};
pub use error::{Error, Result};
pub use label_map::LabelMap;
pub use record::Record;
pub use splitter::{split_dataset, SplitOptions};
pub use types::{Annotation, BndBox, Object, ProcessingStats, Size};
