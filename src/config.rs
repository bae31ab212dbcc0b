use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::builder::BuildOptions;
use crate::split::TEST_FRACTION;
use crate::splitter::SplitOptions;

/// Move a random share of a PASCAL-VOC dataset into a held-out directory.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct SplitArgs {
    /// Directory containing VOC XML annotations
    pub annotations_dir: PathBuf,

    /// Directory containing the JPEG images referenced by the annotations
    pub images_dir: PathBuf,

    /// Root of the held-out tree; `annotations/` and `images/` are created in it
    pub output_root: PathBuf,

    /// Proportion of the dataset to move
    #[arg(long = "test_size", default_value_t = TEST_FRACTION, value_parser = validate_size)]
    pub test_size: f64,

    /// Seed for random shuffling; a fresh one is drawn when omitted
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl SplitArgs {
    pub fn options(&self) -> SplitOptions {
        SplitOptions {
            test_size: self.test_size,
            seed: self.seed,
        }
    }
}

/// Convert VOC annotations to TensorFlow TFRecord files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct RecordArgs {
    /// Directory containing VOC XML annotations
    #[arg(short = 'a', long = "annotations_dir")]
    pub annotations_dir: PathBuf,

    /// Directory containing JPEG images
    #[arg(short = 'i', long = "images_dir")]
    pub images_dir: PathBuf,

    /// Directory where train.record and test.record are written
    #[arg(short = 'o', long = "output_dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file mapping class names to ids; the 20 VOC classes when omitted
    #[arg(long = "label_map")]
    pub label_map: Option<PathBuf>,

    /// Proportion of the dataset written to test.record
    #[arg(long = "test_size", default_value_t = TEST_FRACTION, value_parser = validate_size)]
    pub test_size: f64,

    /// Seed for random shuffling; a fresh one is drawn when omitted
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl RecordArgs {
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            test_size: self.test_size,
            seed: self.seed,
        }
    }
}

// Validate that the size is between 0.0 and 1.0
pub fn validate_size(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SIZE must be between 0.0 and 1.0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert!(validate_size("0.5").is_ok());
        assert!(validate_size("1.0").is_ok());
        assert!(validate_size("0.0").is_ok());
        assert!(validate_size("-0.1").is_err());
        assert!(validate_size("1.1").is_err());
        assert!(validate_size("abc").is_err());
    }

    #[test]
    fn test_split_args() {
        let args = SplitArgs::parse_from(["split_voc", "ann", "img", "out"]);
        assert_eq!(args.annotations_dir, PathBuf::from("ann"));
        assert_eq!(args.images_dir, PathBuf::from("img"));
        assert_eq!(args.output_root, PathBuf::from("out"));
        assert_eq!(args.test_size, TEST_FRACTION);
        assert_eq!(args.seed, None);

        assert!(SplitArgs::try_parse_from(["split_voc", "ann", "img"]).is_err());
    }

    #[test]
    fn test_record_args() {
        let args = RecordArgs::parse_from(["voc2tfrecord", "-a", "ann", "--images_dir", "img"]);
        assert_eq!(args.annotations_dir, PathBuf::from("ann"));
        assert_eq!(args.images_dir, PathBuf::from("img"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.label_map, None);
        assert_eq!(args.options().test_size, TEST_FRACTION);

        let args = RecordArgs::parse_from([
            "voc2tfrecord",
            "--annotations_dir",
            "ann",
            "-i",
            "img",
            "--seed",
            "3",
            "--test_size",
            "0.5",
        ]);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.test_size, 0.5);

        assert!(RecordArgs::try_parse_from(["voc2tfrecord", "-a", "ann"]).is_err());
    }
}
