//! Conversion of one VOC annotation and its JPEG image into a TFRecord
//! `Example` following the TensorFlow object detection schema.

use std::path::Path;

use crate::error::{Error, Result};
use crate::label_map::LabelMap;
use crate::tfrecord::{Example, Feature};
use crate::types::Annotation;
use crate::utils::sha256_hex;

pub const IMAGE_FORMAT: &str = "jpeg";
pub const UNSPECIFIED_VIEW: &str = "Unspecified";

/// One image with its objects. The per-object vectors always have the same
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub filename: String,
    pub width: i64,
    pub height: i64,
    pub sha256: String,
    pub encoded: Vec<u8>,
    pub xmin: Vec<f32>,
    pub xmax: Vec<f32>,
    pub ymin: Vec<f32>,
    pub ymax: Vec<f32>,
    pub class_text: Vec<String>,
    pub class_label: Vec<i64>,
    pub difficult: Vec<i64>,
    pub truncated: Vec<i64>,
    pub view: Vec<String>,
}

impl Record {
    /// Build the record for `annotation`. Every label is resolved before
    /// anything else so an unknown class yields no record at all.
    pub fn from_annotation(
        annotation_path: &Path,
        annotation: &Annotation,
        encoded: Vec<u8>,
        label_map: &LabelMap,
    ) -> Result<Self> {
        let class_label = annotation
            .objects
            .iter()
            .map(|object| {
                label_map
                    .get(&object.name)
                    .ok_or_else(|| Error::UnknownLabel {
                        name: object.name.clone(),
                        path: annotation_path.to_path_buf(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let count = annotation.objects.len();
        let mut xmin = Vec::with_capacity(count);
        let mut ymin = Vec::with_capacity(count);
        let mut xmax = Vec::with_capacity(count);
        let mut ymax = Vec::with_capacity(count);
        for object in &annotation.objects {
            let (x0, y0, x1, y1) = object.bndbox.normalize(&annotation.size);
            xmin.push(x0);
            ymin.push(y0);
            xmax.push(x1);
            ymax.push(y1);
        }

        Ok(Self {
            filename: annotation.filename.clone(),
            width: annotation.size.width as i64,
            height: annotation.size.height as i64,
            sha256: sha256_hex(&encoded),
            encoded,
            xmin,
            xmax,
            ymin,
            ymax,
            class_text: annotation.objects.iter().map(|o| o.name.clone()).collect(),
            class_label,
            difficult: vec![0; count],
            truncated: vec![0; count],
            view: vec![UNSPECIFIED_VIEW.to_string(); count],
        })
    }

    pub fn num_objects(&self) -> usize {
        self.class_label.len()
    }

    pub fn to_example(&self) -> Example {
        let filename = self.filename.as_bytes().to_vec();
        Example::from_features([
            ("image/height", Feature::int64(self.height)),
            ("image/width", Feature::int64(self.width)),
            ("image/filename", Feature::bytes(filename.clone())),
            ("image/source_id", Feature::bytes(filename)),
            ("image/key/sha256", Feature::bytes(self.sha256.as_bytes())),
            ("image/encoded", Feature::bytes(self.encoded.clone())),
            ("image/format", Feature::bytes(IMAGE_FORMAT)),
            ("image/object/bbox/xmin", Feature::float_list(self.xmin.clone())),
            ("image/object/bbox/xmax", Feature::float_list(self.xmax.clone())),
            ("image/object/bbox/ymin", Feature::float_list(self.ymin.clone())),
            ("image/object/bbox/ymax", Feature::float_list(self.ymax.clone())),
            (
                "image/object/class/text",
                Feature::bytes_list(to_bytes_list(&self.class_text)),
            ),
            (
                "image/object/class/label",
                Feature::int64_list(self.class_label.clone()),
            ),
            (
                "image/object/difficult",
                Feature::int64_list(self.difficult.clone()),
            ),
            (
                "image/object/truncated",
                Feature::int64_list(self.truncated.clone()),
            ),
            (
                "image/object/view",
                Feature::bytes_list(to_bytes_list(&self.view)),
            ),
        ])
    }
}

fn to_bytes_list(values: &[String]) -> Vec<Vec<u8>> {
    values.iter().map(|v| v.as_bytes().to_vec()).collect()
}
