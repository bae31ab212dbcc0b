use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

// Root element of a PASCAL-VOC annotation file. Elements not listed here
// (folder, source, segmented, ...) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub filename: String,
    pub size: Size,
    pub objects: Vec<Object>,
}

impl<'de> Deserialize<'de> for Annotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnnotationVisitor;

        impl<'de> Visitor<'de> for AnnotationVisitor {
            type Value = Annotation;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a VOC annotation element")
            }

            // `object` children may appear anywhere among their siblings, so
            // each one is collected as it is met.
            fn visit_map<V>(self, mut map: V) -> Result<Annotation, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut filename: Option<String> = None;
                let mut size: Option<Size> = None;
                let mut objects = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "filename" => {
                            let value = map.next_value()?;
                            if filename.is_none() {
                                filename = Some(value);
                            }
                        }
                        "size" => {
                            let value = map.next_value()?;
                            if size.is_none() {
                                size = Some(value);
                            }
                        }
                        "object" => objects.push(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(Annotation {
                    filename: filename.ok_or_else(|| de::Error::missing_field("filename"))?,
                    size: size.ok_or_else(|| de::Error::missing_field("size"))?,
                    objects,
                })
            }
        }

        deserializer.deserialize_struct(
            "annotation",
            &["filename", "size", "object"],
            AnnotationVisitor,
        )
    }
}

// Only the two dimensions used for normalization are read; depth and any
// other child are ignored.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

// One labeled instance inside an annotation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub bndbox: BndBox,
}

/// Bounding box in pixel coordinates.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BndBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BndBox {
    /// Scale the box into `[0, 1]` image-relative coordinates, returned as
    /// `(xmin, ymin, xmax, ymax)`.
    pub fn normalize(&self, size: &Size) -> (f32, f32, f32, f32) {
        (
            (self.xmin / size.width) as f32,
            (self.ymin / size.height) as f32,
            (self.xmax / size.width) as f32,
            (self.ymax / size.height) as f32,
        )
    }
}

// An annotation file paired with the image it references
#[derive(Debug, Clone, PartialEq)]
pub struct MovedPair {
    pub annotation: PathBuf,
    pub image: PathBuf,
}

// Counters reported at the end of a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_annotations: usize,
    pub train_records: usize,
    pub test_records: usize,
    pub objects_written: usize,
    pub files_moved: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_train(&mut self, objects: usize) {
        self.train_records += 1;
        self.objects_written += objects;
    }

    pub fn increment_test(&mut self, objects: usize) {
        self.test_records += 1;
        self.objects_written += objects;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total annotations: {}", self.total_annotations);
        if self.files_moved > 0 {
            log::info!("Files moved: {}", self.files_moved);
        }
        if self.train_records + self.test_records > 0 {
            log::info!("Train records: {}", self.train_records);
            log::info!("Test records: {}", self.test_records);
            log::info!("Objects written: {}", self.objects_written);
        }
    }
}
