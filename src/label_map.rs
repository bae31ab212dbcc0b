//! Class name to integer id mapping used when writing records.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

// The 20 PASCAL-VOC categories in their conventional id order
pub const PASCAL_VOC_LABELS: &[(&str, i64)] = &[
    ("person", 1),
    ("bird", 2),
    ("cat", 3),
    ("cow", 4),
    ("dog", 5),
    ("horse", 6),
    ("sheep", 7),
    ("aeroplane", 8),
    ("bicycle", 9),
    ("boat", 10),
    ("bus", 11),
    ("car", 12),
    ("motorbike", 13),
    ("train", 14),
    ("bottle", 15),
    ("chair", 16),
    ("diningtable", 17),
    ("pottedplant", 18),
    ("sofa", 19),
    ("tvmonitor", 20),
];

/// Fixed mapping from class name to a positive id. Names and ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    ids: HashMap<String, i64>,
}

impl LabelMap {
    pub fn pascal_voc() -> Self {
        Self {
            ids: PASCAL_VOC_LABELS
                .iter()
                .map(|&(name, id)| (name.to_string(), id))
                .collect(),
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut ids = HashMap::new();
        let mut seen_ids = HashSet::new();
        for (name, id) in entries {
            let name = name.into();
            if id <= 0 {
                return Err(Error::InvalidLabelMap(format!(
                    "id {} for '{}' is not positive",
                    id, name
                )));
            }
            if !seen_ids.insert(id) {
                return Err(Error::InvalidLabelMap(format!("id {} is used twice", id)));
            }
            if ids.insert(name.clone(), id).is_some() {
                return Err(Error::InvalidLabelMap(format!(
                    "label '{}' is defined twice",
                    name
                )));
            }
        }
        Ok(Self { ids })
    }

    /// Load a map from a JSON object such as `{"person": 1, "car": 2}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let entries: HashMap<String, i64> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                Error::InvalidLabelMap(format!("failed to parse {}: {}", path.display(), e))
            })?;
        let map = Self::from_entries(entries)?;
        if map.is_empty() {
            return Err(Error::InvalidLabelMap(format!(
                "{} defines no labels",
                path.display()
            )));
        }
        Ok(map)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
