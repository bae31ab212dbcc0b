//! TFRecord container format and the `tf.train.Example` protobuf messages.
//!
//! A TFRecord file is a sequence of frames:
//!
//! ```text
//! u64     length       (little endian)
//! u32     masked crc32c of length
//! [u8]    data
//! u32     masked crc32c of data
//! ```
//!
//! The message definitions mirror TensorFlow's `example.proto` and
//! `feature.proto` so the output can be read by `tf.data.TFRecordDataset`.

use prost::Message;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

const MASK_DELTA: u32 = 0xa282_ead8;

#[derive(Clone, PartialEq, Message)]
pub struct BytesList {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub value: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FloatList {
    #[prost(float, repeated, tag = "1")]
    pub value: Vec<f32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Int64List {
    #[prost(int64, repeated, tag = "1")]
    pub value: Vec<i64>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Feature {
    #[prost(oneof = "feature::Kind", tags = "1, 2, 3")]
    pub kind: Option<feature::Kind>,
}

pub mod feature {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "1")]
        BytesList(super::BytesList),
        #[prost(message, tag = "2")]
        FloatList(super::FloatList),
        #[prost(message, tag = "3")]
        Int64List(super::Int64List),
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Features {
    #[prost(map = "string, message", tag = "1")]
    pub feature: HashMap<String, Feature>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Example {
    #[prost(message, optional, tag = "1")]
    pub features: Option<Features>,
}

impl Feature {
    pub fn bytes_list(value: Vec<Vec<u8>>) -> Self {
        Self {
            kind: Some(feature::Kind::BytesList(BytesList { value })),
        }
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::bytes_list(vec![value.into()])
    }

    pub fn float_list(value: Vec<f32>) -> Self {
        Self {
            kind: Some(feature::Kind::FloatList(FloatList { value })),
        }
    }

    pub fn int64_list(value: Vec<i64>) -> Self {
        Self {
            kind: Some(feature::Kind::Int64List(Int64List { value })),
        }
    }

    pub fn int64(value: i64) -> Self {
        Self::int64_list(vec![value])
    }

    pub fn as_bytes_list(&self) -> Option<&[Vec<u8>]> {
        match &self.kind {
            Some(feature::Kind::BytesList(list)) => Some(&list.value),
            _ => None,
        }
    }

    pub fn as_float_list(&self) -> Option<&[f32]> {
        match &self.kind {
            Some(feature::Kind::FloatList(list)) => Some(&list.value),
            _ => None,
        }
    }

    pub fn as_int64_list(&self) -> Option<&[i64]> {
        match &self.kind {
            Some(feature::Kind::Int64List(list)) => Some(&list.value),
            _ => None,
        }
    }
}

impl Example {
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Feature)>,
    {
        Self {
            features: Some(Features {
                feature: features
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            }),
        }
    }

    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.features.as_ref()?.feature.get(key)
    }
}

fn masked_crc32c(data: &[u8]) -> u32 {
    let crc = crc32c::crc32c(data);
    ((crc >> 15) | (crc << 17)).wrapping_add(MASK_DELTA)
}

/// Append-only TFRecord stream.
pub struct RecordWriter<W: Write> {
    writer: W,
    count: usize,
}

impl RecordWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Flush buffered frames and sync the file to disk.
    pub fn finish(self) -> io::Result<()> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> io::Result<()> {
        let len = (data.len() as u64).to_le_bytes();
        self.writer.write_all(&len)?;
        self.writer.write_all(&masked_crc32c(&len).to_le_bytes())?;
        self.writer.write_all(data)?;
        self.writer.write_all(&masked_crc32c(data).to_le_bytes())?;
        self.count += 1;
        Ok(())
    }

    pub fn write_example(&mut self, example: &Example) -> io::Result<()> {
        self.write_bytes(&example.encode_to_vec())
    }

    /// Number of frames written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Iterates the frames of a TFRecord stream, verifying both checksums.
pub struct RecordReader<R: Read> {
    reader: R,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_frame(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut len = [0u8; 8];
        match read_full(&mut self.reader, &mut len)? {
            0 => return Ok(None),
            8 => {}
            _ => return Err(io::ErrorKind::UnexpectedEof.into()),
        }
        let mut crc = [0u8; 4];
        self.reader.read_exact(&mut crc)?;
        if u32::from_le_bytes(crc) != masked_crc32c(&len) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "length checksum mismatch",
            ));
        }

        let mut data = vec![0u8; u64::from_le_bytes(len) as usize];
        self.reader.read_exact(&mut data)?;
        self.reader.read_exact(&mut crc)?;
        if u32::from_le_bytes(crc) != masked_crc32c(&data) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "data checksum mismatch",
            ));
        }
        Ok(Some(data))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}

// Read until `buf` is full or the stream ends, returning the bytes read
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read every `Example` stored in a TFRecord file.
pub fn read_examples(path: &Path) -> Result<Vec<Example>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    RecordReader::new(BufReader::new(file))
        .map(|frame| {
            let data = frame.map_err(|e| Error::io(path, e))?;
            Example::decode(data.as_slice()).map_err(|e| {
                Error::io(path, io::Error::new(io::ErrorKind::InvalidData, e))
            })
        })
        .collect()
}
