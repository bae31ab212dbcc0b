use std::path::PathBuf;

/// Errors raised while splitting a VOC dataset or building TFRecord files.
///
/// Every variant is fatal: the binaries stop at the first error and leave
/// already moved files and already written records in place.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed annotation {path}: {message}")]
    Annotation { path: PathBuf, message: String },

    #[error("annotation {path} has invalid image size {width}x{height}")]
    InvalidSize {
        path: PathBuf,
        width: f64,
        height: f64,
    },

    #[error("image {path} referenced by an annotation does not exist")]
    MissingImage { path: PathBuf },

    #[error("unknown label '{name}' in {path}")]
    UnknownLabel { name: String, path: PathBuf },

    #[error("bad image format for {path}: expected JPEG")]
    BadImageFormat { path: PathBuf },

    #[error("invalid label map: {0}")]
    InvalidLabelMap(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
