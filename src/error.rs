use std::path::PathBuf;

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Keypoints of an annotation on image {image_id} have {len} values, not a multiple of 3")]
    MalformedKeypoints { image_id: i64, len: usize },
}

impl ConvertError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
