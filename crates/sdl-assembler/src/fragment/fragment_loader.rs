use crate::file_reader::ReadContentError;
use crate::fragment::FragmentId;
use crate::fragment::FragmentSource;
use std::path::PathBuf;
use thiserror::Error;

/// Resolves a [`FragmentId`] to the fragment's SDL text.
pub trait FragmentLoader {
    fn load(&self, fragment_id: &FragmentId) -> Result<FragmentSource, LoadError>;
}

impl<L: FragmentLoader + ?Sized> FragmentLoader for &L {
    fn load(&self, fragment_id: &FragmentId) -> Result<FragmentSource, LoadError> {
        (**self).load(fragment_id)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fragment `{fragment_id}` is malformed ({file_path:?})")]
    Malformed {
        fragment_id: FragmentId,
        file_path: PathBuf,
        #[source]
        err: Box<toml::de::Error>,
    },

    #[error("Fragment `{fragment_id}` could not be found")]
    NotFound {
        fragment_id: FragmentId,
        file_path: Option<PathBuf>,
    },

    #[error("Failed to read fragment `{fragment_id}`")]
    ReadError {
        fragment_id: FragmentId,
        #[source]
        err: Box<ReadContentError>,
    },
}
impl LoadError {
    pub fn fragment_id(&self) -> &FragmentId {
        match self {
            Self::Malformed { fragment_id, .. }
                | Self::NotFound { fragment_id, .. }
                | Self::ReadError { fragment_id, .. } => fragment_id,
        }
    }
}
