use crate::file_reader;
use crate::file_reader::ReadContentError;
use crate::fragment::DiscoveryOptions;
use crate::fragment::FragmentFile;
use crate::fragment::FragmentId;
use crate::fragment::FragmentLoader;
use crate::fragment::FragmentSource;
use crate::fragment::LoadError;
use std::path::Path;
use std::path::PathBuf;

/// Loads fragments from `<dir>/<id>.<fragment_ext>` TOML files.
#[derive(Clone, Debug)]
pub struct DirectoryFragmentLoader {
    dir: PathBuf,
    fragment_ext: String,
}

impl DirectoryFragmentLoader {
    pub fn new(dir: impl Into<PathBuf>, options: &DiscoveryOptions) -> Self {
        Self {
            dir: dir.into(),
            fragment_ext: options.fragment_ext.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    pub fn fragment_path(&self, fragment_id: &FragmentId) -> PathBuf {
        self.dir.join(fragment_id.file_name(&self.fragment_ext))
    }

    /// Reads and parses the [`FragmentFile`] for `fragment_id` without
    /// flattening it into a [`FragmentSource`].
    pub fn load_file(&self, fragment_id: &FragmentId) -> Result<FragmentFile, LoadError> {
        let file_path = self.fragment_path(fragment_id);
        log::trace!("Loading fragment `{fragment_id}` from {file_path:?}.");

        let content = file_reader::read_content(&file_path)
            .map_err(|err| match err {
                ReadContentError::PathIsNotAFile(file_path) => LoadError::NotFound {
                    fragment_id: fragment_id.clone(),
                    file_path: Some(file_path),
                },
                err => LoadError::ReadError {
                    fragment_id: fragment_id.clone(),
                    err: Box::new(err),
                },
            })?;

        FragmentFile::from_toml_str(&content)
            .map_err(|err| LoadError::Malformed {
                fragment_id: fragment_id.clone(),
                file_path,
                err: Box::new(err),
            })
    }
}

impl FragmentLoader for DirectoryFragmentLoader {
    fn load(&self, fragment_id: &FragmentId) -> Result<FragmentSource, LoadError> {
        let fragment_file = self.load_file(fragment_id)?;
        Ok(FragmentSource::from_provider(fragment_id.clone(), &fragment_file))
    }
}
