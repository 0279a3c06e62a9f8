use crate::fragment::FragmentId;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, DiscoveryError>;

pub const DEFAULT_FRAGMENT_EXT: &str = "toml";
pub const DEFAULT_RESERVED_STEM: &str = "mod";

/// Controls which directory entries are considered fragments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiscoveryOptions {
    /// File extension (without the leading `.`) that marks a fragment file.
    pub fragment_ext: String,

    /// File stem of the reserved initializer entry that lives alongside
    /// fragments but is never itself a fragment.
    pub reserved_stem: String,
}

impl DiscoveryOptions {
    pub fn new(fragment_ext: impl Into<String>) -> Self {
        Self {
            fragment_ext: normalize_ext(fragment_ext.into()),
            reserved_stem: DEFAULT_RESERVED_STEM.to_string(),
        }
    }

    pub fn with_reserved_stem(mut self, reserved_stem: impl Into<String>) -> Self {
        self.reserved_stem = reserved_stem.into();
        self
    }

    /// Maps a directory entry's file name to a [`FragmentId`], or `None` if
    /// the entry isn't a fragment.
    pub fn fragment_id_for(&self, file_name: &str) -> Option<FragmentId> {
        let fragment_id = FragmentId::from_file_name(file_name, &self.fragment_ext)?;
        if fragment_id.as_str() == self.reserved_stem {
            None
        } else {
            Some(fragment_id)
        }
    }
}

impl std::default::Default for DiscoveryOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FRAGMENT_EXT)
    }
}

fn normalize_ext(ext: String) -> String {
    match ext.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => ext,
    }
}

/// Lists the fragments that live directly inside `dir`.
///
/// Only regular files (or symlinks to them) named `<id>.<fragment_ext>` are
/// included, and the reserved initializer entry is skipped. Subdirectories
/// are not descended into.
///
/// The returned ids are sorted lexicographically so that the assembled
/// document does not depend on the filesystem's enumeration order.
pub fn discover_fragments(
    dir: impl AsRef<Path>,
    options: &DiscoveryOptions,
) -> Result<Vec<FragmentId>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(DiscoveryError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    log::debug!("Scanning {dir:?} for `.{}` fragments...", options.fragment_ext);
    let mut fragment_ids = vec![];
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_skippable_entry_error(&err, options) => {
                log::trace!("Skipping unreadable non-fragment entry: {:?}.", err.path());
                continue;
            },
            Err(err) => return Err(DiscoveryError::ReadDirError {
                dir: dir.to_path_buf(),
                err,
            }),
        };
        let path = entry.path();

        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {path:?}.");
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            log::trace!("Skipping file with a non-UTF-8 name: {path:?}.");
            continue;
        };

        match options.fragment_id_for(file_name) {
            Some(fragment_id) => {
                log::trace!("Found fragment `{fragment_id}` at {path:?}.");
                fragment_ids.push(fragment_id);
            },
            None => log::trace!("Skipping non-fragment file: {path:?}."),
        }
    }

    fragment_ids.sort();
    log::debug!("Discovered {} fragments in {dir:?}.", fragment_ids.len());

    Ok(fragment_ids)
}

/// An error on a single child entry (e.g. a dangling symlink) only matters if
/// that entry would have been a fragment. Errors reading `dir` itself always
/// do.
fn is_skippable_entry_error(err: &walkdir::Error, options: &DiscoveryOptions) -> bool {
    if err.depth() == 0 {
        return false;
    }

    match err.path().and_then(|path| path.file_name()).map(|name| name.to_str()) {
        Some(Some(file_name)) => options.fragment_id_for(file_name).is_none(),
        // Non-UTF-8 names are never fragments.
        Some(None) => true,
        None => false,
    }
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Fragment directory {0:?} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("Fragment directory path {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to read entries of fragment directory {dir:?}")]
    ReadDirError {
        dir: PathBuf,
        #[source]
        err: walkdir::Error,
    },
}
