/// The stable name of a fragment: its file name minus the fragment
/// extension (e.g. `post` for `post.toml`).
///
/// Ordering is lexicographic, which is the order fragments are assembled in.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FragmentId(String);

impl FragmentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives a [`FragmentId`] from a file name ending in `.{fragment_ext}`.
    ///
    /// Returns `None` if the file name has a different extension or if
    /// nothing remains once the extension is stripped.
    pub fn from_file_name(file_name: &str, fragment_ext: &str) -> Option<Self> {
        let stem = file_name
            .strip_suffix(fragment_ext)?
            .strip_suffix('.')?;

        if stem.is_empty() {
            None
        } else {
            Some(Self::new(stem))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The file name this fragment is stored under for a given extension.
    pub fn file_name(&self, fragment_ext: &str) -> String {
        format!("{}.{fragment_ext}", self.0)
    }
}

impl std::fmt::Display for FragmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::convert::From<&str> for FragmentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::convert::From<String> for FragmentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
