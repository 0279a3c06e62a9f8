use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads the full content of a fragment (or any other text) file as UTF-8.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid UTF-8")]
    FileDecodeError {
        file_path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {file_path:?}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Path {0:?} does not point to a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_file_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let file_path = dir.path().join("post.toml");
        std::fs::write(&file_path, "queries = 'post(id: String!): Post!'").unwrap();

        assert_eq!(
            read_content(&file_path).unwrap(),
            "queries = 'post(id: String!): Post!'",
        );
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::TempDir::new().unwrap();

        assert!(matches!(
            read_content(dir.path()),
            Err(ReadContentError::PathIsNotAFile(path)) if path == dir.path(),
        ));
    }

    #[test]
    fn missing_file_is_not_a_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file_path = dir.path().join("missing.toml");

        let err = read_content(&file_path).unwrap_err();
        assert_eq!(err.file_path(), file_path.as_path());
        assert!(matches!(err, ReadContentError::PathIsNotAFile(_)));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let file_path = dir.path().join("binary.toml");
        std::fs::write(&file_path, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(matches!(
            read_content(&file_path),
            Err(ReadContentError::FileDecodeError { .. }),
        ));
    }
}
