use crate::assembly::AssembledSchema;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

type Result<T> = std::result::Result<T, WriteError>;

/// Writes `schema`'s generated source to `output_path`, replacing whatever
/// was there.
///
/// Content goes to a temporary file next to the destination which is then
/// renamed over it, so readers only ever observe the previous file or the
/// complete new one.
pub fn write_schema(output_path: impl AsRef<Path>, schema: &AssembledSchema) -> Result<()> {
    let output_path = output_path.as_ref();
    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(output_dir)
        .map_err(|err| WriteError::CreateTempFile {
            dir: output_dir.to_path_buf(),
            err,
        })?;

    let write_content = |temp_file: &mut NamedTempFile| -> std::io::Result<()> {
        temp_file.write_all(schema.source().as_bytes())?;
        temp_file.flush()?;
        match std::fs::metadata(output_path) {
            Ok(existing) => temp_file.as_file().set_permissions(existing.permissions())?,
            Err(_) => set_default_permissions(temp_file)?,
        }
        Ok(())
    };
    write_content(&mut temp_file).map_err(|err| WriteError::WriteContent {
        output_path: output_path.to_path_buf(),
        err,
    })?;

    temp_file.persist(output_path).map_err(|err| WriteError::Persist {
        output_path: output_path.to_path_buf(),
        err: err.error,
    })?;

    log::debug!(
        "Wrote {} bytes to {output_path:?}.",
        schema.source().len(),
    );
    Ok(())
}

// `NamedTempFile` creates files as 0600.
#[cfg(unix)]
fn set_default_permissions(temp_file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    temp_file.as_file().set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_temp_file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create a temporary file in {dir:?}")]
    CreateTempFile {
        dir: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Failed to move the generated schema into place at {output_path:?}")]
    Persist {
        output_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Failed to write the generated schema for {output_path:?}")]
    WriteContent {
        output_path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}
