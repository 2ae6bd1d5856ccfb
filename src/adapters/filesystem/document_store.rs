//! `DocumentStore` implementation for `FilesystemDocumentStore`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::{DocumentStore, WriteMode};

use super::FilesystemDocumentStore;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

impl DocumentStore for FilesystemDocumentStore {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(self.resolve_path(path)).is_ok_and(|metadata| metadata.is_file())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve_path(path))
    }

    fn write(&self, path: &Path, content: &str, mode: WriteMode) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        let display = path.display().to_string();
        let to_write_error = |err: io::Error| AppError::write_error(display.clone(), err);

        let mut temp = NamedTempFile::new_in(parent_dir(&full_path)).map_err(to_write_error)?;
        temp.write_all(content.as_bytes()).map_err(to_write_error)?;
        temp.as_file().sync_all().map_err(to_write_error)?;
        set_output_permissions(&temp, &full_path, mode).map_err(to_write_error)?;

        match mode {
            WriteMode::CreateNew => {
                temp.persist_noclobber(&full_path).map_err(|err| {
                    if err.error.kind() == io::ErrorKind::AlreadyExists {
                        AppError::OutputExists { path: display.clone() }
                    } else {
                        to_write_error(err.error)
                    }
                })?;
            }
            WriteMode::Replace => {
                temp.persist(&full_path).map_err(|err| to_write_error(err.error))?;
            }
        }

        Ok(())
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// New files get 0644; a replaced file keeps its previous permissions.
#[cfg(unix)]
fn set_output_permissions(temp: &NamedTempFile, target: &Path, mode: WriteMode) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = match (mode, fs::metadata(target)) {
        (WriteMode::Replace, Ok(metadata)) if metadata.is_file() => metadata.permissions(),
        _ => fs::Permissions::from_mode(NEW_FILE_MODE),
    };
    temp.as_file().set_permissions(perms)
}

#[cfg(not(unix))]
fn set_output_permissions(
    _temp: &NamedTempFile,
    _target: &Path,
    _mode: WriteMode,
) -> io::Result<()> {
    Ok(())
}
