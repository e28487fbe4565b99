use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::errors::{PlayLogError, PlayLogResult};

const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Check that `name` is a bare file name: not empty, no directories, not `..`.
pub fn validate_file_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("export file name is empty".into());
    }
    let is_bare = Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
        && !name.contains(['/', '\\'])
        && name != "..";
    if !is_bare {
        return Err(format!("'{name}' is not a plain file name"));
    }
    Ok(())
}

/// Write an export into `dir`, creating the directory if needed.
///
/// Existing files are never replaced: a taken name gets a ` (1)`, ` (2)`, ...
/// suffix before the extension.
pub fn save_to_dir(dir: &Path, file_name: &str, bytes: &[u8]) -> PlayLogResult<PathBuf> {
    validate_file_name(file_name).map_err(PlayLogError::Export)?;

    fs::create_dir_all(dir).map_err(|err| {
        PlayLogError::Export(format!("cannot create {}: {err}", dir.display()))
    })?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(numbered_name(file_name, attempt));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(PlayLogError::Export(format!(
                    "cannot create {}: {err}",
                    path.display()
                )))
            }
        };
        file.write_all(bytes).map_err(|err| {
            PlayLogError::Export(format!("cannot write {}: {err}", path.display()))
        })?;
        return Ok(path);
    }

    Err(PlayLogError::Export(format!(
        "no free name for {file_name} in {}",
        dir.display()
    )))
}

fn numbered_name(file_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem} ({attempt}).{ext}"),
        None => format!("{stem} ({attempt})"),
    }
}
