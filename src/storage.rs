//! JSON file helpers shared by settings and mesh files.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::PaintError;

/// Replace `path` with `data` without ever leaving a half-written file.
///
/// Data goes to a synced `<name>.tmp` sibling first. The previous file, if any,
/// is kept as `<name>.bak`.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), PaintError> {
    let file_name = path.file_name().ok_or_else(|| PaintError::IoError {
        message: format!("not a file path: {}", path.display()),
    })?;

    let mut tmp_name = OsString::from(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(&tmp_name);

    let mut bak_name = OsString::from(file_name);
    bak_name.push(".bak");
    let bak_path = path.with_file_name(&bak_name);

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    // A failed backup rename leaves the old file in place; the final rename replaces it.
    if path.exists() {
        let _ = fs::rename(path, &bak_path);
    }

    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PaintError> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, PaintError> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}
