//! Temp-file-and-rename writes
//!
//! A crash while writing leaves at worst a stray `<file>.tmp` behind; the
//! target file holds either its previous content or the complete new content.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Path of the staging file used for `path`
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the content of `path` with `contents`
///
/// The bytes are written and synced to the staging file, which is then
/// renamed over `path`. Parent directories are created when missing.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = staging_path(path);
    let result = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });

    if let Err(e) = result.and_then(|()| fs::rename(&tmp_path, path)) {
        // Best effort: the staging file is garbage either way
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}
