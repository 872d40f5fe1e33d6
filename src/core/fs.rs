//! Atomic file writes.
//!
//! Content is written to a sibling temp file and renamed over the
//! destination, so readers only ever see the old or the new file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Sibling temp path used while writing `path`.
///
/// Lives in the same directory so the final rename never crosses a
/// filesystem boundary.
pub fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}{}", name, constants::TEMP_SUFFIX))
}

/// Write `contents` to `path` atomically, creating parent directories.
///
/// On Unix the file is created with `mode` before any content is written.
/// If any step fails the temp file is removed and the destination is left
/// as it was.
///
/// # Errors
///
/// Returns `StoreError::TargetWriteFailed` naming the destination.
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let fail = |source: std::io::Error| StoreError::TargetWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    let tmp = temp_path(path);
    trace!(tmp = %tmp.display(), len = contents.len(), "writing temp file");

    if let Err(e) = write_new(&tmp, contents, mode) {
        let _ = fs::remove_file(&tmp);
        return Err(fail(e).into());
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(fail(e).into());
    }

    debug!(path = %path.display(), "wrote file");
    Ok(())
}

fn write_new(path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()> {
    // A leftover from an earlier crash, or a symlink planted at the temp name.
    match fs::remove_file(path) {
        Ok(()) => trace!(path = %path.display(), "removed stale temp file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = fs::OpenOptions::new();
    // create_new refuses to follow a symlink at the final path component.
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;

    // The umask may have narrowed the creation mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))?;
    }

    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}
