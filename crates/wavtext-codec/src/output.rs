//! Whole-file output that never leaves a partial destination behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::CodecResult;

/// Writes `data` to `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the destination directory first and
/// are renamed into place once fully flushed. On failure the temporary file
/// is dropped (and deleted) and `path` is left as it was.
///
/// A replaced file keeps its permissions. A new file gets the same mode a
/// plain `fs::write` would give it under the current umask.
pub fn write_atomic(path: &Path, data: &[u8]) -> CodecResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".wavtext-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote output file");
    Ok(())
}
