use crate::error::{FilterError, Result};
use std::fs;
use std::path::Path;

/// Create every directory in `paths`, parents included (like `mkdir -p`).
///
/// Directories that already exist are left alone.
pub fn ensure_dirs<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| FilterError::io(path, e))?;
        tracing::debug!(path = %path.display(), "directory ready");
    }
    Ok(())
}
