use std::path::{Path, PathBuf};

use crate::error::{CtpError, Result};
use crate::importer::StatementFile;

/// Create the archive directory if needed. Returns true when it was created.
pub fn ensure_data_dir(data_dir: &Path) -> Result<bool> {
    if data_dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(data_dir)?;
    Ok(true)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    // rename fails across filesystems
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)?;
    Ok(())
}

/// Move every discovered `.csv` file into `data_dir`, keeping file names.
/// Stops at the first failure; files already moved stay moved.
pub fn archive_files(files: &[StatementFile], data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut moved = Vec::new();
    for file in files {
        let name = file
            .path
            .file_name()
            .ok_or_else(|| CtpError::Other(format!("Not a file: {}", file.path.display())))?;
        let dest = data_dir.join(name);
        move_file(&file.path, &dest)?;
        log::debug!("archived {} -> {}", file.path.display(), dest.display());
        moved.push(dest);
    }
    Ok(moved)
}
