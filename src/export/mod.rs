//! Writing rendered charts
//!
//! Files are written atomically: the artifact goes to a temp file in the
//! target directory, is synced, then renamed over the destination. Without a
//! destination the artifact is written to stdout.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{SankeyError, SankeyResult};

/// Write text to a file atomically (write to temp, then rename)
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> SankeyResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SankeyError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| SankeyError::Export(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(SankeyError::Export(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SankeyError::Export(format!("Failed to rename temp file: {}", e))
    })?;

    info!(path = %path.display(), bytes = contents.len(), "wrote chart");
    Ok(())
}

/// Write to `path` atomically, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> SankeyResult<()> {
    match path {
        Some(path) => write_atomic(path, contents),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
            handle.flush()?;
            Ok(())
        }
    }
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "chart".into());
    name.push(".tmp");
    path.with_file_name(name)
}
