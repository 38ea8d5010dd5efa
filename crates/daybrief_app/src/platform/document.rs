//! Atomic publication of the popup document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// File the host popup surface displays.
pub(crate) const POPUP_FILENAME: &str = "popup.html";

/// Write the rendered page via a temp file then rename, so the host surface
/// never observes a torn document.
pub(crate) fn write_popup_document(dir: &Path, html: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let target = dir.join(POPUP_FILENAME);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(html.as_bytes())?;
    tmp.flush()?;
    // Replace any existing file so the rename also succeeds on Windows.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(target)
}
