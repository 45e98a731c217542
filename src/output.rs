//! Rendered document writing

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Path of the rendered document for a tree stem under an output directory.
/// PDFLaTeX documents are named `<stem>.tex`, LuaLaTeX documents `<stem>.lua.tex`.
pub fn document_path(out_dir: &Path, stem: &str, lua: bool) -> PathBuf {
    if lua {
        out_dir.join(format!("{}.lua.tex", stem))
    } else {
        out_dir.join(format!("{}.tex", stem))
    }
}

/// Write a rendered document to a file
pub fn write_document(path: &Path, content: &str) -> Result<(), OutputError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}
