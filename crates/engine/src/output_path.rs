use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};

/// Derives the destination next to `input`: `<stem><suffix>.<ext>`.
///
/// `src/main.cpp` becomes `src/main_deleted.cpp`; a name without an
/// extension just gets the suffix.
///
/// # Errors
/// Returns `EngineError::Config` if `input` has no file name.
pub fn derive_output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        EngineError::Config(format!(
            "cannot derive an output file name from '{}'",
            input.display()
        ))
    })?;

    let mut name = stem.to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    Ok(input.with_file_name(name))
}
