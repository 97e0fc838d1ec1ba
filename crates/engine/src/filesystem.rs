use crate::error::{EngineError, Result};
use crate::progress::{Phase, StepNotifier, percent};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const READ_CHUNK: usize = 64 * 1024;

/// Reads the whole source file into memory, reporting read progress.
///
/// # Errors
/// `SourceNotFound` if the file does not exist, `SourceRead` for any other
/// I/O failure.
pub fn read_source(path: &Path, notifier: &mut StepNotifier<'_>) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| EngineError::source_read(path, e))?;
    let total = file.metadata().map(|m| m.len()).unwrap_or(0);
    let mut reader = BufReader::with_capacity(READ_CHUNK, file);
    let mut data = Vec::with_capacity(usize::try_from(total).unwrap_or(0));

    notifier.push(Phase::Read, 0);
    loop {
        let buf = reader
            .fill_buf()
            .map_err(|e| EngineError::source_read(path, e))?;
        if buf.is_empty() {
            break;
        }
        data.extend_from_slice(buf);
        let len = buf.len();
        reader.consume(len);

        notifier.push(Phase::Read, percent(data.len() as u64, total));
    }
    notifier.push(Phase::Read, 100);

    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Atomically writes `data` to `path` via a temp file in the same directory
/// and a rename, so a failure never leaves a partial destination behind.
///
/// # Errors
/// `DestinationWrite` if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let tmp = temp_path_for(path);
    if let Err(source) = write_and_rename(&tmp, path, data) {
        let _ = fs::remove_file(&tmp);
        return Err(EngineError::DestinationWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    // Make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }
    }

    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut w = BufWriter::new(file);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    fs::rename(tmp, path)
}

/// Unique sibling of `path`; PID plus current nanos avoids a retry loop.
fn temp_path_for(path: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = path
        .file_name()
        .map_or_else(|| "decomment".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.{}.{nanos}.tmp", std::process::id()))
}
