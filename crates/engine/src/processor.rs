use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::atomic_write;
use crate::options::Destination;
use crate::output_path::derive_output_path;
use crate::progress::{Phase, StepNotifier, percent};
use decomment_core::{ScanOutcome, ScanSession};
use std::io::Write;
use std::path::PathBuf;

const SCAN_CHUNK: usize = 256 * 1024;

/// Resolves the destination file, or `None` for standard output.
///
/// # Errors
/// Returns `EngineError::Config` if no name can be derived from the input.
pub fn resolve_output(config: &Config) -> Result<Option<PathBuf>> {
    match config.destination {
        Destination::Stdout => Ok(None),
        Destination::File => match &config.output {
            Some(path) => Ok(Some(path.clone())),
            None => derive_output_path(&config.input, &config.suffix).map(Some),
        },
    }
}

/// Strips comments from `source`, reporting scan progress per chunk.
pub fn strip(source: &[u8], notifier: &mut StepNotifier<'_>) -> ScanOutcome {
    let mut session = ScanSession::with_capacity(source.len());
    let total = source.len() as u64;

    notifier.push(Phase::Scan, 0);
    let mut done = 0u64;
    for chunk in source.chunks(SCAN_CHUNK) {
        session.feed(chunk);
        done += chunk.len() as u64;
        notifier.push(Phase::Scan, percent(done, total));
    }
    notifier.push(Phase::Scan, 100);

    session.finish()
}

/// Writes the stripped text to its destination.
///
/// # Errors
/// `DestinationWrite` for files, `OutputStream` for standard output.
pub fn deliver<W: Write>(output: Option<&PathBuf>, data: &[u8], mut stdout: W) -> Result<()> {
    match output {
        Some(path) => atomic_write(path, data),
        None => stdout
            .write_all(data)
            .and_then(|()| stdout.flush())
            .map_err(EngineError::OutputStream),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::progress::NoProgress;

    #[test]
    fn test_resolve_output() {
        let derived = ConfigBuilder::default().input("dir/a.cc").build().unwrap();
        assert_eq!(
            resolve_output(&derived).unwrap(),
            Some(PathBuf::from("dir/a_deleted.cc"))
        );

        let explicit = ConfigBuilder::default()
            .input("a.cc")
            .output(Some(PathBuf::from("b.cc")))
            .build()
            .unwrap();
        assert_eq!(resolve_output(&explicit).unwrap(), Some(PathBuf::from("b.cc")));

        let stdout = ConfigBuilder::default()
            .input("a.cc")
            .destination(Destination::Stdout)
            .build()
            .unwrap();
        assert_eq!(resolve_output(&stdout).unwrap(), None);
    }

    #[test]
    fn test_strip_large_input_across_chunks() {
        let unit = b"x = a / b; /* block\n */ // line\n";
        let source = unit.repeat(SCAN_CHUNK / unit.len() * 3);
        let mut notifier = StepNotifier::new(&NoProgress, 5);

        let outcome = strip(&source, &mut notifier);

        assert_eq!(outcome.output(), b"x = a / b; \n \n".repeat(SCAN_CHUNK / unit.len() * 3));
        assert_eq!(outcome.unterminated(), None);
    }

    #[test]
    fn test_deliver_to_stream() {
        let mut sink = Vec::new();
        deliver(None, b"int x;\n", &mut sink).unwrap();
        assert_eq!(sink, b"int x;\n");
    }
}
