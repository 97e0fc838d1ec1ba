use serde::{Deserialize, Serialize};

/// Where the stripped text goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// A file: the explicit output path, or one derived from the source name.
    #[default]
    File,
    /// The process's standard output.
    Stdout,
}
