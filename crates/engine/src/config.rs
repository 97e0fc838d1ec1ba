use crate::options::Destination;
use derive_builder::Builder;
use std::path::PathBuf;

/// Appended to the source file stem when no destination is given.
pub const DEFAULT_SUFFIX: &str = "_deleted";
/// Progress is reported every this many percent.
pub const DEFAULT_PROGRESS_STEP: u8 = 5;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Source file to strip.
    pub input: PathBuf,
    /// Explicit destination; derived from `input` and `suffix` when `None`.
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default = "DEFAULT_SUFFIX.to_string()")]
    pub suffix: String,
    #[builder(default)]
    pub destination: Destination,
    #[builder(default)]
    pub progress: bool,
    #[builder(default = "DEFAULT_PROGRESS_STEP")]
    pub progress_step: u8,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(step) = self.progress_step
            && !(1..=100).contains(&step)
        {
            return Err(format!("progress step must be between 1 and 100, got {step}"));
        }
        // An empty suffix would derive the source path itself.
        if let Some(suffix) = &self.suffix
            && suffix.is_empty()
            && matches!(self.output, None | Some(None))
        {
            return Err("suffix must not be empty when no destination is given".to_string());
        }
        Ok(())
    }
}
