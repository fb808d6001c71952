// Command-line handling: `modescale [ROOT] [MODE]`.
//
// Both positional arguments are optional. Missing values fall back to the
// defaults in `Settings`; anything past the second argument is ignored.

use crate::error::{Result, ScaleError};
use crate::mode::Mode;
use crate::pitch::Pitch;
use crate::scale::Scale;
use std::ffi::OsString;

pub const DEFAULT_ROOT: &str = "C";
pub const DEFAULT_MODE: &str = "1";

/// Raw positional inputs, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: String,
    pub mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            root: DEFAULT_ROOT.to_string(),
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

impl Settings {
    /// Build from arguments, excluding the program name. An argument that is
    /// not valid UTF-8 is rejected as the input for its position.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut settings = Settings::default();
        if let Some(root) = args.next() {
            settings.root = root
                .into_string()
                .map_err(|raw| ScaleError::InvalidRoot(raw.to_string_lossy().into_owned()))?;
        }
        if let Some(mode) = args.next() {
            settings.mode = mode
                .into_string()
                .map_err(|raw| ScaleError::InvalidMode(raw.to_string_lossy().into_owned()))?;
        }
        let extra: Vec<OsString> = args.collect();
        if !extra.is_empty() {
            log::debug!("ignoring extra arguments: {:?}", extra);
        }
        Ok(settings)
    }

    /// Validate the mode first, then the root.
    pub fn scale(&self) -> Result<Scale> {
        let mode = Mode::parse(&self.mode)?;
        let root = Pitch::parse(&self.root)?;
        Ok(Scale::new(root, mode))
    }
}

/// Produce the output line for the given arguments (program name excluded).
pub fn run<I, S>(args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let settings = Settings::from_args(args)?;
    log::debug!("settings: {:?}", settings);
    Ok(settings.scale()?.to_string())
}
