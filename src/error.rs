use std::fmt::{self, Debug};
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error)]
pub enum Error {
    #[error(transparent)]
    Bluetooth(#[from] bluer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("couldn't parse {}: {source}", path.display())]
    Config { path: PathBuf, source: toml::de::Error },

    #[error("invalid battery level for `{pattern}` (expected 0..=100, got {level})")]
    InvalidLevel { pattern: String, level: u8 },

    #[error("Failed to open Bluetooth settings: {0}")]
    SettingsUnavailable(String),
}

impl Error {
    pub fn is_missing_adapter(&self) -> bool {
        use bluer::ErrorKind;

        matches!(self, Error::Bluetooth(e) if matches!(e.kind, ErrorKind::NotFound | ErrorKind::DoesNotExist))
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bluetooth(_) if self.is_missing_adapter() => {
                write!(f, "couldn't find a bluetooth adapter.")
            }
            Error::Bluetooth(e) => Debug::fmt(e, f),
            _ => fmt::Display::fmt(self, f),
        }
    }
}
