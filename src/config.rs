//! TOML configuration.
//!
//! Looked up in `$XDG_CONFIG_HOME/budmeter/config.toml`, then
//! `~/.config/budmeter/config.toml`. Missing files fall back to the built-in
//! tables in [`crate::appraiser`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::appraiser::{self, NameTable, Pattern};
use crate::{Error, Result};

pub const DEFAULT_FALLBACK_LEVEL: u8 = 50;
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Level reported for a connected device nothing else recognised.
    pub fallback_level:   u8,
    /// Upper bound for each read against the device.
    pub probe_timeout_ms: u64,
    /// Adapter name such as `hci0`. The default adapter is used otherwise.
    pub adapter:          Option<String>,
    /// Program and arguments that open the Bluetooth settings.
    pub settings_command: Option<Vec<String>>,
    pub first_party:      Vec<Pattern>,
    pub vendors:          Vec<Pattern>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_level:   DEFAULT_FALLBACK_LEVEL,
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            adapter:          None,
            settings_command: None,
            first_party:      NameTable::from_static(&appraiser::FIRST_PARTY).to_vec(),
            vendors:          NameTable::from_static(&appraiser::VENDORS).to_vec(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Self::parse(&contents).map_err(|e| match e {
            Error::Config { source, .. } => Error::Config { path: path.to_owned(), source },
            e => e,
        })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|source| Error::Config { path: PathBuf::new(), source })?;

        config.validate()
    }

    pub fn load_default() -> Result<Self> {
        match Self::locate() {
            Some(path) if path.exists() => {
                debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Relative `XDG_CONFIG_HOME` values are ignored.
    pub fn locate() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("budmeter").join("config.toml"))
    }

    pub fn first_party_table(&self) -> Result<NameTable> {
        NameTable::new(self.first_party.clone())
    }

    pub fn vendor_table(&self) -> Result<NameTable> {
        NameTable::new(self.vendors.clone())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    fn validate(self) -> Result<Self> {
        crate::ensure_level!("fallback_level", self.fallback_level)?;

        self.first_party_table()?;
        self.vendor_table()?;

        if self.probe_timeout_ms == 0 {
            warn!("probe_timeout_ms is 0, device reads will always time out");
        }

        Ok(self)
    }
}
