//! Connected Bluetooth audio device detection and battery estimation on top
//! of BlueZ.
//!
//! Battery levels come from an ordered chain of [`probes::Probe`]s: known
//! accessory names first, then whatever the device reports over GATT or the
//! hands-free profile, then vendor names, then a fixed fallback.

mod macros;

pub mod appraiser;
pub mod config;
pub mod connection;
pub mod devices;
pub mod error;
pub mod headset;
pub mod platform;
pub mod probes;
pub mod resolver;
pub mod settings;

pub use config::Config;
pub use devices::{AudioDevice, BatteryReading, DeviceInfo, DeviceKind, TransportProfile};
pub use error::{Error, Result};
pub use headset::Headset;
pub use resolver::Resolver;
