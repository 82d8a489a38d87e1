use async_trait::async_trait;

use crate::connection::RadioState;
use crate::devices::{AudioDevice, Telemetry};
use crate::Result;

mod bluez;

pub use bluez::Bluez;

/// Ambient Bluetooth state of the host, read at call time.
#[async_trait]
pub trait Platform: Send + Sync {
    /// `Ok(None)` when the host has no adapter.
    async fn radio(&self) -> Result<Option<RadioState>>;

    /// Connected audio devices of a powered adapter, without telemetry.
    async fn audio_devices(&self) -> Result<Vec<AudioDevice>>;

    /// Battery values the device reports itself. Reads that fail or time out
    /// are left empty.
    async fn telemetry(&self, device: &AudioDevice) -> Telemetry;

    async fn open_settings(&self) -> Result<()>;
}
