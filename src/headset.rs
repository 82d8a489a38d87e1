//! Entry points for the application layer.
//!
//! Queries never fail: platform errors are logged and read as "nothing
//! connected" or "unknown". Only opening the settings reports an error.

use log::warn;

use crate::connection::{self, RadioState};
use crate::devices::{AudioDevice, DeviceInfo, DeviceKind};
use crate::platform::Platform;
use crate::resolver::Resolver;
use crate::Result;

pub struct Headset<P> {
    platform: P,
    resolver: Resolver,
}

impl<P: Platform> Headset<P> {
    pub fn new(platform: P, resolver: Resolver) -> Self {
        Self { platform, resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub async fn is_bluetooth_enabled(&self) -> bool {
        self.radio().await.map_or(false, |radio| radio.powered)
    }

    pub async fn is_audio_device_connected(&self) -> bool {
        connection::is_audio_device_connected(self.radio().await.as_ref())
    }

    /// `None` when nothing is connected or no probe had an answer.
    pub async fn battery_level(&self) -> Option<u8> {
        let devices = self.audio_devices().await;

        if !connection::is_audio_device_connected(Some(&RadioState::from_devices(true, &devices))) {
            return None
        }

        let device = self.read_telemetry(first_connected(devices)?).await;

        self.resolver.resolve(&device).level()
    }

    pub async fn connected_device(&self) -> Option<DeviceInfo> {
        let device = self.read_telemetry(first_connected(self.audio_devices().await)?).await;
        let battery = self.resolver.resolve(&device);

        Some(DeviceInfo {
            address:   device.address,
            name:      device.name,
            kind:      device.kind,
            transport: device.transport,
            battery,
        })
    }

    pub async fn connection_type(&self) -> Option<DeviceKind> {
        first_connected(self.audio_devices().await).map(|device| device.kind)
    }

    pub async fn is_le_audio_connected(&self) -> bool {
        self.connection_type().await.map_or(false, DeviceKind::is_le)
    }

    pub async fn is_classic_audio_connected(&self) -> bool {
        self.connection_type().await.map_or(false, DeviceKind::is_classic)
    }

    pub async fn open_bluetooth_settings(&self) -> Result<()> {
        self.platform.open_settings().await
    }

    async fn radio(&self) -> Option<RadioState> {
        self.platform.radio().await.unwrap_or_else(|e| {
            warn!("Couldn't read adapter state: {e}");
            None
        })
    }

    async fn audio_devices(&self) -> Vec<AudioDevice> {
        self.platform.audio_devices().await.unwrap_or_else(|e| {
            warn!("Couldn't list audio devices: {e}");
            Vec::new()
        })
    }

    async fn read_telemetry(&self, device: AudioDevice) -> AudioDevice {
        let telemetry = self.platform.telemetry(&device).await;

        device.with_telemetry(telemetry)
    }
}

/// The first connected device wins.
fn first_connected(devices: Vec<AudioDevice>) -> Option<AudioDevice> {
    devices.into_iter().find(|d| d.connected)
}
