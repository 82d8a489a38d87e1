use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bluer::{Adapter, Address, Device, Session, Uuid};
use log::{debug, warn};
use tokio::time::timeout;

use crate::config::Config;
use crate::connection::RadioState;
use crate::devices::bluetooth::{self, uuid};
use crate::devices::{AudioDevice, Telemetry, TransportProfile};
use crate::settings::{self, Launcher};
use crate::{Error, Result};

use super::Platform;

const UNKNOWN_DEVICE: &str = "Unknown Device";

/// BlueZ over D-Bus.
pub struct Bluez {
    session:   Session,
    adapter:   Option<String>,
    timeout:   Duration,
    launchers: Vec<Launcher>,
}

impl Bluez {
    pub async fn new(config: &Config) -> Result<Self> {
        let session = Session::new().await?;

        Ok(Self {
            session,
            adapter:   config.adapter.clone(),
            timeout:   config.probe_timeout(),
            launchers: settings::launchers(config),
        })
    }

    async fn adapter(&self) -> Result<Option<Adapter>> {
        let adapter = match &self.adapter {
            Some(name) => {
                if !self.session.adapter_names().await?.contains(name) {
                    warn!("Adapter {name} is not present");
                    return Ok(None)
                }

                self.session.adapter(name)
            }
            None => self.session.default_adapter().await,
        };

        match adapter.map_err(Error::from) {
            Ok(adapter)                      => Ok(Some(adapter)),
            Err(e) if e.is_missing_adapter() => Ok(None),
            Err(e)                           => Err(e),
        }
    }

    /// Connected audio devices on a powered adapter.
    async fn snapshots(&self, adapter: &Adapter) -> Result<Vec<AudioDevice>> {
        let mut devices = Vec::new();

        for address in adapter.device_addresses().await? {
            let snapshot = match adapter.device(address) {
                Ok(device) => snapshot(&device).await,
                Err(e)     => Err(e.into()),
            };

            devices.extend(keep(address, snapshot));
        }

        Ok(devices)
    }

    async fn read_telemetry(&self, device: &AudioDevice) -> Result<Telemetry> {
        let Some(adapter) = self.adapter().await? else {
            return Ok(Telemetry::default())
        };

        let device = adapter.device(device.address)?;
        let uuids = device.uuids().await?.unwrap_or_default();

        let (battery_service, hands_free) = futures::join!(
            self.bounded("battery service", read_battery_service(&device, &uuids)),
            self.bounded("hands-free battery", device.battery_percentage()),
        );

        Ok(Telemetry { battery_service, hands_free })
    }

    /// A read that fails or outlives the timeout counts as no data.
    async fn bounded<F>(&self, what: &str, read: F) -> Option<u8>
    where
        F: Future<Output = bluer::Result<Option<u8>>>,
    {
        match timeout(self.timeout, read).await {
            Ok(Ok(level)) => level,
            Ok(Err(e))    => { debug!("Reading {what} failed: {e}"); None },
            Err(_)        => { debug!("Reading {what} timed out after {:?}", self.timeout); None },
        }
    }
}

/// A device that can't be read is left out of the listing.
fn keep(address: Address, snapshot: Result<Option<AudioDevice>>) -> Option<AudioDevice> {
    snapshot.unwrap_or_else(|e| {
        debug!("Skipping {address}: {e}");
        None
    })
}

async fn snapshot(device: &Device) -> Result<Option<AudioDevice>> {
    if !device.is_connected().await? {
        return Ok(None)
    }

    let uuids = device.uuids().await?.unwrap_or_default();
    let transport = bluetooth::transport(&uuids);

    if transport == TransportProfile::Unknown {
        return Ok(None)
    }

    let name = device.name().await?.unwrap_or_else(|| UNKNOWN_DEVICE.to_owned());
    let kind = bluetooth::kind(device.address_type().await?, &uuids);
    debug!("Found {name} ({}) via {transport}", device.address());

    Ok(Some(AudioDevice {
        address: device.address(),
        name,
        transport,
        kind,
        connected: true,
        telemetry: Telemetry::default(),
    }))
}

async fn read_battery_service(device: &Device, uuids: &HashSet<Uuid>) -> bluer::Result<Option<u8>> {
    if !uuids.contains(&uuid::BATTERY_SERVICE) || !device.is_services_resolved().await? {
        return Ok(None)
    }

    for service in device.services().await? {
        if service.uuid().await? != uuid::BATTERY_SERVICE {
            continue
        }

        for characteristic in service.characteristics().await? {
            if characteristic.uuid().await? == uuid::BATTERY_LEVEL {
                return characteristic.read().await.map(|value| value.first().copied())
            }
        }
    }

    Ok(None)
}

#[async_trait]
impl Platform for Bluez {
    async fn radio(&self) -> Result<Option<RadioState>> {
        let Some(adapter) = self.adapter().await? else {
            return Ok(None)
        };

        if !adapter.is_powered().await? {
            return Ok(Some(RadioState::default()))
        }

        let devices = self.snapshots(&adapter).await?;

        Ok(Some(RadioState::from_devices(true, &devices)))
    }

    async fn audio_devices(&self) -> Result<Vec<AudioDevice>> {
        let Some(adapter) = self.adapter().await? else {
            return Ok(Vec::new())
        };

        match adapter.is_powered().await? {
            true  => self.snapshots(&adapter).await,
            false => Ok(Vec::new()),
        }
    }

    async fn telemetry(&self, device: &AudioDevice) -> Telemetry {
        self.read_telemetry(device).await.unwrap_or_else(|e| {
            debug!("Couldn't read telemetry of {}: {e}", device.address);
            Telemetry::default()
        })
    }

    async fn open_settings(&self) -> Result<()> {
        settings::open(&self.launchers)
    }
}
