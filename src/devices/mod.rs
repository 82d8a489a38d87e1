use std::fmt;

use bluer::Address;

automod::dir!(pub "src/devices");

pub use battery::BatteryReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportProfile {
    A2dp,
    Headset,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Classic,
    Le,
    Dual,
    Unknown,
}

impl DeviceKind {
    pub fn is_le(self) -> bool {
        matches!(self, DeviceKind::Le | DeviceKind::Dual)
    }

    pub fn is_classic(self) -> bool {
        matches!(self, DeviceKind::Classic | DeviceKind::Dual)
    }
}

/// Battery values read from the device itself, if it answered in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Telemetry {
    pub battery_service: Option<u8>,
    pub hands_free:      Option<u8>,
}

/// Snapshot of an audio device, taken at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    pub address:   Address,
    pub name:      String,
    pub transport: TransportProfile,
    pub kind:      DeviceKind,
    pub connected: bool,
    pub telemetry: Telemetry,
}

impl AudioDevice {
    pub fn new(name: impl Into<String>, transport: TransportProfile) -> Self {
        Self {
            address:   Address::any(),
            name:      name.into(),
            transport,
            kind:      DeviceKind::Unknown,
            connected: true,
            telemetry: Telemetry::default(),
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub address:   Address,
    pub name:      String,
    pub kind:      DeviceKind,
    pub transport: TransportProfile,
    pub battery:   BatteryReading,
}

impl fmt::Display for TransportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportProfile::A2dp    => "a2dp",
            TransportProfile::Headset => "headset",
            TransportProfile::Unknown => "unknown",
        })
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceKind::Classic => "classic",
            DeviceKind::Le      => "le",
            DeviceKind::Dual    => "dual",
            DeviceKind::Unknown => "unknown",
        })
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address:   {}", self.address)?;
        writeln!(f, "name:      {}", self.name)?;
        writeln!(f, "kind:      {}", self.kind)?;
        writeln!(f, "transport: {}", self.transport)?;
        write!(f,   "battery:   {}", self.battery)
    }
}
