use crate::devices::AudioDevice;

use super::Probe;

/// Level read from the GATT Battery Service.
pub struct BatteryService;

impl Probe for BatteryService {
    fn name(&self) -> &'static str { "battery-service" }

    fn probe(&self, device: &AudioDevice) -> Option<u8> {
        device.telemetry.battery_service
    }
}
