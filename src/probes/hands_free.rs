use crate::devices::AudioDevice;

use super::Probe;

/// Level reported through the hands-free profile battery indicator, as
/// exposed by BlueZ.
pub struct HandsFree;

impl Probe for HandsFree {
    fn name(&self) -> &'static str { "hands-free" }

    fn probe(&self, device: &AudioDevice) -> Option<u8> {
        device.telemetry.hands_free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Telemetry, TransportProfile};
    use crate::probes::BatteryService;

    #[test]
    fn telemetry_probes_read_their_own_field() {
        let device = AudioDevice::new("Headset", TransportProfile::Headset)
            .with_telemetry(Telemetry { battery_service: None, hands_free: Some(30) });

        assert_eq!(HandsFree.probe(&device), Some(30));
        assert_eq!(BatteryService.probe(&device), None);
    }
}
