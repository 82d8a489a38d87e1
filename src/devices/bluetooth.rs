use std::collections::HashSet;

use bluer::AddressType;
use ::uuid::Uuid;

use super::{DeviceKind, TransportProfile};

pub mod uuid {
    use uuid::{uuid, Uuid};

    pub const HEADSET:           Uuid = uuid!("00001108-0000-1000-8000-00805f9b34fb");
    pub const AUDIO_SINK:        Uuid = uuid!("0000110b-0000-1000-8000-00805f9b34fb");
    pub const HANDSFREE:         Uuid = uuid!("0000111e-0000-1000-8000-00805f9b34fb");
    pub const HEADSET_HS:        Uuid = uuid!("00001131-0000-1000-8000-00805f9b34fb");

    pub const GENERIC_ACCESS:    Uuid = uuid!("00001800-0000-1000-8000-00805f9b34fb");
    pub const GENERIC_ATTRIBUTE: Uuid = uuid!("00001801-0000-1000-8000-00805f9b34fb");

    pub const BATTERY_SERVICE:   Uuid = uuid!("0000180f-0000-1000-8000-00805f9b34fb");
    pub const BATTERY_LEVEL:     Uuid = uuid!("00002a19-0000-1000-8000-00805f9b34fb");
}

const HEADSET_PROFILES: [Uuid; 3] = [uuid::HEADSET, uuid::HANDSFREE, uuid::HEADSET_HS];
const LE_SERVICES:      [Uuid; 3] = [uuid::GENERIC_ACCESS, uuid::GENERIC_ATTRIBUTE, uuid::BATTERY_SERVICE];

/// Audio profile a device advertises. A2DP wins over the voice profiles.
pub fn transport(uuids: &HashSet<Uuid>) -> TransportProfile {
    if uuids.contains(&uuid::AUDIO_SINK) {
        TransportProfile::A2dp
    } else if HEADSET_PROFILES.iter().any(|u| uuids.contains(u)) {
        TransportProfile::Headset
    } else {
        TransportProfile::Unknown
    }
}

pub fn kind(address_type: AddressType, uuids: &HashSet<Uuid>) -> DeviceKind {
    match address_type {
        AddressType::LePublic | AddressType::LeRandom => DeviceKind::Le,
        AddressType::BrEdr if LE_SERVICES.iter().any(|u| uuids.contains(u)) => DeviceKind::Dual,
        AddressType::BrEdr => DeviceKind::Classic,
        #[allow(unreachable_patterns)]
        _ => DeviceKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(uuids: &[Uuid]) -> HashSet<Uuid> {
        uuids.iter().copied().collect()
    }

    #[test]
    fn prefers_a2dp_over_headset() {
        assert_eq!(transport(&set(&[uuid::HANDSFREE, uuid::AUDIO_SINK])), TransportProfile::A2dp);
        assert_eq!(transport(&set(&[uuid::HEADSET])), TransportProfile::Headset);
        assert_eq!(transport(&set(&[uuid::BATTERY_SERVICE])), TransportProfile::Unknown);
    }

    #[test]
    fn classifies_address_types() {
        assert_eq!(kind(AddressType::LeRandom, &set(&[])), DeviceKind::Le);
        assert_eq!(kind(AddressType::BrEdr, &set(&[uuid::AUDIO_SINK])), DeviceKind::Classic);
        assert_eq!(kind(AddressType::BrEdr, &set(&[uuid::AUDIO_SINK, uuid::BATTERY_SERVICE])), DeviceKind::Dual);
    }
}
