use crate::devices::{AudioDevice, TransportProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    Disconnected,
    Connected,
}

/// Adapter power and audio profile state, read fresh on every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioState {
    pub powered: bool,
    pub a2dp:    ProfileState,
    pub headset: ProfileState,
}

impl RadioState {
    pub fn from_devices<'a>(powered: bool, devices: impl IntoIterator<Item = &'a AudioDevice>) -> Self {
        let mut state = RadioState { powered, ..Default::default() };

        for device in devices.into_iter().filter(|d| d.connected) {
            match device.transport {
                TransportProfile::A2dp    => state.a2dp = ProfileState::Connected,
                TransportProfile::Headset => state.headset = ProfileState::Connected,
                TransportProfile::Unknown => {}
            }
        }

        state
    }
}

/// `None` means there is no adapter at all, which is not an error.
pub fn is_audio_device_connected(radio: Option<&RadioState>) -> bool {
    match radio {
        Some(radio) if radio.powered => {
            radio.a2dp == ProfileState::Connected || radio.headset == ProfileState::Connected
        }
        _ => false,
    }
}
