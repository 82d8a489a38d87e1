use log::debug;

use crate::appraiser::{self, NameTable};
use crate::config::{Config, DEFAULT_FALLBACK_LEVEL};
use crate::devices::{AudioDevice, BatteryReading};
use crate::probes::{self, Probe};
use crate::Result;

/// First-match-wins chain of probes.
pub struct Resolver {
    probes: Vec<Box<dyn Probe>>,
}

impl Resolver {
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        probes::chain(config).map(Self::new)
    }

    pub fn probe_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.probes.iter().map(|p| p.name())
    }

    pub fn resolve(&self, device: &AudioDevice) -> BatteryReading {
        if !device.connected {
            debug!("{} is not connected, skipping probes", device.name);
            return BatteryReading::Unknown
        }

        self.probes
            .iter()
            .find_map(|probe| {
                let level = probe.probe(device);
                debug!("{}: {:?} for `{}`", probe.name(), level, device.name);
                level
            })
            .into()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(probes::chain_from(
            NameTable::from_static(&appraiser::FIRST_PARTY),
            NameTable::from_static(&appraiser::VENDORS),
            DEFAULT_FALLBACK_LEVEL,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::devices::{Telemetry, TransportProfile::*};
    use crate::probes::FnProbe;

    fn resolve(name: &str) -> BatteryReading {
        Resolver::default().resolve(&AudioDevice::new(name, A2dp))
    }

    #[test]
    fn worked_examples() {
        assert_eq!(resolve("Sony WH-1000XM4"), BatteryReading::Level(85));
        assert_eq!(resolve("AirPods Pro"), BatteryReading::Level(72));
        assert_eq!(resolve("Generic Earbuds"), BatteryReading::Level(50));
    }

    #[test]
    fn first_party_beats_vendor() {
        assert_eq!(resolve("AirPods Pro Beats"), BatteryReading::Level(72));
        assert_eq!(resolve("Beats by Sony"), BatteryReading::Level(80));
    }

    #[test]
    fn unknown_names_get_fallback_not_unknown() {
        for name in ["", "Pixel Buds", "Car Kit", "HUAWEI FreeClip"] {
            assert_eq!(resolve(name), BatteryReading::Level(50), "{name}");
        }
    }

    #[test]
    fn telemetry_outranks_name_heuristics() {
        let device = AudioDevice::new("Sony WH-1000XM4", A2dp)
            .with_telemetry(Telemetry { battery_service: Some(12), hands_free: Some(40) });

        assert_eq!(Resolver::default().resolve(&device), BatteryReading::Level(12));

        let device = device.with_telemetry(Telemetry { battery_service: None, hands_free: Some(40) });

        assert_eq!(Resolver::default().resolve(&device), BatteryReading::Level(40));
    }

    #[test]
    fn first_party_outranks_telemetry() {
        let device = AudioDevice::new("AirPods", Headset)
            .with_telemetry(Telemetry { battery_service: Some(12), hands_free: None });

        assert_eq!(Resolver::default().resolve(&device), BatteryReading::Level(65));
    }

    #[test]
    fn disconnected_device_skips_every_probe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let probes: Vec<Box<dyn Probe>> = vec![Box::new(FnProbe::new("counting", move |_: &AudioDevice| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(99)
        }))];
        let resolver = Resolver::new(probes);

        let reading = resolver.resolve(&AudioDevice::new("AirPods Pro", A2dp).disconnected());

        assert_eq!(reading, BatteryReading::Unknown);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stops_at_first_match() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let probes: Vec<Box<dyn Probe>> = vec![
            Box::new(FnProbe::new("empty", |_: &AudioDevice| None)),
            Box::new(FnProbe::new("hit", |_: &AudioDevice| Some(7))),
            Box::new(FnProbe::new("never", move |_: &AudioDevice| {
                counter.fetch_add(1, Ordering::SeqCst);
                Some(99)
            })),
        ];
        let resolver = Resolver::new(probes);

        assert_eq!(resolver.resolve(&AudioDevice::new("x", A2dp)), BatteryReading::Level(7));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn all_empty_is_unknown() {
        let probes: Vec<Box<dyn Probe>> = vec![Box::new(FnProbe::new("empty", |_: &AudioDevice| None))];
        let resolver = Resolver::new(probes);

        assert_eq!(resolver.resolve(&AudioDevice::new("x", A2dp)), BatteryReading::Unknown);
        assert_eq!(Resolver::new(Vec::new()).resolve(&AudioDevice::new("x", A2dp)), BatteryReading::Unknown);
    }

    #[test]
    fn clamps_probe_output() {
        let probes: Vec<Box<dyn Probe>> = vec![Box::new(FnProbe::new("loud", |_: &AudioDevice| Some(250)))];
        let resolver = Resolver::new(probes);

        assert_eq!(resolver.resolve(&AudioDevice::new("x", A2dp)), BatteryReading::Level(100));
    }

    #[test]
    fn repeated_queries_agree() {
        let resolver = Resolver::default();
        let device = AudioDevice::new("Bose QC35", Headset);

        assert_eq!(resolver.resolve(&device), resolver.resolve(&device));
    }

    #[test]
    fn config_tables_drive_the_chain() {
        let config = Config::parse("fallback_level = 20\n[[vendors]]\npattern = \"nothing\"\nlevel = 33").unwrap();
        let resolver = Resolver::from_config(&config).unwrap();

        assert_eq!(resolver.resolve(&AudioDevice::new("Nothing Ear", A2dp)), BatteryReading::Level(33));
        assert_eq!(resolver.resolve(&AudioDevice::new("Sony WH-1000XM4", A2dp)), BatteryReading::Level(20));
        assert_eq!(resolver.probe_names().count(), 5);
    }
}
