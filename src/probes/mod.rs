use crate::appraiser::NameTable;
use crate::config::Config;
use crate::devices::AudioDevice;
use crate::Result;

automod::dir!(pub "src/probes");

pub use battery_service::BatteryService;
pub use fallback::Fallback;
pub use first_party::FirstParty;
pub use hands_free::HandsFree;
pub use vendor_name::VendorName;

/// One strategy for estimating a battery level. `None` means "no data", never
/// a failure.
pub trait Probe: Send + Sync {
    fn name(&self) -> &'static str;
    fn probe(&self, device: &AudioDevice) -> Option<u8>;
}

/// Wraps a plain function as a probe.
pub struct FnProbe<F> {
    name: &'static str,
    f:    F,
}

impl<F> FnProbe<F> where F: Fn(&AudioDevice) -> Option<u8> + Send + Sync {
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Probe for FnProbe<F> where F: Fn(&AudioDevice) -> Option<u8> + Send + Sync {
    fn name(&self) -> &'static str { self.name }

    fn probe(&self, device: &AudioDevice) -> Option<u8> {
        (self.f)(device)
    }
}

/// The default chain, most trustworthy first.
pub fn chain(config: &Config) -> Result<Vec<Box<dyn Probe>>> {
    Ok(chain_from(config.first_party_table()?, config.vendor_table()?, config.fallback_level))
}

pub fn chain_from(first_party: NameTable, vendors: NameTable, fallback: u8) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(FirstParty::new(first_party)),
        Box::new(BatteryService),
        Box::new(HandsFree),
        Box::new(VendorName::new(vendors)),
        Box::new(Fallback::new(fallback)),
    ]
}

pub(crate) fn appraise(table: &NameTable, probe: &'static str, device: &AudioDevice) -> Option<u8> {
    table.appraise(&device.name).map(|p| {
        log::debug!("{probe}: `{}` matched `{}`", device.name, p.pattern);
        p.level
    })
}
