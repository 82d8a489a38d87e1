use crate::appraiser::NameTable;
use crate::devices::AudioDevice;

use super::Probe;

pub struct VendorName {
    table: NameTable,
}

impl VendorName {
    pub fn new(table: NameTable) -> Self {
        Self { table }
    }
}

impl Probe for VendorName {
    fn name(&self) -> &'static str { "vendor-name" }

    fn probe(&self, device: &AudioDevice) -> Option<u8> {
        super::appraise(&self.table, self.name(), device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraiser::VENDORS;
    use crate::devices::TransportProfile;

    #[test]
    fn known_vendors() {
        let probe = VendorName::new(NameTable::from_static(&VENDORS));
        let level = |name: &str| probe.probe(&AudioDevice::new(name, TransportProfile::A2dp));

        assert_eq!(level("Sony WH-1000XM4"), Some(85));
        assert_eq!(level("Bose QuietComfort 45"), Some(78));
        assert_eq!(level("JBL Tune 510BT"), Some(62));
        assert_eq!(level("Galaxy Buds2"), Some(55));
        assert_eq!(level("Jabra Elite 85t"), Some(42));
        assert_eq!(level("Sennheiser Momentum"), Some(90));
        assert_eq!(level("Generic Earbuds"), None);
    }
}
