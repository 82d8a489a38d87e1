use crate::appraiser::NameTable;
use crate::devices::AudioDevice;

use super::Probe;

/// Accessories made by the platform vendor, matched by name.
pub struct FirstParty {
    table: NameTable,
}

impl FirstParty {
    pub fn new(table: NameTable) -> Self {
        Self { table }
    }
}

impl Probe for FirstParty {
    fn name(&self) -> &'static str { "first-party" }

    fn probe(&self, device: &AudioDevice) -> Option<u8> {
        super::appraise(&self.table, self.name(), device)
    }
}
