use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryReading {
    Level(u8),
    Unknown,
}

impl BatteryReading {
    /// Levels above 100 are clamped.
    pub fn from_level(level: u8) -> Self {
        BatteryReading::Level(level.min(100))
    }

    pub fn level(self) -> Option<u8> {
        match self {
            BatteryReading::Level(level) => Some(level),
            BatteryReading::Unknown      => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, BatteryReading::Level(_))
    }
}

impl From<Option<u8>> for BatteryReading {
    fn from(level: Option<u8>) -> Self {
        level.map_or(BatteryReading::Unknown, BatteryReading::from_level)
    }
}

impl fmt::Display for BatteryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryReading::Level(level) => write!(f, "{level}"),
            BatteryReading::Unknown      => write!(f, "unknown"),
        }
    }
}
