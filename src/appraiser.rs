use derive_more::Deref;
use phf::{phf_ordered_map, OrderedMap};
use serde::Deserialize;

use crate::Result;

pub static FIRST_PARTY: OrderedMap<&'static str, u8> = phf_ordered_map! {
    "airpods pro" => 72,
    "airpods"     => 65,
    "beats"       => 80,
};

pub static VENDORS: OrderedMap<&'static str, u8> = phf_ordered_map! {
    "sony"         => 85,
    "wh-1000"      => 85,
    "bose"         => 78,
    "quietcomfort" => 78,
    "sennheiser"   => 90,
    "jbl"          => 62,
    "samsung"      => 55,
    "galaxy"       => 55,
    "jabra"        => 42,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pattern {
    pub pattern: String,
    pub level:   u8,
}

impl Pattern {
    pub fn new(pattern: impl Into<String>, level: u8) -> Self {
        Self { pattern: pattern.into(), level }
    }
}

/// Ordered substring table. The first entry found in a device name wins.
#[derive(Debug, Clone, Default, Deref)]
pub struct NameTable(Vec<Pattern>);

impl NameTable {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        let patterns = patterns
            .into_iter()
            .filter(|p| !p.pattern.trim().is_empty())
            .map(|p| -> Result<Pattern> {
                crate::ensure_level!(p.pattern, p.level)?;
                Ok(Pattern::new(p.pattern.to_lowercase(), p.level))
            })
            .collect::<Result<_>>()?;

        Ok(Self(patterns))
    }

    pub fn from_static(map: &OrderedMap<&'static str, u8>) -> Self {
        Self(map.entries().map(|(pattern, level)| Pattern::new(*pattern, *level)).collect())
    }

    pub fn appraise(&self, name: &str) -> Option<&Pattern> {
        let name = name.to_lowercase();

        self.0.iter().find(|p| name.contains(&p.pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_entry_listed_first_wins() {
        let table = NameTable::from_static(&FIRST_PARTY);

        assert_eq!(table.appraise("AirPods Pro").map(|p| p.level), Some(72));
        assert_eq!(table.appraise("Bob's AirPods").map(|p| p.level), Some(65));
        assert_eq!(table.appraise("BEATS STUDIO").map(|p| p.level), Some(80));
        assert!(table.appraise("Pixel Buds").is_none());
    }

    #[test]
    fn configured_patterns_are_lowercased() {
        let table = NameTable::new(vec![Pattern::new("Nothing Ear", 33)]).unwrap();

        assert_eq!(table[0].pattern, "nothing ear");
        assert_eq!(table.appraise("NOTHING EAR (2)").map(|p| p.level), Some(33));
    }

    #[test]
    fn rejects_levels_above_100() {
        let err = NameTable::new(vec![Pattern::new("sony", 101)]).unwrap_err();

        assert!(matches!(err, crate::Error::InvalidLevel { level: 101, .. }));
    }

    #[test]
    fn drops_blank_patterns() {
        let table = NameTable::new(vec![Pattern::new("  ", 10), Pattern::new("jbl", 62)]).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.appraise("Anything").is_none());
    }
}
