use std::collections::BTreeMap;

use crate::footprint::{TOTAL_PRECISION, round_to};
use crate::sector::{SectorKind, SectorRecord};

/// Per-sector footprint figures for one company, holding only the sectors
/// that have data. Iteration follows `SectorKind` display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorFootprints(BTreeMap<SectorKind, f64>);

impl SectorFootprints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the first record of each non-empty set. When a company has
    /// several historical records of one kind, whichever the store returned
    /// first wins; callers wanting "latest" must sort beforehand.
    pub fn from_records<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = (SectorKind, &'a [SectorRecord])>,
    {
        let mut footprints = Self::new();
        for (kind, records) in sets {
            if let Some(first) = records.first() {
                footprints.insert(kind, first.carbon_footprint);
            }
        }
        footprints
    }

    pub fn insert(&mut self, kind: SectorKind, footprint: f64) {
        self.0.insert(kind, footprint);
    }

    pub fn get(&self, kind: SectorKind) -> Option<f64> {
        self.0.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectorKind, f64)> + '_ {
        self.0.iter().map(|(kind, value)| (*kind, *value))
    }

    /// Sum of present sectors, rounded to 2 decimals.
    pub fn total(&self) -> f64 {
        round_to(self.0.values().sum(), TOTAL_PRECISION)
    }

    pub fn max(&self) -> Option<f64> {
        self.0.values().copied().reduce(f64::max)
    }

    /// Every sector whose footprint equals the maximum, in display order.
    /// Ties are kept, not broken.
    pub fn highest_sectors(&self) -> Vec<SectorKind> {
        match self.max() {
            Some(max) => self
                .iter()
                .filter(|(_, value)| *value == max)
                .map(|(kind, _)| kind)
                .collect(),
            None => Vec::new(),
        }
    }
}
