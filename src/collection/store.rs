use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::region::Region;
use crate::core::types::RegionId;

/// The assembled set of regions, keyed by canonical id.
///
/// Built once by the [`crate::collection::builder::RegionCollectionBuilder`]
/// and read-only afterwards; iteration order is ascending id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCollection {
    regions: BTreeMap<RegionId, Region>,
}

impl RegionCollection {
    #[must_use]
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(&id)
    }

    pub(crate) fn insert(&mut self, region: Region) {
        self.regions.insert(region.id, region);
    }
}
