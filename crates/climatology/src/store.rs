//! Bounded in-memory store of climatology pairs.
//!
//! The store is owned by the caller and passed where it is needed. When full,
//! inserting a new key evicts the oldest inserted entry.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::ClimatologyError;
use crate::set::{ClimatologyPair, ClimatologySet};

/// Key of one stored climatology pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey {
    /// Pathway identifier, e.g. `ssp245`.
    pub pathway: String,
    /// Model variable id, e.g. `tas`.
    pub variable: String,
    /// Ensemble percentile.
    pub percentile: u8,
}

impl StoreKey {
    /// Creates a key.
    pub fn new(pathway: impl Into<String>, variable: impl Into<String>, percentile: u8) -> Self {
        Self {
            pathway: pathway.into(),
            variable: variable.into(),
            percentile,
        }
    }
}

/// Climatology pairs keyed by (pathway, variable, percentile), holding at
/// most `capacity` entries.
#[derive(Debug, Clone)]
pub struct ClimatologyStore {
    capacity: usize,
    entries: HashMap<StoreKey, ClimatologyPair>,
    order: VecDeque<StoreKey>,
}

impl ClimatologyStore {
    /// Creates an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, ClimatologyError> {
        if capacity == 0 {
            return Err(ClimatologyError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        })
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `pair` under `key`, returning the evicted key if the store was
    /// full. Replacing an existing key refreshes its age.
    pub fn insert(&mut self, key: StoreKey, pair: ClimatologyPair) -> Option<StoreKey> {
        if self.entries.insert(key.clone(), pair).is_some() {
            self.order.retain(|k| k != &key);
            self.order.push_back(key);
            return None;
        }
        self.order.push_back(key);
        if self.entries.len() <= self.capacity {
            return None;
        }
        let evicted = self.order.pop_front()?;
        self.entries.remove(&evicted);
        debug!(
            pathway = %evicted.pathway,
            variable = %evicted.variable,
            percentile = evicted.percentile,
            "evicted climatology"
        );
        Some(evicted)
    }

    /// Returns the pair stored under `key`.
    pub fn get(&self, key: &StoreKey) -> Option<&ClimatologyPair> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &StoreKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Collects every stored variable of one (pathway, percentile) into a set.
    pub fn set_for(&self, pathway: &str, percentile: u8) -> ClimatologySet {
        let mut set = ClimatologySet::new(pathway, percentile);
        for key in &self.order {
            if key.pathway == pathway
                && key.percentile == percentile
                && let Some(pair) = self.entries.get(key)
            {
                set.insert(key.variable.clone(), pair.clone());
            }
        }
        set
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tethys_calendar::MonthKeyed;

    fn pair(v: f64) -> ClimatologyPair {
        ClimatologyPair::new(MonthKeyed::from_array([v; 12]), MonthKeyed::from_array([v + 1.0; 12]))
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            ClimatologyStore::new(0),
            Err(ClimatologyError::ZeroCapacity)
        ));
    }

    #[test]
    fn evicts_oldest_first() {
        let mut store = ClimatologyStore::new(2).unwrap();
        let a = StoreKey::new("ssp126", "tas", 50);
        let b = StoreKey::new("ssp126", "huss", 50);
        let c = StoreKey::new("ssp126", "psl", 50);
        assert_eq!(store.insert(a.clone(), pair(1.0)), None);
        assert_eq!(store.insert(b.clone(), pair(2.0)), None);
        assert_eq!(store.insert(c.clone(), pair(3.0)), Some(a.clone()));
        assert_eq!(store.len(), 2);
        assert!(!store.contains(&a));
        assert!(store.contains(&b));
        assert!(store.contains(&c));
    }

    #[test]
    fn replacing_refreshes_age() {
        let mut store = ClimatologyStore::new(2).unwrap();
        let a = StoreKey::new("ssp245", "tas", 10);
        let b = StoreKey::new("ssp245", "tas", 90);
        store.insert(a.clone(), pair(1.0));
        store.insert(b.clone(), pair(2.0));
        assert_eq!(store.insert(a.clone(), pair(5.0)), None);
        let evicted = store.insert(StoreKey::new("ssp245", "clt", 10), pair(0.0));
        assert_eq!(evicted, Some(b));
        assert_eq!(store.get(&a).unwrap().baseline().get(1).unwrap(), 5.0);
    }

    #[test]
    fn set_for_filters_pathway_and_percentile() {
        let mut store = ClimatologyStore::new(10).unwrap();
        store.insert(StoreKey::new("ssp245", "tas", 50), pair(1.0));
        store.insert(StoreKey::new("ssp245", "huss", 50), pair(2.0));
        store.insert(StoreKey::new("ssp245", "tas", 90), pair(3.0));
        store.insert(StoreKey::new("ssp585", "tas", 50), pair(4.0));
        let set = store.set_for("ssp245", 50);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("tas").unwrap().baseline().get(1).unwrap(), 1.0);
        assert!(store.set_for("ssp370", 50).is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut store = ClimatologyStore::new(1).unwrap();
        store.insert(StoreKey::new("a", "b", 1), pair(1.0));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 1);
    }
}
