//! Memo tables for the census: identified objects keyed by their packed
//! cells, and the pure components of each decomposed object

use crate::analysis::code::ObjectCode;
use crate::io::configuration::CACHE_KEY_BOX;
use crate::life::raster::Raster;
use crate::life::universe::Rect;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Key for caching object identifications
///
/// Bitmask of the live cells of a cluster whose bounding box fits in 7x7,
/// bit `x + 7y` relative to the box's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(u64);

impl ObjectKey {
    /// Build the key of a cluster, or `None` if it is empty or too large
    pub fn new(cells: &[(i32, i32)]) -> Option<Self> {
        let rect = Rect::from_cells(cells.iter().copied())?;
        if rect.width > CACHE_KEY_BOX || rect.height > CACHE_KEY_BOX {
            return None;
        }
        let frame = Rect::new(rect.x, rect.y, CACHE_KEY_BOX, CACHE_KEY_BOX);
        Raster::from_cells(cells, frame).pack().map(Self)
    }
}

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Memo of identified small objects
///
/// Append-only: an entry is never overwritten, so a cache miss is always
/// safe and merely costs a full classification.
#[derive(Default, Debug)]
pub struct ObjectCache {
    entries: HashMap<ObjectKey, ObjectCode>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl ObjectCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss
    pub fn lookup(&mut self, key: ObjectKey) -> Option<&ObjectCode> {
        let found = self.entries.get(&key);
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Remember the code of a key; an existing entry is kept
    pub fn insert(&mut self, key: ObjectKey, code: ObjectCode) -> &ObjectCode {
        self.entries.entry(key).or_insert(code)
    }

    /// Number of cached objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry and reset the statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

/// Memoised decompositions of objects into their pure components
#[derive(Debug)]
pub struct DecompositionMap {
    entries: HashMap<ObjectCode, Vec<ObjectCode>>,

    /// Memo performance statistics
    pub stats: CacheStats,
}

impl Default for DecompositionMap {
    fn default() -> Self {
        let mut map = Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        };
        map.seed();
        map
    }
}

/// Composites whose infection-based decomposition is ambiguous
const KNOWN_DECOMPOSITIONS: [(&str, &[&str]); 1] =
    [("xs18_3pq3qp3", &["xs14_3123qp3", "xs4_33"])];

impl DecompositionMap {
    /// Create a map holding only the known exceptions
    pub fn new() -> Self {
        Self::default()
    }

    fn seed(&mut self) {
        for (whole, parts) in KNOWN_DECOMPOSITIONS {
            let parsed: Option<Vec<ObjectCode>> = parts.iter().map(|p| p.parse().ok()).collect();
            if let (Ok(whole), Some(parts)) = (whole.parse::<ObjectCode>(), parsed) {
                self.entries.insert(whole, parts);
            }
        }
    }

    /// Memoised components of `code`, if it has been decomposed
    pub fn get(&self, code: &ObjectCode) -> Option<&[ObjectCode]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    /// Retrieve the memoised components or compute and store them
    pub fn get_or_insert_with<F>(&mut self, code: ObjectCode, compute_fn: F) -> &[ObjectCode]
    where
        F: FnOnce() -> Vec<ObjectCode>,
    {
        match self.entries.entry(code) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Number of memoised objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything except the known exceptions
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
        self.seed();
    }
}
