//! Event identifier interning.
//!
//! Maps event identifier strings to dense integer indices so the scheduling
//! passes can work over flat vectors instead of string-keyed maps. Events
//! have no identity beyond these identifiers; the interner is built once per
//! graph and discarded with it.

use rustc_hash::FxHashMap;

/// Interned event index (u32 for compact storage and fast hashing).
pub type EventId = u32;

/// Interner that maps event identifiers to dense indices.
///
/// Indices are assigned in first-appearance order, so for a given task list
/// the numbering is deterministic.
#[derive(Debug, Clone, Default)]
pub struct EventInterner {
    to_id: FxHashMap<String, EventId>,
    from_id: Vec<String>,
}

impl EventInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_id: Vec::with_capacity(capacity),
        }
    }

    /// Intern an identifier, returning its index.
    /// If already interned, returns the existing index.
    pub fn intern(&mut self, id: &str) -> EventId {
        if let Some(&index) = self.to_id.get(id) {
            return index;
        }
        let index = self.from_id.len() as EventId;
        self.from_id.push(id.to_string());
        self.to_id.insert(id.to_string(), index);
        index
    }

    /// Get the index for an identifier, if it exists.
    #[inline]
    pub fn get(&self, id: &str) -> Option<EventId> {
        self.to_id.get(id).copied()
    }

    /// Get the original identifier for an index.
    #[inline]
    pub fn resolve(&self, index: EventId) -> Option<&str> {
        self.from_id.get(index as usize).map(|s| s.as_str())
    }

    /// Number of interned identifiers.
    pub fn len(&self) -> usize {
        self.from_id.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let mut interner = EventInterner::with_capacity(4);

        let id1 = interner.intern("kickoff");
        let id2 = interner.intern("review");
        let id3 = interner.intern("kickoff"); // duplicate

        assert_eq!(id1, id3); // same identifier = same index
        assert_ne!(id1, id2);

        assert_eq!(interner.resolve(id1), Some("kickoff"));
        assert_eq!(interner.resolve(id2), Some("review"));
        assert_eq!(interner.get("review"), Some(id2));
        assert_eq!(interner.get("nonexistent"), None);
    }

    #[test]
    fn test_first_appearance_order() {
        let mut interner = EventInterner::default();
        assert_eq!(interner.intern("c"), 0);
        assert_eq!(interner.intern("a"), 1);
        assert_eq!(interner.intern("b"), 2);
        assert_eq!(interner.len(), 3);
    }
}
