use super::DataStore;
use crate::error::{ArtlistError, Result};
use crate::model::{Artwork, Record, RecordId};

/// Ordered in-memory record store. Does NOT persist data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Vec<Record>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ArtlistError::NotFound(id))
    }
}

impl DataStore for MemoryStore {
    fn add(&mut self, artwork: Artwork) -> Record {
        let record = Record::new(RecordId(self.next_id), artwork);
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    fn get(&self, id: RecordId) -> Result<Record> {
        let idx = self.position(id)?;
        Ok(self.records[idx].clone())
    }

    fn update_by_id(&mut self, id: RecordId, artwork: Artwork) -> Result<Record> {
        let idx = self.position(id)?;
        self.records[idx].artwork = artwork;
        Ok(self.records[idx].clone())
    }

    fn remove_by_id(&mut self, id: RecordId) -> Result<Record> {
        let idx = self.position(id)?;
        Ok(self.records.remove(idx))
    }

    fn list(&self) -> &[Record] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_artworks(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut art = Artwork::new(format!("Work {}", i + 1));
                art.number = format!("AW{:03}", i + 1);
                art.artist = format!("Artist {}", i + 1);
                self.store.add(art);
            }
            self
        }

        /// The sample entry the catalogue ships with in demos.
        pub fn with_sample(mut self) -> Self {
            self.store.add(Artwork {
                photo: None,
                number: "AW001".into(),
                artist: "王小明".into(),
                title: "晨曦".into(),
                concept: "描繪清晨第一道光線穿透雲層的美麗時刻".into(),
                medium: "油彩、畫布".into(),
                size: "60 x 80 cm".into(),
                price: "NT$ 45,000".into(),
                status: Status::Available,
            });
            self
        }

        pub fn with_artwork(mut self, artwork: Artwork) -> Self {
            self.store.add(artwork);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_increasing_ids() {
        let mut store = MemoryStore::new();
        let a = store.add(Artwork::new("A"));
        let b = store.add(Artwork::new("B"));
        assert_eq!(a.id, RecordId(1));
        assert_eq!(b.id, RecordId(2));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = MemoryStore::new();
        store.add(Artwork::new("A"));
        let b = store.add(Artwork::new("B"));
        store.remove_by_id(b.id).unwrap();
        let c = store.add(Artwork::new("C"));
        assert_eq!(c.id, RecordId(3));
    }

    #[test]
    fn removal_keeps_survivor_order() {
        let mut store = MemoryStore::new();
        for t in ["A", "B", "C", "D"] {
            store.add(Artwork::new(t));
        }
        store.remove_by_id(RecordId(2)).unwrap();
        let titles: Vec<_> = store.list().iter().map(|r| r.artwork.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "D"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = MemoryStore::new();
        for t in ["A", "B", "C"] {
            store.add(Artwork::new(t));
        }
        let before = store.list().to_vec();
        let mut fields = Artwork::new("B2");
        fields.artist = "Someone".into();
        store.update_by_id(RecordId(2), fields.clone()).unwrap();

        let after = store.list();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], Record::new(RecordId(2), fields));
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn missing_ids_signal_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.update_by_id(RecordId(9), Artwork::default()),
            Err(ArtlistError::NotFound(RecordId(9)))
        ));
        assert!(matches!(
            store.remove_by_id(RecordId(9)),
            Err(ArtlistError::NotFound(RecordId(9)))
        ));
        assert!(store.get(RecordId(9)).is_err());
    }

    #[test]
    fn bulk_append_preserves_input_order() {
        let mut store = MemoryStore::new();
        store.add(Artwork::new("existing"));
        let added = store.bulk_append(vec![Artwork::new("x"), Artwork::new("y")]);
        assert_eq!(added[0].id, RecordId(2));
        assert_eq!(added[1].id, RecordId(3));
        let titles: Vec<_> = store.list().iter().map(|r| r.artwork.title.as_str()).collect();
        assert_eq!(titles, vec!["existing", "x", "y"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            Remove(u64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![Just(Op::Add), (1u64..20).prop_map(Op::Remove)]
        }

        proptest! {
            #[test]
            fn list_never_contains_duplicate_ids(ops in proptest::collection::vec(op(), 0..60)) {
                let mut store = MemoryStore::new();
                for op in ops {
                    match op {
                        Op::Add => { store.add(Artwork::default()); }
                        Op::Remove(id) => { let _ = store.remove_by_id(RecordId(id)); }
                    }
                    let ids: HashSet<_> = store.list().iter().map(|r| r.id).collect();
                    prop_assert_eq!(ids.len(), store.list().len());
                }
            }
        }
    }
}
