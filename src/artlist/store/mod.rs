//! # Storage Layer
//!
//! The [`DataStore`] trait is the record store of the catalogue: an ordered
//! collection of artworks keyed by [`RecordId`].
//!
//! ## Ordering
//!
//! Records are kept in insertion order. Removing a record never reorders the
//! survivors, and updating a record keeps its position.
//!
//! ## Identity
//!
//! The store assigns ids. Callers hand over an [`Artwork`] (the field set) and
//! get back a [`Record`] carrying the fresh id. Ids are unique for the lifetime
//! of the store and are never reused, even after deletion.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: the in-memory store a session works against.
//!   Nothing is persisted; import/export is how data enters and leaves.

use crate::error::Result;
use crate::model::{Artwork, Record, RecordId};

pub mod memory;

/// Abstract interface for the artwork record store.
pub trait DataStore {
    /// Append an artwork at the end, assigning it a fresh id.
    fn add(&mut self, artwork: Artwork) -> Record;

    /// Append several artworks in order, each with a fresh id.
    fn bulk_append(&mut self, artworks: Vec<Artwork>) -> Vec<Record> {
        artworks.into_iter().map(|a| self.add(a)).collect()
    }

    /// Get a copy of the record with the given id.
    fn get(&self, id: RecordId) -> Result<Record>;

    /// Replace the fields of the record with the given id, keeping its position.
    fn update_by_id(&mut self, id: RecordId, artwork: Artwork) -> Result<Record>;

    /// Remove the record with the given id, returning it.
    fn remove_by_id(&mut self, id: RecordId) -> Result<Record>;

    /// All records in insertion order.
    fn list(&self) -> &[Record];
}
