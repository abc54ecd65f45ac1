use serde::Serialize;

use crate::model::id::RecordId;

use super::{CandidateTemplate, PartyTemplate, TemplateRecord};

/// An ordered set of templates of one kind, keyed by ID.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecordSet<T> {
    records: Vec<T>,
}

// `Derive(Default)` would only derive if `T: Default`, but we don't need that bound.
impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> RecordSet<T>
where
    T: TemplateRecord,
{
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole set, e.g. with a fresh listing from the store.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Replace the record with the same ID in place, or append it.
    pub fn upsert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}

/// Local projection of the template store: every candidate and party template
/// the current fetch returned. Holds no filtering logic of its own.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateCatalog {
    pub candidates: RecordSet<CandidateTemplate>,
    pub parties: RecordSet<PartyTemplate>,
}

impl TemplateCatalog {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.parties.is_empty()
    }
}
