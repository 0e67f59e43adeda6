//! Read-only record providers.

use crate::services::records::Identified;

/// A read-only collection of records injected into a service.
pub trait RecordSource<T>: Send + Sync {
    fn records(&self) -> &[T];

    fn find(&self, id: u64) -> Option<&T>
    where
        T: Identified,
    {
        self.records().iter().find(|record| record.id() == id)
    }
}

/// In-memory records fixed at construction.
#[derive(Debug, Clone)]
pub struct FixtureSource<T> {
    records: Vec<T>,
}

impl<T> FixtureSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Default for FixtureSource<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Send + Sync> RecordSource<T> for FixtureSource<T> {
    fn records(&self) -> &[T] {
        &self.records
    }
}
