//! Append-only history store.

use std::slice::Iter;

use crate::history::record::DownloadRecord;

/// Ordered download history for one session.
///
/// Created empty when the session starts and dropped with it. Records can
/// only be appended.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<DownloadRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: DownloadRecord) {
        tracing::debug!("History: recorded {} ({})", record.filename, record.source);
        self.records.push(record);
    }

    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn iter(&self) -> Iter<'_, DownloadRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&DownloadRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a DownloadRecord;
    type IntoIter = Iter<'a, DownloadRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
