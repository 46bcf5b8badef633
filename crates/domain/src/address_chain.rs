use crate::address_record::{AddressFamily, AddressRecord};
use serde::Serialize;

/// Ordered result of one resolution call.
///
/// Order and duplicates are significant. The chain owns every record it
/// holds and is intentionally not `Clone`: handing it to a caller transfers
/// all of it.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressChain {
    records: Vec<AddressRecord>,
}

impl AddressChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AddressRecord>) -> Self {
        Self { records }
    }

    pub fn into_records(self) -> Vec<AddressRecord> {
        self.records
    }

    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&AddressRecord> {
        self.records.first()
    }

    pub fn count(&self, family: AddressFamily) -> usize {
        self.records.iter().filter(|r| r.family() == family).count()
    }
}

impl From<Vec<AddressRecord>> for AddressChain {
    fn from(records: Vec<AddressRecord>) -> Self {
        Self::from_records(records)
    }
}

impl FromIterator<AddressRecord> for AddressChain {
    fn from_iter<I: IntoIterator<Item = AddressRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressChain {
    type Item = AddressRecord;
    type IntoIter = std::vec::IntoIter<AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressChain {
    type Item = &'a AddressRecord;
    type IntoIter = std::slice::Iter<'a, AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
