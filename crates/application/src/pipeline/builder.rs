use dns_override_domain::{AddressChain, AddressRecord, DomainError};

/// Output buffer for one stage, sized up front.
///
/// The only fallible step is [`ChainBuilder::try_with_capacity`]; once it
/// succeeds every `push` up to the reserved capacity is infallible, so a stage
/// either reserves everything it needs before consuming its input or gives the
/// input back untouched.
pub(crate) struct ChainBuilder {
    records: Vec<AddressRecord>,
}

impl ChainBuilder {
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, DomainError> {
        #[cfg(test)]
        if fault::should_fail() {
            return Err(DomainError::MemoryExhausted);
        }

        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| DomainError::MemoryExhausted)?;
        Ok(Self { records })
    }

    pub(crate) fn push(&mut self, record: AddressRecord) {
        debug_assert!(self.records.len() < self.records.capacity());
        self.records.push(record);
    }

    pub(crate) fn get(&self, index: usize) -> Option<&AddressRecord> {
        self.records.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn finish(self) -> AddressChain {
        AddressChain::from_records(self.records)
    }
}

impl Extend<AddressRecord> for ChainBuilder {
    fn extend<I: IntoIterator<Item = AddressRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}
