/// Ordered record of the steps taken by one solver call.
///
/// Records are appended as the solver advances and are never modified once
/// pushed. The trace is handed back to the caller with the result; solvers
/// keep nothing between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Trace<R> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record and returns a reference to it.
    pub fn push(&mut self, record: R) -> &R {
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Iterates over records in the order they were produced.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Consumes the trace and returns its records.
    #[must_use]
    pub fn into_vec(self) -> Vec<R> {
        self.records
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());

        let pushed = *trace.push(3);
        trace.push(1);
        trace.push(2);

        assert_eq!(pushed, 3);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.last(), Some(&2));
        assert_eq!(trace.get(1), Some(&1));
        assert_eq!(trace.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(trace.into_vec(), vec![3, 1, 2]);
    }
}
