use alloc::vec::Vec;

use crate::registry::FieldValue;

/// Values of a subject's marked fields, in declaration order.
///
/// Borrows the subject: values are the fields themselves, never copies.
#[derive(Debug, Default)]
pub struct FieldReadings<'s> {
    entries: Vec<(&'static str, &'s (dyn FieldValue + 'static))>,
}

impl<'s> FieldReadings<'s> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: &'s (dyn FieldValue + 'static)) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&'s (dyn FieldValue + 'static)> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'s (dyn FieldValue + 'static))> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'s> IntoIterator for FieldReadings<'s> {
    type Item = (&'static str, &'s (dyn FieldValue + 'static));
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
