//! Sparse update description
//!
//! A `Patch` is an ordered list of column assignments collected from
//! optional fields. The storage layer renders it into a single parameterized
//! `UPDATE`; values are always bound, never spliced into the statement.

/// A value assigned by a patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Text(String),
    BigInt(i64),
}

impl From<String> for PatchValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for PatchValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

/// Ordered set of `column = value` assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    assignments: Vec<(&'static str, PatchValue)>,
}

impl Patch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `column`, replacing an earlier assignment to the same column
    pub fn set(mut self, column: &'static str, value: impl Into<PatchValue>) -> Self {
        let value = value.into();
        if let Some(slot) = self.assignments.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.assignments.push((column, value));
        }
        self
    }

    /// Assign only when a value was supplied
    pub fn set_opt<V: Into<PatchValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Value assigned to `column`, if any
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&PatchValue> {
        self.assignments
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PatchValue)> {
        self.assignments.iter().map(|(c, v)| (*c, v))
    }
}
