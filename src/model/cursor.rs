//! Read-only cursor over an ordered list of sibling record ids.
//!
//! Consumed by the horizontal swipe machine to decide whether a "next" or
//! "previous" target exists. Degenerate input (empty list, current id not
//! present, boundary positions) degrades to `None` rather than erroring.

/// Opaque identifier of a sibling record, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiblingId(String);

impl SiblingId {
    /// Wrap a host-supplied id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SiblingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiblingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Read-only view over `(ordered_ids, current_id)`.
///
/// Recomputed by the host whenever the sibling list or the active record
/// changes; the cursor itself never mutates either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiblingCursor {
    ordered_ids: Vec<SiblingId>,
    current_id: Option<SiblingId>,
}

impl SiblingCursor {
    /// An empty cursor: every navigation is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a cursor over an ordered id list and the active record.
    pub fn new(ordered_ids: Vec<SiblingId>, current_id: Option<SiblingId>) -> Self {
        Self {
            ordered_ids,
            current_id,
        }
    }

    /// Position of the current id within the list, if present.
    fn current_index(&self) -> Option<usize> {
        let current = self.current_id.as_ref()?;
        self.ordered_ids.iter().position(|id| id == current)
    }

    /// The sibling after the current record, if one exists.
    ///
    /// `None` when the current id is last, missing from the list, or the
    /// list is empty.
    pub fn next(&self) -> Option<&SiblingId> {
        let index = self.current_index()?;
        self.ordered_ids.get(index + 1)
    }

    /// The sibling before the current record, if one exists.
    ///
    /// `None` when the current id is first, missing from the list, or the
    /// list is empty.
    pub fn previous(&self) -> Option<&SiblingId> {
        let index = self.current_index()?;
        index.checked_sub(1).and_then(|i| self.ordered_ids.get(i))
    }
}
