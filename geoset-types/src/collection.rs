#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Geom;

/// Heterogeneous set of geometries. A collection can contain other collections.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryCollection<S> {
    members: Vec<Geom<S>>,
}

impl<S> GeometryCollection<S> {
    /// Creates a new collection.
    pub fn new(members: Vec<Geom<S>>) -> Self {
        Self { members }
    }

    /// Creates a collection without members.
    pub fn empty() -> Self {
        Self { members: vec![] }
    }

    /// Members of the collection.
    pub fn members(&self) -> &[Geom<S>] {
        &self.members
    }

    /// Number of direct members of the collection.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if every member of the collection is empty. This includes collections with no members.
    pub fn is_empty(&self) -> bool {
        self.members.iter().all(Geom::is_empty)
    }

    /// Adds a member to the end of the collection.
    pub fn push(&mut self, member: impl Into<Geom<S>>) {
        self.members.push(member.into());
    }

    /// Consumes the collection returning its members.
    pub fn into_members(self) -> Vec<Geom<S>> {
        self.members
    }
}

impl<S> Default for GeometryCollection<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> From<Vec<Geom<S>>> for GeometryCollection<S> {
    fn from(value: Vec<Geom<S>>) -> Self {
        Self::new(value)
    }
}
