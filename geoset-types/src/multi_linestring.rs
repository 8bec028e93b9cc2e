#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Linestring;

/// Set of linestrings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiLinestring<S> {
    lines: Vec<Linestring<S>>,
}

impl<S> MultiLinestring<S> {
    /// Creates a new multilinestring.
    pub fn new(lines: Vec<Linestring<S>>) -> Self {
        Self { lines }
    }

    /// Member linestrings.
    pub fn lines(&self) -> &[Linestring<S>] {
        &self.lines
    }

    /// Returns true if there are no points in any of the linestrings.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Linestring::is_empty)
    }

    /// Consumes the multilinestring returning its members.
    pub fn into_lines(self) -> Vec<Linestring<S>> {
        self.lines
    }
}

impl<S> From<Vec<Linestring<S>>> for MultiLinestring<S> {
    fn from(value: Vec<Linestring<S>>) -> Self {
        Self::new(value)
    }
}
