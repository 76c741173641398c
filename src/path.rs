//! Positional addressing of level-table entries and sibling paths.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Coordinate of one level-table entry: `level` counts height above the
/// leaves, `offset` indexes within that level. Both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Height above the leaf level
    pub level: u64,
    /// Index within the level, left to right
    pub offset: u64,
}

impl Position {
    /// Coordinate of this entry's parent.
    pub fn parent(&self) -> Position {
        Position {
            level: self.level + 1,
            offset: self.offset / 2,
        }
    }

    /// Nominal sibling under the even/odd pairing rule.
    ///
    /// For a self-paired trailing node the result lies one past the end of
    /// its level; the addressing layer rejects such a coordinate.
    pub fn sibling(&self) -> Position {
        let offset = if self.offset % 2 == 0 {
            self.offset + 1
        } else {
            self.offset - 1
        };
        Position {
            level: self.level,
            offset,
        }
    }
}

/// Sibling coordinates from a starting entry up to, but excluding, the
/// root. Ordered strictly leaf-to-root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePath(Vec<Position>);

impl MerklePath {
    /// An empty path.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Pure sibling arithmetic from `(level, offset)` in a tree of `height`
    /// levels: the even/odd rule at each step, parent `(level + 1,
    /// offset / 2)`, stopping below the root.
    ///
    /// No width checks are made. Where the walk crosses a self-paired node
    /// the emitted sibling does not exist in the level table and
    /// verification reports it as an invalid coordinate;
    /// [`Tree::merkle_path`](crate::tree::Tree::merkle_path) resolves those
    /// steps instead.
    pub fn derive(height: u64, level: u64, offset: u64) -> MerklePath {
        let mut path = MerklePath::new();
        let mut position = Position { level, offset };

        while position.level + 1 < height {
            path.push(position.sibling());
            position = position.parent();
        }

        path
    }

    /// Append a step.
    pub fn push(&mut self, position: Position) {
        self.0.push(position);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate steps leaf-to-root.
    pub fn iter(&self) -> core::slice::Iter<'_, Position> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a MerklePath {
    type Item = &'a Position;
    type IntoIter = core::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
