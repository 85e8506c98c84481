//! The `(rows, cols)` grid a single cube face is divided into, and the
//! quarter-turn rotation primitive used to reconcile adjacent faces' frames.

use crate::error::PartitionError;

/// A sub-tile grid shape for one face. Row 0 is the southernmost row,
/// column 0 the westernmost column; row numbering increases northward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    rows: u32,
    cols: u32,
}

impl Layout {
    /// Construct a layout, rejecting a zero dimension.
    pub fn new(rows: u32, cols: u32) -> Result<Self, PartitionError> {
        if rows < 1 || cols < 1 {
            tracing::debug!(rows, cols, "rejected layout with a zero dimension");
            return Err(PartitionError::InvalidLayout { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> u32 {
        self.rows
    }

    pub fn cols(self) -> u32 {
        self.cols
    }

    /// Total sub-tiles in this layout.
    pub fn total(self) -> u32 {
        self.rows * self.cols
    }

    /// Decompose a sub-rank into `(row, col)`.
    pub fn row_col(self, sub_rank: u32) -> (u32, u32) {
        (sub_rank / self.cols, sub_rank % self.cols)
    }

    /// Compose `(row, col)` back into a sub-rank.
    pub fn sub_rank(self, row: u32, col: u32) -> u32 {
        row * self.cols + col
    }

    /// The layout after a single 90-degree clockwise rotation: rows and
    /// columns swap.
    fn rotated_once(self) -> Layout {
        Layout { rows: self.cols, cols: self.rows }
    }
}

/// Return the sub-rank that the same physical sub-tile would have after its
/// face is rotated `k` quarter-turns clockwise.
///
/// `k` is taken modulo 4. One quarter turn maps `(row, col)` in layout
/// `(rows, cols)` to `(cols - 1 - col, row)` in the transposed layout
/// `(cols, rows)`; further turns repeat this on the resulting layout.
pub fn rotate_subtile_rank(sub_rank: u32, layout: Layout, k: i32) -> u32 {
    let turns = k.rem_euclid(4);
    let mut current = layout;
    let mut sub = sub_rank;
    for _ in 0..turns {
        let (row, col) = current.row_col(sub);
        let next = current.rotated_once();
        let new_row = current.cols - 1 - col;
        let new_col = row;
        sub = next.sub_rank(new_row, new_col);
        current = next;
    }
    sub
}
