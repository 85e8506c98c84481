//! Intra-face neighbor queries on a single `rows x cols` tile.

use crate::boundary::BoundaryRecord;
use crate::direction::Direction;
use crate::error::PartitionError;
use crate::layout::Layout;

/// Decomposes one cube face into a grid of sub-tiles and answers
/// within-the-face neighbor queries.
///
/// `boundary` always returns a value: a sub-tile that would cross the face
/// edge instead wraps toroidally to the opposite edge of this same tile,
/// always reporting zero rotations. This is the only intra-tile query this
/// type exposes; [`crate::CubedSpherePartitioner`] calls it directly and
/// either accepts the wrapped answer (no edge crossed) or uses it as the
/// "mirror" sub-tile to rotate into a neighboring face's frame (edge
/// crossed). See the corner rule below for why one method covers both
/// edges and corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePartitioner {
    layout: Layout,
}

impl TilePartitioner {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(self) -> Layout {
        self.layout
    }

    pub fn total_ranks(self) -> u32 {
        self.layout.total()
    }

    /// Resolve `direction` from `sub_rank` within this tile alone.
    ///
    /// Each axis component of `direction` is handled independently: step
    /// toward it if the sub-tile isn't already at that edge, otherwise wrap
    /// to the opposite edge of the same row/column. A corner direction
    /// applies this to both of its components, which is exactly right
    /// whether neither, one, or both components are at an edge.
    pub fn boundary(
        self,
        direction: Direction,
        sub_rank: u32,
    ) -> Result<BoundaryRecord, PartitionError> {
        let total = self.total_ranks();
        if sub_rank >= total {
            tracing::debug!(sub_rank, total, "sub-rank out of range for tile layout");
            return Err(PartitionError::OutOfRangeRank { rank: sub_rank, total_ranks: total });
        }

        let (row, col) = self.layout.row_col(sub_rank);
        let (primary, secondary) = direction.components();

        let mut new_row = row;
        let mut new_col = col;
        self.apply_component(primary, &mut new_row, &mut new_col);
        if let Some(secondary) = secondary {
            self.apply_component(secondary, &mut new_row, &mut new_col);
        }

        Ok(BoundaryRecord {
            boundary_type: direction,
            from_rank: sub_rank,
            to_rank: self.layout.sub_rank(new_row, new_col),
            n_clockwise_rotations: 0,
        })
    }

    /// Step toward `component`, or wrap if already at that edge.
    fn apply_component(self, component: Direction, row: &mut u32, col: &mut u32) {
        match component {
            Direction::West => {
                *col = if *col == 0 { self.layout.cols() - 1 } else { *col - 1 };
            }
            Direction::East => {
                *col = if *col == self.layout.cols() - 1 { 0 } else { *col + 1 };
            }
            Direction::North => {
                *row = if *row == self.layout.rows() - 1 { 0 } else { *row + 1 };
            }
            Direction::South => {
                *row = if *row == 0 { self.layout.rows() - 1 } else { *row - 1 };
            }
            other => {
                unreachable!("edge component of a direction cannot itself be a corner: {other}")
            }
        }
    }

    /// True if `component` (a cardinal edge direction) would cross this
    /// tile's boundary at `sub_rank`.
    pub(crate) fn crosses(self, component: Direction, sub_rank: u32) -> bool {
        let (row, col) = self.layout.row_col(sub_rank);
        match component {
            Direction::West => col == 0,
            Direction::East => col == self.layout.cols() - 1,
            Direction::North => row == self.layout.rows() - 1,
            Direction::South => row == 0,
            other => {
                unreachable!("edge component of a direction cannot itself be a corner: {other}")
            }
        }
    }
}
