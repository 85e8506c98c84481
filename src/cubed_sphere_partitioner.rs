//! Cross-face neighbor queries across all six tiles of a cubed sphere.

use crate::adjacency;
use crate::boundary::BoundaryRecord;
use crate::direction::Direction;
use crate::error::PartitionError;
use crate::layout::rotate_subtile_rank;
use crate::tile_partitioner::TilePartitioner;

/// Composes six [`TilePartitioner`]s (one per cube face) into a
/// `6 * rows * cols`-rank global space and resolves neighbor queries that
/// cross a face seam, including the rotation algebra at rotated edges and
/// the three-face corner junctions where no fourth face exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubedSpherePartitioner {
    tile: TilePartitioner,
}

impl CubedSpherePartitioner {
    pub fn new(tile: TilePartitioner) -> Self {
        Self { tile }
    }

    pub fn tile(self) -> TilePartitioner {
        self.tile
    }

    pub fn total_ranks(self) -> u32 {
        6 * self.tile.total_ranks()
    }

    /// Resolve `direction` from `global_rank`.
    ///
    /// Returns `Ok(None)` for the three-face corner junctions, where by
    /// construction no fourth face meets the queried sub-tile — this is a
    /// valid result, not a failure.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn boundary(
        self,
        direction: Direction,
        global_rank: u32,
    ) -> Result<Option<BoundaryRecord>, PartitionError> {
        let total = self.total_ranks();
        if global_rank >= total {
            tracing::debug!(global_rank, total, "rank out of range for cubed-sphere partitioner");
            return Err(PartitionError::OutOfRangeRank { rank: global_rank, total_ranks: total });
        }

        let subranks = self.tile.total_ranks();
        let tile = global_rank / subranks;
        let sub_rank = global_rank % subranks;

        let (primary, secondary) = direction.components();
        let crossing: Vec<Direction> = std::iter::once(primary)
            .chain(secondary)
            .filter(|&c| self.tile.crosses(c, sub_rank))
            .collect();

        // The intra-tile wrap/step result from TilePartitioner is always
        // the right "mirror" sub-tile regardless of how many components
        // cross: it steps a non-crossing component and wraps a crossing
        // one, axis by axis.
        let mirror = self.tile.boundary(direction, sub_rank)?.to_rank;

        match crossing.len() {
            0 => Ok(Some(BoundaryRecord {
                boundary_type: direction,
                from_rank: global_rank,
                to_rank: tile * subranks + mirror,
                n_clockwise_rotations: 0,
            })),
            2 => {
                tracing::trace!(
                    tile,
                    sub_rank,
                    %direction,
                    "three-face corner junction, no neighbor"
                );
                Ok(None)
            }
            1 => {
                let edge = crossing[0];
                let (neighbor_tile, r) = adjacency::lookup(tile, edge);
                let translated = rotate_subtile_rank(mirror, self.tile.layout(), -(r as i32));
                Ok(Some(BoundaryRecord {
                    boundary_type: direction,
                    from_rank: global_rank,
                    to_rank: neighbor_tile * subranks + translated,
                    n_clockwise_rotations: r,
                }))
            }
            _ => unreachable!("a direction has at most two axis components"),
        }
    }
}
