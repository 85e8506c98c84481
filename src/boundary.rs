//! The result type of a topology query.

use crate::direction::Direction;

/// The result of a successful neighbor query: who owns the adjacent
/// sub-tile, and how the neighbor's local frame is rotated relative to the
/// querying rank's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryRecord {
    pub boundary_type: Direction,
    pub from_rank: u32,
    pub to_rank: u32,
    /// Always normalized to `{0, 1, 2, 3}`.
    pub n_clockwise_rotations: u32,
}
