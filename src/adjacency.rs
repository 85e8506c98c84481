//! The static face-to-face adjacency table for the six cubed-sphere tiles.
//!
//! This is the single source of truth for cross-face connectivity: 24
//! entries, one per `(tile, cardinal edge)` pair. Everything else —
//! corner neighbors, the absent-corner rule, rotation composition — is
//! derived from this table plus the per-tile intra-face wrap rule in
//! [`crate::TilePartitioner`]. Reversibility (`boundary_pairs_reversibly`
//! in the partitioner tests) is what validates that this table is
//! self-consistent; do not hand-edit an entry without re-running that
//! check conceptually against the rest of the table.

use crate::direction::Direction;

/// `(neighbor_tile, rotation)` for a tile crossing one of its four edges.
pub(crate) const EDGE_ADJACENCY: [[(u8, u32); 4]; 6] = {
    // Indexed [tile][edge_index], edge_index per EDGE_INDEX below.
    [
        // tile 0
        [(4, 1), (1, 0), (2, 3), (5, 0)],
        // tile 1
        [(0, 0), (3, 1), (2, 0), (5, 3)],
        // tile 2
        [(0, 1), (3, 0), (4, 3), (1, 0)],
        // tile 3
        [(2, 0), (5, 1), (4, 0), (1, 3)],
        // tile 4
        [(2, 1), (5, 0), (0, 3), (3, 0)],
        // tile 5
        [(4, 0), (1, 1), (0, 0), (3, 3)],
    ]
};

/// Column index of `direction` within an [`EDGE_ADJACENCY`] row: West, East,
/// North, South.
fn edge_index(direction: Direction) -> usize {
    match direction {
        Direction::West => 0,
        Direction::East => 1,
        Direction::North => 2,
        Direction::South => 3,
        other => unreachable!("{other} is not a cardinal edge direction"),
    }
}

/// Look up `(neighbor_tile, rotation)` for `tile` crossing `edge`.
pub(crate) fn lookup(tile: u32, edge: Direction) -> (u32, u32) {
    let (neighbor, r) = EDGE_ADJACENCY[tile as usize][edge_index(edge)];
    (neighbor as u32, r)
}
