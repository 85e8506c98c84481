//! Error types for the partitioner and boundary slicer.

/// Everything that can go wrong constructing or querying this crate's types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// A direction string outside the closed eight-value set.
    #[error("'{value}' is not a valid direction")]
    InvalidDirection { value: String },

    /// A rank outside `[0, total_ranks)`.
    #[error("rank {rank} is out of range for {total_ranks} total ranks")]
    OutOfRangeRank { rank: u32, total_ranks: u32 },

    /// A layout with a zero dimension.
    #[error("layout ({rows}, {cols}) is invalid: rows and cols must both be at least 1")]
    InvalidLayout { rows: u32, cols: u32 },

    /// A halo width of zero, or a halo slice that falls outside the buffer shape.
    #[error("invalid halo request: {reason}")]
    InvalidHalo { reason: String },

    /// `dims`, `origin`, `extent`, and `shape` do not share a common length.
    #[error(
        "dimension mismatch: dims has {dims_len} entries, origin {origin_len}, \
         extent {extent_len}, shape {shape_len}"
    )]
    DimensionMismatch {
        dims_len: usize,
        origin_len: usize,
        extent_len: usize,
        shape_len: usize,
    },
}
