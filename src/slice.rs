//! Translates a halo direction and width into per-axis buffer index ranges.

use crate::dim::{ArrayMetadata, HorizontalAxis};
use crate::direction::Direction;
use crate::error::PartitionError;

/// A half-open index interval `[lo, hi)` along one axis.
pub type Interval = (i64, i64);

/// Compute the rectangular index region of `meta`'s buffer that corresponds
/// to `n_points` halo cells along `direction`, on the interior side of the
/// compute region if `interior` is true, or the exterior (halo) side
/// otherwise.
///
/// Perpendicular axes (including `Z`, which is perpendicular to every
/// horizontal direction) keep their full compute-region interval
/// `[origin, origin + extent)`. Corner directions narrow both horizontal
/// axes using their respective edge rules.
pub fn boundary_slice(
    meta: &ArrayMetadata,
    direction: Direction,
    n_points: i64,
    interior: bool,
) -> Result<Vec<Interval>, PartitionError> {
    if n_points < 1 {
        let reason = format!("n_points must be at least 1, got {n_points}");
        tracing::debug!(n_points, "{reason}");
        return Err(PartitionError::InvalidHalo { reason });
    }

    let (vertical, horizontal) = direction.components();
    let mut axes = vec![vertical];
    if let Some(h) = horizontal {
        axes.push(h);
    }

    let mut result = Vec::with_capacity(meta.rank());
    for axis in 0..meta.rank() {
        let origin = meta.origin()[axis];
        let extent = meta.extent()[axis];
        let shape = meta.shape()[axis];
        let label = meta.dims()[axis];

        let matching = axes.iter().find(|&&component| {
            matches!(
                (component, label.horizontal_axis()),
                (Direction::West, Some(HorizontalAxis::X))
                    | (Direction::East, Some(HorizontalAxis::X))
                    | (Direction::South, Some(HorizontalAxis::Y))
                    | (Direction::North, Some(HorizontalAxis::Y))
            )
        });

        let (lo, hi) = match matching {
            None => (origin, origin + extent),
            Some(&Direction::West) | Some(&Direction::South) => {
                if interior {
                    (origin, origin + n_points)
                } else {
                    (origin - n_points, origin)
                }
            }
            Some(&Direction::East) | Some(&Direction::North) => {
                if interior {
                    (origin + extent - n_points, origin + extent)
                } else {
                    (origin + extent, origin + extent + n_points)
                }
            }
            Some(other) => unreachable!("{other} is not a cardinal edge direction"),
        };

        if lo < 0 || hi > shape || lo >= hi {
            let reason = format!(
                "axis {axis}: requested interval [{lo}, {hi}) falls outside buffer shape {shape}"
            );
            tracing::debug!(axis, lo, hi, shape, "{reason}");
            return Err(PartitionError::InvalidHalo { reason });
        }

        result.push((lo, hi));
    }

    Ok(result)
}
