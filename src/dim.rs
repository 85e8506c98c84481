//! Dimension labels and the array metadata descriptor consumed by the slicer.

use crate::error::PartitionError;

/// A single axis's role in the grid.
///
/// `X`/`Y` are horizontal center dimensions; their `Interface` counterparts
/// are staggered axes carrying one extra point at the trailing end (already
/// folded into `extent`, see [`ArrayMetadata`]). `Z` is always vertical and
/// always perpendicular to every horizontal boundary direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimLabel {
    XDim,
    YDim,
    XInterfaceDim,
    YInterfaceDim,
    ZDim,
}

/// Which horizontal axis (if any) a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAxis {
    X,
    Y,
}

impl DimLabel {
    /// The horizontal axis this label lies on, or `None` for `ZDim`.
    pub fn horizontal_axis(self) -> Option<HorizontalAxis> {
        match self {
            DimLabel::XDim | DimLabel::XInterfaceDim => Some(HorizontalAxis::X),
            DimLabel::YDim | DimLabel::YInterfaceDim => Some(HorizontalAxis::Y),
            DimLabel::ZDim => None,
        }
    }
}

/// The "quantity descriptor" external collaborator: everything the boundary
/// slicer needs to know about an array's declared dimensions, without
/// consuming the array itself.
///
/// Held by value; no lifetime coupling to whatever backs the real array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayMetadata {
    dims: Vec<DimLabel>,
    origin: Vec<i64>,
    extent: Vec<i64>,
    shape: Vec<i64>,
}

impl ArrayMetadata {
    /// Construct and validate a descriptor.
    ///
    /// All four lists must share a length, and every axis must satisfy
    /// `origin + extent <= shape`.
    pub fn new(
        dims: Vec<DimLabel>,
        origin: Vec<i64>,
        extent: Vec<i64>,
        shape: Vec<i64>,
    ) -> Result<Self, PartitionError> {
        if dims.len() != origin.len() || dims.len() != extent.len() || dims.len() != shape.len() {
            tracing::debug!(
                dims = dims.len(),
                origin = origin.len(),
                extent = extent.len(),
                shape = shape.len(),
                "array metadata dimension lists disagree in length"
            );
            return Err(PartitionError::DimensionMismatch {
                dims_len: dims.len(),
                origin_len: origin.len(),
                extent_len: extent.len(),
                shape_len: shape.len(),
            });
        }

        for (axis, ((&o, &e), &s)) in origin.iter().zip(&extent).zip(&shape).enumerate() {
            if o + e > s {
                let reason = format!(
                    "axis {axis}: origin {o} + extent {e} exceeds buffer shape {s}"
                );
                tracing::debug!(axis, origin = o, extent = e, shape = s, "{reason}");
                return Err(PartitionError::InvalidHalo { reason });
            }
        }

        Ok(Self { dims, origin, extent, shape })
    }

    pub fn dims(&self) -> &[DimLabel] {
        &self.dims
    }

    pub fn origin(&self) -> &[i64] {
        &self.origin
    }

    pub fn extent(&self) -> &[i64] {
        &self.extent
    }

    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_descriptor_constructs() {
        let meta = ArrayMetadata::new(
            vec![DimLabel::YDim, DimLabel::XDim],
            vec![1, 1],
            vec![1, 1],
            vec![3, 3],
        )
        .unwrap();
        assert_eq!(meta.rank(), 2);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err =
            ArrayMetadata::new(vec![DimLabel::XDim], vec![0, 0], vec![1], vec![3]).unwrap_err();
        assert!(matches!(err, PartitionError::DimensionMismatch { .. }));
    }

    #[test]
    fn origin_plus_extent_exceeding_shape_rejected() {
        let err =
            ArrayMetadata::new(vec![DimLabel::XDim], vec![2], vec![2], vec![3]).unwrap_err();
        assert!(matches!(err, PartitionError::InvalidHalo { .. }));
    }

    #[test]
    fn horizontal_axis_classification() {
        assert_eq!(DimLabel::XDim.horizontal_axis(), Some(HorizontalAxis::X));
        assert_eq!(
            DimLabel::XInterfaceDim.horizontal_axis(),
            Some(HorizontalAxis::X)
        );
        assert_eq!(DimLabel::YDim.horizontal_axis(), Some(HorizontalAxis::Y));
        assert_eq!(DimLabel::ZDim.horizontal_axis(), None);
    }
}
