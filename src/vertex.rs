//! Struct and functions for working with `Vertex`s from which facets are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A vertex of a facet, holding position and normal.
///
/// Vertices carry no identity; the same point in space may appear as a
/// distinct copy in every facet that touches it (STL is a triangle soup).
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – copied verbatim; the tessellator leaves it zeroed and
    ///   lets STL consumers reconstruct orientation from winding.
    #[inline]
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }
}
