//! The bored-cylinder solid and its parametric tessellation.

use crate::errors::Error;
use crate::float_types::{Real, TAU};
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Dimensions of the solid, all lengths in millimetres.
///
/// Immutable once handed to [`BoredCylinder::new`], which is the only
/// place they are validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoreParams {
    /// Radius of the outer cylindrical wall.
    pub outer_radius: Real,
    /// Total height of the solid along +Z.
    pub cylinder_height: Real,
    /// Radius of the coaxial bore.
    pub hole_radius: Real,
    /// Depth the bore descends from the top face.
    pub hole_depth: Real,
    /// Angular resolution: the circle is approximated by this many equal
    /// arc segments.
    pub segments: usize,
}

impl Default for BoreParams {
    /// The reference part: a 60 mm diameter, 130 mm tall cylinder with a
    /// 25 mm diameter, 30 mm deep bore, at 72 segments.
    fn default() -> Self {
        Self {
            outer_radius: 30.0,
            cylinder_height: 130.0,
            hole_radius: 12.5,
            hole_depth: 30.0,
            segments: 72,
        }
    }
}

impl BoreParams {
    /// Check every invariant the tessellation relies on.
    pub fn validate(&self) -> Result<(), Error> {
        let dims = [
            (self.outer_radius, "outer_radius must be finite and positive"),
            (self.cylinder_height, "cylinder_height must be finite and positive"),
            (self.hole_radius, "hole_radius must be finite and positive"),
            (self.hole_depth, "hole_depth must be finite and positive"),
        ];
        for (value, reason) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameters(reason));
            }
        }
        if self.hole_radius >= self.outer_radius {
            return Err(Error::InvalidParameters(
                "hole_radius must be strictly smaller than outer_radius",
            ));
        }
        if self.hole_depth >= self.cylinder_height {
            return Err(Error::InvalidParameters(
                "hole_depth must be strictly smaller than cylinder_height",
            ));
        }
        if self.segments < 3 {
            return Err(Error::InvalidParameters("segments must be at least 3"));
        }
        Ok(())
    }
}

/// A right circular cylinder with a coaxial blind bore sunk into its top
/// face, tessellated as five surface regions:
///
/// 1. the bottom disk at z = 0 (fan, faces −Z),
/// 2. the outer wall from z = 0 to z = height (quad strip, faces radially out),
/// 3. the top annulus at z = height (quad strip, faces +Z),
/// 4. the bore wall down to the floor (quad strip, faces toward the axis),
/// 5. the bore floor (fan, faces +Z).
///
/// All five regions sample the circle at the same angles, so boundary
/// vertices between neighbouring regions coincide exactly and every edge
/// is shared by two oppositely wound triangles.
#[derive(Debug, Clone, Copy)]
pub struct BoredCylinder {
    params: BoreParams,
}

impl BoredCylinder {
    /// Validate `params` and wrap them. No triangles are produced until
    /// [`Triangulated3D::visit_triangles`] is called.
    pub fn new(params: BoreParams) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The dimensions this solid was built from.
    pub const fn params(&self) -> &BoreParams {
        &self.params
    }

    /// Exact facet count: one fan triangle per segment for each cap and
    /// two strip triangles per segment for each of the three walls.
    pub const fn triangle_count(&self) -> u64 {
        8 * self.params.segments as u64
    }

    /// Vertex on the circle of `radius` at ring index `i`, elevation `z`.
    ///
    /// The index is reduced mod `segments` before the angle multiply, so
    /// the seam vertex at i == segments is bit-identical to the one at
    /// i == 0 even after narrowing to f32.
    fn ring(&self, radius: Real, z: Real, i: usize) -> Vertex {
        let step = TAU / self.params.segments as Real;
        let angle = ((i % self.params.segments) as Real) * step;
        Vertex::new(
            Point3::new(radius * angle.cos(), radius * angle.sin(), z),
            Vector3::zeros(),
        )
    }
}

impl Triangulated3D for BoredCylinder {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let BoreParams {
            outer_radius,
            cylinder_height,
            hole_radius,
            hole_depth,
            segments,
        } = self.params;
        let floor_z = cylinder_height - hole_depth;
        let center = |z| Vertex::new(Point3::new(0.0, 0.0, z), Vector3::zeros());

        // Bottom disk: fan around the origin, rim traversed clockwise
        // seen from +Z so the face looks down.
        for i in 0..segments {
            let a = self.ring(outer_radius, 0.0, i);
            let b = self.ring(outer_radius, 0.0, i + 1);
            f([center(0.0), b, a]);
        }

        // Outer wall: one quad per segment, split into two triangles,
        // facing radially outward.
        for i in 0..segments {
            let p = self.ring(outer_radius, 0.0, i);
            let q = self.ring(outer_radius, 0.0, i + 1);
            let p_top = self.ring(outer_radius, cylinder_height, i);
            let q_top = self.ring(outer_radius, cylinder_height, i + 1);
            f([p, q, p_top]);
            f([q, q_top, p_top]);
        }

        // Top annulus between the bore and the rim, facing +Z.
        for i in 0..segments {
            let p_outer = self.ring(outer_radius, cylinder_height, i);
            let q_outer = self.ring(outer_radius, cylinder_height, i + 1);
            let p_inner = self.ring(hole_radius, cylinder_height, i);
            let q_inner = self.ring(hole_radius, cylinder_height, i + 1);
            f([p_outer, q_outer, p_inner]);
            f([q_outer, q_inner, p_inner]);
        }

        // Bore wall: same strip as the outer wall but descending, and the
        // outward side of the solid here faces the axis, so the winding
        // that looked outward on the outer wall looks inward here.
        for i in 0..segments {
            let p = self.ring(hole_radius, cylinder_height, i);
            let q = self.ring(hole_radius, cylinder_height, i + 1);
            let p_floor = self.ring(hole_radius, floor_z, i);
            let q_floor = self.ring(hole_radius, floor_z, i + 1);
            f([p, q, p_floor]);
            f([q, q_floor, p_floor]);
        }

        // Bore floor: fan with the rim counter-clockwise seen from +Z,
        // facing up toward the bore opening.
        for i in 0..segments {
            let a = self.ring(hole_radius, floor_z, i);
            let b = self.ring(hole_radius, floor_z, i + 1);
            f([center(floor_z), a, b]);
        }
    }

    fn triangle_count(&self) -> u64 {
        BoredCylinder::triangle_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(params: BoreParams) -> &'static str {
        match BoredCylinder::new(params) {
            Err(Error::InvalidParameters(reason)) => reason,
            other => panic!("expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn reference_params_are_valid() {
        let solid = BoredCylinder::new(BoreParams::default()).unwrap();
        assert_eq!(solid.triangle_count(), 576);
    }

    #[test]
    fn too_few_segments_rejected() {
        let params = BoreParams { segments: 2, ..BoreParams::default() };
        assert!(reject(params).contains("segments"));
    }

    #[test]
    fn hole_as_wide_as_cylinder_rejected() {
        let params = BoreParams { hole_radius: 30.0, ..BoreParams::default() };
        assert!(reject(params).contains("hole_radius"));
    }

    #[test]
    fn hole_as_deep_as_cylinder_rejected() {
        let params = BoreParams { hole_depth: 130.0, ..BoreParams::default() };
        assert!(reject(params).contains("hole_depth"));
    }

    #[test]
    fn zero_and_nan_dimensions_rejected() {
        let zero = BoreParams { outer_radius: 0.0, ..BoreParams::default() };
        assert!(reject(zero).contains("outer_radius"));

        let nan = BoreParams { cylinder_height: Real::NAN, ..BoreParams::default() };
        assert!(reject(nan).contains("cylinder_height"));

        let negative = BoreParams { hole_depth: -1.0, ..BoreParams::default() };
        assert!(reject(negative).contains("hole_depth"));
    }

    #[test]
    fn seam_vertices_coincide_exactly() {
        let solid = BoredCylinder::new(BoreParams::default()).unwrap();
        let first = solid.ring(30.0, 0.0, 0);
        let wrapped = solid.ring(30.0, 0.0, 72);
        assert_eq!(first.pos, wrapped.pos);
    }
}
