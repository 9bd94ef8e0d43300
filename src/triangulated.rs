//! A trait for any shape which can be represented by triangles.

use crate::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D can
/// automatically use the triangle-based IO backends and the manifold
/// check. Implementations must visit their triangles in a deterministic
/// order: the stream is what gets serialized, byte for byte.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals, wound
    /// counter-clockwise when viewed from outside the solid.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Number of triangles a visit will produce.
    ///
    /// The default counts with a full pass; shapes that know the count
    /// analytically should override it.
    fn triangle_count(&self) -> u64 {
        let mut count = 0u64;
        self.visit_triangles(|_| count += 1);
        count
    }
}
