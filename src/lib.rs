//! Parametric tessellation of a right circular cylinder with a coaxial
//! blind bore sunk into its top face, exported as a **binary STL** triangle
//! soup suitable for slicing and 3D printing.
//!
//! The solid is not produced by boolean subtraction; it is tessellated
//! directly as five analytic surface patches sharing the same angular
//! sampling, so the result is a closed, oriented 2-manifold by
//! construction:
//!
//! - the bottom disk,
//! - the outer cylindrical wall,
//! - the top annulus between the bore and the rim,
//! - the bore wall,
//! - the bore floor.
//!
//! ```rust
//! # use counterbore::{BoreParams, BoredCylinder};
//! # fn main() -> Result<(), counterbore::Error> {
//! let solid = BoredCylinder::new(BoreParams::default())?;
//! let bytes = counterbore::io::stl::to_stl_binary(&solid)?;
//! assert_eq!(bytes.len(), 84 + 50 * solid.triangle_count() as usize);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod manifold;
pub mod shapes;
pub mod triangulated;
pub mod vertex;

pub use errors::Error;
pub use shapes::{BoreParams, BoredCylinder};
pub use triangulated::Triangulated3D;
pub use vertex::Vertex;
