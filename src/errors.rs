//! Error kinds surfaced by tessellation and STL export.

/// Everything that can go wrong between parameter intake and the bytes
/// landing on disk.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter violates the solid's invariants. Raised before any
    /// output is produced; no file is created.
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// Failure opening, writing to, or closing the output. Partial files
    /// may remain on disk; the error is surfaced to the caller.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The facet count does not fit the binary STL uint32 count field.
    #[error("{0} facets exceed the binary STL limit of 4294967295")]
    TooManyTriangles(u64),
}
