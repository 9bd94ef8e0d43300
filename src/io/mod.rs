//! Triangle-based IO backends.

pub mod stl;
