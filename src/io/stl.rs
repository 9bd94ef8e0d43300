//! Binary STL serialization.
//!
//! Layout, all multi-byte fields little-endian:
//!
//! - 80-byte header, free-form but never starting with the ASCII letters
//!   `solid` (readers would misidentify the file as ASCII STL),
//! - uint32 facet count,
//! - one 50-byte record per facet: normal (3 × f32), three vertices
//!   (3 × f32 each), uint16 attribute byte count, always zero.
//!
//! A file holding N facets is exactly 84 + 50·N bytes, no trailing bytes.

use crate::errors::Error;
use crate::triangulated::Triangulated3D;
use std::io::Write;
use std::path::Path;

/// The fixed header string, NUL-padded to 80 bytes on write.
const HEADER: &[u8] = b"binary STL generated by counterbore";

/// Size of one facet record on the wire.
const FACET_SIZE: usize = 50;

fn push_f32(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Serialize `shape` to BINARY STL, writing exactly 84 + 50·N bytes.
///
/// Facet records are buffered first so the count field is final before
/// the header goes out; the count is by construction the number of
/// triangles the shape visits.
pub fn write_stl<W, T>(writer: &mut W, shape: &T) -> Result<(), Error>
where
    W: Write,
    T: Triangulated3D,
{
    let mut body = Vec::with_capacity(shape.triangle_count() as usize * FACET_SIZE);
    let mut count: u64 = 0;
    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        push_f32(&mut body, n.x as f32);
        push_f32(&mut body, n.y as f32);
        push_f32(&mut body, n.z as f32);
        for v in &tri {
            push_f32(&mut body, v.pos.x as f32);
            push_f32(&mut body, v.pos.y as f32);
            push_f32(&mut body, v.pos.z as f32);
        }
        body.extend_from_slice(&0u16.to_le_bytes());
        count += 1;
    });

    if count > u64::from(u32::MAX) {
        return Err(Error::TooManyTriangles(count));
    }

    let mut header = [0u8; 80];
    header[..HEADER.len()].copy_from_slice(HEADER);
    writer.write_all(&header)?;
    writer.write_all(&(count as u32).to_le_bytes())?;
    writer.write_all(&body)?;
    Ok(())
}

/// Serialize `shape` to BINARY STL in memory (returns `Vec<u8>`).
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(84 + shape.triangle_count() as usize * FACET_SIZE);
    write_stl(&mut out, shape)?;
    Ok(out)
}

/// Serialize `shape` straight to a file at `path`.
///
/// The file handle is scoped to this call and released on every exit
/// path; on error a partial file may remain on disk.
pub fn save_stl<T, P>(shape: &T, path: P) -> Result<(), Error>
where
    T: Triangulated3D,
    P: AsRef<Path>,
{
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_stl(&mut writer, shape)?;
    writer.flush()?;
    Ok(())
}
