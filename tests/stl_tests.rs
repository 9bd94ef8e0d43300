use counterbore::io::stl::{save_stl, to_stl_binary};
use counterbore::{BoreParams, BoredCylinder, Error, Triangulated3D};
use std::io::Cursor;

fn reference() -> BoredCylinder {
    BoredCylinder::new(BoreParams::default()).unwrap()
}

fn facet_count(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[80..84].try_into().unwrap())
}

#[test]
fn reference_part_file_layout() {
    // 576 facets at 50 bytes each, plus 80 header bytes and the count.
    let bytes = to_stl_binary(&reference()).unwrap();
    assert_eq!(bytes.len(), 28884);
    assert_eq!(facet_count(&bytes), 576);
}

#[test]
fn coarse_part_file_layout() {
    let params = BoreParams {
        outer_radius: 10.0,
        cylinder_height: 10.0,
        hole_radius: 1.0,
        hole_depth: 1.0,
        segments: 3,
    };
    let bytes = to_stl_binary(&BoredCylinder::new(params).unwrap()).unwrap();
    assert_eq!(bytes.len(), 1284);
    assert_eq!(facet_count(&bytes), 24);
}

#[test]
fn header_is_not_mistakable_for_ascii_stl() {
    let bytes = to_stl_binary(&reference()).unwrap();
    assert_ne!(&bytes[0..5], b"solid");
}

#[test]
fn records_carry_zero_normals_and_attributes() {
    let solid = reference();
    let bytes = to_stl_binary(&solid).unwrap();
    for record in bytes[84..].chunks_exact(50) {
        assert!(record[..12].iter().all(|&b| b == 0), "nonzero normal");
        assert_eq!(&record[48..50], &[0, 0], "nonzero attribute count");
    }
    assert_eq!(bytes[84..].len() as u64, 50 * solid.triangle_count());
}

#[test]
fn conforming_reader_round_trip() {
    let solid = reference();
    let bytes = to_stl_binary(&solid).unwrap();

    let mut expected: Vec<[[f32; 3]; 3]> = Vec::new();
    solid.visit_triangles(|tri| {
        expected.push(tri.map(|v| [v.pos.x as f32, v.pos.y as f32, v.pos.z as f32]));
    });

    let mesh = stl_io::read_stl(&mut Cursor::new(&bytes)).unwrap();
    assert_eq!(mesh.faces.len(), expected.len());
    for (face, want) in mesh.faces.iter().zip(&expected) {
        for (corner, want) in face.vertices.iter().zip(want) {
            let got = &mesh.vertices[*corner];
            assert_eq!([got[0], got[1], got[2]], *want);
        }
    }
}

#[test]
fn identical_parameters_give_identical_bytes() {
    let first = to_stl_binary(&reference()).unwrap();
    let second = to_stl_binary(&reference()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn save_writes_the_exact_byte_count() {
    let path = std::env::temp_dir().join("counterbore_reference.stl");
    save_stl(&reference(), &path).unwrap();
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk.len(), 28884);
    assert_eq!(on_disk, to_stl_binary(&reference()).unwrap());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_parameters_leave_no_file_behind() {
    let path = std::env::temp_dir().join("counterbore_rejected.stl");
    let _ = std::fs::remove_file(&path);

    let bad = BoreParams {
        outer_radius: 0.0,
        ..BoreParams::default()
    };
    let result = BoredCylinder::new(bad).map(|solid| save_stl(&solid, &path));
    assert!(matches!(result, Err(Error::InvalidParameters(_))));
    assert!(!path.exists());
}
