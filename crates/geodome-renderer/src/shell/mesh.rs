//! Base solid generation.
//!
//! Builds a geodesic sphere by subdividing an icosahedron: every pass
//! splits each triangle into four at its edge midpoints and pushes the new
//! vertices back onto the sphere. The result is flattened into a
//! non-indexed triangle list, 9 floats per face.

use std::collections::HashMap;

use geodome_common::GeometryError;
use glam::Vec3;

use super::faces::FACE_STRIDE;

/// Number of faces produced at a given subdivision depth: `20 × 4^detail`.
pub fn face_count(detail: u32) -> usize {
    20 * 4usize.pow(detail)
}

/// Generate the flat vertex buffer of a subdivided icosahedron.
///
/// Every vertex lies at distance `radius` from the origin. The buffer
/// holds `9 × face_count(detail)` floats.
pub fn generate(radius: f32, detail: u32) -> Result<Vec<f32>, GeometryError> {
    let (mut vertices, mut triangles) = icosahedron();

    for _ in 0..detail {
        (vertices, triangles) = subdivide(&vertices, &triangles);
    }

    let mut positions = Vec::with_capacity(triangles.len() * FACE_STRIDE);
    for triangle in &triangles {
        for &index in triangle {
            positions.extend_from_slice(&(vertices[index] * radius).to_array());
        }
    }

    let expected = face_count(detail) * FACE_STRIDE;
    if positions.len() != expected {
        return Err(GeometryError::FaceCount {
            faces: positions.len() / FACE_STRIDE,
            expected: face_count(detail),
        });
    }

    Ok(positions)
}

/// Unit icosahedron: 12 vertices, 20 triangles.
fn icosahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let vertices = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ]
    .into_iter()
    .map(|v| Vec3::from_array(v).normalize())
    .collect();

    let triangles = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    (vertices, triangles)
}

/// Split every triangle into four, sharing edge midpoints between neighbors.
fn subdivide(vertices: &[Vec3], triangles: &[[usize; 3]]) -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let mut vertices = vertices.to_vec();
    let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
    let mut out = Vec::with_capacity(triangles.len() * 4);

    let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Vec3>| -> usize {
        let key = if a < b { (a, b) } else { (b, a) };
        *midpoints.entry(key).or_insert_with(|| {
            vertices.push(((vertices[a] + vertices[b]) * 0.5).normalize());
            vertices.len() - 1
        })
    };

    for &[v0, v1, v2] in triangles {
        let m01 = midpoint(v0, v1, &mut vertices);
        let m12 = midpoint(v1, v2, &mut vertices);
        let m20 = midpoint(v2, v0, &mut vertices);

        out.push([v0, m01, m20]);
        out.push([v1, m12, m01]);
        out.push([v2, m20, m12]);
        out.push([m01, m12, m20]);
    }

    (vertices, out)
}
