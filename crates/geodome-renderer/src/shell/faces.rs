//! Face extraction, scaling, and skew.
//!
//! Two phases over the same flat buffer: [`extract_and_scale`] shrinks
//! every face toward its centroid and snapshots the result, then [`skew`]
//! rewrites the live buffer from that snapshot with each face pushed
//! along its outward direction.

use geodome_common::GeometryError;
use glam::Vec3;

use crate::random::UniformSource;

/// Floats per triangular face (3 vertices × xyz).
pub const FACE_STRIDE: usize = 9;

/// A triangle of the base solid, described by where it sat before deformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Centroid of the original (unscaled) vertices.
    pub center: Vec3,
    /// Unit vector from the origin through `center`.
    pub direction: Vec3,
}

/// Faces plus the scaled-but-unskewed vertex buffer they were taken from.
#[derive(Debug, Clone)]
pub struct FaceSet {
    pub faces: Vec<Face>,
    pub source: Vec<f32>,
}

/// Move every vertex a fraction `1 - scale` of the way toward its face's
/// centroid, in place, and record one [`Face`] per 9-float chunk.
///
/// `scale` is expected in `(0, 1]`; a scale of 1 leaves the buffer as is.
pub fn extract_and_scale(positions: &mut [f32], scale: f32) -> Result<FaceSet, GeometryError> {
    if positions.len() % FACE_STRIDE != 0 {
        return Err(GeometryError::BufferLength {
            len: positions.len(),
            expected_multiple: FACE_STRIDE,
        });
    }

    let shrink = 1.0 - scale;
    let mut faces = Vec::with_capacity(positions.len() / FACE_STRIDE);

    for (index, chunk) in positions.chunks_exact_mut(FACE_STRIDE).enumerate() {
        let corners = [
            Vec3::from_slice(&chunk[0..3]),
            Vec3::from_slice(&chunk[3..6]),
            Vec3::from_slice(&chunk[6..9]),
        ];
        let center = (corners[0] + corners[1] + corners[2]) / 3.0;
        let direction = center
            .try_normalize()
            .ok_or(GeometryError::DegenerateFace(index))?;

        for (corner, slot) in corners.iter().zip(chunk.chunks_exact_mut(3)) {
            (*corner + (center - *corner) * shrink).write_to_slice(slot);
        }

        faces.push(Face { center, direction });
    }

    Ok(FaceSet {
        faces,
        source: positions.to_vec(),
    })
}

/// Displace each face rigidly along its direction by one draw from
/// `[0, max_shift)`, writing `source + delta` into `positions`.
///
/// All three vertices of a face get the same delta.
pub fn skew(
    positions: &mut [f32],
    set: &FaceSet,
    max_shift: f32,
    rng: &mut impl UniformSource,
) -> Result<(), GeometryError> {
    if positions.len() != set.source.len() || set.faces.len() * FACE_STRIDE != positions.len() {
        return Err(GeometryError::FaceCount {
            faces: set.faces.len(),
            expected: positions.len() / FACE_STRIDE,
        });
    }

    let chunks = positions
        .chunks_exact_mut(FACE_STRIDE)
        .zip(set.source.chunks_exact(FACE_STRIDE));

    for (face, (live, base)) in set.faces.iter().zip(chunks) {
        let delta = (face.direction * rng.uniform(max_shift)).to_array();
        for (slot, (out, from)) in live.iter_mut().zip(base).enumerate() {
            *out = from + delta[slot % 3];
        }
    }

    Ok(())
}
