//! The dome shell: base solid, per-face deformation, and baked colors.
//!
//! Built once by [`DomeMesh::build`] and read-only afterwards.

pub mod faces;
pub mod lighting;
pub mod mesh;
mod types;

pub use faces::{Face, FaceSet, FACE_STRIDE};
pub use lighting::{LightRig, PointLight};
pub use types::DomeVertex;

use geodome_common::{ConfigError, GeometryError};
use geodome_config::colors::parse_color;
use geodome_config::DomeConfig;
use glam::Vec3;
use tracing::{debug, info};

use crate::random::UniformSource;

/// Everything needed to build a [`DomeMesh`], in renderer units.
#[derive(Debug, Clone, PartialEq)]
pub struct DomeSettings {
    pub detail: u32,
    pub radius: f32,
    pub max_shift: f32,
    pub face_scale: f32,
    pub rig: LightRig,
}

impl DomeSettings {
    /// Validate `config` and convert its shape and light sections.
    pub fn from_config(config: &DomeConfig) -> Result<Self, ConfigError> {
        geodome_config::validation::validate(config)?;

        let lights = config
            .lights
            .iter()
            .map(|light| -> Result<PointLight, ConfigError> {
                let color = parse_color(&light.color)?.to_rgb_f32();
                let position = light.position.map(|c| c as f32);
                Ok(PointLight::new(color, position))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let default_color =
            Vec3::from_array(parse_color(&config.falloff.default_color)?.to_rgb_f32());
        let rig = LightRig::new(
            lights,
            config.falloff.near as f32,
            config.falloff.far as f32,
            default_color,
        )?;

        Ok(Self {
            detail: config.shape.detail,
            radius: config.shape.radius as f32,
            max_shift: config.shape.max_shift as f32,
            face_scale: config.shape.face_scale as f32,
            rig,
        })
    }
}

/// Deformed, color-baked dome geometry.
///
/// `positions` and `colors` are parallel flat buffers, 9 floats per face.
#[derive(Debug, Clone)]
pub struct DomeMesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
    faces: Vec<Face>,
}

impl DomeMesh {
    /// Generate, scale, snapshot, skew, and bake.
    ///
    /// Lighting uses the original face centroids, so the random skew does
    /// not change any color.
    pub fn build(
        settings: &DomeSettings,
        rng: &mut impl UniformSource,
    ) -> Result<Self, GeometryError> {
        let mut positions = mesh::generate(settings.radius, settings.detail)?;
        let set = faces::extract_and_scale(&mut positions, settings.face_scale)?;
        faces::skew(&mut positions, &set, settings.max_shift, rng)?;
        let colors = settings.rig.bake(&set.faces);

        let dome = Self {
            positions,
            colors,
            faces: set.faces,
        };
        dome.check_consistency()?;

        info!(
            detail = settings.detail,
            faces = dome.face_count(),
            "dome mesh built"
        );
        debug!(
            radius = settings.radius,
            max_shift = settings.max_shift,
            face_scale = settings.face_scale,
            lights = settings.rig.lights().len(),
            "dome shape settings"
        );
        Ok(dome)
    }

    /// Buffer lengths must agree with each other and with the face list.
    fn check_consistency(&self) -> Result<(), GeometryError> {
        if self.positions.len() % FACE_STRIDE != 0 {
            return Err(GeometryError::BufferLength {
                len: self.positions.len(),
                expected_multiple: FACE_STRIDE,
            });
        }
        if self.positions.len() != self.colors.len() {
            return Err(GeometryError::BufferMismatch {
                positions: self.positions.len(),
                colors: self.colors.len(),
            });
        }
        if self.faces.len() * FACE_STRIDE != self.positions.len() {
            return Err(GeometryError::FaceCount {
                faces: self.faces.len(),
                expected: self.positions.len() / FACE_STRIDE,
            });
        }
        Ok(())
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Interleave positions and colors for upload.
    pub fn vertices(&self) -> Vec<DomeVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| DomeVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}
