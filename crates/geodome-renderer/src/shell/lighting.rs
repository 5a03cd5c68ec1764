//! Point-light rig and flat color baking.
//!
//! Each light contributes its full color inside `near`, the rig's default
//! color beyond `far`, and a linear blend between the two in the window.
//! A face's color is the average of all contributions at its centroid and
//! is written to all three of its vertices.

use geodome_common::ConfigError;
use glam::Vec3;

use super::faces::Face;
use crate::random::lerp;

/// A colored point light. Channels are linear RGB, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub position: Vec3,
}

impl PointLight {
    pub fn new(color: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            color: Vec3::from_array(color),
            position: Vec3::from_array(position),
        }
    }
}

/// The set of lights plus the falloff window they share.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    lights: Vec<PointLight>,
    near: f32,
    far: f32,
    default_color: Vec3,
}

impl LightRig {
    /// Build a rig. Fails on an empty light list or when `near >= far`,
    /// which would divide by zero in the falloff fraction.
    pub fn new(
        lights: Vec<PointLight>,
        near: f32,
        far: f32,
        default_color: Vec3,
    ) -> Result<Self, ConfigError> {
        if lights.is_empty() {
            return Err(ConfigError::ValidationError(
                "light rig needs at least one light".into(),
            ));
        }
        if !near.is_finite() || !far.is_finite() || near >= far {
            return Err(ConfigError::ValidationError(format!(
                "falloff near ({near}) must be less than far ({far})"
            )));
        }

        Ok(Self {
            lights,
            near,
            far,
            default_color,
        })
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn default_color(&self) -> Vec3 {
        self.default_color
    }

    /// Color one light gives to `point`.
    pub fn contribution(&self, light: &PointLight, point: Vec3) -> Vec3 {
        self.contribution_with(light, point, &lerp)
    }

    fn contribution_with<T>(&self, light: &PointLight, point: Vec3, tween: &T) -> Vec3
    where
        T: Fn(f32, f32, f32) -> f32,
    {
        let dist = light.position.distance(point);
        if dist <= self.near {
            return light.color;
        }
        if dist >= self.far {
            return self.default_color;
        }

        let t = (dist - self.near) / (self.far - self.near);
        Vec3::new(
            tween(light.color.x, self.default_color.x, t),
            tween(light.color.y, self.default_color.y, t),
            tween(light.color.z, self.default_color.z, t),
        )
    }

    /// Average of every light's contribution at `point`. Not clamped.
    pub fn color_at(&self, point: Vec3) -> Vec3 {
        self.color_at_with(point, &lerp)
    }

    fn color_at_with<T>(&self, point: Vec3, tween: &T) -> Vec3
    where
        T: Fn(f32, f32, f32) -> f32,
    {
        let sum: Vec3 = self
            .lights
            .iter()
            .map(|light| self.contribution_with(light, point, tween))
            .sum();
        sum / self.lights.len() as f32
    }

    /// Bake one flat color per face, replicated to its three vertices.
    ///
    /// The result runs parallel to the position buffer: 9 floats per face.
    pub fn bake(&self, faces: &[Face]) -> Vec<f32> {
        self.bake_with(faces, lerp)
    }

    /// [`bake`](Self::bake) with a caller-supplied interpolation in place of
    /// [`lerp`].
    pub fn bake_with<T>(&self, faces: &[Face], tween: T) -> Vec<f32>
    where
        T: Fn(f32, f32, f32) -> f32,
    {
        let mut colors = Vec::with_capacity(faces.len() * 9);
        for face in faces {
            let rgb = self.color_at_with(face.center, &tween).to_array();
            for _ in 0..3 {
                colors.extend_from_slice(&rgb);
            }
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];
    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    fn face_at(center: Vec3) -> Face {
        Face {
            center,
            direction: center.normalize_or_zero(),
        }
    }

    fn rig(lights: Vec<PointLight>, near: f32, far: f32) -> LightRig {
        LightRig::new(lights, near, far, Vec3::ZERO).unwrap()
    }

    #[test]
    fn light_on_the_face_gives_full_color() {
        let light = PointLight::new(RED, [1.0, 2.0, 3.0]);
        let rig = rig(vec![light], 0.0, 1.0);
        assert_eq!(rig.contribution(&light, light.position), light.color);
    }

    #[test]
    fn distance_exactly_at_near_gives_full_color() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let rig = rig(vec![light], 2.5, 2.7);
        assert_eq!(rig.contribution(&light, Vec3::new(2.5, 0.0, 0.0)), light.color);
    }

    #[test]
    fn distance_exactly_at_far_gives_default_color() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let rig = LightRig::new(vec![light], 2.0, 4.0, Vec3::splat(0.25)).unwrap();
        assert_eq!(
            rig.contribution(&light, Vec3::new(0.0, 4.0, 0.0)),
            Vec3::splat(0.25)
        );
    }

    #[test]
    fn beyond_far_gives_default_color() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let rig = LightRig::new(vec![light], 2.0, 4.0, Vec3::splat(0.25)).unwrap();
        assert_eq!(rig.color_at(Vec3::new(0.0, 0.0, 10.0)), Vec3::splat(0.25));
    }

    #[test]
    fn inside_the_window_blends_linearly() {
        let light = PointLight::new([1.0, 0.5, 0.0], [0.0, 0.0, 0.0]);
        let rig = rig(vec![light], 2.0, 4.0);
        // dist 3 -> t = 0.5
        let c = rig.contribution(&light, Vec3::new(3.0, 0.0, 0.0));
        assert!((c - Vec3::new(0.5, 0.25, 0.0)).length() < 1e-6);
    }

    #[test]
    fn identical_lights_average_to_one_light() {
        let light = PointLight::new([0.2, 0.4, 0.6], [0.0, 1.0, 0.0]);
        let rig = rig(vec![light; 4], 0.5, 1.0);
        let c = rig.color_at(light.position);
        assert!((c - light.color).length() < 1e-6, "got {c:?}");
    }

    #[test]
    fn distinct_lights_are_averaged_not_summed() {
        let red = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let green = PointLight::new(GREEN, [0.0, 0.0, 0.0]);
        let rig = rig(vec![red, green], 1.0, 2.0);
        assert_eq!(rig.color_at(Vec3::ZERO), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn summation_order_does_not_matter() {
        let a = PointLight::new(RED, [0.5, 0.2, -0.4]);
        let b = PointLight::new(GREEN, [-0.5, 0.0, -0.4]);
        let point = Vec3::new(0.1, 0.1, 0.1);
        let ab = rig(vec![a, b], 0.3, 1.0).color_at(point);
        let ba = rig(vec![b, a], 0.3, 1.0).color_at(point);
        assert!((ab - ba).length() < 1e-6);
    }

    #[test]
    fn bake_replicates_the_face_color_three_times() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let rig = rig(vec![light], 1.0, 2.0);
        let faces = [face_at(Vec3::new(0.5, 0.0, 0.0)), face_at(Vec3::new(5.0, 0.0, 0.0))];

        let colors = rig.bake(&faces);
        assert_eq!(colors.len(), 18);
        assert_eq!(&colors[0..9], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert!(colors[9..18].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn bake_with_uses_the_injected_tween() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        let rig = rig(vec![light], 1.0, 3.0);
        let faces = [face_at(Vec3::new(2.0, 0.0, 0.0))];

        // Snap straight to the target inside the window.
        let colors = rig.bake_with(&faces, |_, b, _| b);
        assert!(colors.iter().all(|&c| c == 0.0));

        let colors = rig.bake(&faces);
        assert!((colors[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_rig_is_rejected() {
        let err = LightRig::new(Vec::new(), 0.0, 1.0, Vec3::ZERO).unwrap_err();
        assert!(err.to_string().contains("at least one light"));
    }

    #[test]
    fn near_not_below_far_is_rejected() {
        let light = PointLight::new(RED, [0.0, 0.0, 0.0]);
        assert!(LightRig::new(vec![light], 2.7, 2.7, Vec3::ZERO).is_err());
        assert!(LightRig::new(vec![light], 3.0, 2.7, Vec3::ZERO).is_err());
        assert!(LightRig::new(vec![light], f32::NAN, 2.7, Vec3::ZERO).is_err());
    }
}
