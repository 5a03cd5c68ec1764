//! Geodesic dome visual: baked mesh + orbit camera + renderer.

use geodome_common::{GeodomeError, Size};
use geodome_config::DomeConfig;
use tracing::debug;

use super::types::{DomeFrame, SceneRenderer, Visual};
use crate::camera::{OrbitCamera, PerspectiveProjection};
use crate::random::UniformSource;
use crate::shell::{DomeMesh, DomeSettings};

/// The dome visual. Owns its geometry for its whole lifetime; only the
/// camera changes after construction.
pub struct GeodesicDome<R> {
    mesh: DomeMesh,
    camera: OrbitCamera,
    projection: PerspectiveProjection,
    renderer: R,
}

impl<R: SceneRenderer> GeodesicDome<R> {
    pub fn new(
        mesh: DomeMesh,
        camera: OrbitCamera,
        projection: PerspectiveProjection,
        renderer: R,
    ) -> Self {
        Self {
            mesh,
            camera,
            projection,
            renderer,
        }
    }

    /// Build the dome from config and hand the baked mesh to
    /// `make_renderer` for upload.
    ///
    /// The camera start phase is drawn from `rng` before the face skews.
    pub fn from_config<F>(
        config: &DomeConfig,
        rng: &mut impl UniformSource,
        size: Size,
        make_renderer: F,
    ) -> Result<Self, GeodomeError>
    where
        F: FnOnce(&DomeMesh) -> Result<R, GeodomeError>,
    {
        let settings = DomeSettings::from_config(config)?;
        let camera = OrbitCamera::from_config(&config.camera, rng);
        let mesh = DomeMesh::build(&settings, rng)?;
        let projection = PerspectiveProjection::from_config(&config.camera, size);

        let mut renderer = make_renderer(&mesh)?;
        renderer.set_size(size);

        Ok(Self::new(mesh, camera, projection, renderer))
    }

    pub fn mesh(&self) -> &DomeMesh {
        &self.mesh
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn projection(&self) -> &PerspectiveProjection {
        &self.projection
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The frame the renderer would draw right now.
    pub fn frame(&self) -> DomeFrame<'_> {
        let pose = self.camera.pose();
        DomeFrame {
            mesh: &self.mesh,
            pose,
            view_projection: self.projection.view_projection(&pose),
        }
    }
}

impl<R: SceneRenderer> Visual for GeodesicDome<R> {
    type Error = R::Error;

    fn advance(&mut self, delta_ms: f64, _elapsed_ms: f64) -> Result<(), Self::Error> {
        self.camera.advance(delta_ms);
        self.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error> {
        if width == 0 || height == 0 {
            debug!(width, height, "ignoring zero-sized resize");
            return Ok(());
        }
        self.projection.set_aspect(width, height);
        self.renderer.set_size(Size::new(width, height));
        self.render()
    }

    fn render(&mut self) -> Result<(), Self::Error> {
        let pose = self.camera.pose();
        let frame = DomeFrame {
            mesh: &self.mesh,
            pose,
            view_projection: self.projection.view_projection(&pose),
        };
        self.renderer.draw(&frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Records what the dome asks of its renderer.
    #[derive(Default)]
    struct RecordingRenderer {
        size: Option<Size>,
        draws: usize,
        poses: Vec<CameraPose>,
        positions_seen: Vec<Vec<f32>>,
    }

    impl SceneRenderer for RecordingRenderer {
        type Error = std::convert::Infallible;

        fn set_size(&mut self, size: Size) {
            self.size = Some(size);
        }

        fn draw(&mut self, frame: &DomeFrame<'_>) -> Result<(), Self::Error> {
            self.draws += 1;
            self.poses.push(frame.pose);
            self.positions_seen.push(frame.mesh.positions().to_vec());
            Ok(())
        }
    }

    fn dome() -> GeodesicDome<RecordingRenderer> {
        let mut config = DomeConfig::default();
        config.shape.detail = 1;
        config.camera.start_phase = Some(0.0);
        GeodesicDome::from_config(
            &config,
            &mut StdRng::seed_from_u64(5),
            Size::new(1280, 800),
            |_| Ok(RecordingRenderer::default()),
        )
        .unwrap()
    }

    #[test]
    fn construction_sizes_the_renderer_without_drawing() {
        let dome = dome();
        assert_eq!(dome.renderer().size, Some(Size::new(1280, 800)));
        assert_eq!(dome.renderer().draws, 0);
        assert_eq!(dome.mesh().face_count(), 80);
    }

    #[test]
    fn advance_moves_the_camera_and_draws() {
        let mut dome = dome();
        dome.advance(16.0, 16.0).unwrap();
        dome.advance(16.0, 32.0).unwrap();
        assert!((dome.camera().elapsed() - 0.032).abs() < 1e-12);
        assert_eq!(dome.renderer().draws, 2);
        assert_ne!(dome.renderer().poses[0], dome.renderer().poses[1]);
    }

    #[test]
    fn resize_updates_aspect_and_output_size() {
        let mut dome = dome();
        let colors_before = dome.mesh().colors().to_vec();
        let positions_before = dome.mesh().positions().to_vec();

        dome.resize(800, 600).unwrap();

        assert!((dome.projection().aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(dome.renderer().size, Some(Size::new(800, 600)));
        assert_eq!(dome.renderer().draws, 1);
        assert_eq!(dome.mesh().colors(), colors_before.as_slice());
        assert_eq!(dome.mesh().positions(), positions_before.as_slice());
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut dome = dome();
        dome.resize(0, 0).unwrap();
        assert_eq!(dome.renderer().size, Some(Size::new(1280, 800)));
        assert_eq!(dome.renderer().draws, 0);
    }

    #[test]
    fn frames_never_touch_the_baked_buffers() {
        let mut dome = dome();
        for _ in 0..5 {
            dome.advance(1000.0, 0.0).unwrap();
        }
        let seen = &dome.renderer().positions_seen;
        assert!(seen.iter().all(|p| p == &seen[0]));
    }

    #[test]
    fn frame_matches_camera_and_projection() {
        let dome = dome();
        let frame = dome.frame();
        assert_eq!(frame.pose, dome.camera().pose());
        assert_eq!(
            frame.view_projection,
            dome.projection().view_projection(&frame.pose)
        );
    }

    #[test]
    fn invalid_config_fails_before_the_renderer_is_built() {
        let mut config = DomeConfig::default();
        config.lights.clear();
        let mut built = false;
        let result = GeodesicDome::from_config(
            &config,
            &mut StdRng::seed_from_u64(1),
            Size::new(800, 600),
            |_| {
                built = true;
                Ok(RecordingRenderer::default())
            },
        );
        assert!(matches!(result, Err(GeodomeError::Config(_))));
        assert!(!built);
    }
}
