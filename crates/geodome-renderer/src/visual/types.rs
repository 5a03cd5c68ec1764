//! Visual trait and renderer seam.

use geodome_common::Size;
use glam::Mat4;

use crate::camera::CameraPose;
use crate::shell::DomeMesh;

/// Something a host window can mount and drive.
pub trait Visual {
    type Error;

    /// Advance animation by `delta_ms` and redraw. `elapsed_ms` is the
    /// host's running clock.
    fn advance(&mut self, delta_ms: f64, elapsed_ms: f64) -> Result<(), Self::Error>;

    /// Update projection and output size, then redraw.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Draw the current state without advancing time.
    fn render(&mut self) -> Result<(), Self::Error>;
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct DomeFrame<'a> {
    pub mesh: &'a DomeMesh,
    pub pose: CameraPose,
    pub view_projection: Mat4,
}

/// The drawing backend behind a visual.
pub trait SceneRenderer {
    type Error;

    /// Resize the output surface.
    fn set_size(&mut self, size: Size);

    fn draw(&mut self, frame: &DomeFrame<'_>) -> Result<(), Self::Error>;
}
