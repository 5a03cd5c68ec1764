//! The mounted visual: what a host drives once per frame.

mod dome;
mod gpu_renderer;
mod types;

pub use dome::GeodesicDome;
pub use gpu_renderer::GpuSceneRenderer;
pub use types::{DomeFrame, SceneRenderer, Visual};
