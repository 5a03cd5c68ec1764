//! Geodesic dome generation and rendering.
//!
//! The dome is built once ([`DomeMesh::build`]): a subdivided icosahedron is
//! split into faces, each face shrinks toward its centroid, gets pushed
//! along its outward direction by a random amount, and is flat-colored by
//! a baked point-light rig. Per frame only the [`OrbitCamera`] moves.

pub mod camera;
pub mod gpu;
pub mod perf;
pub mod pipeline;
pub mod random;
pub mod shell;
pub mod visual;

pub use camera::{CameraPose, OrbitCamera, PerspectiveProjection};
pub use gpu::{GpuContext, RendererError};
pub use perf::{FrameTick, FrameTimer};
pub use random::UniformSource;
pub use shell::{DomeMesh, DomeSettings};
pub use visual::{DomeFrame, GeodesicDome, GpuSceneRenderer, SceneRenderer, Visual};
