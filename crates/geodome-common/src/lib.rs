pub mod errors;
pub mod types;

pub use errors::{ConfigError, GeodomeError, GeometryError};
pub use types::{Color, Size};
