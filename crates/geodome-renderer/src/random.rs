//! Injected randomness and interpolation.
//!
//! Geometry code never reaches for a global RNG: it takes a
//! [`UniformSource`], so tests can replay a fixed sequence while the app
//! passes a seeded `StdRng`.

/// A source of uniformly distributed scalars.
pub trait UniformSource {
    /// Draw from `[0, max)`. Returns `0.0` when `max` is zero.
    fn uniform(&mut self, max: f32) -> f32;
}

impl<R: rand::Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, max: f32) -> f32 {
        // gen::<f32>() is in [0, 1), so a zero bound is fine here
        // where gen_range(0.0..0.0) would panic.
        self.gen::<f32>() * max
    }
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
