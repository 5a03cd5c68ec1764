//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one dome, one redraw per frame.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::GeodomeApp;
