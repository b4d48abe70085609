//! WebGPU rendering module
//!
//! Draws the pong court as a per-frame vertex buffer of coloured triangles.
//! The other pages are plain DOM and never touch the canvas.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
