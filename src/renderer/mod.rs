//! Rendering module
//!
//! Turns a [`GameState`](crate::sim::GameState) into a flat draw list in
//! screen pixels. Rasterization, image decoding and font shaping are done by
//! the host.

pub mod hud;
pub mod scene;

pub use hud::{TextLine, hud_lines};
pub use scene::{Scene, SpriteDraw, build_scene};
