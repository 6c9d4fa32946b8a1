//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Fixed logical timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod capybara;
pub mod collision;
pub mod physical;
pub mod rain;
pub mod sprite;
pub mod state;
pub mod stroke;
pub mod tick;

pub use autopilot::Autopilot;
pub use capybara::{Capybara, tier_for_level};
pub use collision::{WallContact, bounce_off_walls, step_body};
pub use physical::{BodyId, Mass, PhysicalBody};
pub use rain::{MandarinRain, RainPhase};
pub use sprite::{AnimationData, Screen, Sprite};
pub use state::{GameEvent, GameState};
pub use stroke::{Stroke, StrokeSource};
pub use tick::{TickInput, TickStatus, Touch, TouchId, tick};
