//! Capyclick - a capybara clicker game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (animation, mandarin rain physics, drags, progression)
//! - `renderer`: Draw-list generation for an external rasterizer
//! - `platform`: Browser/native platform abstraction
//! - `host`: JSON frame/event bridge for the browser page
//! - `persistence`: Versioned JSON save records and key-value stores
//! - `session`: Load on startup, flush once on shutdown

pub mod assets;
pub mod audio;
pub mod host;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use assets::{Assets, Image, ImageId};
pub use audio::SoundEffect;
pub use persistence::{PersistError, SaveData, Store};
pub use session::Session;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    use crate::sim::Mass;

    /// Logical ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Logical duration of one physics step. Independent of the real tick length.
    pub const SIM_DT: f32 = 0.05;

    /// Downward acceleration applied to every falling body
    pub const GRAVITY: f32 = 9.81;
    /// Velocity kept by a mandarin after hitting a wall
    pub const MANDARIN_RESTITUTION: f32 = 0.4;
    /// Velocity kept by the box after hitting a wall
    pub const BOX_RESTITUTION: f32 = 0.3;
    pub const MANDARIN_MASS: Mass = Mass::expect_const(10.0);
    pub const BOX_MASS: Mass = Mass::expect_const(5.5);
    /// Height at which rain objects spawn
    pub const SPAWN_Y: f32 = 10.0;

    /// Sprite scale = screen width / native width / divisor
    pub const CAPYBARA_SCALE_DIVISOR: f32 = 2.5;
    pub const MANDARIN_SCALE_DIVISOR: f32 = 11.5;
    pub const BOX_SCALE_DIVISOR: f32 = 6.0;

    /// Squish added per click
    pub const SQUISH_STEP: f32 = 0.5;
    /// Squish removed per tick
    pub const SQUISH_DECAY: f32 = 0.05;
    /// Idle rotation change per tick (radians)
    pub const BOUNCE_STEP: f32 = 0.001;
    /// Idle rotation amplitude (radians)
    pub const BOUNCE_LIMIT: f32 = 0.03;

    pub const VOLUME_STEP: f64 = 0.2;

    /// A mandarin rain starts every this many clicks
    pub const RAIN_CLICK_INTERVAL: u64 = 100;
    /// Mandarins per round, half-open range
    pub const RAIN_MANDARIN_RANGE: (u16, u16) = (3, 8);
    /// Reward = points for the next level / divisor
    pub const RAIN_REWARD_DIVISOR: u64 = 5;
    /// Delivery radius = screen width / divisor
    pub const DELIVERY_RADIUS_DIVISOR: f32 = 7.0;

    /// HUD text left margin
    pub const HUD_MARGIN_X: f32 = 10.0;
}

/// Points required to be considered of `level`, saturating at `u64::MAX`
#[inline]
pub fn points_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    25u64.saturating_mul(level).saturating_mul(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_points_for_level_table() {
        assert_eq!(points_for_level(0), 0);
        assert_eq!(points_for_level(1), 25);
        assert_eq!(points_for_level(2), 100);
        assert_eq!(points_for_level(10), 2500);
    }

    #[test]
    fn test_points_for_level_saturates() {
        assert_eq!(points_for_level(900_000_000), u64::MAX);
        assert_eq!(points_for_level(u32::MAX), u64::MAX);
        // Largest level whose threshold still fits
        assert_eq!(points_for_level(858_993_459), 25 * 858_993_459u64 * 858_993_459);
    }

    proptest! {
        #[test]
        fn points_for_level_is_quadratic(n in 0u32..1_000_000) {
            let n64 = u64::from(n);
            prop_assert_eq!(points_for_level(n), 25 * n64 * n64);
        }

        #[test]
        fn points_for_level_is_monotonic(n in 0u32..u32::MAX) {
            prop_assert!(points_for_level(n) <= points_for_level(n + 1));
        }
    }
}
