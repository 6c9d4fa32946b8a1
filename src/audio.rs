//! Sound effect trigger points
//!
//! The core only decides *when* a sound plays. Decoding and mixing belong to
//! the host, which maps each effect to the file named by
//! [`SoundEffect::file_name`] and plays it at the configured volume.

use serde::{Deserialize, Serialize};

use crate::consts::VOLUME_STEP;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Capybara clicked or tapped
    Click,
    /// Level reached
    LevelUp,
    /// Every mandarin of the round is in the box
    BoxFull,
    /// A mandarin landed in the box
    Collect,
    /// Box delivered to the capybara
    RainCompleted,
    /// Menu navigation (no menu yet, kept for the asset set)
    MenuSwitch,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 6] = [
        SoundEffect::Click,
        SoundEffect::LevelUp,
        SoundEffect::BoxFull,
        SoundEffect::Collect,
        SoundEffect::RainCompleted,
        SoundEffect::MenuSwitch,
    ];

    /// Symbolic key used by audio backends
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::Click => "woop",
            SoundEffect::LevelUp => "levelup",
            SoundEffect::BoxFull => "mandarin_box_full",
            SoundEffect::Collect => "orange_put",
            SoundEffect::RainCompleted => "mandarin_rain_completed",
            SoundEffect::MenuSwitch => "menu_switch",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.wav", self.key())
    }
}

/// Direction of a volume key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStep {
    Up,
    Down,
}

/// Apply one volume step, clamped to [0, 1].
///
/// The result is rounded to two decimals so repeated steps land exactly on
/// 0.0 and 1.0 instead of drifting.
pub fn step_volume(volume: f64, step: VolumeStep) -> f64 {
    let delta = match step {
        VolumeStep::Up => VOLUME_STEP,
        VolumeStep::Down => -VOLUME_STEP,
    };
    let stepped = ((volume + delta) * 100.0).round() / 100.0;
    stepped.clamp(0.0, 1.0)
}

/// Volume as a whole percentage for display
pub fn volume_percent(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_steps_clamp_at_bounds() {
        let mut v = 1.0;
        v = step_volume(v, VolumeStep::Up);
        assert_eq!(v, 1.0);
        for _ in 0..5 {
            v = step_volume(v, VolumeStep::Down);
        }
        assert_eq!(v, 0.0);
        v = step_volume(v, VolumeStep::Down);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_volume_from_out_of_range_value_is_clamped() {
        assert_eq!(step_volume(1.7, VolumeStep::Down), 1.0);
        assert_eq!(step_volume(-3.0, VolumeStep::Up), 0.0);
    }

    #[test]
    fn test_volume_percent() {
        assert_eq!(volume_percent(0.6), 60);
        assert_eq!(volume_percent(1.0), 100);
    }

    #[test]
    fn test_sound_file_names() {
        assert_eq!(SoundEffect::Collect.file_name(), "orange_put.wav");
        assert_eq!(SoundEffect::ALL.len(), 6);
    }
}
