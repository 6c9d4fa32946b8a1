//! Game state owned by the game loop
//!
//! Everything the tick mutates lives in one [`GameState`] value: persistent
//! save/config records, the capybara, the current mandarin rain round and the
//! active drag strokes.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::capybara::Capybara;
use super::rain::MandarinRain;
use super::sprite::Screen;
use super::stroke::Stroke;
use crate::assets::{Assets, Image, ImageId};
use crate::audio::SoundEffect;
use crate::consts::RAIN_MANDARIN_RANGE;
use crate::persistence::SaveData;
use crate::points_for_level;
use crate::settings::Config;

/// Something the host should act on after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Play a sound at the configured volume
    Sound(SoundEffect),
    /// Switch between windowed and fullscreen
    ToggleFullscreen,
    /// Apply a new volume to every audio channel
    VolumeChanged(f64),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub save: SaveData,
    pub config: Config,
    pub capybara: Capybara,
    pub background: Image,
    /// Current bonus round (idle until triggered)
    pub rain: MandarinRain,
    /// Drags in progress
    pub strokes: Vec<Stroke>,
    /// Screen size seen by the last tick
    pub screen: Screen,
    /// Ticks since passive income was last paid
    pub passive_ticker: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    pub(super) assets: Assets,
    pub(super) rng: Pcg32,
    /// Click count that started the latest round
    pub(super) rain_trigger_clicks: Option<u64>,
}

impl GameState {
    /// Create a game state from loaded records. `seed` drives all randomness.
    pub fn new(save: SaveData, config: Config, assets: Assets, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rain = MandarinRain::new(RAIN_MANDARIN_RANGE, &mut rng, &assets);
        Self {
            save,
            config,
            capybara: Capybara::new(&assets),
            background: assets.image(ImageId::Background),
            rain,
            strokes: Vec::new(),
            screen: Screen::default(),
            passive_ticker: 0,
            time_ticks: 0,
            events: Vec::new(),
            assets,
            rng,
            rain_trigger_clicks: None,
        }
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Sounds requested by the last tick, in order
    pub fn sounds(&self) -> impl Iterator<Item = SoundEffect> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Sound(effect) => Some(*effect),
            _ => None,
        })
    }

    /// Take the events of the last tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Points still needed for the next level (0 once reached)
    pub fn points_to_next_level(&self) -> u64 {
        points_for_level(self.save.level.saturating_add(1)).saturating_sub(self.save.points)
    }

    pub(super) fn play(&mut self, effect: SoundEffect) {
        self.events.push(GameEvent::Sound(effect));
    }

    /// Replace the current round with a fresh idle one
    pub(super) fn reset_rain(&mut self) {
        self.rain = MandarinRain::new(RAIN_MANDARIN_RANGE, &mut self.rng, &self.assets);
        self.strokes.clear();
    }
}
