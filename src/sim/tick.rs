//! Fixed timestep simulation tick
//!
//! Core game loop that advances the game by one logical tick. Steps run in a
//! fixed order because later steps read what earlier ones wrote: the level
//! check sees this tick's click, the drag step sees this tick's press.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use super::sprite::Screen;
use super::stroke::{Stroke, StrokeSource};
use crate::audio::{SoundEffect, VolumeStep, step_volume};
use crate::consts::*;
use crate::points_for_level;
use crate::settings::WindowGeometry;

/// Identifier of a touch point, stable while the finger is down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u64);

/// An active touch point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub pos: Vec2,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drawable area this tick
    pub screen: Screen,
    /// Cursor position
    pub pointer: Vec2,
    /// Primary button went down this tick
    pub pointer_pressed: bool,
    /// Primary button went up this tick
    pub pointer_released: bool,
    /// Touch points currently down
    pub touches: Vec<Touch>,
    /// Touches that started this tick
    pub touches_pressed: Vec<TouchId>,
    /// Touches that ended this tick
    pub touches_released: Vec<TouchId>,
    /// Explicit exit command (Escape)
    pub quit: bool,
    /// Host asked to close the window
    pub close_requested: bool,
    pub toggle_fullscreen: bool,
    pub volume_up: bool,
    pub volume_down: bool,
    /// Window geometry, when the host tracks one
    pub window: Option<WindowGeometry>,
}

impl TickInput {
    /// Empty input for a screen of the given size
    pub fn idle(screen: Screen) -> Self {
        Self {
            screen,
            ..Default::default()
        }
    }

    pub fn touch_position(&self, id: TouchId) -> Option<Vec2> {
        self.touches.iter().find(|t| t.id == id).map(|t| t.pos)
    }

    /// Primary activation: a click or any new touch
    pub fn activated(&self) -> bool {
        self.pointer_pressed || !self.touches_pressed.is_empty()
    }

    fn wants_quit(&self) -> bool {
        self.quit || self.close_requested
    }
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    /// Stop the loop and flush persistent state
    Quit,
}

/// Advance the game state by one logical tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickStatus {
    state.events.clear();

    if input.wants_quit() {
        log::info!("Quit requested after {} ticks", state.time_ticks);
        return TickStatus::Quit;
    }

    state.time_ticks = state.time_ticks.saturating_add(1);
    state.screen = input.screen;

    // Window side effects are carried out by the host
    if input.toggle_fullscreen {
        state.events.push(GameEvent::ToggleFullscreen);
    }
    if let Some(geometry) = input.window {
        state.config.track_window(geometry);
    }

    handle_volume(state, input);

    let activated = input.activated();
    if activated {
        state.save.times_clicked = state.save.times_clicked.saturating_add(1);
        state.save.points = state.save.points.saturating_add(1);
        state.capybara.activate();
        state.play(SoundEffect::Click);
    }

    pay_passive_income(state);
    check_level_up(state);

    state
        .capybara
        .update(state.save.level, state.screen, &state.assets);

    if should_start_rain(state) {
        state.rain.start(state.screen, &mut state.rng);
        state.rain_trigger_clicks = Some(state.save.times_clicked);
        log::info!("Started mandarin rain at {} points", state.save.points);
    }

    if state.rain.in_progress() {
        let mut sounds = Vec::new();
        let target = state.capybara.center();
        state
            .rain
            .update(state.screen, target, &mut state.save, &mut sounds);
        state.events.extend(sounds.into_iter().map(GameEvent::Sound));
    }

    if state.rain.is_completed() {
        state.reset_rain();
    }

    update_strokes(state, input, activated);

    TickStatus::Running
}

fn handle_volume(state: &mut GameState, input: &TickInput) {
    let before = state.config.volume;
    if input.volume_down {
        state.config.volume = step_volume(state.config.volume, VolumeStep::Down);
    }
    if input.volume_up {
        state.config.volume = step_volume(state.config.volume, VolumeStep::Up);
    }
    if state.config.volume != before {
        state.events.push(GameEvent::VolumeChanged(state.config.volume));
    }
}

/// Pays once every `TICK_RATE` ticks, i.e. once per second at nominal speed
fn pay_passive_income(state: &mut GameState) {
    state.passive_ticker += 1;
    if state.passive_ticker >= TICK_RATE {
        state.passive_ticker = 0;
        state.save.points = state.save.points.saturating_add(state.save.passive_income);
    }
}

/// At most one level per tick
fn check_level_up(state: &mut GameState) {
    let Some(next) = state.save.level.checked_add(1) else {
        return;
    };
    if state.save.points >= points_for_level(next) {
        state.save.level = next;
        state.save.passive_income = state.save.passive_income.saturating_add(1);
        state.play(SoundEffect::LevelUp);
        log::info!(
            "Level {} reached, passive income {}/s",
            state.save.level,
            state.save.passive_income
        );
    }
}

fn should_start_rain(state: &GameState) -> bool {
    let clicks = state.save.times_clicked;
    state.rain.is_idle()
        && clicks > 0
        && clicks % RAIN_CLICK_INTERVAL == 0
        && state.rain_trigger_clicks != Some(clicks)
}

/// Start strokes on fresh presses, move held bodies, drop finished strokes
fn update_strokes(state: &mut GameState, input: &TickInput, activated: bool) {
    if activated && state.rain.in_progress() {
        let sources = input
            .pointer_pressed
            .then_some(StrokeSource::Pointer)
            .into_iter()
            .chain(input.touches_pressed.iter().copied().map(StrokeSource::Touch));

        for source in sources {
            let Some(at) = source.position(input) else {
                continue;
            };
            let Some(id) = state.rain.physical_at(at) else {
                continue;
            };
            if state.strokes.iter().any(|s| s.body() == id) {
                continue;
            }
            let Some(body) = state.rain.body_mut(id) else {
                continue;
            };
            if let Some(stroke) = Stroke::begin(source, body, input) {
                log::debug!("Stroke {:?} grabbed body {:?}", source, id);
                state.strokes.push(stroke);
            }
        }
    }

    let screen = state.screen;
    let rain = &mut state.rain;
    let strokes = std::mem::take(&mut state.strokes);
    state.strokes = strokes
        .into_iter()
        .filter(|stroke| {
            let Some(body) = rain.body_mut(stroke.body()) else {
                return false;
            };
            stroke.update(body, input, screen);
            body.sprite.dragged
        })
        .collect();
}
