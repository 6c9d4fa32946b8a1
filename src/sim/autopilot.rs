//! Idle/demo mode - a scripted player
//!
//! Clicks the capybara at a steady rate. During a mandarin rain it drags each
//! mandarin onto the box, then carries the full box to the capybara. Every
//! drag takes three ticks: press on the body, move to the destination,
//! release.

use glam::Vec2;

use super::physical::BodyId;
use super::sprite::Screen;
use super::state::GameState;
use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    Idle,
    /// Pressed on `body`, next tick move it so its origin lands on `destination`
    Carry { body: BodyId, destination: Vec2 },
    /// Let go at `at`
    Release { at: Vec2 },
}

/// Produces one [`TickInput`] per tick from the current state
#[derive(Debug, Clone)]
pub struct Autopilot {
    click_interval: u64,
    ticks: u64,
    plan: Plan,
}

impl Default for Autopilot {
    /// Six clicks per second at 60 Hz
    fn default() -> Self {
        Self::new(10)
    }
}

impl Autopilot {
    /// Click the capybara every `click_interval` ticks (at least 1)
    pub fn new(click_interval: u64) -> Self {
        Self {
            click_interval: click_interval.max(1),
            ticks: 0,
            plan: Plan::Idle,
        }
    }

    pub fn next_input(&mut self, state: &GameState, screen: Screen) -> TickInput {
        self.ticks += 1;
        let mut input = TickInput::idle(screen);

        if !state.rain.in_progress() {
            self.plan = Plan::Idle;
            if self.ticks % self.click_interval == 0 {
                input.pointer = state.capybara.center();
                input.pointer_pressed = true;
            }
            return input;
        }

        match self.plan {
            Plan::Idle => {
                let rain = &state.rain;
                let target = if rain.is_box_full() {
                    Some((rain.mandarin_box(), state.capybara.center()))
                } else {
                    rain.mandarins()
                        .first()
                        .map(|m| (m, rain.mandarin_box().sprite.pos))
                };
                if let Some((body, destination)) = target {
                    input.pointer = body.sprite.center();
                    input.pointer_pressed = true;
                    self.plan = Plan::Carry {
                        body: body.id,
                        destination,
                    };
                }
            }
            Plan::Carry { body, destination } => match state.rain.body(body) {
                Some(held) if held.sprite.dragged => {
                    // Grabbed at the centre, so aim the centre
                    input.pointer = destination + held.sprite.real_size() / 2.0;
                    self.plan = Plan::Release { at: input.pointer };
                }
                _ => {
                    // Missed or grabbed something else; drop whatever is held
                    input.pointer_released = true;
                    self.plan = Plan::Idle;
                }
            },
            Plan::Release { at } => {
                input.pointer = at;
                input.pointer_released = true;
                self.plan = Plan::Idle;
            }
        }

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::persistence::SaveData;
    use crate::settings::Config;
    use crate::sim::tick::tick;

    #[test]
    fn test_clicks_at_interval() {
        let screen = Screen::new(800.0, 600.0);
        let mut state = GameState::new(SaveData::default(), Config::default(), Assets::default(), 9);
        let mut pilot = Autopilot::new(4);
        for _ in 0..40 {
            let input = pilot.next_input(&state, screen);
            tick(&mut state, &input);
        }
        assert_eq!(state.save.times_clicked, 10);
    }

    #[test]
    fn test_plays_a_full_mandarin_rain() {
        let screen = Screen::new(800.0, 600.0);
        let save = SaveData {
            times_clicked: 99,
            ..SaveData::default()
        };
        let mut state = GameState::new(save, Config::default(), Assets::default(), 2024);
        let mut pilot = Autopilot::new(5);

        let mut started = false;
        let mut completed = false;
        for _ in 0..600 {
            let input = pilot.next_input(&state, screen);
            tick(&mut state, &input);
            started |= state.rain.in_progress();
            if state.sounds().any(|s| s == crate::audio::SoundEffect::RainCompleted) {
                completed = true;
                break;
            }
        }
        assert!(started);
        assert!(completed);
        assert!(state.rain.is_idle());
        assert!(state.strokes.is_empty());
    }
}
