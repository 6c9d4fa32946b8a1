//! HUD text lines

use glam::Vec2;
use serde::Serialize;

use crate::audio::volume_percent;
use crate::consts::HUD_MARGIN_X;
use crate::sim::GameState;

/// A line of text; `position.y` is the baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub text: String,
    pub position: Vec2,
}

/// Points and level at the top left, clicks and volume at the bottom left
pub fn hud_lines(state: &GameState, line_height: f32) -> Vec<TextLine> {
    let bottom = state.screen.height;
    let line = |text: String, y: f32| TextLine {
        text,
        position: Vec2::new(HUD_MARGIN_X, y),
    };

    vec![
        line(format!("Points: {}", state.save.points), line_height),
        line(
            format!("Level: {} (+{})", state.save.level, state.points_to_next_level()),
            line_height * 2.0,
        ),
        line(
            format!("Clicks: {}", state.save.times_clicked),
            bottom - line_height * 2.0,
        ),
        line(
            format!("Volume: {}% (← or →)", volume_percent(state.config.volume)),
            bottom - line_height,
        ),
    ]
}
