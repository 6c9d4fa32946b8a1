//! Sprite draw list

use glam::Vec2;
use serde::{Serialize, Serializer};

use super::hud::{TextLine, hud_lines};
use crate::assets::ImageId;
use crate::sim::{GameState, Sprite};

/// One image draw.
///
/// Transform order: scale, then rotate about the image origin, then
/// translate to `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteDraw {
    /// Serialized as the image file name, which is how hosts key textures
    #[serde(serialize_with = "image_file_name")]
    pub image: ImageId,
    pub position: Vec2,
    pub scale: Vec2,
    /// Radians
    pub rotation: f32,
}

fn image_file_name<S: Serializer>(id: &ImageId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(id.file_name())
}

impl SpriteDraw {
    /// Plain draw of a sprite with its uniform scale
    pub fn of(sprite: &Sprite) -> Self {
        Self {
            image: sprite.image.id,
            position: sprite.pos,
            scale: Vec2::splat(sprite.scale),
            rotation: 0.0,
        }
    }
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Stretched over the whole screen
    pub background: SpriteDraw,
    pub sprites: Vec<SpriteDraw>,
    pub hud: Vec<TextLine>,
}

/// Build the frame for the current state. `line_height` comes from the font.
pub fn build_scene(state: &GameState, line_height: f32) -> Scene {
    let screen = state.screen;
    let background = SpriteDraw {
        image: state.background.id,
        position: Vec2::ZERO,
        scale: screen.size() / state.background.size,
        rotation: 0.0,
    };

    let capybara = &state.capybara;
    let mut sprites = vec![SpriteDraw {
        image: capybara.sprite.image.id,
        position: capybara.sprite.pos,
        scale: capybara.draw_scale(),
        rotation: capybara.sprite.animation.theta,
    }];

    if state.rain.in_progress() {
        sprites.push(SpriteDraw::of(&state.rain.mandarin_box().sprite));
        sprites.extend(state.rain.mandarins().iter().map(|m| SpriteDraw::of(&m.sprite)));
    }

    Scene {
        background,
        sprites,
        hud: hud_lines(state, line_height),
    }
}
