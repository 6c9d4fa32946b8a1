//! Drawable sprites, screen clamping and the squish/bounce animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::Image;
use crate::consts::{BOUNCE_LIMIT, BOUNCE_STEP, SQUISH_DECAY, SQUISH_STEP};

/// Current drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

impl Screen {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }
}

/// Procedural animation channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    /// Stretch added to the x scale and removed from the y scale
    pub squish: f32,
    /// Idle rotation (radians)
    pub theta: f32,
    /// Whether theta is currently increasing
    pub bounce_up: bool,
}

impl Default for AnimationData {
    fn default() -> Self {
        Self {
            squish: 0.0,
            theta: 0.0,
            bounce_up: true,
        }
    }
}

impl AnimationData {
    /// Kick the squish channel (on click)
    pub fn squish(&mut self) {
        self.squish += SQUISH_STEP;
    }

    /// Advance both channels by one tick
    pub fn step(&mut self) {
        if self.theta >= BOUNCE_LIMIT {
            self.bounce_up = false;
        } else if self.theta <= -BOUNCE_LIMIT {
            self.bounce_up = true;
        }

        if self.squish > 0.0 {
            self.squish = (self.squish - SQUISH_DECAY).max(0.0);
        }

        if self.bounce_up {
            self.theta += BOUNCE_STEP;
        } else {
            self.theta -= BOUNCE_STEP;
        }
    }
}

/// A positioned, scaled, rotated image
#[derive(Debug, Clone)]
pub struct Sprite {
    pub image: Image,
    /// Top-left corner in screen pixels
    pub pos: Vec2,
    pub scale: f32,
    pub animation: AnimationData,
    /// Held by an active stroke
    pub dragged: bool,
}

impl Sprite {
    pub fn new(image: Image) -> Self {
        Self {
            image,
            pos: Vec2::ZERO,
            scale: 1.0,
            animation: AnimationData::default(),
            dragged: false,
        }
    }

    /// Swap the image, keeping position, scale and animation
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
    }

    /// Image size with the scale applied
    pub fn real_size(&self) -> Vec2 {
        self.image.size * self.scale
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.real_size() / 2.0
    }

    /// Inclusive hit test against the scaled bounding box
    pub fn is_in(&self, point: Vec2) -> bool {
        let max = self.pos + self.real_size();
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }

    /// Move to `pos`, keeping the scaled box inside the screen.
    ///
    /// Each axis is pinned to the far edge first and then to zero, so a
    /// sprite larger than the screen sits at the origin.
    pub fn move_to(&mut self, pos: Vec2, screen: Screen) {
        let size = self.real_size();
        self.pos = Vec2::new(
            pos.x.min(screen.width - size.x).max(0.0),
            pos.y.min(screen.height - size.y).max(0.0),
        );
    }
}
