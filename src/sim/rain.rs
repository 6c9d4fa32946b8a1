//! Mandarin rain bonus round
//!
//! Mandarins and a box drop from the top of the screen. The player drags
//! mandarins into the box and then carries the full box to the capybara for
//! a points reward.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::step_body;
use super::physical::{BodyId, PhysicalBody};
use super::sprite::{Screen, Sprite};
use crate::assets::{Assets, Image, ImageId};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::persistence::SaveData;
use crate::points_for_level;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainPhase {
    /// Waiting for the click trigger
    Idle,
    /// Bodies are falling and can be dragged
    InProgress,
    /// Box delivered, reward paid
    Completed,
}

/// Box image for a fill state
fn box_image_id(in_box: u16, target: u16) -> ImageId {
    if in_box >= target {
        ImageId::BoxFull
    } else if in_box > 0 {
        ImageId::BoxPartial
    } else {
        ImageId::BoxEmpty
    }
}

fn rescale(sprite: &mut Sprite, screen: Screen, divisor: f32) {
    sprite.scale = screen.width / sprite.image.width() / divisor;
}

/// Random x along the top edge that keeps the sprite on screen
fn spawn_x<R: Rng>(sprite: &Sprite, screen: Screen, rng: &mut R) -> f32 {
    let max_x = screen.width - sprite.real_size().x;
    if max_x > 0.0 { rng.random_range(0.0..max_x) } else { 0.0 }
}

/// One bonus round
#[derive(Debug, Clone)]
pub struct MandarinRain {
    phase: RainPhase,
    mandarin_box: PhysicalBody,
    /// Mandarins still falling (collected ones are dropped)
    mandarins: Vec<PhysicalBody>,
    box_images: [Image; 3],
    initial_count: u16,
    remaining: u16,
    in_box: u16,
    box_full: bool,
}

impl MandarinRain {
    /// Prepare an idle round with a mandarin count drawn from `[from, to)`
    pub fn new<R: Rng>(count_range: (u16, u16), rng: &mut R, assets: &Assets) -> Self {
        let (from, to) = count_range;
        let initial_count = if to > from {
            rng.random_range(from..to)
        } else {
            from
        };

        let mandarins = (0..initial_count)
            .map(|i| {
                let sprite = Sprite::new(assets.image(ImageId::Mandarin));
                PhysicalBody::new(BodyId(u32::from(i) + 1), sprite, MANDARIN_MASS)
            })
            .collect();

        let box_images = [
            assets.image(ImageId::BoxEmpty),
            assets.image(ImageId::BoxPartial),
            assets.image(ImageId::BoxFull),
        ];
        let mandarin_box = PhysicalBody::new(BodyId(0), Sprite::new(box_images[0]), BOX_MASS);

        Self {
            phase: RainPhase::Idle,
            mandarin_box,
            mandarins,
            box_images,
            initial_count,
            remaining: initial_count,
            in_box: 0,
            box_full: false,
        }
    }

    pub fn phase(&self) -> RainPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RainPhase::Idle
    }

    pub fn in_progress(&self) -> bool {
        self.phase == RainPhase::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.phase == RainPhase::Completed
    }

    pub fn initial_count(&self) -> u16 {
        self.initial_count
    }

    /// Mandarins not yet in the box
    pub fn remaining(&self) -> u16 {
        self.remaining
    }

    pub fn in_box(&self) -> u16 {
        self.in_box
    }

    pub fn is_box_full(&self) -> bool {
        self.box_full
    }

    pub fn mandarins(&self) -> &[PhysicalBody] {
        &self.mandarins
    }

    pub fn mandarin_box(&self) -> &PhysicalBody {
        &self.mandarin_box
    }

    /// Body with the given handle, if still simulated
    pub fn body(&self, id: BodyId) -> Option<&PhysicalBody> {
        if self.mandarin_box.id == id {
            return Some(&self.mandarin_box);
        }
        self.mandarins.iter().find(|m| m.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut PhysicalBody> {
        if self.mandarin_box.id == id {
            return Some(&mut self.mandarin_box);
        }
        self.mandarins.iter_mut().find(|m| m.id == id)
    }

    /// First body under `point`: mandarins in list order, then the box
    pub fn physical_at(&self, point: Vec2) -> Option<BodyId> {
        self.mandarins
            .iter()
            .find(|m| m.sprite.is_in(point))
            .or_else(|| self.mandarin_box.sprite.is_in(point).then_some(&self.mandarin_box))
            .map(|body| body.id)
    }

    /// Recompute every collision scale from the current screen
    fn rescale_all(&mut self, screen: Screen) {
        rescale(&mut self.mandarin_box.sprite, screen, BOX_SCALE_DIVISOR);
        for mandarin in &mut self.mandarins {
            rescale(&mut mandarin.sprite, screen, MANDARIN_SCALE_DIVISOR);
        }
    }

    /// Pick the box image for the fill state, keeping its on-screen width
    fn refresh_box_image(&mut self, screen: Screen) {
        let image = match box_image_id(self.in_box, self.initial_count) {
            ImageId::BoxFull => self.box_images[2],
            ImageId::BoxPartial => self.box_images[1],
            _ => self.box_images[0],
        };
        if self.mandarin_box.sprite.image.id != image.id {
            self.mandarin_box.sprite.set_image(image);
            rescale(&mut self.mandarin_box.sprite, screen, BOX_SCALE_DIVISOR);
        }
    }

    /// Start the round: scatter every body along the top of the screen
    pub fn start<R: Rng>(&mut self, screen: Screen, rng: &mut R) {
        if self.phase != RainPhase::Idle {
            return;
        }
        self.phase = RainPhase::InProgress;
        self.rescale_all(screen);

        for mandarin in &mut self.mandarins {
            let x = spawn_x(&mandarin.sprite, screen, rng);
            mandarin.sprite.move_to(Vec2::new(x, SPAWN_Y), screen);
        }
        let x = spawn_x(&self.mandarin_box.sprite, screen, rng);
        self.mandarin_box.sprite.move_to(Vec2::new(x, SPAWN_Y), screen);

        log::info!("Mandarin rain started with {} mandarins", self.initial_count);
    }

    /// Advance the round by one tick.
    ///
    /// `capybara_center` is the delivery target. The reward is paid into
    /// `save` and sounds are appended to `sounds`.
    pub fn update(
        &mut self,
        screen: Screen,
        capybara_center: Vec2,
        save: &mut SaveData,
        sounds: &mut Vec<SoundEffect>,
    ) {
        if self.phase != RainPhase::InProgress {
            return;
        }

        self.rescale_all(screen);

        // Mandarins are checked against the box position from the previous tick
        let box_origin = self.mandarin_box.sprite.pos;
        let box_width = self.mandarin_box.sprite.real_size().x;
        let mut collected = 0u16;
        self.mandarins.retain_mut(|mandarin| {
            step_body(mandarin, screen, MANDARIN_RESTITUTION);
            if mandarin.in_vicinity(box_origin, box_width) {
                collected += 1;
                sounds.push(SoundEffect::Collect);
                false
            } else {
                true
            }
        });
        self.in_box += collected;
        self.remaining = self.remaining.saturating_sub(collected);

        step_body(&mut self.mandarin_box, screen, BOX_RESTITUTION);
        self.refresh_box_image(screen);

        if self.in_box == self.initial_count && !self.box_full {
            self.box_full = true;
            sounds.push(SoundEffect::BoxFull);
            log::debug!("Mandarin box full");
        }

        let delivery_radius = screen.width / DELIVERY_RADIUS_DIVISOR;
        if self.box_full && self.mandarin_box.in_vicinity(capybara_center, delivery_radius) {
            let reward = points_for_level(save.level.saturating_add(1)) / RAIN_REWARD_DIVISOR;
            save.points = save.points.saturating_add(reward);
            sounds.push(SoundEffect::RainCompleted);
            self.phase = RainPhase::Completed;
            log::info!("Mandarin rain completed, rewarded {} points", reward);
        }
    }
}
