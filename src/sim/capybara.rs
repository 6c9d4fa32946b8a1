//! The clickable capybara

use glam::Vec2;

use super::sprite::{Screen, Sprite};
use crate::assets::{Assets, ImageId};
use crate::consts::CAPYBARA_SCALE_DIVISOR;

/// Image tier for a level. Tier 3 art covers every level from 3 up.
pub fn tier_for_level(level: u32) -> ImageId {
    match level {
        0 | 1 => ImageId::CapybaraTier1,
        2 => ImageId::CapybaraTier2,
        _ => ImageId::CapybaraTier3,
    }
}

#[derive(Debug, Clone)]
pub struct Capybara {
    pub sprite: Sprite,
}

impl Capybara {
    pub fn new(assets: &Assets) -> Self {
        Self {
            sprite: Sprite::new(assets.image(ImageId::CapybaraTier1)),
        }
    }

    /// Click or tap reaction. Score changes belong to the game loop.
    pub fn activate(&mut self) {
        self.sprite.animation.squish();
    }

    /// Advance the animation and lay the sprite out for this tick
    pub fn update(&mut self, level: u32, screen: Screen, assets: &Assets) {
        self.sprite.animation.step();

        let tier = tier_for_level(level);
        if self.sprite.image.id != tier {
            self.sprite.set_image(assets.image(tier));
        }

        self.sprite.scale = screen.width / self.sprite.image.width() / CAPYBARA_SCALE_DIVISOR;
        let centered = screen.center() - self.sprite.real_size() / 2.0;
        self.sprite.move_to(centered, screen);
    }

    /// Centre of the unsquished bounding box
    pub fn center(&self) -> Vec2 {
        self.sprite.center()
    }

    /// Render scale with squish applied: wider and shorter while squished
    pub fn draw_scale(&self) -> Vec2 {
        let squish = self.sprite.animation.squish;
        Vec2::new(self.sprite.scale + squish, self.sprite.scale - squish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_level() {
        assert_eq!(tier_for_level(1), ImageId::CapybaraTier1);
        assert_eq!(tier_for_level(2), ImageId::CapybaraTier2);
        assert_eq!(tier_for_level(3), ImageId::CapybaraTier3);
        assert_eq!(tier_for_level(42), ImageId::CapybaraTier3);
    }

    #[test]
    fn test_update_centers_on_screen() {
        let assets = Assets::uniform(Vec2::new(100.0, 80.0));
        let screen = Screen::new(500.0, 400.0);
        let mut capy = Capybara::new(&assets);
        capy.update(1, screen, &assets);

        assert!((capy.sprite.scale - 2.0).abs() < 1e-6);
        assert!((capy.center() - screen.center()).length() < 1e-3);
    }

    #[test]
    fn test_activate_only_squishes() {
        let assets = Assets::default();
        let mut capy = Capybara::new(&assets);
        let pos = capy.sprite.pos;
        capy.activate();
        assert!(capy.sprite.animation.squish > 0.0);
        assert_eq!(capy.sprite.pos, pos);

        capy.sprite.scale = 2.0;
        let scale = capy.draw_scale();
        assert!(scale.x > scale.y);
    }

    #[test]
    fn test_level_swaps_image() {
        let mut assets = Assets::default();
        assets.set_size(ImageId::CapybaraTier3, Vec2::new(128.0, 128.0));
        let mut capy = Capybara::new(&assets);
        capy.update(5, Screen::default(), &assets);
        assert_eq!(capy.sprite.image.id, ImageId::CapybaraTier3);
        assert_eq!(capy.sprite.image.width(), 128.0);
    }
}
