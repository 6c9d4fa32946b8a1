//! Bodies that take part in the mandarin rain simulation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::Sprite;
use crate::consts::{GRAVITY, SIM_DT};

/// Mass of a physical body. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Mass(f32);

impl Mass {
    pub const fn new(value: f32) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// For constants: an invalid value fails const evaluation.
    pub(crate) const fn expect_const(value: f32) -> Self {
        match Self::new(value) {
            Some(mass) => mass,
            None => panic!("mass must be positive and finite"),
        }
    }

    pub const fn get(self) -> f32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Mass {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f32::deserialize(deserializer)?;
        Mass::new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid mass {value}")))
    }
}

/// Stable handle to a body within one mandarin rain round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A sprite with velocity, acceleration and mass
#[derive(Debug, Clone)]
pub struct PhysicalBody {
    pub id: BodyId,
    pub sprite: Sprite,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    mass: Mass,
}

impl PhysicalBody {
    pub fn new(id: BodyId, sprite: Sprite, mass: Mass) -> Self {
        Self {
            id,
            sprite,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass.get()
    }

    /// Reset acceleration to pure gravitational fall
    pub fn apply_gravity(&mut self) {
        self.acceleration = Vec2::new(0.0, GRAVITY / self.mass.get());
    }

    /// `v += a * dt` with the fixed logical step
    pub fn integrate_velocity(&mut self) {
        self.velocity += self.acceleration * SIM_DT;
    }

    /// True if the sprite origin is within `radius` of `point`
    pub fn in_vicinity(&self, point: Vec2, radius: f32) -> bool {
        self.sprite.pos.distance(point) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, ImageId};

    fn body(mass: f32) -> PhysicalBody {
        let sprite = Sprite::new(Assets::default().image(ImageId::Mandarin));
        PhysicalBody::new(BodyId(1), sprite, Mass::new(mass).unwrap())
    }

    #[test]
    fn test_mass_rejects_non_positive() {
        assert!(Mass::new(0.0).is_none());
        assert!(Mass::new(-1.0).is_none());
        assert!(Mass::new(f32::NAN).is_none());
        assert!(Mass::new(f32::INFINITY).is_none());
        assert_eq!(Mass::new(5.5).map(Mass::get), Some(5.5));
    }

    #[test]
    fn test_mass_deserialize_validates() {
        assert!(serde_json::from_str::<Mass>("0.0").is_err());
        assert_eq!(serde_json::from_str::<Mass>("10.0").unwrap().get(), 10.0);
    }

    #[test]
    fn test_gravity_scales_with_mass() {
        let mut light = body(5.0);
        let mut heavy = body(10.0);
        light.apply_gravity();
        heavy.apply_gravity();
        assert_eq!(light.acceleration.x, 0.0);
        assert!((light.acceleration.y - GRAVITY / 5.0).abs() < 1e-6);
        assert!((light.acceleration.y - 2.0 * heavy.acceleration.y).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_integration_uses_fixed_step() {
        let mut b = body(10.0);
        b.apply_gravity();
        b.integrate_velocity();
        b.integrate_velocity();
        assert!((b.velocity.y - 2.0 * 0.981 * SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_in_vicinity_is_inclusive() {
        let mut b = body(10.0);
        b.sprite.pos = Vec2::new(3.0, 4.0);
        assert!(b.in_vicinity(Vec2::ZERO, 5.0));
        assert!(!b.in_vicinity(Vec2::ZERO, 4.9));
    }
}
