//! Screen-edge collision response
//!
//! Contacts are detected on the position *before* this tick's velocity is
//! applied, so a body may overlap an edge for one tick before it bounces.
//! `Sprite::move_to` keeps it on screen in the meantime.

use super::physical::PhysicalBody;
use super::sprite::Screen;

/// Which screen edges a body touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Reflect and damp velocity against the screen edges.
///
/// Side walls invert `vx`, the ceiling inverts `vy`. The floor inverts `vy`
/// and also damps `vx` as friction. Every response scales by `restitution`.
pub fn bounce_off_walls(body: &mut PhysicalBody, screen: Screen, restitution: f32) -> WallContact {
    let pos = body.sprite.pos;
    let size = body.sprite.real_size();

    let contact = WallContact {
        right: pos.x + size.x >= screen.width,
        left: pos.x <= 0.0,
        top: pos.y <= 0.0,
        bottom: pos.y + size.y >= screen.height,
    };

    if contact.right {
        body.velocity.x = -body.velocity.x * restitution;
    }
    if contact.left {
        body.velocity.x = -body.velocity.x * restitution;
    }
    if contact.top {
        body.velocity.y = -body.velocity.y * restitution;
    }
    if contact.bottom {
        body.velocity.x *= restitution;
        body.velocity.y = -body.velocity.y * restitution;
    }

    contact
}

/// One physics step for a falling body: gravity, velocity, walls, position
pub fn step_body(body: &mut PhysicalBody, screen: Screen, restitution: f32) -> WallContact {
    body.apply_gravity();
    body.integrate_velocity();
    let contact = bounce_off_walls(body, screen, restitution);
    let next = body.sprite.pos + body.velocity;
    body.sprite.move_to(next, screen);
    contact
}
