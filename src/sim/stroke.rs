//! Drag interaction between an input source and a physical body

use glam::Vec2;

use super::physical::{BodyId, PhysicalBody};
use super::sprite::Screen;
use super::tick::{TickInput, TouchId};

/// Where a stroke reads its position from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeSource {
    /// Mouse with the primary button held
    Pointer,
    /// A single touch point
    Touch(TouchId),
}

impl StrokeSource {
    /// Current input position, `None` if the touch is gone
    pub fn position(&self, input: &TickInput) -> Option<Vec2> {
        match self {
            StrokeSource::Pointer => Some(input.pointer),
            StrokeSource::Touch(id) => input.touch_position(*id),
        }
    }

    pub fn just_released(&self, input: &TickInput) -> bool {
        match self {
            StrokeSource::Pointer => input.pointer_released,
            StrokeSource::Touch(id) => input.touches_released.contains(id),
        }
    }
}

/// One drag session, alive while its body stays dragged
#[derive(Debug, Clone)]
pub struct Stroke {
    source: StrokeSource,
    /// Input position minus sprite origin at grab time
    offset: Vec2,
    body: BodyId,
}

impl Stroke {
    /// Grab `body`. Returns `None` if the source has no position.
    pub fn begin(source: StrokeSource, body: &mut PhysicalBody, input: &TickInput) -> Option<Self> {
        let at = source.position(input)?;
        body.sprite.dragged = true;
        Some(Self {
            source,
            offset: at - body.sprite.pos,
            body: body.id,
        })
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Follow the input, or let go on release
    pub fn update(&self, body: &mut PhysicalBody, input: &TickInput, screen: Screen) {
        if !body.sprite.dragged {
            return;
        }

        let position = self.source.position(input);
        let Some(at) = position.filter(|_| !self.source.just_released(input)) else {
            body.sprite.dragged = false;
            return;
        };

        body.sprite.move_to(at - self.offset, screen);
    }
}
