//! Image identities and their native sizes
//!
//! Decoding happens outside the core. The host loads the files named by
//! [`ImageId::file_name`] and reports each image's pixel size here so that
//! sprites can compute their bounding boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

const IMAGE_COUNT: usize = 8;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    Background,
    CapybaraTier1,
    CapybaraTier2,
    CapybaraTier3,
    Mandarin,
    BoxEmpty,
    BoxPartial,
    BoxFull,
}

impl ImageId {
    pub const ALL: [ImageId; IMAGE_COUNT] = [
        ImageId::Background,
        ImageId::CapybaraTier1,
        ImageId::CapybaraTier2,
        ImageId::CapybaraTier3,
        ImageId::Mandarin,
        ImageId::BoxEmpty,
        ImageId::BoxPartial,
        ImageId::BoxFull,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ImageId::Background => "background_1.png",
            ImageId::CapybaraTier1 => "capybara_1.png",
            ImageId::CapybaraTier2 => "capybara_2.png",
            ImageId::CapybaraTier3 => "capybara_3.png",
            ImageId::Mandarin => "mandarin_orange.png",
            ImageId::BoxEmpty => "mandarin_box_empty.png",
            ImageId::BoxPartial => "mandarin_box_not_empty.png",
            ImageId::BoxFull => "mandarin_box_full.png",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// An image handle: identity plus native pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub size: Vec2,
}

impl Image {
    pub fn width(&self) -> f32 {
        self.size.x
    }
}

/// Native sizes of all images, filled in by the asset loader
#[derive(Debug, Clone)]
pub struct Assets {
    sizes: [Vec2; IMAGE_COUNT],
}

impl Default for Assets {
    /// Every image 64x64, useful until real sizes are known
    fn default() -> Self {
        Self::uniform(Vec2::splat(64.0))
    }
}

impl Assets {
    /// Catalog where every image has the same size
    pub fn uniform(size: Vec2) -> Self {
        Self {
            sizes: [size; IMAGE_COUNT],
        }
    }

    /// Record the decoded size of an image. Zero or negative sizes are ignored.
    pub fn set_size(&mut self, id: ImageId, size: Vec2) -> &mut Self {
        if size.x > 0.0 && size.y > 0.0 {
            self.sizes[id.index()] = size;
        } else {
            log::warn!("Ignoring invalid size {:?} for {}", size, id.file_name());
        }
        self
    }

    pub fn image(&self, id: ImageId) -> Image {
        Image {
            id,
            size: self.sizes[id.index()],
        }
    }
}
