//! Bridge for hosts that talk JSON (the browser page)
//!
//! The page reports what is held down each frame. [`InputTracker`] turns that
//! into the press/release edges a [`TickInput`] carries. Events go back as
//! [`HostEvent`] records with the sound keys and file names already resolved.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{Assets, ImageId};
use crate::settings::WindowGeometry;
use crate::sim::{GameEvent, Screen, TickInput, Touch, TouchId};

/// A touch point as reported by the page
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HostTouch {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

/// Everything the page knows about one frame.
///
/// `pointer_down` and `touches` are levels (currently held). The key flags
/// are one-shot: set only on the frame the key went down.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostFrame {
    pub width: f32,
    pub height: f32,
    pub pointer: [f32; 2],
    pub pointer_down: bool,
    pub touches: Vec<HostTouch>,
    pub quit: bool,
    pub close_requested: bool,
    pub toggle_fullscreen: bool,
    pub volume_up: bool,
    pub volume_down: bool,
    pub window: Option<WindowGeometry>,
}

/// Remembers last frame's held inputs to derive edges
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pointer_down: bool,
    touches: Vec<TouchId>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_input(&mut self, frame: &HostFrame) -> TickInput {
        let touches: Vec<Touch> = frame
            .touches
            .iter()
            .map(|t| Touch {
                id: TouchId(t.id),
                pos: Vec2::new(t.x, t.y),
            })
            .collect();
        let held: Vec<TouchId> = touches.iter().map(|t| t.id).collect();

        let input = TickInput {
            screen: Screen::new(frame.width, frame.height),
            pointer: Vec2::from(frame.pointer),
            pointer_pressed: frame.pointer_down && !self.pointer_down,
            pointer_released: !frame.pointer_down && self.pointer_down,
            touches_pressed: held
                .iter()
                .copied()
                .filter(|id| !self.touches.contains(id))
                .collect(),
            touches_released: self
                .touches
                .iter()
                .copied()
                .filter(|id| !held.contains(id))
                .collect(),
            touches,
            quit: frame.quit,
            close_requested: frame.close_requested,
            toggle_fullscreen: frame.toggle_fullscreen,
            volume_up: frame.volume_up,
            volume_down: frame.volume_down,
            window: frame.window,
        };

        self.pointer_down = frame.pointer_down;
        self.touches = held;
        input
    }
}

/// A [`GameEvent`] in the shape the page consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    Sound { key: &'static str, file: String },
    ToggleFullscreen,
    VolumeChanged { volume: f64 },
}

impl From<GameEvent> for HostEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Sound(effect) => HostEvent::Sound {
                key: effect.key(),
                file: effect.file_name(),
            },
            GameEvent::ToggleFullscreen => HostEvent::ToggleFullscreen,
            GameEvent::VolumeChanged(volume) => HostEvent::VolumeChanged { volume },
        }
    }
}

/// File names of every image the page has to load
pub fn image_files() -> Vec<&'static str> {
    ImageId::ALL.iter().map(ImageId::file_name).collect()
}

/// Build the size catalog from a `{ "file_name.png": [w, h], .. }` object.
///
/// Images the page did not report keep the default size.
pub fn assets_from_json(json: &str) -> Result<Assets, serde_json::Error> {
    let sizes: HashMap<String, [f32; 2]> = serde_json::from_str(json)?;
    let mut assets = Assets::default();
    for (name, [w, h]) in &sizes {
        match ImageId::ALL.iter().find(|id| id.file_name() == name.as_str()) {
            Some(&id) => {
                assets.set_size(id, Vec2::new(*w, *h));
            }
            None => log::warn!("Ignoring size for unknown image {}", name),
        }
    }
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;

    fn frame(json: &str) -> HostFrame {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pointer_edges_follow_held_state() {
        let mut tracker = InputTracker::new();
        let down = frame(r#"{"width":640,"height":480,"pointer":[5,6],"pointerDown":true}"#);
        let up = frame(r#"{"width":640,"height":480,"pointer":[5,6]}"#);

        let first = tracker.next_input(&down);
        assert!(first.pointer_pressed);
        assert_eq!(first.pointer, Vec2::new(5.0, 6.0));
        assert_eq!(first.screen, Screen::new(640.0, 480.0));

        let held = tracker.next_input(&down);
        assert!(!held.pointer_pressed && !held.pointer_released);

        let released = tracker.next_input(&up);
        assert!(released.pointer_released);
        assert!(!released.activated());
    }

    #[test]
    fn test_touch_edges() {
        let mut tracker = InputTracker::new();
        let one = tracker.next_input(&frame(r#"{"touches":[{"id":1,"x":10,"y":20}]}"#));
        assert_eq!(one.touches_pressed, vec![TouchId(1)]);
        assert_eq!(one.touch_position(TouchId(1)), Some(Vec2::new(10.0, 20.0)));

        let two = tracker.next_input(&frame(
            r#"{"touches":[{"id":1,"x":11,"y":20},{"id":2,"x":0,"y":0}]}"#,
        ));
        assert_eq!(two.touches_pressed, vec![TouchId(2)]);
        assert!(two.touches_released.is_empty());

        let gone = tracker.next_input(&frame(r#"{"touches":[{"id":2,"x":0,"y":0}]}"#));
        assert!(gone.touches_pressed.is_empty());
        assert_eq!(gone.touches_released, vec![TouchId(1)]);
    }

    #[test]
    fn test_keys_and_window_pass_through() {
        let mut tracker = InputTracker::new();
        let input = tracker.next_input(&frame(
            r#"{"quit":true,"toggleFullscreen":true,"volumeUp":true,
                "window":{"size":[800,600],"position":[1,2]}}"#,
        ));
        assert!(input.quit && input.toggle_fullscreen && input.volume_up);
        assert!(!input.volume_down && !input.close_requested);
        assert_eq!(
            input.window,
            Some(WindowGeometry {
                size: [800, 600],
                position: [1, 2]
            })
        );
    }

    #[test]
    fn test_events_serialize_with_resolved_sounds() {
        let events: Vec<HostEvent> = vec![
            GameEvent::Sound(SoundEffect::Collect).into(),
            GameEvent::ToggleFullscreen.into(),
            GameEvent::VolumeChanged(0.6).into(),
        ];
        let json = serde_json::to_value(&events).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"type": "sound", "key": "orange_put", "file": "orange_put.wav"},
                {"type": "toggleFullscreen"},
                {"type": "volumeChanged", "volume": 0.6}
            ])
        );
    }

    #[test]
    fn test_assets_from_reported_sizes() {
        let assets =
            assets_from_json(r#"{"mandarin_orange.png":[40,36],"nope.png":[1,1]}"#).unwrap();
        assert_eq!(assets.image(ImageId::Mandarin).size, Vec2::new(40.0, 36.0));
        assert_eq!(assets.image(ImageId::Background).size, Vec2::splat(64.0));
        assert!(assets_from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_image_files_cover_every_image() {
        let files = image_files();
        assert_eq!(files.len(), ImageId::ALL.len());
        assert!(files.contains(&"capybara_3.png"));
    }
}
