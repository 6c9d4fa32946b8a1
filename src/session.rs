//! Game session: loads records, runs ticks, saves on shutdown

use crate::assets::Assets;
use crate::persistence::{LoadSource, SaveData, Store, load_or_default, store_record};
use crate::renderer::{Scene, build_scene};
use crate::settings::Config;
use crate::sim::{GameState, TickInput, TickStatus, tick};

/// Storage key of the progress record
pub const SAVE_KEY: &str = "capyclickSave.json";
/// Storage key of the configuration record
pub const CONFIG_KEY: &str = "capyclickConfig.json";

/// A running game bound to the store it was loaded from
#[derive(Debug)]
pub struct Session<S: Store> {
    state: GameState,
    store: S,
}

impl<S: Store> Session<S> {
    /// Load both records (defaults when missing or unreadable) and build the
    /// initial state. Missing records are written out immediately.
    pub fn open(mut store: S, assets: Assets, seed: u64) -> Self {
        let (mut save, save_source): (SaveData, _) = load_or_default(&store, SAVE_KEY);
        save.touch();
        if save_source == LoadSource::Missing {
            if let Err(e) = store_record(&mut store, SAVE_KEY, &save) {
                log::warn!("Could not create {}: {}", SAVE_KEY, e);
            }
        }

        let (mut config, config_source): (Config, _) = load_or_default(&store, CONFIG_KEY);
        config.sanitize();
        if config_source == LoadSource::Missing {
            if let Err(e) = store_record(&mut store, CONFIG_KEY, &config) {
                log::warn!("Could not create {}: {}", CONFIG_KEY, e);
            }
        }

        log::info!(
            "Session opened: level {}, {} points, seed {}",
            save.level,
            save.points,
            seed
        );

        Self {
            state: GameState::new(save, config, assets, seed),
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tick(&mut self, input: &TickInput) -> TickStatus {
        tick(&mut self.state, input)
    }

    /// Draw list for the current state
    pub fn scene(&self, line_height: f32) -> Scene {
        build_scene(&self.state, line_height)
    }

    /// Write both records once and hand the store back.
    ///
    /// Write failures are logged; the game still exits.
    pub fn shutdown(mut self) -> S {
        if let Err(e) = store_record(&mut self.store, SAVE_KEY, &self.state.save) {
            log::warn!("Could not save progress: {}", e);
        }
        if let Err(e) = store_record(&mut self.store, CONFIG_KEY, &self.state.config) {
            log::warn!("Could not save configuration: {}", e);
        }
        log::info!("Session closed after {} ticks", self.state.time_ticks);
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::Screen;

    fn click(screen: Screen, session: &Session<MemoryStore>) -> TickInput {
        let mut input = TickInput::idle(screen);
        input.pointer = session.state().capybara.center();
        input.pointer_pressed = true;
        input
    }

    #[test]
    fn test_fresh_store_gets_defaults_written() {
        let session = Session::open(MemoryStore::new(), Assets::default(), 1);
        assert_eq!(session.state().save.level, 1);
        assert_eq!(session.state().config.volume, 1.0);
        let store = session.shutdown();
        // Two at open, two at shutdown
        assert_eq!(store.writes(), 4);
    }

    #[test]
    fn test_progress_survives_reopen() {
        let screen = Screen::new(640.0, 480.0);
        let mut session = Session::open(MemoryStore::new(), Assets::default(), 3);
        session.tick(&TickInput::idle(screen));
        for _ in 0..5 {
            let input = click(screen, &session);
            session.tick(&input);
        }
        let store = session.shutdown();

        let session = Session::open(store, Assets::default(), 4);
        assert_eq!(session.state().save.times_clicked, 5);
        assert_eq!(session.state().save.points, 5);
    }

    #[test]
    fn test_existing_records_not_rewritten_at_open() {
        let store = Session::open(MemoryStore::new(), Assets::default(), 1).shutdown();
        let before = store.writes();
        let store = Session::open(store, Assets::default(), 1).shutdown();
        assert_eq!(store.writes(), before + 2);
    }

    #[test]
    fn test_corrupted_record_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.write(SAVE_KEY, "{ not json").unwrap();
        store
            .write(CONFIG_KEY, r#"{"configurationVersion":1,"volume":7.5}"#)
            .unwrap();

        let session = Session::open(store, Assets::default(), 1);
        assert_eq!(session.state().save.points, 0);
        assert_eq!(session.state().config.volume, 1.0);
    }

    #[test]
    fn test_quit_and_volume_reach_saved_config() {
        let screen = Screen::new(640.0, 480.0);
        let mut session = Session::open(MemoryStore::new(), Assets::default(), 1);
        let mut input = TickInput::idle(screen);
        input.volume_down = true;
        session.tick(&input);

        let mut quit = TickInput::idle(screen);
        quit.quit = true;
        assert_eq!(session.tick(&quit), TickStatus::Quit);

        let store = session.shutdown();
        let config: Config = serde_json::from_str(store.get(CONFIG_KEY).unwrap()).unwrap();
        assert_eq!(config.volume, 0.8);
    }
}
