//! Capyclick entry point
//!
//! Native builds run the simulation headless under the autopilot and keep
//! the save files next to the executable. The web build exposes a handle
//! that the page drives once per animation frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use capyclick::host::{self, HostEvent, HostFrame, InputTracker};
    use capyclick::persistence::LocalStorageStore;
    use capyclick::sim::TickStatus;
    use capyclick::{Assets, Session, platform};

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Game handle owned by the page
    #[wasm_bindgen]
    pub struct WebGame {
        session: Option<Session<LocalStorageStore>>,
        tracker: InputTracker,
    }

    #[wasm_bindgen]
    impl WebGame {
        /// `image_sizes` is a JSON object mapping each file from
        /// [`WebGame::image_files`] to its decoded `[width, height]`.
        #[wasm_bindgen(constructor)]
        pub fn new(image_sizes: &str) -> Self {
            let assets = host::assets_from_json(image_sizes).unwrap_or_else(|e| {
                log::warn!("Bad image sizes, using defaults: {}", e);
                Assets::default()
            });
            let seed = js_sys::Date::now() as u64;
            Self {
                session: Some(Session::open(LocalStorageStore, assets, seed)),
                tracker: InputTracker::new(),
            }
        }

        /// JSON array of the image files to load before constructing a game
        pub fn image_files() -> Result<String, JsValue> {
            serde_json::to_string(&host::image_files()).map_err(js_error)
        }

        /// Advance one tick from a JSON [`HostFrame`].
        ///
        /// Returns the JSON array of events for this tick, or `None` once
        /// the game has quit and saved.
        pub fn tick(&mut self, frame: &str) -> Result<Option<String>, JsValue> {
            let frame: HostFrame = serde_json::from_str(frame).map_err(js_error)?;
            let input = self.tracker.next_input(&frame);
            let Some(session) = self.session.as_mut() else {
                return Ok(None);
            };

            if session.tick(&input) == TickStatus::Quit {
                self.shutdown();
                return Ok(None);
            }
            let events: Vec<HostEvent> = session
                .state_mut()
                .drain_events()
                .into_iter()
                .map(HostEvent::from)
                .collect();
            serde_json::to_string(&events).map(Some).map_err(js_error)
        }

        /// JSON draw list for the current state
        pub fn scene(&self, line_height: f32) -> Result<String, JsValue> {
            let session = self
                .session
                .as_ref()
                .ok_or_else(|| js_error("game has ended"))?;
            serde_json::to_string(&session.scene(line_height)).map_err(js_error)
        }

        /// Save progress; later ticks do nothing
        pub fn shutdown(&mut self) {
            if let Some(session) = self.session.take() {
                session.shutdown();
            }
        }
    }

    pub fn start() {
        platform::init_logging();
        log::info!("Capyclick (web) starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use capyclick::consts::TICK_RATE;
    use capyclick::persistence::FileStore;
    use capyclick::sim::{Autopilot, Screen, TickStatus};
    use capyclick::{Assets, Session, platform};

    platform::init_logging();
    log::info!("Capyclick (native) starting...");

    // Optional run length in seconds, one minute by default
    let seconds: u64 = match std::env::args().nth(1).map(|arg| arg.parse()) {
        Some(Ok(seconds)) => seconds,
        Some(Err(e)) => {
            log::warn!("Ignoring run length argument: {}", e);
            60
        }
        None => 60,
    };

    let store = FileStore::beside_executable().unwrap_or_else(|e| {
        log::warn!("Cannot locate executable ({}), saving to the working directory", e);
        FileStore::new(".")
    });
    let screen = Screen::default();
    let mut session = Session::open(store, Assets::default(), platform::now_unix());
    let mut pilot = Autopilot::default();

    for _ in 0..seconds.saturating_mul(u64::from(TICK_RATE)) {
        let input = pilot.next_input(session.state(), screen);
        if session.tick(&input) == TickStatus::Quit {
            break;
        }
        for event in session.state_mut().drain_events() {
            log::debug!("{:?}", event);
        }
    }

    let state = session.state();
    log::info!(
        "Finished at level {} with {} points after {} clicks",
        state.save.level,
        state.save.points,
        state.save.times_clicked
    );
    session.shutdown();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
