//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Wall-clock time

/// Install the logger for this target
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Ignore a second initialisation (tests, embedding hosts)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}

/// Install the logger for this target
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Seconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Seconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_unix() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_after_2024() {
        assert!(now_unix() > 1_704_067_200);
    }
}
