//! Browser console backend for the `log` facade
//!
//! Installed once from `init()`. On native targets there is no console to
//! forward to, so `init_logging` only sets the max level.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&value),
            log::Level::Warn => web_sys::console::warn_1(&value),
            log::Level::Info => web_sys::console::info_1(&value),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger (first call wins) and set the max level.
pub fn init_logging(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        // A second call only adjusts the level.
        let _ = log::set_logger(&LOGGER);
    }
    log::set_max_level(level);
}
