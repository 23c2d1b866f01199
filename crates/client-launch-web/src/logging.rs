//! Browser console logging
//!
//! `tracing` events from every crate reach the console through the `log`
//! bridge, since no tracing subscriber is installed in the browser.

/// Install the panic hook and the console logger.
pub fn init(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
}
