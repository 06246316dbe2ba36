//! Browser console logging setup.
//!
//! Setting `NEXEM_STRIP_CONSOLE` when the WASM bundle is compiled removes
//! all console output from the shipped page, panic messages included.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::LevelFilter;

/// Build-time console strip flag.
const STRIP_CONSOLE: Option<&str> = option_env!("NEXEM_STRIP_CONSOLE");

/// Whether a flag value asks for console output to be stripped.
pub fn is_truthy(flag: Option<&str>) -> bool {
    flag.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Level filter for the console logger.
pub fn console_filter(strip_flag: Option<&str>, debug_build: bool) -> LevelFilter {
    if is_truthy(strip_flag) {
        LevelFilter::Off
    } else if debug_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Whether panics should be forwarded to the console under `filter`.
pub fn forwards_panics(filter: LevelFilter) -> bool {
    filter != LevelFilter::Off
}

/// Install the console logger and panic hook, unless console output is stripped.
pub fn init() {
    let filter = console_filter(STRIP_CONSOLE, cfg!(debug_assertions));
    #[cfg(feature = "hydrate")]
    {
        if forwards_panics(filter) {
            console_error_panic_hook::set_once();
        }
        if let Some(level) = filter.to_level() {
            let _ = console_log::init_with_level(level);
        }
    }
    log::set_max_level(filter);
}
