//! On-target logger.

pub use log::LevelFilter;

/// Route `log` records to the esp-println console.
pub fn init(level: LevelFilter) {
    esp_println::logger::init_logger(level);
}
