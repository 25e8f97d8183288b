use cortex_m_semihosting::hprintln;
use log::{LevelFilter, Log, Metadata, Record};

const CUBE_LOG_LEVEL: LevelFilter = LevelFilter::Info;

struct CubeLogger;

static CUBE_LOGGER: CubeLogger = CubeLogger;

impl Log for CubeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= CUBE_LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nothing to do if the debugger went away
            let _ = hprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Routes `log` output to the debugger console. Blocks on every line, keep the
/// level at info or above so the tick interrupt stays short.
pub fn init() {
    if log::set_logger(&CUBE_LOGGER).is_ok() {
        log::set_max_level(CUBE_LOG_LEVEL);
    }
}
