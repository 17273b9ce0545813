use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

/// A logger that writes to stdout, stamping each line with process uptime.
///
/// Uptime is the useful time axis for a frame loop; nothing in this system
/// persists across runs, so there is no file logger and no calendar stamp.
pub struct StdoutLogger;

fn start_instant() -> Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    *START.get_or_init(Instant::now)
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let uptime = start_instant().elapsed();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        println!(
            "{:9.3}s [{}] [{:?}] {}:{} - {}",
            uptime.as_secs_f64(),
            record.level(),
            std::thread::current().id(),
            file,
            line,
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Initialize the global logger with `StdoutLogger`.
///
/// Sets the max level based on build mode:
/// - Debug builds: `LevelFilter::Debug` (all levels active)
/// - Release builds: `LevelFilter::Info` (Debug suppressed)
///
/// This can only be called once per process. Subsequent calls are silently
/// ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    // Anchor uptime at init rather than at the first log line.
    let _ = start_instant();

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
