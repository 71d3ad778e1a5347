use anyhow::anyhow;
use anyhow::Result;
use log::LevelFilter;
use std::io::Stderr;
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

/// Sends log records to stderr, leaving stdout for the computed total.
pub(crate) fn init(max_level: LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(StderrLogger {
        stderr: Mutex::new(std::io::stderr()),
        start: Instant::now(),
    }))
    .map_err(|_| anyhow!("Failed to set logger"))?;
    log::set_max_level(max_level);
    Ok(())
}

struct StderrLogger {
    stderr: Mutex<Stderr>,
    start: Instant,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // If a write to stderr fails, there's not a lot we can do, so we just ignore it.
            let mut stderr = self.stderr.lock().unwrap();
            let _ = writeln!(
                stderr,
                "{:0.3}: {} - {}",
                self.start.elapsed().as_secs_f32(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = self.stderr.lock().unwrap().flush();
    }
}
