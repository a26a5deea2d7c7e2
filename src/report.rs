/// Where inspection messages go.
///
/// Injected at construction so tests can capture lines instead of scraping
/// a process-global logger.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: routes everything through the `log` facade. The host owns
/// facade initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_reporter_routes_through_the_facade() {
        let _ = env_logger::builder().is_test(true).try_init();

        let reporter = LogReporter;
        reporter.info("measured 3 files");
        reporter.error("measurement failed");
    }
}
