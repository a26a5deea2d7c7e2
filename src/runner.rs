use std::error::Error;

use crate::config::{Options, Overrides};
use crate::engine::{EngineError, MeasureConfig, MeasurementEngine};
use crate::paths::display_path;
use crate::report::Reporter;

/// Reacts to watch-session lifecycle and file-change events by driving the
/// measurement engine over the right set of paths.
///
/// Holds no state beyond the resolved options and the two collaborators;
/// every call is synchronous and self-contained.
pub struct InspectionRunner<E, R> {
    options: Options,
    engine: E,
    reporter: R,
}

impl<E, R> InspectionRunner<E, R>
where
    E: MeasurementEngine,
    R: Reporter,
{
    /// Merges `overrides` over the defaults and stores the collaborators.
    pub fn new(overrides: Overrides, engine: E, reporter: R) -> Self {
        Self {
            options: Options::resolve(overrides),
            engine,
            reporter,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs a full inspection when `all_on_start` is configured.
    pub fn start(&self) {
        if self.options.all_on_start {
            self.run_all();
        }
    }

    /// Inspects everything matching the configured path patterns.
    pub fn run_all(&self) {
        self.reporter.info("Inspecting Yarddoc in all files");
        self.inspect(&self.options.path);
    }

    /// Called by the host when files are added.
    pub fn run_on_additions(&self, paths: &[String]) {
        self.run_partially(paths);
    }

    /// Called by the host when files are modified. Additions and
    /// modifications are handled identically.
    pub fn run_on_modifications(&self, paths: &[String]) {
        self.run_partially(paths);
    }

    fn run_partially(&self, paths: &[String]) {
        if paths.is_empty() {
            return;
        }

        let displayed: Vec<String> = paths.iter().map(|p| display_path(p)).collect();
        self.reporter
            .info(&format!("Inspecting Yarddocs: {}", displayed.join(" ")));

        // The engine gets the original paths, not the display forms.
        self.inspect(paths);
    }

    /// Runs one measurement pass. Every failure is contained here: it
    /// becomes a single error line and the watch session carries on.
    fn inspect(&self, paths: &[String]) {
        let outcome = MeasureConfig::scoped(paths)
            .and_then(|config| self.engine.measure(&config))
            .and_then(|measurements| measurements.render(&self.reporter));

        if let Err(error) = outcome {
            self.report_failure(&error);
        }
    }

    fn report_failure(&self, error: &EngineError) {
        let mut line = format!("Inspection failed: {} ({})", error, error.kind());
        if let Some(cause) = error.source() {
            line.push_str(&format!(", caused by: {}", cause));
        }
        self.reporter.error(&line);
    }
}
