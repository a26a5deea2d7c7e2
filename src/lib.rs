//! Watch-session plugin that re-measures documentation quality on save.
//!
//! An external watcher host constructs an [`InspectionRunner`] with its
//! option mapping, calls [`InspectionRunner::start`] once, and forwards file
//! add/modify notifications to it. The runner drives a
//! [`MeasurementEngine`] over the affected paths and reports through a
//! [`Reporter`]; a failed inspection degrades to one error line and never
//! ends the watch session.

// Declare modules
pub mod config;
pub mod engine;
pub mod paths;
pub mod report;
pub mod runner;

pub use self::config::{Options, Overrides};
pub use self::engine::{EngineError, MeasureConfig, MeasurementEngine, Measurements};
pub use self::paths::{display_path, display_path_from};
pub use self::report::{LogReporter, Reporter};
pub use self::runner::InspectionRunner;
