use globset::Glob;
use thiserror::Error;

use crate::report::Reporter;

/// Engine configuration for a single inspection pass.
///
/// Carries only the paths to measure. Runner-level options are never merged
/// in, so a scoped run cannot pick up state from the surrounding session.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureConfig {
    pub path: Vec<String>,
}

impl MeasureConfig {
    /// Builds a configuration scoped to exactly `paths`, preserving order
    /// and duplicates. Each entry must be a valid glob pattern; plain file
    /// paths always are.
    pub fn scoped(paths: &[String]) -> Result<Self, EngineError> {
        for pattern in paths {
            Glob::new(pattern).map_err(|source| EngineError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        Ok(Self {
            path: paths.to_vec(),
        })
    }
}

/// The documentation-measurement engine the runner drives.
///
/// Implemented outside this crate; the runner only needs one call per
/// inspection and a result it can ask to render itself.
pub trait MeasurementEngine {
    fn measure(&self, config: &MeasureConfig) -> Result<Box<dyn Measurements>, EngineError>;
}

/// An opaque measurement result. The runner never looks inside it.
pub trait Measurements {
    /// Writes the textual report to the sink. The format belongs to the
    /// engine.
    fn render(&self, reporter: &dyn Reporter) -> Result<(), EngineError>;
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid path pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Measurement(String),

    #[error("failed to render report: {0}")]
    Render(String),
}

impl EngineError {
    /// Classification name for the single-line error report.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Pattern { .. } => "Pattern",
            EngineError::Io(_) => "Io",
            EngineError::Measurement(_) => "Measurement",
            EngineError::Render(_) => "Render",
        }
    }
}
