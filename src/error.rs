use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures surfaced by the approximator and its collaborators.
///
/// Every variant is fatal to the current run; there is no partial recovery
/// and retrying a deterministic computation would not help.
#[derive(Debug, Clone, PartialEq)]
pub enum ApproxError {
    /// Domain bounds are inverted or non-finite.
    InvalidDomain { min: f32, max: f32 },
    /// The trainer was handed an empty sample sequence.
    EmptySamples,
    /// A sample line failed to parse into two reals.
    MalformedSample { line: usize, content: String },
    /// The samples file could not be read.
    SamplesFile { path: String, reason: String },
    /// Training produced a non-finite cost.
    Diverged { epoch: usize, cost: f32 },
    /// No built-in target function with this name.
    BadFunction(String),
}

impl Display for ApproxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApproxError::InvalidDomain { min, max } => {
                write!(f, "invalid domain: min {min} must not exceed max {max} and both must be finite")
            }
            ApproxError::EmptySamples => write!(f, "no samples to train on"),
            ApproxError::MalformedSample { line, content } => {
                write!(f, "malformed sample on line {line}: {content:?}")
            }
            ApproxError::SamplesFile { path, reason } => {
                write!(f, "missing or invalid samples file {path}: {reason}")
            }
            ApproxError::Diverged { epoch, cost } => {
                write!(f, "training diverged at epoch {epoch} with cost {cost}")
            }
            ApproxError::BadFunction(name) => write!(f, "unknown target function {name:?}"),
        }
    }
}

impl Error for ApproxError {}
