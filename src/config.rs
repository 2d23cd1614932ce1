use serde::Deserialize;
use std::fs;

/// Approximator configuration loaded from a TOML or JSON file.
///
/// Every field mirrors one of the tunable constants of the training loop.
/// The input and output layer sizes are not configurable; the network maps
/// one scalar to one scalar.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of nodes in the hidden layer.
    pub num_hidden_nodes: usize,
    /// Rate to apply the gradient for training.
    pub learning_rate: f32,
    /// Cost-change threshold used by the opt-in early-stop policy.
    pub delta: f32,
    /// Number of full passes over the sample set.
    pub max_epochs: usize,
    /// Number of intervals in the prediction sweep; the sweep emits
    /// `sweep_steps + 1` points.
    pub sweep_steps: usize,
    /// Stop once the per-epoch cost change falls below `delta`.
    pub early_stop: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_hidden_nodes: 10,
            learning_rate: 0.1,
            delta: 0.0001,
            max_epochs: 1000,
            sweep_steps: 100,
            early_stop: false,
        }
    }
}

impl Config {
    /// Load configuration from the given path.  Supports TOML or JSON based on
    /// the file extension. Returns `None` if parsing fails.
    pub fn from_path(path: &str) -> Option<Self> {
        let Ok(content) = fs::read_to_string(path) else {
            return None;
        };
        if path.ends_with(".json") {
            serde_json::from_str(&content).ok()
        } else {
            toml::from_str(&content).ok()
        }
    }
}
