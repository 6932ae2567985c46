//! Session configuration types.
//!
//! [`SessionOptions`] carries everything a session load needs beyond the
//! model path: the acceleration mode and optional engine tuning knobs.
//! Options are serde-derived so they can come from JSON configuration, and
//! expose builder-style `with_*` methods for in-code construction.

use serde::{Deserialize, Serialize};

/// Whether the engine should prefer a hardware accelerator execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccelerationMode {
    /// Default CPU execution path.
    #[default]
    Default,
    /// Prefer the platform accelerator.
    ///
    /// When no accelerator is compiled in or the probe reports it
    /// unavailable, the session falls back silently to the CPU path; the
    /// path actually used is recorded on the session.
    HardwareAccelerated,
}

/// The execution path a session was actually configured with.
///
/// This is the diagnostic counterpart to [`AccelerationMode`]: requesting
/// acceleration does not guarantee getting it, and callers who care can
/// inspect this after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPath {
    /// The default CPU execution path.
    Cpu,
    /// A platform accelerator execution provider was registered.
    Accelerated,
}

impl std::fmt::Display for ExecutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionPath::Cpu => write!(f, "cpu"),
            ExecutionPath::Accelerated => write!(f, "accelerated"),
        }
    }
}

/// Graph optimization levels for ONNX Runtime session creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphOptLevel {
    /// Disable all optimizations.
    DisableAll,
    /// Enable basic optimizations.
    Level1,
    /// Enable extended optimizations.
    Level2,
    /// Enable all optimizations.
    Level3,
    /// Enable all optimizations (alias for Level3).
    All,
}

impl Default for GraphOptLevel {
    fn default() -> Self {
        Self::Level3
    }
}

/// Configuration for creating an inference session.
///
/// Unset knobs leave the engine at its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Acceleration mode for the session.
    #[serde(default)]
    pub acceleration: AccelerationMode,
    /// Number of threads used to parallelize execution within nodes.
    pub intra_threads: Option<usize>,
    /// Number of threads used to parallelize execution across nodes.
    pub inter_threads: Option<usize>,
    /// Graph optimization level.
    pub optimization_level: Option<GraphOptLevel>,
}

impl SessionOptions {
    /// Creates a new SessionOptions with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the acceleration mode.
    pub fn with_acceleration(mut self, mode: AccelerationMode) -> Self {
        self.acceleration = mode;
        self
    }

    /// Sets the number of intra-op threads.
    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = Some(threads);
        self
    }

    /// Sets the number of inter-op threads.
    pub fn with_inter_threads(mut self, threads: usize) -> Self {
        self.inter_threads = Some(threads);
        self
    }

    /// Sets the graph optimization level.
    pub fn with_optimization_level(mut self, level: GraphOptLevel) -> Self {
        self.optimization_level = Some(level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_options_new() {
        let options = SessionOptions::new();
        assert_eq!(options.acceleration, AccelerationMode::Default);
        assert!(options.intra_threads.is_none());
        assert!(options.inter_threads.is_none());
        assert!(options.optimization_level.is_none());
    }

    #[test]
    fn test_session_options_builder() {
        let options = SessionOptions::new()
            .with_acceleration(AccelerationMode::HardwareAccelerated)
            .with_intra_threads(4)
            .with_inter_threads(2)
            .with_optimization_level(GraphOptLevel::Level2);

        assert_eq!(options.acceleration, AccelerationMode::HardwareAccelerated);
        assert_eq!(options.intra_threads, Some(4));
        assert_eq!(options.inter_threads, Some(2));
        assert_eq!(options.optimization_level, Some(GraphOptLevel::Level2));
    }

    #[test]
    fn test_acceleration_mode_default() {
        assert_eq!(AccelerationMode::default(), AccelerationMode::Default);
    }

    #[test]
    fn test_optimization_level_default() {
        assert_eq!(GraphOptLevel::default(), GraphOptLevel::Level3);
    }

    #[test]
    fn test_session_options_json_round_trip() {
        let options = SessionOptions::new()
            .with_acceleration(AccelerationMode::HardwareAccelerated)
            .with_intra_threads(8);

        let json = serde_json::to_string(&options).expect("serialize options");
        let parsed: SessionOptions = serde_json::from_str(&json).expect("deserialize options");

        assert_eq!(parsed.acceleration, AccelerationMode::HardwareAccelerated);
        assert_eq!(parsed.intra_threads, Some(8));
        assert!(parsed.optimization_level.is_none());
    }

    #[test]
    fn test_session_options_json_defaults() {
        let parsed: SessionOptions = serde_json::from_str("{}").expect("deserialize empty options");
        assert_eq!(parsed.acceleration, AccelerationMode::Default);
        assert!(parsed.intra_threads.is_none());
    }

    #[test]
    fn test_execution_path_display() {
        assert_eq!(ExecutionPath::Cpu.to_string(), "cpu");
        assert_eq!(ExecutionPath::Accelerated.to_string(), "accelerated");
    }
}
