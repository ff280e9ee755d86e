//! Server configuration from environment and command line.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use sortvis_engine::{EngineKind, StreamingConfig};
use sortvis_playback::PlaybackConfig;

use crate::error::ConfigError;

/// Largest array a client may request.
pub const MAX_ARRAY_SIZE: usize = 100_000;

/// Configuration for the visualization server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds
    pub addr: SocketAddr,
    /// Algorithm loaded at startup and used when a run request omits it
    pub algorithm: String,
    /// Engine used when a run request omits it
    pub engine: EngineKind,
    /// Array length used when a run request omits it
    pub array_size: usize,
    /// Seed for input shuffles; random when unset
    pub seed: Option<u64>,
    /// Time between frame ticks
    pub frame_interval: Duration,
    pub playback: PlaybackConfig,
    pub streaming: StreamingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            algorithm: "quicksort".to_string(),
            engine: EngineKind::Materializing,
            array_size: 128,
            seed: None,
            frame_interval: Duration::from_millis(16),
            playback: PlaybackConfig::default(),
            streaming: StreamingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SORTVIS_ADDR") {
            config.addr = parse("SORTVIS_ADDR", &addr)?;
        }
        if let Some(algorithm) = lookup("SORTVIS_ALGORITHM") {
            config.algorithm = algorithm.trim().to_string();
        }
        if let Some(engine) = lookup("SORTVIS_ENGINE") {
            config.engine = EngineKind::from_name(&engine)
                .ok_or_else(|| ConfigError::invalid("SORTVIS_ENGINE", &engine, "unknown engine"))?;
        }
        if let Some(size) = lookup("SORTVIS_ARRAY_SIZE") {
            config.array_size = parse_size("SORTVIS_ARRAY_SIZE", &size)?;
        }
        if let Some(speed) = lookup("SORTVIS_SPEED") {
            let value: f64 = parse("SORTVIS_SPEED", &speed)?;
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid("SORTVIS_SPEED", &speed, "must be positive"));
            }
            config.playback = config.playback.with_speed(value);
        }
        if let Some(ms) = lookup("SORTVIS_FRAME_MS") {
            let value: u64 = parse("SORTVIS_FRAME_MS", &ms)?;
            if value == 0 {
                return Err(ConfigError::invalid("SORTVIS_FRAME_MS", &ms, "must be positive"));
            }
            config.frame_interval = Duration::from_millis(value);
        }
        if let Some(seed) = lookup("SORTVIS_SEED") {
            config.seed = Some(parse("SORTVIS_SEED", &seed)?);
        }

        Ok(config)
    }

    /// Apply positional arguments: `[algorithm] [size] [port]`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        if let Some(algorithm) = args.first() {
            self.algorithm = algorithm.clone();
        }
        if let Some(size) = args.get(1) {
            self.array_size = parse_size("array size", size)?;
        }
        if let Some(port) = args.get(2) {
            self.addr.set_port(parse("port", port)?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_array_size(mut self, size: usize) -> Self {
        self.array_size = size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(var, value, e))
}

fn parse_size(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    let size: usize = parse(var, value)?;
    if size == 0 || size > MAX_ARRAY_SIZE {
        return Err(ConfigError::invalid(
            var,
            value,
            format!("must be between 1 and {MAX_ARRAY_SIZE}"),
        ));
    }
    Ok(size)
}
