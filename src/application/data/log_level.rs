use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::filter::Targets;

/// Dependencies never log below this level, whatever `--log-level` says.
const DEPENDENCY_CEILING: Level = Level::WARN;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Silent => None,
        }
    }

    /// Applies the chosen level to this crate's own events and caps every
    /// other target at [`DEPENDENCY_CEILING`]. `None` means no logging at all.
    pub fn to_filter(self) -> Option<Targets> {
        let level = self.to_tracing_level()?;
        Some(
            Targets::new()
                .with_target(env!("CARGO_CRATE_NAME"), level)
                .with_default(level.min(DEPENDENCY_CEILING)),
        )
    }
}
