mod indent_strategy;
mod log_level;

pub use indent_strategy::IndentStrategy;
pub use log_level::LogLevel;
