//! CLI argument parsing

pub mod args;

// Re-exports
pub use args::{Args, Command, ConeArgs, LogFormat, MpcArgs, OutputLevel, SecretString, TableFormat, TimeScale};
