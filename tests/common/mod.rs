//! Common test utilities for ssoquery integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with an isolated config directory
//! - Sample service payloads
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A SkyBoT answer with three objects in the field
pub const SKYBOT_PAYLOAD: &str = "\
# Flag: 1
# Ticket: 1665406351163840
# Num | Name | RA(h) | DE(deg) | Class | Mv | Err(arcsec) | d(arcsec)
11 | Parthenope | 07 08 01.2 | +26 30 14 | MB>Inner | 11.9 | 0.020 | 225.6
- | 2010 AB12 | 07 07 55.3 | +26 35 02 | MB>Middle | 20.1 | 0.300 | 81.2
5535 | Annefrank | 07 08 10.0 | +26 33 40 | MB>Inner | 17.4 | 0.041 | 136.9
";

/// A SkyBoT answer for an empty field
pub const SKYBOT_EMPTY: &str = "# Flag: 0\n# Ticket: 1665406351163841\n";

/// Exit status codes matching the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status code
    pub exit_status: ExitStatus,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.stdout.trim()).ok()
    }
}

/// Mock environment for testing
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Working directory of the command
    pub work_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    /// Create a new mock environment
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create temp config dir"),
            work_dir: TempDir::new().expect("Failed to create temp work dir"),
            env_vars: HashMap::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write a config.toml into the config directory
    pub fn write_config(&self, content: &str) -> &Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config file");
        self
    }

    /// Get the config directory path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }

    /// Get the working directory path
    pub fn work_path(&self) -> PathBuf {
        self.work_dir.path().to_path_buf()
    }
}

/// Run the CLI with the given arguments
///
/// # Arguments
/// * `args` - Command line arguments (excluding the program name)
///
/// # Returns
/// A `CliResponse` with stdout, stderr, and exit status
pub fn ssoquery(args: &[&str]) -> CliResponse {
    ssoquery_with_env(args, &MockEnvironment::new())
}

/// Run the CLI with the given arguments and environment
pub fn ssoquery_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ssoquery"));
    cmd.args(args);

    // Set up environment
    cmd.current_dir(env.work_path());
    cmd.env("SSOQUERY_CONFIG_DIR", env.config_path());
    cmd.env_remove("RUST_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    // Configure stdio
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_from_i32() {
        assert_eq!(ExitStatus::from(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from(1), ExitStatus::Error);
        assert_eq!(ExitStatus::from(101), ExitStatus::Error);
    }
}
