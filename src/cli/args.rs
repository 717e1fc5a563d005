//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for ssoquery.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(pub String);

impl SecretString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_string())
    }
}

/// ssoquery - look up solar-system objects from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "ssoquery", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for structured logging: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Show error details (Debug formatting) on failure
    #[arg(long = "traceback", action = ArgAction::SetTrue, global = true)]
    pub traceback: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Cone search for solar-system objects with SkyBoT
    Cone(ConeArgs),
    /// Look up an asteroid by number in the Minor Planet Center catalog
    Mpc(MpcArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConeArgs {
    /// Epoch of the search (ISO date-time or Julian day)
    #[arg(long = "epoch", value_name = "EPOCH", default_value = "2022-06-21T00:00:00")]
    pub epoch: String,

    /// Right ascension of the field center ("07h08m00", "07:08:00" hours, or decimal degrees)
    #[arg(long = "ra", value_name = "RA", default_value = "07h08m00", allow_hyphen_values = true)]
    pub ra: String,

    /// Declination of the field center ("+26d34m00", "26:34:00" degrees, or decimal degrees)
    #[arg(long = "dec", value_name = "DEC", default_value = "+26d34m00", allow_hyphen_values = true)]
    pub dec: String,

    /// Search radius in degrees
    #[arg(long = "radius", value_name = "DEGREES", default_value_t = 15.0 / 60.0)]
    pub radius: f64,

    /// Observer location code (500 = geocenter)
    #[arg(long = "observer", value_name = "CODE")]
    pub observer: Option<String>,

    /// Amount of detail returned for each object
    #[arg(long = "output", value_name = "LEVEL", value_enum, default_value_t = OutputLevel::All)]
    pub output: OutputLevel,

    /// Time scale of the epoch
    #[arg(long = "time-scale", value_name = "SCALE", value_enum, default_value_t = TimeScale::Utc)]
    pub time_scale: TimeScale,

    /// Cone-search service URL
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Save the raw answer to a file and parse it back from there
    #[arg(long = "save", value_name = "PATH", num_args = 0..=1, default_missing_value = "response.txt")]
    pub save: Option<PathBuf>,

    /// Trim whitespace around cell values when parsing in memory
    #[arg(long = "trim-cells", action = ArgAction::SetTrue)]
    pub trim_cells: bool,

    /// Only print the first N rows
    #[arg(long = "head", value_name = "N")]
    pub head: Option<usize>,

    /// How to print the result
    #[arg(long = "format", value_name = "FORMAT", value_enum, default_value_t = TableFormat::Table)]
    pub format: TableFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MpcArgs {
    /// Asteroid number (e.g. 56788)
    #[arg(value_name = "NUMBER")]
    pub number: u32,

    /// Orbit search service URL
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,
}

/// Structured log output format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

/// SkyBoT output verbosity
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputLevel {
    /// Object identification only
    Object,
    /// Basic position and magnitude
    Basic,
    /// Observation-oriented columns
    Obs,
    /// Every available column
    All,
}

impl OutputLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLevel::Object => "object",
            OutputLevel::Basic => "basic",
            OutputLevel::Obs => "obs",
            OutputLevel::All => "all",
        }
    }
}

/// Time scale of the search epoch
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimeScale {
    /// Coordinated Universal Time
    Utc,
    /// Terrestrial Time
    Tt,
}

impl TimeScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeScale::Utc => "UTC",
            TimeScale::Tt => "TT",
        }
    }
}

/// Result printing format
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// ASCII grid
    Table,
    /// Comma-separated values
    Csv,
    /// JSON object of column name to cells
    Json,
    /// The service answer, unmodified
    Raw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_defaults() {
        let args = Args::try_parse_from(["ssoquery", "cone"]).unwrap();
        let Command::Cone(cone) = args.command else {
            panic!("expected cone subcommand");
        };
        assert_eq!(cone.epoch, "2022-06-21T00:00:00");
        assert_eq!(cone.ra, "07h08m00");
        assert_eq!(cone.dec, "+26d34m00");
        assert_eq!(cone.radius, 0.25);
        assert_eq!(cone.output, OutputLevel::All);
        assert_eq!(cone.time_scale, TimeScale::Utc);
        assert!(cone.save.is_none());
    }

    #[test]
    fn test_save_default_path() {
        let args = Args::try_parse_from(["ssoquery", "cone", "--save"]).unwrap();
        let Command::Cone(cone) = args.command else {
            panic!("expected cone subcommand");
        };
        assert_eq!(cone.save, Some(PathBuf::from("response.txt")));
    }

    #[test]
    fn test_negative_dec() {
        let args = Args::try_parse_from(["ssoquery", "cone", "--dec", "-12d30m"]).unwrap();
        let Command::Cone(cone) = args.command else {
            panic!("expected cone subcommand");
        };
        assert_eq!(cone.dec, "-12d30m");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["ssoquery", "mpc", "56788", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_format, Some(LogFormat::Json));
        let Command::Mpc(mpc) = args.command else {
            panic!("expected mpc subcommand");
        };
        assert_eq!(mpc.number, 56788);
    }

    #[test]
    fn test_secret_string_redacted() {
        let secret = SecretString::from("hunter2");
        assert_eq!(format!("{:?}", secret), "SecretString(\"[REDACTED]\")");
        assert_eq!(secret.as_str(), "hunter2");
    }
}
