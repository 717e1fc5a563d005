//! Cone-search query parameters

use crate::angle::Angle;
use crate::cli::{ConeArgs, OutputLevel, TimeScale};
use crate::config::SkybotConfig;
use crate::errors::SsoError;

/// The parser only understands the pipe-delimited text answer
pub const MIME_TEXT: &str = "text";

/// One cone search: where, when, how wide, and from which site
#[derive(Debug, Clone, PartialEq)]
pub struct ConeSearch {
    pub epoch: String,
    pub ra: Angle,
    pub dec: Angle,
    /// Search radius in degrees
    pub radius: f64,
    pub output: OutputLevel,
    pub observer: String,
    pub time_scale: TimeScale,
}

impl ConeSearch {
    /// Build the parameters from CLI arguments, falling back to config values
    pub fn from_args(args: &ConeArgs, config: &SkybotConfig) -> Result<Self, SsoError> {
        if !(args.radius > 0.0) {
            return Err(SsoError::Argument(format!("radius must be positive, got {}", args.radius)));
        }

        Ok(Self {
            epoch: args.epoch.clone(),
            ra: Angle::parse_ra(&args.ra)?,
            dec: Angle::parse_dec(&args.dec)?,
            radius: args.radius,
            output: args.output,
            observer: args.observer.clone().unwrap_or_else(|| config.observer.clone()),
            time_scale: args.time_scale,
        })
    }

    /// Key-value pairs in the order the service documents them
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("-ep", self.epoch.clone()),
            ("-ra", self.ra.degrees().to_string()),
            ("-dec", self.dec.degrees().to_string()),
            ("-sr", self.radius.to_string()),
            ("-mime", MIME_TEXT.to_string()),
            ("-output", self.output.as_str().to_string()),
            ("-loc", self.observer.clone()),
            ("-tscale", self.time_scale.as_str().to_string()),
        ]
    }
}
