//! Sky angle parsing
//!
//! Converts right ascension and declination strings into decimal degrees.
//! Supported forms:
//! - Marked sexagesimal: "07h08m00", "07h08m00.5s", "+26d34m00", "-12°30′"
//! - Separated sexagesimal: "07:08:00", "26 34 00" (unit given by the caller)
//! - Bare decimal degrees: "107.25", "-0.5"

use std::fmt;
use std::str::FromStr;

use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};
use winnow::ModalResult;

use crate::errors::SsoError;

/// Degrees per hour of right ascension
const DEGREES_PER_HOUR: f64 = 15.0;

/// Unit of the leading sexagesimal component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Hour,
    Degree,
}

/// An angle stored in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn from_hours(hours: f64) -> Self {
        Self { degrees: hours * DEGREES_PER_HOUR }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn hours(&self) -> f64 {
        self.degrees / DEGREES_PER_HOUR
    }

    /// Parse an angle, using `unit` for separated forms like "07:08:00"
    ///
    /// Marked forms carry their own unit and bare decimals are degrees.
    pub fn parse_with_unit(input: &str, unit: AngleUnit) -> Result<Self, SsoError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SsoError::Angle("empty angle".to_string()));
        }

        let mut stream = trimmed;
        let parts = parse_sexagesimal(&mut stream)
            .map_err(|_| SsoError::Angle(format!("cannot parse '{}'", trimmed)))?;

        parts.to_angle(unit).map_err(|msg| SsoError::Angle(format!("'{}': {}", trimmed, msg)))
    }

    /// Parse a right ascension; separated forms are read as hours
    pub fn parse_ra(input: &str) -> Result<Self, SsoError> {
        Self::parse_with_unit(input, AngleUnit::Hour)
    }

    /// Parse a declination; separated forms are read as degrees
    pub fn parse_dec(input: &str) -> Result<Self, SsoError> {
        Self::parse_with_unit(input, AngleUnit::Degree)
    }
}

impl FromStr for Angle {
    type Err = SsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_unit(s, AngleUnit::Degree)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees)
    }
}

/// Raw components before unit conversion
#[derive(Debug, Clone, PartialEq)]
struct Sexagesimal {
    negative: bool,
    whole: f64,
    minutes: Option<f64>,
    seconds: Option<f64>,
    /// None for separated and bare forms
    unit: Option<AngleUnit>,
    separated: bool,
}

impl Sexagesimal {
    fn to_angle(&self, fallback: AngleUnit) -> Result<Angle, String> {
        // Only the last component may carry a fraction
        if self.minutes.is_some() && self.whole.fract() != 0.0 {
            return Err(format!("fractional leading component ({}) followed by minutes", self.whole));
        }
        if let (Some(minutes), Some(_)) = (self.minutes, self.seconds) {
            if minutes.fract() != 0.0 {
                return Err(format!("fractional minutes ({}) followed by seconds", minutes));
            }
        }

        let minutes = self.minutes.unwrap_or(0.0);
        let seconds = self.seconds.unwrap_or(0.0);
        if minutes >= 60.0 {
            return Err(format!("minutes out of range ({})", minutes));
        }
        if seconds >= 60.0 {
            return Err(format!("seconds out of range ({})", seconds));
        }

        let magnitude = self.whole + minutes / 60.0 + seconds / 3600.0;
        let value = if self.negative { -magnitude } else { magnitude };

        let unit = match (self.unit, self.separated) {
            (Some(unit), _) => unit,
            (None, true) => fallback,
            (None, false) => AngleUnit::Degree,
        };

        Ok(match unit {
            AngleUnit::Hour => Angle::from_hours(value),
            AngleUnit::Degree => Angle::from_degrees(value),
        })
    }
}

fn sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|s| s == Some('-'))
        .parse_next(input)
}

fn component(input: &mut &str) -> ModalResult<f64> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.')
        .try_map(|s: &str| s.parse::<f64>())
        .parse_next(input)
}

fn unit_marker(input: &mut &str) -> ModalResult<AngleUnit> {
    alt((
        one_of(['h', 'H']).value(AngleUnit::Hour),
        one_of(['d', 'D', '°']).value(AngleUnit::Degree),
    ))
    .parse_next(input)
}

/// "07h08m00s", "+26d34m00", "12°30′15″"
fn marked(input: &mut &str) -> ModalResult<Sexagesimal> {
    let negative = sign.parse_next(input)?;
    let whole = component.parse_next(input)?;
    let unit = unit_marker.parse_next(input)?;
    let minutes = opt(terminated(component, opt(one_of(['m', '\'', '′'])))).parse_next(input)?;
    let seconds = opt(terminated(component, opt(one_of(['s', '"', '″'])))).parse_next(input)?;
    eof.parse_next(input)?;

    Ok(Sexagesimal {
        negative,
        whole,
        minutes,
        seconds,
        unit: Some(unit),
        separated: false,
    })
}

/// "07:08:00", "26 34 00", or a bare "107.25"
fn separated(input: &mut &str) -> ModalResult<Sexagesimal> {
    let negative = sign.parse_next(input)?;
    let whole = component.parse_next(input)?;
    let minutes = opt(preceded(one_of([':', ' ']), component)).parse_next(input)?;
    let seconds = if minutes.is_some() {
        opt(preceded(one_of([':', ' ']), component)).parse_next(input)?
    } else {
        None
    };
    eof.parse_next(input)?;

    Ok(Sexagesimal {
        negative,
        whole,
        separated: minutes.is_some(),
        minutes,
        seconds,
        unit: None,
    })
}

fn parse_sexagesimal(input: &mut &str) -> ModalResult<Sexagesimal> {
    alt((marked, separated)).parse_next(input)
}
