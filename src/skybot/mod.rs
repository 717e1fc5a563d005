//! SkyBoT cone search (IMCCE)
//!
//! Lists the solar-system objects inside a circular field at a given epoch,
//! as seen from an observer site.

pub mod banner;
pub mod client;
pub mod params;

pub use banner::Banner;
pub use client::SkybotClient;
pub use params::ConeSearch;
