//! Natal chart engine.
//!
//! Birth date and time go through [`time::normalize`], become a
//! [`julian::JulianDate`], are sampled for seven bodies by an
//! [`ephemeris::EphemerisAdapter`], and are resolved into zodiac placements
//! by [`western::resolve`]. The sun sign comes from the calendar date alone.

pub mod chart;
pub mod elevation;
pub mod ephemeris;
pub mod error;
pub mod julian;
pub mod rendering;
pub mod request;
pub mod time;
pub mod western;

pub use chart::{ChartEngine, NatalChart};
pub use error::{ChartError, Result};
pub use julian::{JulianDate, JD_UNIX_EPOCH};
pub use request::{BirthForm, BirthRequest, Geo, RequestAssembler};
pub use time::{normalize, AbsoluteInstant};
pub use western::{ZodiacPlacement, ZodiacSign};
