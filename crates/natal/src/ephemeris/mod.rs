pub mod adapter;
pub mod service;
pub mod swiss;
pub mod types;

pub use adapter::{EphemerisAdapter, DEGREES_PER_HOUR};
pub use service::{EphemerisError, EphemerisService};
pub use swiss::SwissEphemeris;
pub use types::{CelestialBody, EphemerisSample, EquatorialCoordinates, Observer};
