//! Place search (forward geocoding).
//!
//! Free text typed into a search field is sent to a Nominatim-compatible
//! provider, qualified with a fixed locality and biased toward the
//! permitted region. Results come back ranked; we keep the first few.

mod client;
mod error;

pub use client::{NominatimClient, PlaceQuery, PlaceSearch};
pub use error::GeocodeError;
